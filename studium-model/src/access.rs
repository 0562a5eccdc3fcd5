use std::fmt;

/// Platform role of the viewing user
///
/// Role gating is a display concern: the rendering layer checks
/// capabilities against the viewer's role, and the catalog query engine
/// never consults it. Premium records stay visible in results either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserRole {
    Student,
    Premium,
    Admin,
}

impl UserRole {
    pub fn all() -> &'static [UserRole] {
        use UserRole::*;
        &[Student, Premium, Admin]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Premium => "Premium",
            UserRole::Admin => "Admin",
        }
    }

    /// Whether this role may open a record with the given access-tier flag.
    pub fn can_access(&self, premium: bool) -> bool {
        !premium || matches!(self, UserRole::Premium | UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
