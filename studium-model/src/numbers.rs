use crate::error::{ModelError, Result};

/// Difficulty tier on the platform's 1-5 scale
///
/// The bounds are a construction-time invariant: a tier outside the scale
/// cannot exist, so range filters downstream never re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyTier(u8);

impl DifficultyTier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(DifficultyTier(value))
        } else {
            Err(ModelError::OutOfRange {
                field: "difficulty tier",
                value: f64::from(value),
                min: f64::from(Self::MIN),
                max: f64::from(Self::MAX),
            })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for DifficultyTier {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

/// Community quality score on the 0.0-5.0 scale
///
/// Scores are finite by construction, which keeps float comparisons total
/// for the sorting layer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityScore(f32);

impl QualityScore {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 5.0;

    pub fn new(value: f32) -> Result<Self> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(QualityScore(value))
        } else {
            Err(ModelError::OutOfRange {
                field: "quality score",
                value: f64::from(value),
                min: f64::from(Self::MIN),
                max: f64::from(Self::MAX),
            })
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl std::fmt::Display for QualityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl TryFrom<f32> for QualityScore {
    type Error = ModelError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_accepts_scale_bounds() {
        assert_eq!(DifficultyTier::new(1).unwrap().value(), 1);
        assert_eq!(DifficultyTier::new(5).unwrap().value(), 5);
    }

    #[test]
    fn tier_rejects_outside_scale() {
        assert!(DifficultyTier::new(0).is_err());
        assert!(DifficultyTier::new(6).is_err());
    }

    #[test]
    fn quality_accepts_scale_bounds() {
        assert_eq!(QualityScore::new(0.0).unwrap().value(), 0.0);
        assert_eq!(QualityScore::new(5.0).unwrap().value(), 5.0);
    }

    #[test]
    fn quality_rejects_outside_scale_and_non_finite() {
        assert!(QualityScore::new(-0.1).is_err());
        assert!(QualityScore::new(5.1).is_err());
        assert!(QualityScore::new(f32::NAN).is_err());
        assert!(QualityScore::new(f32::INFINITY).is_err());
    }
}
