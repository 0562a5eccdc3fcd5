/// Free-form tags attached to a record
///
/// Duplicates are folded case-insensitively at construction (first-seen
/// casing wins), so a tag set never holds the same tag twice. Blank entries
/// are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for tag in tags {
            let tag = tag.into();
            let trimmed = tag.trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_lowercase()) {
                out.push(trimmed.to_string());
            }
        }
        TagSet(out)
    }

    pub fn empty() -> Self {
        TagSet(Vec::new())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_insensitive_duplicates() {
        let tags = TagSet::new(["Calculus", "calculus", "Integration"]);
        assert_eq!(tags.as_slice(), ["Calculus", "Integration"]);
    }

    #[test]
    fn drops_blank_entries() {
        let tags = TagSet::new(["", "  ", "AI"]);
        assert_eq!(tags.as_slice(), ["AI"]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let tags = TagSet::new(["  Neural Networks "]);
        assert_eq!(tags.as_slice(), ["Neural Networks"]);
    }
}
