use std::collections::HashSet;

/// The set of tags on one object, as seen by queries and filters.
///
/// Storage keeps tags as an ordered list; this type drops the order and any
/// duplicates so membership tests are all that matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: HashSet<String>,
}

impl TagSet {
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// True if at least one of `tags` is in the set.
    pub fn contains_any<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|t| self.contains(t.as_ref()))
    }

    /// True if every one of `tags` is in the set.
    pub fn contains_all<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().all(|t| self.contains(t.as_ref()))
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set: TagSet = ["a", "b", "a"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn contains_any_and_all() {
        let set: TagSet = ["desk", "props"].into_iter().collect();

        assert!(set.contains_any(&["hearth", "desk"]));
        assert!(!set.contains_any(&["hearth"]));
        assert!(set.contains_all(&["desk", "props"]));
        assert!(!set.contains_all(&["desk", "hearth"]));
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let set: TagSet = ["Candle"].into_iter().collect();
        assert!(set.contains("Candle"));
        assert!(!set.contains("candle"));
    }
}
