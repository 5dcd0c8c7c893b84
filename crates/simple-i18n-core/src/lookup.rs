//! Read-only access to a resolved key -> template table.
//!
//! Rules that need auxiliary catalog entries (a date pattern, a unit name)
//! receive a [`RawLookup`] rather than a handle to the whole engine, so a
//! rule can read the active language while a template is being processed.

use std::collections::{BTreeMap, HashMap};

/// Unprocessed template lookup by translation key.
pub trait RawLookup {
    /// Returns the raw template for `key`, without any substitution.
    fn raw(&self, key: &str) -> Option<&str>;

    /// Returns `true` if `key` is present.
    fn contains(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }
}

/// A lookup that never finds anything.
///
/// Used when templates are processed outside of any language, e.g. by a
/// standalone processor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLookup;

impl RawLookup for EmptyLookup {
    fn raw(&self, _key: &str) -> Option<&str> {
        None
    }
}

impl RawLookup for HashMap<String, String> {
    fn raw(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl RawLookup for BTreeMap<String, String> {
    fn raw(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lookup() {
        assert_eq!(EmptyLookup.raw("anything"), None);
        assert!(!EmptyLookup.contains("anything"));
    }

    #[test]
    fn test_hashmap_lookup() {
        let mut map = HashMap::new();
        map.insert("date-format".to_string(), "%d-%m-%Y".to_string());
        assert_eq!(map.raw("date-format"), Some("%d-%m-%Y"));
        assert!(map.contains("date-format"));
        assert!(!map.contains("time-format"));
    }
}
