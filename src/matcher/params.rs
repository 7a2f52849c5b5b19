use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::collections::HashMap;

/// Binding recorded during descent; the name borrows from the tree and the
/// value from the segmented path unless it had to be joined.
pub(crate) type Capture<'t, 'p> = (&'t str, Cow<'p, str>);

/// Path parameters bound by a match, in binding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: SmallVec<[(String, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the final map; a name bound twice keeps the later value.
    pub(crate) fn from_captures(captures: &[Capture<'_, '_>]) -> Self {
        let mut params = Params::new();
        for (name, value) in captures {
            params.insert(name, value);
        }
        params
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, slot)) => {
                slot.clear();
                slot.push_str(value);
            }
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.entries.into_iter().collect()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = smallvec::IntoIter<[(String, String); 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_binding_of_same_name_wins() {
        let captures: Vec<Capture<'_, '_>> = vec![
            ("id", Cow::Borrowed("1")),
            ("slug", Cow::Borrowed("intro")),
            ("id", Cow::Owned("2".to_string())),
        ];
        let params = Params::from_captures(&captures);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("2"));
        assert_eq!(params.get("slug"), Some("intro"));
    }

    #[test]
    fn into_map_preserves_all_entries() {
        let mut params = Params::new();
        params.insert("a", "1");
        params.insert("b", "2");

        let map = params.into_map();
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.len(), 2);
    }
}
