use serde::{Deserialize, Serialize};

use super::key::Key;

/// Namespaces consulted, in order, when resolving a cascading name
pub const CASCADING_NAMESPACES: [&str; 4] = ["proc", "dir", "user", "system"];

/// KeySet - the ordered configuration tree
///
/// Keys are kept in append order and names are unique. Not thread-safe;
/// callers hold it exclusively for the duration of an encode or decode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySet {
    keys: Vec<Key>,
}

impl KeySet {
    /// Create a new empty KeySet
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Append a key
    ///
    /// A key whose name is already present replaces the existing entry and
    /// moves to the end, so the most recently appended key is always last.
    pub fn append(&mut self, key: Key) {
        if let Some(pos) = self.position(key.name()) {
            self.keys.remove(pos);
        }
        self.keys.push(key);
    }

    /// Append every key of `other`, in order
    pub fn extend(&mut self, other: KeySet) {
        for key in other.keys {
            self.append(key);
        }
    }

    /// Look up a key by name
    ///
    /// Names starting with `/` are cascading: each namespace in
    /// [`CASCADING_NAMESPACES`] is tried before the cascading key itself.
    pub fn lookup(&self, name: &str) -> Option<&Key> {
        let canonical = Key::new(name);
        let name = canonical.name();

        if name.starts_with('/') && name.len() > 1 {
            let found = CASCADING_NAMESPACES
                .iter()
                .find_map(|ns| self.get(&format!("{}{}", ns, name)));
            if found.is_some() {
                return found;
            }
        }

        self.get(name)
    }

    /// Get a key by its exact canonical name
    pub fn get(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.name() == name)
    }

    /// Iterate keys in tree order
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// Key names in tree order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.name())
    }

    /// Last key in tree order
    pub fn last(&self) -> Option<&Key> {
        self.keys.last()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the KeySet is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.name() == name)
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut ks = KeySet::new();
        for key in iter {
            ks.append(key);
        }
        ks
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut ks = KeySet::new();
        ks.append(Key::new("user/b"));
        ks.append(Key::new("user/a"));
        ks.append(Key::new("user/c"));

        let names: Vec<&str> = ks.names().collect();
        assert_eq!(names, vec!["user/b", "user/a", "user/c"]);
    }

    #[test]
    fn test_append_duplicate_replaces_and_moves_last() {
        let mut ks = KeySet::new();
        ks.append(Key::with_value("user/a", "old"));
        ks.append(Key::new("user/b"));
        ks.append(Key::with_value("user/a", "new"));

        assert_eq!(ks.len(), 2);
        let last = ks.last().map(|k| (k.name(), k.value()));
        assert_eq!(last, Some(("user/a", Some("new"))));
    }

    #[test]
    fn test_lookup_exact() {
        let ks: KeySet = vec![Key::with_value("user/keyword/enum", "rule")]
            .into_iter()
            .collect();
        assert!(ks.lookup("user/keyword/enum").is_some());
        assert!(ks.lookup("user/keyword/assign").is_none());
    }

    #[test]
    fn test_lookup_cascading_prefers_namespace_order() {
        let ks: KeySet = vec![
            Key::with_value("system/keyword/enum", "sys"),
            Key::with_value("/keyword/enum", "plain"),
            Key::with_value("user/keyword/enum", "usr"),
        ]
        .into_iter()
        .collect();

        let value = ks.lookup("/keyword/enum").and_then(|k| k.value());
        assert_eq!(value, Some("usr"));
    }

    #[test]
    fn test_lookup_cascading_falls_back_to_cascading_key() {
        let ks: KeySet = vec![Key::with_value("/keyword/assign", ":=")]
            .into_iter()
            .collect();
        let value = ks.lookup("/keyword/assign").and_then(|k| k.value());
        assert_eq!(value, Some(":="));
    }
}
