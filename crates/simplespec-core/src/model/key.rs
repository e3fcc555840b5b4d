use serde::{Deserialize, Serialize};

use super::metadata::Metadata;

/// Key - a named node in the configuration tree
///
/// A key is identified by a hierarchical, slash-separated name. It holds an
/// optional string value and ordered metadata. Names are canonicalized on
/// construction: empty and `.` segments are dropped, `..` removes the previous
/// segment (never the first one) and a leading `/` marks a cascading name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    name: String,

    /// Optional string value (for the parent key, the backing file path)
    value: Option<String>,

    /// Ordered metadata entries
    metadata: Metadata,
}

impl Key {
    /// Create a new key with the given name and no value
    pub fn new(name: &str) -> Self {
        Self {
            name: canonicalize(name),
            value: None,
            metadata: Metadata::new(),
        }
    }

    /// Create a new key with the given name and value
    pub fn with_value(name: &str, value: impl Into<String>) -> Self {
        let mut key = Self::new(name);
        key.value = Some(value.into());
        key
    }

    /// Full canonical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last segment of the name
    pub fn base_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// Append `rel` (one or more segments) to the name
    pub fn add_name(&mut self, rel: &str) {
        self.name = canonicalize(&format!("{}/{}", self.name, rel));
    }

    /// Name relative to `parent`
    ///
    /// Empty when both names are equal; the full name when this key is not
    /// below `parent`.
    pub fn relative_name(&self, parent: &Key) -> &str {
        if self.name == parent.name {
            return "";
        }
        let prefix = parent.name.trim_end_matches('/');
        self.name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&self.name)
    }

    /// String value, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Set the string value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Metadata of this key
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Mutable metadata of this key
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Shorthand for `metadata().get(name)`
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.metadata.get(name)
    }

    /// Shorthand for `metadata_mut().set(name, value)`
    pub fn set_meta(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.metadata.set(name, value);
    }
}

fn canonicalize(name: &str) -> String {
    let cascading = name.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in name.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.len() > 1 {
                    parts.pop();
                }
            }
            s => parts.push(s),
        }
    }

    if cascading {
        format!("/{}", parts.join("/"))
    } else {
        parts.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_key() {
        let key = Key::new("user/tests/spec");

        assert_eq!(key.name(), "user/tests/spec");
        assert_eq!(key.base_name(), "spec");
        assert!(key.value().is_none());
        assert!(key.metadata().is_empty());
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(Key::new("user//a/./b/").name(), "user/a/b");
        assert_eq!(Key::new("user/a/../b").name(), "user/b");
        assert_eq!(Key::new("user/..").name(), "user");
        assert_eq!(Key::new("/a//b").name(), "/a/b");
        assert_eq!(Key::new("/").name(), "/");
    }

    #[test]
    fn test_add_name() {
        let mut key = Key::new("user/tests/spec");
        key.add_name("a/b");
        assert_eq!(key.name(), "user/tests/spec/a/b");

        key.add_name("/c/");
        assert_eq!(key.name(), "user/tests/spec/a/b/c");

        let mut root = Key::new("/");
        root.add_name("x");
        assert_eq!(root.name(), "/x");
    }

    #[test]
    fn test_relative_name() {
        let parent = Key::new("user/tests/spec");

        assert_eq!(Key::new("user/tests/spec/a/b").relative_name(&parent), "a/b");
        assert_eq!(Key::new("user/tests/spec").relative_name(&parent), "");
        assert_eq!(Key::new("user/other/a").relative_name(&parent), "user/other/a");
        assert_eq!(
            Key::new("user/tests/specific").relative_name(&parent),
            "user/tests/specific"
        );
        assert_eq!(Key::new("/a/b").relative_name(&Key::new("/")), "a/b");
    }

    #[test]
    fn test_value_and_meta() {
        let mut key = Key::with_value("user/file", "/tmp/spec.ini");
        assert_eq!(key.value(), Some("/tmp/spec.ini"));

        key.set_value("/tmp/other.ini");
        key.set_meta("required", "yes");
        assert_eq!(key.value(), Some("/tmp/other.ini"));
        assert_eq!(key.meta("required"), Some("yes"));
    }
}
