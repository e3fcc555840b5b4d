use serde::{Deserialize, Serialize};

/// A single named metadata entry on a key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub name: String,
    pub value: String,
}

/// Ordered metadata storage for a key
///
/// Entries keep insertion order; setting an existing name replaces its value
/// in place. Indexed arrays are stored as `base/#0`, `base/#1`, ... with the
/// base entry holding the index of the last element once finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Metadata {
    entries: Vec<MetaEntry>,
}

impl Metadata {
    /// Create a new empty Metadata instance
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get a value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// Set a value by name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.value = value,
            None => self.entries.push(MetaEntry { name, value }),
        }
    }

    /// Remove a value by name
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(pos).value)
    }

    /// Check if a name exists
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &MetaEntry> {
        self.entries.iter()
    }

    /// Get all names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Get the number of metadata entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if metadata is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a value to the indexed array rooted at `base`
    ///
    /// Returns the full metadata name of the new element.
    pub fn array_append(&mut self, base: &str, value: impl Into<String>) -> String {
        let next = self.array_last_index(base).map_or(0, |last| last + 1);
        let name = format!("{}/{}", base, array_index(next));
        self.set(name.clone(), value);
        name
    }

    /// Record the last element index on the array's base entry
    ///
    /// Returns false (and leaves the metadata untouched) when the array is empty.
    pub fn finalize_array(&mut self, base: &str) -> bool {
        match self.array_last_index(base) {
            Some(last) => {
                self.set(base, array_index(last));
                true
            }
            None => false,
        }
    }

    /// Values of the array rooted at `base`, in index order
    pub fn array_values(&self, base: &str) -> Vec<&str> {
        let mut elements: Vec<(usize, &str)> = self
            .entries
            .iter()
            .filter_map(|e| element_index(base, &e.name).map(|idx| (idx, e.value.as_str())))
            .collect();
        elements.sort_by_key(|(idx, _)| *idx);
        elements.into_iter().map(|(_, value)| value).collect()
    }

    /// Check whether the array rooted at `base` has at least one element
    pub fn has_array(&self, base: &str) -> bool {
        self.array_last_index(base).is_some()
    }

    /// Check whether `entry` is the length marker of an indexed array
    pub fn is_array_header(&self, entry: &MetaEntry) -> bool {
        parse_array_index(&entry.value).is_some() && self.has_array(&entry.name)
    }

    fn array_last_index(&self, base: &str) -> Option<usize> {
        self.entries
            .iter()
            .filter_map(|e| element_index(base, &e.name))
            .max()
    }
}

/// Render an array index: one `_` per digit beyond the first keeps lexical
/// and numeric order in agreement (`#9` < `#_10` < `#__100`).
pub fn array_index(n: usize) -> String {
    let digits = n.to_string();
    format!("#{}{}", "_".repeat(digits.len() - 1), digits)
}

/// Parse an array index rendered by [`array_index`]
pub fn parse_array_index(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('#')?;
    let digits = rest.trim_start_matches('_');
    let underscores = rest.len() - digits.len();
    if digits.is_empty()
        || digits.len() != underscores + 1
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}

fn element_index(base: &str, name: &str) -> Option<usize> {
    name.strip_prefix(base)?
        .strip_prefix('/')
        .and_then(parse_array_index)
}
