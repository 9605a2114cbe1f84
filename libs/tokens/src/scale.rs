//! # Token Scales
//!
//! Ordered `(name, value)` sequences used for every theme family.
//!
//! The CSS engine reads declaration order as meaningful (breakpoints cascade
//! from narrowest to widest, font fallbacks are tried in order), so scales
//! keep insertion order and serialize as a JSON object in that order.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from token name to value.
///
/// # Example
///
/// ```rust
/// use gnoweb_tokens::TokenScale;
///
/// let radii = TokenScale::new().with("sm", 4).with("DEFAULT", 5);
/// assert_eq!(radii.names().collect::<Vec<_>>(), ["sm", "DEFAULT"]);
/// assert_eq!(radii.get("DEFAULT"), Some(&5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TokenScale<V> {
    entries: Vec<(String, V)>,
}

impl<V> TokenScale<V> {
    /// Creates an empty scale.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder form of [`TokenScale::insert`].
    pub fn with(mut self, name: impl Into<String>, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a token at the end, or replaces an existing one in place.
    ///
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Looks up a token by name.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Token names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Tokens in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scale has no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for TokenScale<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Into<String>, V> FromIterator<(N, V)> for TokenScale<V> {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut scale = Self::new();
        for (name, value) in iter {
            scale.insert(name, value);
        }
        scale
    }
}

impl<V: Serialize> Serialize for TokenScale<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
