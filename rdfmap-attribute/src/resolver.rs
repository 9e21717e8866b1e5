//! Field resolution by name
//!
//! A model declares its fields once, as an explicit name → descriptor map,
//! and hands that map to every by-name codec call.

use crate::error::{AttributeError, Result};
use crate::field::FieldDescriptor;
use rustc_hash::FxHashMap;

/// Maps field names to descriptors
pub trait FieldResolver {
    /// Look up the descriptor declared under `name`
    fn resolve(&self, name: &str) -> Option<&FieldDescriptor>;

    /// Look up `name`, failing with `FieldNotPresent` when undeclared
    fn require(&self, name: &str) -> Result<&FieldDescriptor> {
        self.resolve(name)
            .ok_or_else(|| AttributeError::field_not_present(name))
    }
}

/// Declared fields of one model, in declaration order
#[derive(Clone, Debug, Default)]
pub struct FieldMap {
    entries: Vec<(String, FieldDescriptor)>,
    index: FxHashMap<String, usize>,
}

impl FieldMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name`, replacing an earlier declaration of the same name
    pub fn insert(&mut self, name: impl Into<String>, field: FieldDescriptor) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => {
                tracing::warn!(field = %name, "field declared twice, keeping the later declaration");
                self.entries[pos].1 = field;
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, field));
            }
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, field: FieldDescriptor) -> Self {
        self.insert(name, field);
        self
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no fields are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if `name` is declared
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over `(name, descriptor)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.entries.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Declared names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl FieldResolver for FieldMap {
    fn resolve(&self, name: &str) -> Option<&FieldDescriptor> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }
}

impl<N: Into<String>> FromIterator<(N, FieldDescriptor)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (N, FieldDescriptor)>>(iter: T) -> Self {
        let mut map = FieldMap::new();
        for (name, field) in iter {
            map.insert(name, field);
        }
        map
    }
}

impl<N: Into<String>> Extend<(N, FieldDescriptor)> for FieldMap {
    fn extend<T: IntoIterator<Item = (N, FieldDescriptor)>>(&mut self, iter: T) {
        for (name, field) in iter {
            self.insert(name, field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfmap_vocab::rdfs;

    fn model() -> FieldMap {
        FieldMap::new()
            .with("label", FieldDescriptor::literal(rdfs::LABEL).unwrap())
            .with("see_also", FieldDescriptor::uri(rdfs::SEE_ALSO).unwrap())
    }

    #[test]
    fn test_resolve() {
        let fields = model();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains("label"));
        assert_eq!(
            fields.resolve("see_also").map(|f| f.predicate().as_str()),
            Some(rdfs::SEE_ALSO)
        );
        assert!(fields.resolve("missing").is_none());
    }

    #[test]
    fn test_require_missing_field() {
        let fields = model();
        let err = fields.require("title").unwrap_err();
        assert!(matches!(err, AttributeError::FieldNotPresent(ref name) if name == "title"));
    }

    #[test]
    fn test_redeclaring_replaces_in_place() {
        let mut fields = model();
        fields.insert("label", FieldDescriptor::literal(rdfs::COMMENT).unwrap());
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["label", "see_also"]);
        assert_eq!(
            fields.resolve("label").unwrap().predicate().as_str(),
            rdfs::COMMENT
        );
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let fields: FieldMap = vec![
            ("b", FieldDescriptor::literal(rdfs::LABEL).unwrap()),
            ("a", FieldDescriptor::literal(rdfs::COMMENT).unwrap()),
        ]
        .into_iter()
        .collect();
        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
