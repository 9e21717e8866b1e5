//! Statement store collaborators
//!
//! The codec never touches storage. These traits are the seam a persistence
//! layer implements: one to fetch the objects currently attached to a
//! predicate of a subject, one to replace them.

use crate::error::Result;
use parking_lot::RwLock;
use rdfmap_graph_ir::{Iri, StatementObject};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Read access to the statements of a subject
pub trait StatementRead: Debug + Send + Sync {
    /// All objects attached to `predicate` on `subject`, unfiltered
    ///
    /// An unknown subject or predicate yields an empty vector, not an error.
    fn objects(&self, subject: &Iri, predicate: &Iri) -> Result<Vec<StatementObject>>;
}

/// Write access to the statements of a subject
pub trait StatementWrite: Debug + Send + Sync {
    /// Atomically replace the objects attached to `predicate` on `subject`
    ///
    /// An empty `objects` removes the predicate from the subject.
    fn replace(&self, subject: &Iri, predicate: &Iri, objects: Vec<StatementObject>) -> Result<()>;
}

/// Full store capability (read + replace)
pub trait StatementStore: StatementRead + StatementWrite {}
impl<T: StatementRead + StatementWrite> StatementStore for T {}

type Key = (Iri, Iri);

/// In-memory statement store
///
/// Cloning shares the underlying data. Objects keep the order they were
/// written in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<BTreeMap<Key, Vec<StatementObject>>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach one object to `predicate` on `subject`
    ///
    /// Duplicates are ignored (a predicate holds a set of objects).
    pub fn insert(&self, subject: impl Into<Iri>, predicate: impl Into<Iri>, object: StatementObject) {
        let mut data = self.data.write();
        let objects = data.entry((subject.into(), predicate.into())).or_default();
        if !objects.contains(&object) {
            objects.push(object);
        }
    }

    /// Total number of statements
    pub fn len(&self) -> usize {
        self.data.read().values().map(Vec::len).sum()
    }

    /// Check if the store holds no statements
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Distinct subjects, sorted
    pub fn subjects(&self) -> Vec<Iri> {
        let data = self.data.read();
        let mut subjects: Vec<Iri> = data.keys().map(|(s, _)| s.clone()).collect();
        subjects.dedup();
        subjects
    }

    /// Render every statement as N-Triples
    ///
    /// Sorted by subject then predicate; objects of one predicate keep their
    /// stored order.
    pub fn to_ntriples(&self) -> String {
        let data = self.data.read();
        let mut out = String::new();
        for ((subject, predicate), objects) in data.iter() {
            for object in objects {
                out.push_str(&format!("{} {} {} .\n", subject, predicate, object));
            }
        }
        out
    }
}

impl StatementRead for MemoryStore {
    fn objects(&self, subject: &Iri, predicate: &Iri) -> Result<Vec<StatementObject>> {
        Ok(self
            .data
            .read()
            .get(&(subject.clone(), predicate.clone()))
            .cloned()
            .unwrap_or_default())
    }
}

impl StatementWrite for MemoryStore {
    fn replace(&self, subject: &Iri, predicate: &Iri, objects: Vec<StatementObject>) -> Result<()> {
        let key = (subject.clone(), predicate.clone());
        let mut data = self.data.write();
        if objects.is_empty() {
            data.remove(&key);
        } else {
            let mut unique: Vec<StatementObject> = Vec::with_capacity(objects.len());
            for object in objects {
                if !unique.contains(&object) {
                    unique.push(object);
                }
            }
            data.insert(key, unique);
        }
        Ok(())
    }
}
