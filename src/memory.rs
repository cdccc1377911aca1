use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::reference::{FieldReader, FieldValue, NodeRef, Reference};

/// In-memory normalized store.
///
/// Entities live in a `BTreeMap` keyed by id; nothing is persisted and
/// nothing is collected automatically. Ideal for testing and prototyping
/// host integrations.
///
/// # Example
///
/// ```
/// use pagination_kit::prelude::*;
///
/// let mut store = MemoryStore::new();
/// let post = store.put_node("Post:1", "first post");
/// assert!(store.can_read(&NodeRef::Ref(post.clone())));
///
/// store.evict("Post:1");
/// assert!(!store.can_read(&NodeRef::Ref(post)));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore<N> {
    /// id -> entity
    entities: BTreeMap<String, Entity<N>>,
}

#[derive(Debug, Clone)]
struct Entity<N> {
    value: Option<N>,
    fields: BTreeMap<String, FieldValue<N>>,
}

impl<N> Default for Entity<N> {
    fn default() -> Self {
        Self {
            value: None,
            fields: BTreeMap::new(),
        }
    }
}

impl<N> MemoryStore<N> {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
        }
    }

    /// Store `node` as the value of entity `id` and return a reference to it.
    pub fn put_node(&mut self, id: impl Into<String>, node: N) -> Reference {
        let id = id.into();
        self.entities.entry(id.clone()).or_default().value = Some(node);
        Reference::new(id)
    }

    /// Set a single named field on entity `id`, creating the entity if needed.
    pub fn put_field(
        &mut self,
        id: impl Into<String>,
        field: impl Into<String>,
        value: FieldValue<N>,
    ) {
        self.entities
            .entry(id.into())
            .or_default()
            .fields
            .insert(field.into(), value);
    }

    /// Store a normalized edge with a `cursor` and a `node` field.
    pub fn put_edge(
        &mut self,
        id: impl Into<String>,
        cursor: impl Into<String>,
        node: NodeRef<N>,
    ) -> Reference {
        let id = id.into();
        self.put_field(id.clone(), "cursor", FieldValue::String(cursor.into()));
        self.put_field(id.clone(), "node", FieldValue::Node(node));
        Reference::new(id)
    }

    /// Get the value stored for entity `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&N> {
        self.entities.get(id).and_then(|e| e.value.as_ref())
    }

    /// Returns `true` if entity `id` is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    /// Remove entity `id`. Returns `true` if it was present.
    pub fn evict(&mut self, id: &str) -> bool {
        self.entities.remove(id).is_some()
    }

    /// Number of entities in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<N> Default for MemoryStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone> FieldReader<N> for MemoryStore<N> {
    fn read_field(&self, field: &str, container: &Reference) -> Option<FieldValue<N>> {
        self.entities
            .get(container.id())
            .and_then(|e| e.fields.get(field))
            .cloned()
    }

    fn can_read(&self, node: &NodeRef<N>) -> bool {
        match node {
            NodeRef::Inline(_) => true,
            NodeRef::Ref(r) => self.contains(r.id()),
        }
    }
}
