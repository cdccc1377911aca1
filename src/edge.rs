use alloc::string::String;

use crate::reference::{FieldReader, FieldValue, NodeRef, Reference};

/// One entry of a paginated list: a node paired with an optional cursor.
///
/// The edge itself may be normalized by the host store, in which case both
/// its cursor and its node are only reachable through a [`FieldReader`].
///
/// # Example
///
/// ```
/// use pagination_kit::prelude::*;
///
/// let store = MemoryStore::<&str>::new();
/// let edge = Edge::new("c1", "hello");
///
/// assert_eq!(edge.cursor(&store).as_deref(), Some("c1"));
/// assert_eq!(edge.node(&store), Some(NodeRef::Inline("hello")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Edge<N> {
    /// Edge normalized into the host store.
    Ref(Reference),
    /// Edge carried in the payload.
    Inline {
        /// Cursor of this edge, if the query selected it.
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        cursor: Option<String>,
        /// The wrapped node.
        node: NodeRef<N>,
    },
}

impl<N> Edge<N> {
    /// Create an inline edge with a cursor and an inline node.
    pub fn new(cursor: impl Into<String>, node: N) -> Self {
        Self::Inline {
            cursor: Some(cursor.into()),
            node: NodeRef::Inline(node),
        }
    }

    /// Create an inline edge whose node lives in the store.
    pub fn to_ref(cursor: impl Into<String>, node: Reference) -> Self {
        Self::Inline {
            cursor: Some(cursor.into()),
            node: NodeRef::Ref(node),
        }
    }

    /// Create an inline edge for a query that did not select `cursor`.
    pub fn without_cursor(node: NodeRef<N>) -> Self {
        Self::Inline { cursor: None, node }
    }

    /// Create an edge that is itself normalized in the store.
    pub fn reference(id: impl Into<String>) -> Self {
        Self::Ref(Reference::new(id))
    }

    /// Read this edge's cursor, going through `reader` for normalized edges.
    ///
    /// Empty cursors are reported as `None`.
    pub fn cursor(&self, reader: &dyn FieldReader<N>) -> Option<String> {
        let cursor = match self {
            Self::Inline { cursor, .. } => cursor.clone(),
            Self::Ref(r) => reader
                .read_field("cursor", r)
                .and_then(|value| value.as_str().map(String::from)),
        };
        cursor.filter(|c| !c.is_empty())
    }
}

impl<N: Clone> Edge<N> {
    /// Read this edge's node, going through `reader` for normalized edges.
    pub fn node(&self, reader: &dyn FieldReader<N>) -> Option<NodeRef<N>> {
        match self {
            Self::Inline { node, .. } => Some(node.clone()),
            Self::Ref(r) => reader.read_field("node", r).and_then(FieldValue::into_node),
        }
    }
}

/// Stored normal form of an [`Edge`].
///
/// The cursor is kept next to the edge as a plain value, because an edge
/// behind a [`Reference`] cannot be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeWrapper<N> {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    cursor: Option<String>,
    edge: Edge<N>,
}

impl<N> EdgeWrapper<N> {
    /// Wrap `edge`, reading its cursor through `reader`.
    pub fn wrap(edge: Edge<N>, reader: &dyn FieldReader<N>) -> Self {
        let cursor = edge.cursor(reader);
        Self { cursor, edge }
    }

    /// Get the cursor recorded for this edge.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Get the wrapped edge.
    #[must_use]
    pub fn edge(&self) -> &Edge<N> {
        &self.edge
    }

    /// Returns `true` if this wrapper is positioned at `cursor`.
    #[must_use]
    pub fn is_at(&self, cursor: &str) -> bool {
        self.cursor.as_deref() == Some(cursor)
    }

    /// Record `cursor` unless this wrapper already has one.
    ///
    /// Empty cursors are ignored.
    pub(crate) fn backfill_cursor(&mut self, cursor: &str) {
        if self.cursor.is_none() && !cursor.is_empty() {
            self.cursor = Some(String::from(cursor));
        }
    }

    /// Unwrap into the original edge.
    pub fn into_edge(self) -> Edge<N> {
        self.edge
    }
}
