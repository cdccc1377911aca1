use alloc::string::String;

/// An opaque pointer to a normalized entity held by the host store.
///
/// The strategies never look inside a reference; they hand it back to the
/// [`FieldReader`] whenever a field behind it is needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    #[cfg_attr(feature = "serde", serde(rename = "__ref"))]
    id: String,
}

impl Reference {
    /// Create a reference to the entity identified by `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the store identifier this reference points at.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A node value that is either held inline or lives behind a [`Reference`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NodeRef<N> {
    /// Indirection resolved by the host store.
    Ref(Reference),
    /// Concrete value carried in the payload.
    Inline(N),
}

impl<N> NodeRef<N> {
    /// Returns `true` if the node must be resolved through the store.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Ref(_))
    }

    /// Get the inline value, if there is one.
    #[must_use]
    pub fn as_inline(&self) -> Option<&N> {
        match self {
            Self::Inline(node) => Some(node),
            Self::Ref(_) => None,
        }
    }
}

/// A value produced by [`FieldReader::read_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue<N> {
    /// A scalar string field, such as an edge cursor.
    String(String),
    /// A node field, such as an edge's `node`.
    Node(NodeRef<N>),
}

impl<N> FieldValue<N> {
    /// Get the string payload, if this is a scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Node(_) => None,
        }
    }

    /// Take the node payload, if this is a node.
    #[must_use]
    pub fn into_node(self) -> Option<NodeRef<N>> {
        match self {
            Self::Node(node) => Some(node),
            Self::String(_) => None,
        }
    }
}

/// Read access to the host's normalized store.
///
/// This is the only way the strategies reach data behind a [`Reference`].
/// Implementations must be cheap and side-effect free; they are called once
/// per edge on every read and merge.
pub trait FieldReader<N> {
    /// Resolve the field named `field` on the entity behind `container`.
    ///
    /// Returns `None` when the entity or the field is not in the store.
    fn read_field(&self, field: &str, container: &Reference) -> Option<FieldValue<N>>;

    /// Returns `true` if `node` currently resolves to a concrete value.
    fn can_read(&self, node: &NodeRef<N>) -> bool;
}
