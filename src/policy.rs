use alloc::string::String;
use alloc::vec::Vec;

use crate::args::PaginationArgs;
use crate::reference::{FieldReader, FieldValue, NodeRef, Reference};

/// Core trait that all pagination strategies implement.
///
/// A field policy tells a normalized cache how to combine a freshly fetched
/// page with the value it already stores for the field (`merge`), and how to
/// present the stored value to a consumer (`read`).
///
/// # Properties
///
/// All implementations must be pure:
/// - `merge` consumes the stored value and returns its replacement; the
///   caller is responsible for persisting it.
/// - Neither operation keeps state between calls or fails on well-formed
///   input.
pub trait FieldPolicy {
    /// Node type flowing through the host store.
    type Node;
    /// Value the cache persists for the field.
    type Stored;
    /// Value a fetch delivers for the field.
    type Incoming;
    /// Value a consumer reads for the field.
    type View;

    /// Which arguments distinguish separate cache entries for the field.
    fn key_args(&self) -> &KeyArgs;

    /// Project the stored value for a consumer.
    ///
    /// Returns `None` when nothing usable is stored, so the host can treat
    /// the field as missing.
    fn read(
        &self,
        existing: Option<&Self::Stored>,
        cx: &FieldContext<'_, Self::Node>,
    ) -> Option<Self::View>;

    /// Combine `incoming` with the stored value.
    fn merge(
        &self,
        existing: Option<Self::Stored>,
        incoming: Self::Incoming,
        cx: &FieldContext<'_, Self::Node>,
    ) -> Self::Stored;
}

/// Declaration of the arguments that form a field's cache key.
///
/// The strategies carry this for the host and never inspect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyArgs {
    /// No argument participates: every fetch of the field shares one entry.
    #[default]
    Shared,
    /// Only the named arguments participate.
    Fields(Vec<String>),
}

impl KeyArgs {
    /// Build a [`KeyArgs::Fields`] declaration.
    ///
    /// ```
    /// use pagination_kit::KeyArgs;
    ///
    /// let key = KeyArgs::fields(["filter", "orderBy"]);
    /// assert!(!key.is_shared());
    /// ```
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fields(names.into_iter().map(Into::into).collect())
    }

    /// Returns `true` for the [`KeyArgs::Shared`] declaration.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared)
    }
}

/// Capabilities and arguments handed to a policy for one call.
pub struct FieldContext<'a, N> {
    reader: &'a dyn FieldReader<N>,
    args: Option<&'a PaginationArgs>,
}

impl<'a, N> FieldContext<'a, N> {
    /// Create a context backed by `reader`, without arguments.
    pub fn new(reader: &'a dyn FieldReader<N>) -> Self {
        Self { reader, args: None }
    }

    /// Attach the arguments of the current fetch.
    #[must_use]
    pub fn with_args(mut self, args: &'a PaginationArgs) -> Self {
        self.args = Some(args);
        self
    }

    /// Arguments of the current fetch, if any.
    #[must_use]
    pub fn args(&self) -> Option<&'a PaginationArgs> {
        self.args
    }

    /// The host store reader.
    #[must_use]
    pub fn reader(&self) -> &'a dyn FieldReader<N> {
        self.reader
    }

    /// Resolve `field` on the entity behind `container`.
    pub fn read_field(&self, field: &str, container: &Reference) -> Option<FieldValue<N>> {
        self.reader.read_field(field, container)
    }

    /// Returns `true` if `node` currently resolves.
    pub fn can_read(&self, node: &NodeRef<N>) -> bool {
        self.reader.can_read(node)
    }
}

impl<N> Clone for FieldContext<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for FieldContext<'_, N> {}
