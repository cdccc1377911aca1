use alloc::vec::Vec;
use core::marker::PhantomData;

use tracing::debug;

use crate::policy::{FieldContext, FieldPolicy, KeyArgs};

/// Offset/limit pagination.
///
/// Each page is written into the stored list at its `offset` argument,
/// overwriting whatever occupied those slots. Without an `offset` the page is
/// appended. Slots that no page has covered yet are `None`.
///
/// Writing the same page at the same offset twice leaves the list unchanged.
///
/// The list never grows past a maximum length
/// ([`OffsetLimitPagination::DEFAULT_MAX_LEN`] unless set with
/// [`OffsetLimitPagination::with_max_len`]). A page that would end beyond it,
/// or beyond `usize::MAX`, is dropped and the stored list is kept.
///
/// # Example
///
/// ```
/// use pagination_kit::prelude::*;
///
/// let store = MemoryStore::<char>::new();
/// let policy = OffsetLimitPagination::new();
///
/// let args = PaginationArgs::new().offset(2);
/// let cx = FieldContext::<char>::new(&store).with_args(&args);
/// let list = policy.merge(None, vec!['c', 'd'], &cx);
/// assert_eq!(list, vec![None, None, Some('c'), Some('d')]);
///
/// let args = PaginationArgs::new().offset(0);
/// let cx = FieldContext::<char>::new(&store).with_args(&args);
/// let list = policy.merge(Some(list), vec!['a', 'b'], &cx);
/// assert_eq!(list, vec![Some('a'), Some('b'), Some('c'), Some('d')]);
/// ```
#[derive(Debug, Clone)]
pub struct OffsetLimitPagination<T> {
    key_args: KeyArgs,
    max_len: usize,
    _items: PhantomData<fn() -> T>,
}

impl<T> OffsetLimitPagination<T> {
    /// Longest list the policy grows to by default.
    pub const DEFAULT_MAX_LEN: usize = 1 << 20;

    /// Create the policy with a shared cache key.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_args(KeyArgs::Shared)
    }

    /// Create the policy with an explicit cache key declaration.
    #[must_use]
    pub fn with_key_args(key_args: KeyArgs) -> Self {
        Self {
            key_args,
            max_len: Self::DEFAULT_MAX_LEN,
            _items: PhantomData,
        }
    }

    /// Set the longest list a merge may grow the stored value to.
    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Longest list a merge may grow the stored value to.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl<T> Default for OffsetLimitPagination<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FieldPolicy for OffsetLimitPagination<T> {
    type Node = T;
    type Stored = Vec<Option<T>>;
    type Incoming = Vec<T>;
    type View = Vec<Option<T>>;

    fn key_args(&self) -> &KeyArgs {
        &self.key_args
    }

    fn read(
        &self,
        existing: Option<&Vec<Option<T>>>,
        _cx: &FieldContext<'_, T>,
    ) -> Option<Vec<Option<T>>> {
        existing.cloned()
    }

    fn merge(
        &self,
        existing: Option<Vec<Option<T>>>,
        incoming: Vec<T>,
        cx: &FieldContext<'_, T>,
    ) -> Vec<Option<T>> {
        let mut merged = existing.unwrap_or_default();
        if incoming.is_empty() {
            return merged;
        }
        let start = cx
            .args()
            .and_then(|args| args.offset)
            .unwrap_or(merged.len());

        let limit = merged.len().max(self.max_len);
        let Some(end) = start.checked_add(incoming.len()).filter(|&end| end <= limit) else {
            debug!(
                start,
                incoming = incoming.len(),
                max_len = self.max_len,
                "offset page out of range; keeping stored list"
            );
            return merged;
        };
        if merged.len() < end {
            if merged.try_reserve(end - merged.len()).is_err() {
                debug!(end, "cannot grow offset list; keeping stored list");
                return merged;
            }
            merged.resize_with(end, || None);
        }
        for (slot, item) in merged[start..end].iter_mut().zip(incoming) {
            *slot = Some(item);
        }
        merged
    }
}
