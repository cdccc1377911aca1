use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::policy::{FieldContext, FieldPolicy, KeyArgs};

/// Append-only pagination.
///
/// Every fetched page is appended to the stored list. Arguments are never
/// inspected and items are never deduplicated, so this suits feeds that are
/// only ever fetched forward, one page after the other.
///
/// # Example
///
/// ```
/// use pagination_kit::prelude::*;
///
/// let store = MemoryStore::<u32>::new();
/// let cx = FieldContext::<u32>::new(&store);
/// let policy = ConcatPagination::new();
///
/// let list = policy.merge(None, vec![1, 2], &cx);
/// let list = policy.merge(Some(list), vec![3], &cx);
/// assert_eq!(list, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ConcatPagination<T> {
    key_args: KeyArgs,
    _items: PhantomData<fn() -> T>,
}

impl<T> ConcatPagination<T> {
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
            _items: PhantomData,
        }
    }
}

impl<T> Default for ConcatPagination<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FieldPolicy for ConcatPagination<T> {
    type Node = T;
    type Stored = Vec<T>;
    type Incoming = Vec<T>;
    type View = Vec<T>;

    fn key_args(&self) -> &KeyArgs {
        &self.key_args
    }

    fn read(&self, existing: Option<&Vec<T>>, _cx: &FieldContext<'_, T>) -> Option<Vec<T>> {
        existing.cloned()
    }

    fn merge(
        &self,
        existing: Option<Vec<T>>,
        incoming: Vec<T>,
        _cx: &FieldContext<'_, T>,
    ) -> Vec<T> {
        match existing {
            None => incoming,
            Some(mut merged) => {
                merged.extend(incoming);
                merged
            }
        }
    }
}
