use alloc::string::String;
use alloc::vec::Vec;

use crate::edge::{Edge, EdgeWrapper};
use crate::extras::Extras;
use crate::page_info::{PageInfo, PageInfoUpdate};

/// A freshly fetched page of a cursor-paginated field.
///
/// Either part may be missing: a query can select only `pageInfo`, and a
/// server can omit `pageInfo` altogether. An empty `edges` list still counts
/// as "carries edges".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Page<N, X> {
    /// Fetched edges, oldest first.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub edges: Option<Vec<Edge<N>>>,
    /// Fetched page boundaries.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub page_info: Option<PageInfoUpdate<X>>,
    /// Any other keys of the payload.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extras: Extras<X>,
}

impl<N, X> Page<N, X> {
    /// Create a page carrying `edges` and no page info.
    pub fn new(edges: Vec<Edge<N>>) -> Self {
        Self {
            edges: Some(edges),
            page_info: None,
            extras: Extras::new(),
        }
    }

    /// Create a page carrying only page info.
    pub fn page_info_only(page_info: impl Into<PageInfoUpdate<X>>) -> Self {
        Self {
            edges: None,
            page_info: Some(page_info.into()),
            extras: Extras::new(),
        }
    }

    /// Attach page info.
    #[must_use]
    pub fn with_page_info(mut self, page_info: impl Into<PageInfoUpdate<X>>) -> Self {
        self.page_info = Some(page_info.into());
        self
    }

    /// Add an extra payload key.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: X) -> Self {
        self.extras.insert(key.into(), value);
        self
    }
}

/// Everything fetched so far for a cursor-paginated field.
///
/// This is the value a cache persists between merges. The order of
/// [`Aggregate::wrappers`] is the page order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Aggregate<N, X> {
    pub(crate) wrappers: Vec<EdgeWrapper<N>>,
    pub(crate) page_info: PageInfo<X>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) extras: Extras<X>,
}

impl<N, X> Aggregate<N, X> {
    /// The aggregate stored before the first merge.
    pub fn empty() -> Self {
        Self {
            wrappers: Vec::new(),
            page_info: PageInfo::initial(),
            extras: Extras::new(),
        }
    }

    /// Stored edges with their cursors, oldest first.
    #[must_use]
    pub fn wrappers(&self) -> &[EdgeWrapper<N>] {
        &self.wrappers
    }

    /// Stored page boundaries.
    #[must_use]
    pub fn page_info(&self) -> &PageInfo<X> {
        &self.page_info
    }

    /// Stored extra payload keys.
    #[must_use]
    pub fn extras(&self) -> &Extras<X> {
        &self.extras
    }

    /// Iterate over the recorded cursors, oldest first.
    pub fn cursors(&self) -> impl Iterator<Item = Option<&str>> {
        self.wrappers.iter().map(EdgeWrapper::cursor)
    }

    /// Number of stored edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    /// Returns `true` if no edge is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }
}

impl<N, X> Default for Aggregate<N, X> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The read view of an [`Aggregate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Connection<N, X> {
    /// Edges whose node currently resolves, oldest first.
    pub edges: Vec<Edge<N>>,
    /// Page boundaries recomputed from the visible edges.
    pub page_info: PageInfo<X>,
    /// Extra payload keys.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extras: Extras<X>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_aggregate_shape() {
        let agg = Aggregate::<u32, ()>::empty();
        assert!(agg.is_empty());
        assert_eq!(agg.len(), 0);
        assert!(!agg.page_info().has_previous_page);
        assert!(agg.page_info().has_next_page);
        assert_eq!(agg.page_info().start_cursor, "");
        assert_eq!(agg.page_info().end_cursor, "");
        assert!(agg.extras().is_empty());
    }

    #[test]
    fn page_builders() {
        let page: Page<u32, i64> = Page::new(vec![Edge::new("a", 1)])
            .with_page_info(PageInfo::new(false, true))
            .with_extra("totalCount", 10);

        assert_eq!(page.edges.as_ref().map(Vec::len), Some(1));
        assert!(page.page_info.is_some());
        assert_eq!(page.extras.get("totalCount"), Some(&10));

        let info_only: Page<u32, i64> = Page::page_info_only(PageInfo::new(true, true));
        assert!(info_only.edges.is_none());

        let partial: Page<u32, i64> =
            Page::new(vec![]).with_page_info(PageInfoUpdate::<i64>::new().with_next(false));
        let info = partial.page_info.as_ref().map(|i| (i.has_previous_page, i.has_next_page));
        assert_eq!(info, Some((None, Some(false))));
    }
}
