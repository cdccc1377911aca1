//! Relay-style cursor pagination.
//!
//! The stored [`Aggregate`] is a window of edges that grows as pages are
//! fetched with `after` (forward) or `before` (backward) anchors. Each merge
//! splits the stored window around the anchor into a prefix and a suffix
//! and splices the incoming page in between:
//!
//! ```text
//! stored   [a b c]      after: b      incoming [d e]
//!           prefix [a b]  suffix []  ->  [a b d e]
//!
//! stored   [a b c]      before: b     incoming [x y]
//!           prefix []  suffix [b c]  ->  [x y b c]
//! ```
//!
//! A boundary flag (`hasPreviousPage`, `hasNextPage`) is only taken from the
//! incoming page when the page actually touches that boundary, i.e. when the
//! prefix (resp. suffix) is empty, and only if the page states it.

use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

use tracing::{debug, trace};

use crate::edge::EdgeWrapper;
use crate::extras::{overlay, strip_reserved, CONNECTION_KEYS};
use crate::page::{Aggregate, Connection, Page};
use crate::page_info::PageInfo;
use crate::policy::{FieldContext, FieldPolicy, KeyArgs};

/// Windowed cursor-splice pagination.
///
/// `N` is the node type of the host store and `X` the type of extra payload
/// values (such as a `totalCount`). Neither is ever inspected.
///
/// # Example
///
/// ```
/// use pagination_kit::prelude::*;
///
/// let store = MemoryStore::<&str>::new();
/// let policy = CursorPagination::<&str, ()>::new();
///
/// let first = Page::new(vec![Edge::new("a", "A"), Edge::new("b", "B")])
///     .with_page_info(PageInfo::new(false, true));
/// let stored = policy.merge(None, first, &FieldContext::<&str>::new(&store));
///
/// let args = PaginationArgs::new().after("b");
/// let next = Page::new(vec![Edge::new("c", "C")]).with_page_info(PageInfo::new(true, false));
/// let cx = FieldContext::<&str>::new(&store).with_args(&args);
/// let stored = policy.merge(Some(stored), next, &cx);
///
/// let view = policy.read(Some(&stored), &FieldContext::<&str>::new(&store)).unwrap();
/// assert_eq!(view.edges.len(), 3);
/// assert_eq!(view.page_info.start_cursor, "a");
/// assert_eq!(view.page_info.end_cursor, "c");
/// assert!(!view.page_info.has_previous_page);
/// assert!(!view.page_info.has_next_page);
/// ```
#[derive(Debug, Clone)]
pub struct CursorPagination<N, X> {
    key_args: KeyArgs,
    _types: PhantomData<fn() -> (N, X)>,
}

impl<N, X> CursorPagination<N, X> {
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
            _types: PhantomData,
        }
    }
}

impl<N, X> Default for CursorPagination<N, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone, X: Clone> FieldPolicy for CursorPagination<N, X> {
    type Node = N;
    type Stored = Aggregate<N, X>;
    type Incoming = Page<N, X>;
    type View = Connection<N, X>;

    fn key_args(&self) -> &KeyArgs {
        &self.key_args
    }

    fn read(
        &self,
        existing: Option<&Aggregate<N, X>>,
        cx: &FieldContext<'_, N>,
    ) -> Option<Connection<N, X>> {
        let existing = existing?;

        let mut edges = Vec::with_capacity(existing.wrappers.len());
        let mut start_cursor: Option<&str> = None;
        let mut end_cursor: Option<&str> = None;

        for wrapper in &existing.wrappers {
            let readable = wrapper
                .edge()
                .node(cx.reader())
                .is_some_and(|node| cx.can_read(&node));
            if !readable {
                continue;
            }
            edges.push(wrapper.edge().clone());
            if let Some(cursor) = wrapper.cursor() {
                start_cursor.get_or_insert(cursor);
                end_cursor = Some(cursor);
            }
        }

        trace!(
            kept = edges.len(),
            stored = existing.wrappers.len(),
            "projected cursor window"
        );

        let page_info = PageInfo {
            start_cursor: start_cursor.map(String::from).unwrap_or_default(),
            end_cursor: end_cursor.map(String::from).unwrap_or_default(),
            ..existing.page_info.clone()
        };

        Some(Connection {
            edges,
            page_info,
            extras: strip_reserved(&existing.extras, &CONNECTION_KEYS),
        })
    }

    fn merge(
        &self,
        existing: Option<Aggregate<N, X>>,
        incoming: Page<N, X>,
        cx: &FieldContext<'_, N>,
    ) -> Aggregate<N, X> {
        let existing = existing.unwrap_or_else(Aggregate::empty);
        let Page {
            edges: incoming_edges,
            page_info: incoming_info,
            extras: incoming_extras,
        } = incoming;

        let carries_edges = incoming_edges.is_some();
        let mut incoming_wrappers: Vec<EdgeWrapper<N>> = incoming_edges
            .unwrap_or_default()
            .into_iter()
            .map(|edge| EdgeWrapper::wrap(edge, cx.reader()))
            .collect();

        if let Some(info) = &incoming_info {
            if let (Some(first), Some(start)) = (incoming_wrappers.first_mut(), info.start()) {
                first.backfill_cursor(start);
            }
            if let (Some(last), Some(end)) = (incoming_wrappers.last_mut(), info.end()) {
                last.backfill_cursor(end);
            }
        }

        let Aggregate {
            wrappers: stored,
            page_info: mut page_info,
            extras: stored_extras,
        } = existing;

        let (prefix, suffix) = split_around_anchor(stored, cx, carries_edges);
        let touches_start = prefix.is_empty();
        let touches_end = suffix.is_empty();

        trace!(
            prefix = prefix.len(),
            incoming = incoming_wrappers.len(),
            suffix = suffix.len(),
            "splicing cursor page"
        );

        let mut wrappers = prefix;
        wrappers.append(&mut incoming_wrappers);
        wrappers.extend(suffix);

        if let Some(info) = incoming_info {
            page_info.absorb_extras(&info.extras);
            // A flag the server left out keeps its stored value.
            if let Some(flag) = info.has_previous_page.filter(|_| touches_start) {
                page_info.has_previous_page = flag;
            }
            if let Some(flag) = info.has_next_page.filter(|_| touches_end) {
                page_info.has_next_page = flag;
            }
        }
        page_info.start_cursor = boundary_cursor(wrappers.first());
        page_info.end_cursor = boundary_cursor(wrappers.last());

        Aggregate {
            wrappers,
            page_info,
            extras: overlay(
                strip_reserved(&stored_extras, &CONNECTION_KEYS),
                strip_reserved(&incoming_extras, &CONNECTION_KEYS),
            ),
        }
    }
}

/// Split the stored window into the part kept before the incoming page and
/// the part kept after it.
///
/// `after` takes precedence over `before`. An anchor that is not in the
/// window keeps the whole window on the anchor's side.
fn split_around_anchor<N>(
    mut stored: Vec<EdgeWrapper<N>>,
    cx: &FieldContext<'_, N>,
    carries_edges: bool,
) -> (Vec<EdgeWrapper<N>>, Vec<EdgeWrapper<N>>) {
    let args = cx.args();

    if let Some(after) = args.and_then(|a| a.after_cursor()) {
        match stored.iter().position(|w| w.is_at(after)) {
            Some(index) => stored.truncate(index + 1),
            None => {
                debug!(after, "after cursor not in stored window; appending page");
            }
        }
        return (stored, Vec::new());
    }

    if let Some(before) = args.and_then(|a| a.before_cursor()) {
        match stored.iter().position(|w| w.is_at(before)) {
            Some(index) => {
                stored.drain(..index);
            }
            None => {
                debug!(before, "before cursor not in stored window; prepending page");
            }
        }
        return (Vec::new(), stored);
    }

    if carries_edges {
        // No anchor to splice at: the page replaces the window.
        return (Vec::new(), Vec::new());
    }
    (stored, Vec::new())
}

fn boundary_cursor<N>(wrapper: Option<&EdgeWrapper<N>>) -> String {
    wrapper
        .and_then(EdgeWrapper::cursor)
        .map(String::from)
        .unwrap_or_default()
}
