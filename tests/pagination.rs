//! End-to-end scenarios: a feed paginated in both directions through a
//! normalized store.

use pagination_kit::prelude::*;
use pagination_kit::Extras;

type Feed = CursorPagination<String, i64>;

/// Store `cursors` as normalized posts and edges; return inline edges
/// pointing at the stored posts.
fn fetch(store: &mut MemoryStore<String>, cursors: &[&str]) -> Vec<Edge<String>> {
    cursors
        .iter()
        .map(|c| {
            let post = store.put_node(format!("Post:{c}"), format!("post {c}"));
            Edge::to_ref(*c, post)
        })
        .collect()
}

fn window(agg: &Aggregate<String, i64>) -> Vec<String> {
    agg.cursors()
        .map(|c| c.unwrap_or_default().to_string())
        .collect()
}

fn merge(
    store: &MemoryStore<String>,
    existing: Option<Aggregate<String, i64>>,
    page: Page<String, i64>,
    args: &PaginationArgs,
) -> Aggregate<String, i64> {
    let cx = FieldContext::<String>::new(store).with_args(args);
    Feed::new().merge(existing, page, &cx)
}

#[test]
fn forward_splice_drops_stale_tail() {
    let mut store = MemoryStore::new();
    let first = Page::new(fetch(&mut store, &["a", "b", "c"]));
    let stored = merge(&store, None, first, &PaginationArgs::new());

    let next = Page::new(fetch(&mut store, &["d", "e"]));
    let stored = merge(&store, Some(stored), next, &PaginationArgs::new().after("b"));

    assert_eq!(window(&stored), ["a", "b", "d", "e"]);
}

#[test]
fn backward_splice_keeps_anchor() {
    let mut store = MemoryStore::new();
    let first = Page::new(fetch(&mut store, &["a", "b", "c"]));
    let stored = merge(&store, None, first, &PaginationArgs::new());

    let prev = Page::new(fetch(&mut store, &["x", "y"]));
    let stored = merge(&store, Some(stored), prev, &PaginationArgs::new().before("b"));

    assert_eq!(window(&stored), ["x", "y", "b", "c"]);
}

#[test]
fn unanchored_refetch_replaces_everything() {
    let mut store = MemoryStore::new();
    let first = Page::new(fetch(&mut store, &["a", "b", "c"]));
    let stored = merge(&store, None, first, &PaginationArgs::new());

    let refetch = Page::new(fetch(&mut store, &["p", "q"]));
    let stored = merge(&store, Some(stored), refetch, &PaginationArgs::new());

    assert_eq!(window(&stored), ["p", "q"]);
    assert_eq!(stored.page_info().start_cursor, "p");
}

#[test]
fn forward_page_preserves_previous_page_flag() {
    let mut store = MemoryStore::new();
    let first =
        Page::new(fetch(&mut store, &["m", "n"])).with_page_info(PageInfo::new(true, true));
    let stored = merge(&store, None, first, &PaginationArgs::new());
    assert!(stored.page_info().has_previous_page);

    // The forward page claims nothing precedes it; it does not touch the
    // start of the window, so the stored flag stands.
    let next =
        Page::new(fetch(&mut store, &["o"])).with_page_info(PageInfo::new(false, false));
    let stored = merge(&store, Some(stored), next, &PaginationArgs::new().after("n"));

    assert!(stored.page_info().has_previous_page);
    assert!(!stored.page_info().has_next_page);
}

#[test]
fn read_hides_evicted_posts_and_recomputes_boundaries() {
    let mut store = MemoryStore::new();
    let page = Page::new(fetch(&mut store, &["a", "b", "c"]));
    let stored = merge(&store, None, page, &PaginationArgs::new());

    store.evict("Post:b");
    let cx = FieldContext::<String>::new(&store);
    let view = Feed::new().read(Some(&stored), &cx).unwrap();
    assert_eq!(view.edges.len(), 2);
    assert_eq!(view.page_info.start_cursor, "a");
    assert_eq!(view.page_info.end_cursor, "c");

    store.evict("Post:a");
    let cx = FieldContext::<String>::new(&store);
    let view = Feed::new().read(Some(&stored), &cx).unwrap();
    assert_eq!(view.page_info.start_cursor, "c");
    assert_eq!(view.page_info.end_cursor, "c");

    // The stored aggregate itself is untouched by reads.
    assert_eq!(stored.page_info().start_cursor, "a");
    assert_eq!(stored.len(), 3);
}

#[test]
fn normalized_edges_are_read_through_the_store() {
    let mut store = MemoryStore::new();
    let post = store.put_node("Post:1", "hello".to_string());
    let edge = store.put_edge("Edge:1", "c1", NodeRef::Ref(post));

    let page = Page::new(vec![Edge::Ref(edge)]);
    let stored = merge(&store, None, page, &PaginationArgs::new());
    assert_eq!(window(&stored), ["c1"]);
    assert_eq!(stored.page_info().end_cursor, "c1");

    let cx = FieldContext::<String>::new(&store);
    assert_eq!(Feed::new().read(Some(&stored), &cx).unwrap().edges.len(), 1);

    // A normalized edge whose node was collected disappears from reads.
    store.evict("Post:1");
    let cx = FieldContext::<String>::new(&store);
    assert!(Feed::new().read(Some(&stored), &cx).unwrap().edges.is_empty());
}

#[test]
fn extras_round_trip_through_merge_and_read() {
    let mut store = MemoryStore::new();
    let first = Page::new(fetch(&mut store, &["a"]))
        .with_extra("totalCount", 10)
        .with_extra("version", 1);
    let stored = merge(&store, None, first, &PaginationArgs::new());

    let next = Page::new(fetch(&mut store, &["b"])).with_extra("totalCount", 11);
    let stored = merge(&store, Some(stored), next, &PaginationArgs::new().after("a"));

    let cx = FieldContext::<String>::new(&store);
    let view = Feed::new().read(Some(&stored), &cx).unwrap();
    assert_eq!(view.extras.get("totalCount"), Some(&11));
    assert_eq!(view.extras.get("version"), Some(&1));
    assert_eq!(view.extras.len(), 2);
}

#[test]
fn raw_host_arguments_drive_the_merge() {
    let mut store = MemoryStore::new();
    let first = Page::new(fetch(&mut store, &["a", "b"]));
    let stored = merge(&store, None, first, &PaginationArgs::new());

    let raw: Extras<ArgValue> = [
        ("after".to_string(), ArgValue::String("a".into())),
        ("first".to_string(), ArgValue::Int(2)),
    ]
    .into_iter()
    .collect();
    let args = PaginationArgs::try_from(&raw).unwrap();

    let next = Page::new(fetch(&mut store, &["z"]));
    let stored = merge(&store, Some(stored), next, &args);
    assert_eq!(window(&stored), ["a", "z"]);
}

#[test]
fn policies_share_one_interface() {
    fn run<P: FieldPolicy>(
        policy: &P,
        pages: Vec<P::Incoming>,
        cx: &FieldContext<'_, P::Node>,
    ) -> Option<P::View> {
        let mut stored = None;
        for page in pages {
            stored = Some(policy.merge(stored, page, cx));
        }
        policy.read(stored.as_ref(), cx)
    }

    let store = MemoryStore::<u32>::new();
    let cx = FieldContext::<u32>::new(&store);

    let concat = run(&ConcatPagination::new(), vec![vec![1, 2], vec![3]], &cx);
    assert_eq!(concat, Some(vec![1, 2, 3]));

    let offset = run(&OffsetLimitPagination::new(), vec![vec![1, 2], vec![3]], &cx);
    assert_eq!(offset, Some(vec![Some(1), Some(2), Some(3)]));

    let cursor = run(
        &CursorPagination::<u32, ()>::new(),
        vec![Page::new(vec![Edge::new("a", 1)])],
        &cx,
    );
    assert_eq!(cursor.map(|c| c.edges.len()), Some(1));
}
