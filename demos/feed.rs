//! Example: an infinite-scroll feed cached with cursor pagination.

use pagination_kit::prelude::*;

fn fetch(store: &mut MemoryStore<String>, ids: &[u32]) -> Vec<Edge<String>> {
    ids.iter()
        .map(|id| {
            let post = store.put_node(format!("Post:{id}"), format!("post #{id}"));
            Edge::to_ref(format!("cursor-{id}"), post)
        })
        .collect()
}

fn show(
    label: &str,
    policy: &CursorPagination<String, u32>,
    stored: &Aggregate<String, u32>,
    store: &MemoryStore<String>,
) {
    let cx = FieldContext::<String>::new(store);
    if let Some(view) = policy.read(Some(stored), &cx) {
        let titles: Vec<&str> = view
            .edges
            .iter()
            .filter_map(|edge| match edge.node(store) {
                Some(NodeRef::Ref(r)) => store.get(r.id()).map(String::as_str),
                _ => None,
            })
            .collect();
        println!("{label}: {titles:?}");
        println!(
            "  start={:?} end={:?} prev={} next={} total={:?}",
            view.page_info.start_cursor,
            view.page_info.end_cursor,
            view.page_info.has_previous_page,
            view.page_info.has_next_page,
            view.extras.get("totalCount"),
        );
    }
}

fn main() {
    println!("=== Feed with Cursor Pagination ===\n");

    let mut store = MemoryStore::new();
    let policy = CursorPagination::<String, u32>::new();

    // First screen
    let first = Page::new(fetch(&mut store, &[10, 11, 12]))
        .with_page_info(PageInfo::new(true, true))
        .with_extra("totalCount", 20);
    let stored = policy.merge(None, first, &FieldContext::<String>::new(&store));
    show("First screen", &policy, &stored, &store);

    // Scroll down: fetch after the last cursor
    let args = PaginationArgs::new().after(stored.page_info().end_cursor.clone());
    let next = Page::new(fetch(&mut store, &[13, 14]))
        .with_page_info(PageInfo::new(false, false))
        .with_extra("totalCount", 20);
    let cx = FieldContext::<String>::new(&store).with_args(&args);
    let stored = policy.merge(Some(stored), next, &cx);
    show("\nScrolled down", &policy, &stored, &store);

    // Pull to load older: fetch before the first cursor
    let args = PaginationArgs::new().before(stored.page_info().start_cursor.clone());
    let older = Page::new(fetch(&mut store, &[8, 9])).with_page_info(PageInfo::new(false, true));
    let cx = FieldContext::<String>::new(&store).with_args(&args);
    let stored = policy.merge(Some(stored), older, &cx);
    show("\nLoaded older", &policy, &stored, &store);

    // A post is deleted and collected from the store
    store.evict("Post:8");
    show("\nAfter eviction", &policy, &stored, &store);

    println!("\n=== Offset Pagination ===\n");

    let numbers = MemoryStore::<u32>::new();
    let table = OffsetLimitPagination::<u32>::new();
    let args = PaginationArgs::new().offset(4);
    let cx = FieldContext::<u32>::new(&numbers).with_args(&args);
    let rows = table.merge(None, vec![4, 5], &cx);
    println!("Page at offset 4: {rows:?}");

    let args = PaginationArgs::new().offset(0);
    let cx = FieldContext::<u32>::new(&numbers).with_args(&args);
    let rows = table.merge(Some(rows), vec![0, 1, 2, 3], &cx);
    println!("Page at offset 0: {rows:?}");
}
