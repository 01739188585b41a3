use std::{collections::HashSet, sync::Arc};

use chrono::{DateTime, Duration, TimeZone, Utc};
use docstore::{memory::InMemoryStore, prelude::*};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn document(title: &str, author: &str, created: DateTime<Utc>) -> Document {
    Document::builder()
        .title(title)
        .content(format!("{title} body"))
        .author(Author::new(author, format!("Author {author}")))
        .created(created)
        .build()
        .unwrap()
}

fn titles(mut documents: Vec<Document>) -> Vec<String> {
    documents.sort_by(|a, b| a.title.cmp(&b.title));
    documents.into_iter().map(|d| d.title).collect()
}

fn new_store() -> DocumentStore<InMemoryStore> {
    init_tracing();
    DocumentStore::new(InMemoryStore::new())
}

#[test]
fn save_without_id_assigns_fresh_id_and_round_trips() {
    let store = new_store();
    let input = document("Alpha", "u1", at(2020, 1, 1));

    let saved = store.save(input.clone()).unwrap();
    let id = saved.id().unwrap().to_string();

    assert_eq!(id, "1");
    assert_eq!(store.find_by_id(&id).unwrap(), Some(input.with_id(id.clone())));
    assert_ne!(store.save(document("Beta", "u1", at(2020, 1, 1))).unwrap().id(), Some(id.as_str()));
}

#[test]
fn find_by_unknown_id_is_absent_not_error() {
    let store = new_store();
    store.save(document("Alpha", "u1", at(2020, 1, 1))).unwrap();

    assert_eq!(store.find_by_id("999").unwrap(), None);
    assert_eq!(store.find_by_id("").unwrap(), None);
    assert_eq!(store.find_by_id_json("nope").unwrap(), None);
}

#[test]
fn resave_preserves_created_and_replaces_everything_else() {
    let store = new_store();
    let t0 = at(2020, 1, 1);
    let t1 = at(2025, 5, 5);
    let id = store.save(document("Draft", "u1", t0)).unwrap().id.unwrap();

    let update = Document::builder()
        .id(id.clone())
        .title("Final")
        .content("rewritten")
        .author(Author::new("u2", "Bob"))
        .created(t1)
        .build()
        .unwrap();
    let saved = store.save(update).unwrap();

    let stored = store.find_by_id(&id).unwrap().unwrap();
    assert_eq!(saved, stored);
    assert_eq!(stored.created, t0);
    assert_eq!(stored.title, "Final");
    assert_eq!(stored.content, "rewritten");
    assert_eq!(stored.author, Author::new("u2", "Bob"));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn empty_search_returns_everything() {
    let store = new_store();
    for title in ["Alpha", "Beta", "Gamma"] {
        store.save(document(title, "u1", at(2020, 1, 1))).unwrap();
    }

    assert_eq!(
        titles(store.search(&SearchRequest::default()).unwrap()),
        vec!["Alpha", "Beta", "Gamma"]
    );
}

#[test]
fn search_on_empty_store_is_empty() {
    let store = new_store();

    assert!(store.search(&SearchRequest::default()).unwrap().is_empty());
}

#[test]
fn search_by_title_prefix() {
    let store = new_store();
    for title in ["Alpha", "Almanac", "Beta", "alpine"] {
        store.save(document(title, "u1", at(2020, 1, 1))).unwrap();
    }

    let found = store.search(&SearchRequest::builder().title_prefix("Al").build()).unwrap();

    assert_eq!(titles(found), vec!["Almanac", "Alpha"]);
}

#[test]
fn search_by_content_substring() {
    let store = new_store();
    store.save(document("Alpha", "u1", at(2020, 1, 1))).unwrap();
    store.save(document("Beta", "u1", at(2020, 1, 1))).unwrap();

    let found = store
        .search(&SearchRequest::builder().contains_contents(["pha bo", "missing"]).build())
        .unwrap();

    assert_eq!(titles(found), vec!["Alpha"]);
}

#[test]
fn search_by_created_window_is_inclusive() {
    let store = new_store();
    let t1 = at(2020, 1, 1);
    let t2 = at(2020, 12, 31);
    store.save(document("at-start", "u1", t1)).unwrap();
    store.save(document("at-end", "u1", t2)).unwrap();
    store.save(document("inside", "u1", at(2020, 6, 1))).unwrap();
    store.save(document("just-before", "u1", t1 - Duration::nanoseconds(1))).unwrap();
    store.save(document("just-after", "u1", t2 + Duration::nanoseconds(1))).unwrap();

    let found = store
        .search(&SearchRequest::builder().created_from(t1).created_to(t2).build())
        .unwrap();

    assert_eq!(titles(found), vec!["at-end", "at-start", "inside"]);
}

#[test]
fn combined_criteria_select_exactly_matching_documents() {
    let store = new_store();
    let a = store.save(document("Report1", "u1", at(2020, 1, 1))).unwrap();
    store.save(document("Report2", "u2", at(2021, 1, 1))).unwrap();

    let found = store
        .search(&SearchRequest::builder().title_prefix("Report").author_id("u1").build())
        .unwrap();

    assert_eq!(found, vec![a]);
}

#[test]
fn concurrent_saves_mint_distinct_ids() {
    let store = Arc::new(new_store());
    let threads = 8;
    let per_thread = 250;

    let ids = std::thread::scope(|scope| {
        let handles = (0..threads)
            .map(|t| {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    (0..per_thread)
                        .map(|i| {
                            store
                                .save(document(&format!("doc-{t}-{i}"), "u1", at(2020, 1, 1)))
                                .unwrap()
                                .id
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    let unique = ids.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), threads * per_thread);
    assert_eq!(store.count().unwrap(), threads * per_thread);
}

#[test]
fn shared_backend_across_facades() {
    init_tracing();
    let backend = Arc::new(InMemoryStore::new());
    let writer = DocumentStore::new(Arc::clone(&backend));
    let reader = DocumentStore::new(Arc::clone(&backend)).into_dyn();

    let saved = writer.save(document("Alpha", "u1", at(2020, 1, 1))).unwrap();

    assert_eq!(reader.find_by_id(saved.id().unwrap()).unwrap(), Some(saved));
}
