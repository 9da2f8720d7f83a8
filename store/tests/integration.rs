//! Store lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives a `TodoStore`
//! through the real `UreqTodoService` over actual HTTP: load, add, toggle,
//! edit-by-delete, remove. Validates that the store's cache converges with
//! the server after every confirmed mutation, and that the two crates agree
//! on the wire schema.

use todo_store::{
    NoticeLevel, RemoteTodoService, ServiceError, StoreError, TodoStore, UreqTodoService,
};

/// Boot the mock server on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn store_lifecycle() {
    let base_url = start_server();
    let mut store = TodoStore::new(UreqTodoService::new(&base_url));

    // Step 1: initial load — empty collection.
    store.load().unwrap();
    assert!(store.items().is_empty());
    assert!(!store.is_loading());

    // Step 2: short text is a silent no-op.
    store.add("abc").unwrap();
    assert!(store.items().is_empty());
    assert!(store.take_notices().is_empty());

    // Step 3: add two items; the newest ends up first.
    store.add("Buy milk").unwrap();
    store.add("Walk dog").unwrap();
    assert_eq!(store.items().len(), 2);
    assert_eq!(store.items()[0].text, "Walk dog");
    assert_eq!(store.items()[1].text, "Buy milk");
    let notices = store.take_notices();
    assert_eq!(notices.len(), 2);
    assert!(notices
        .iter()
        .all(|n| n.level == NoticeLevel::Success && n.message == "Todo added successfully!"));

    // Step 4: toggle completion; the server's record lands in the cache.
    let walk_id = store.items()[0].id;
    store.toggle_completed(walk_id).unwrap();
    assert!(store.items()[0].completed);
    assert_eq!(store.items()[0].id, walk_id);

    // Step 5: reload — the cache now reflects server order (insertion
    // order on this server), with the toggle persisted.
    store.load().unwrap();
    assert_eq!(store.items().len(), 2);
    let walk = store.items().iter().find(|i| i.id == walk_id).unwrap();
    assert!(walk.completed);

    // Step 6: edit-by-delete hands back the text and deletes the record.
    let milk_id = store.items().iter().find(|i| i.text == "Buy milk").unwrap().id;
    let text = store.begin_edit(milk_id).unwrap();
    assert_eq!(text, "Buy milk");
    assert!(store.items().iter().all(|i| i.id != milk_id));

    // Resubmitting yields a fresh server-assigned id.
    store.add("Buy oat milk").unwrap();
    let readded = &store.items()[0];
    assert_eq!(readded.text, "Buy oat milk");
    assert_ne!(readded.id, milk_id);

    // Step 7: remove everything; subsequent ops on a gone id are NotFound.
    let ids: Vec<_> = store.items().iter().map(|i| i.id).collect();
    for id in ids {
        store.remove(id).unwrap();
    }
    assert!(store.items().is_empty());
    let err = store.toggle_completed(walk_id).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    // Step 8: server agrees the collection is empty.
    store.load().unwrap();
    assert!(store.items().is_empty());
}

#[test]
fn service_get_one_roundtrip() {
    let base_url = start_server();
    let service = UreqTodoService::new(&base_url);

    let created = service
        .create(&todo_store::NewTodo {
            text: "Fetch me".to_string(),
            completed: false,
        })
        .unwrap();

    let fetched = service.get(created.id).unwrap();
    assert_eq!(fetched, created);

    service.delete(created.id).unwrap();
    let err = service.get(created.id).unwrap_err();
    assert!(matches!(err, ServiceError::Http { status: 404, .. }));
}

#[test]
fn unreachable_server_surfaces_transport_error_and_keeps_cache() {
    // A port nothing listens on: connect fails, the store reports Fetch and
    // the cache stays empty.
    let mut store = TodoStore::new(UreqTodoService::new("http://127.0.0.1:1"));

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Fetch(ServiceError::Transport(_))));
    assert!(store.items().is_empty());
    assert!(!store.is_loading());

    let notices = store.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, "Failed to fetch todos!");
}
