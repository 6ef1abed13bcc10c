use std::sync::Arc;

use mealdb_desserts::{
    CatalogConfig, DessertListScreen, FetchState, MealCatalog, MealDetailScreen,
};
use mockito::Matcher;

fn shared_catalog(server: &mockito::Server) -> Arc<MealCatalog> {
    Arc::new(MealCatalog::new(&CatalogConfig::with_base_url(server.url())).unwrap())
}

#[tokio::test]
async fn test_list_screen_walks_through_states() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/json/v1/1/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "1", "strMeal": "Eton Mess", "strMealThumb": "e.png"}]}"#)
        .create_async()
        .await;

    let screen = DessertListScreen::new(shared_catalog(&server));
    let mut updates = screen.subscribe();
    assert_eq!(screen.state(), FetchState::Idle);

    let state = screen.load().await;
    assert_eq!(state.data().map(Vec::len), Some(1));
    assert_eq!(screen.state(), state);

    // Renderer sees the terminal state as the latest value
    assert!(updates.has_changed().unwrap());
    assert_eq!(*updates.borrow_and_update(), state);
}

#[tokio::test]
async fn test_error_then_retry_goes_back_through_loading() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("GET", "/api/json/v1/1/lookup.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let screen = MealDetailScreen::new(shared_catalog(&server));
    let state = screen.load("52924").await;
    assert_eq!(state.error(), Some("Invalid response status: 503"));
    failing.remove_async().await;

    let _ok = server
        .mock("GET", "/api/json/v1/1/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "52924", "strMeal": "Nanaimo Bars"}]}"#)
        .create_async()
        .await;

    let mut updates = screen.subscribe();
    let load = screen.load("52924");
    tokio::pin!(load);

    // The first poll publishes Loading before any I/O completes
    tokio::select! {
        biased;
        _ = &mut load => panic!("load finished before publishing Loading"),
        changed = updates.changed() => {
            changed.unwrap();
            assert!(updates.borrow_and_update().is_loading());
        }
    }

    let state = load.await;
    assert_eq!(state.data().unwrap().name, "Nanaimo Bars");
    assert_eq!(screen.state(), state);
}
