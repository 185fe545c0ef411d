//! End-to-end: App, worker and mock catalog wired together the way the
//! runtime wires them, minus the terminal.

mod common;

use common::{client_for, make_app, page_json, png_bytes, MockCatalog, MockResponse};
use movie_browser::catalog::FETCH_FAILED_MESSAGE;
use movie_browser::ui::app::{App, PosterSource};
use movie_browser::ui::events::AppEvent;
use movie_browser::ui::search::SearchPhase;
use movie_browser::worker::CatalogWorker;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

fn pump_until(app: &mut App, rx: &Receiver<AppEvent>, done: impl Fn(&App) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done(app) {
        let remaining = deadline.saturating_duration_since(Instant::now());
        assert!(!remaining.is_zero(), "timed out waiting for app state");
        match rx.recv_timeout(remaining) {
            Ok(AppEvent::Discovered {
                generation,
                request,
                result,
            }) => app.on_discovered(generation, request, result),
            Ok(AppEvent::PosterFetched {
                movie_id,
                poster_path,
                thumbnail,
            }) => app.on_poster_fetched(movie_id, &poster_path, thumbnail),
            Ok(_) => {}
            Err(err) => panic!("event channel: {err}"),
        }
    }
}

fn type_year(app: &mut App, year: &str) {
    for ch in year.chars() {
        app.type_digit(ch);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn successful_search_populates_grid_and_history() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json(&page_json(1, 5, 42, 2)))
        .await;

    let (tx, rx) = mpsc::channel();
    let mut app = make_app(None);
    app.set_command_sender(CatalogWorker::spawn(&Handle::current(), client_for(&mock), tx));

    type_year(&mut app, "2023");
    assert!(app.submit());
    assert_eq!(app.search().phase(), SearchPhase::Loading);

    pump_until(&mut app, &rx, |app| !app.search().loading);

    let search = app.search();
    assert_eq!(search.phase(), SearchPhase::Success);
    assert_eq!(search.selected_year, "2023");
    assert_eq!(search.movies.len(), 2);
    assert_eq!(search.current_page, 1);
    assert_eq!(search.total_pages, 5);
    assert_eq!(search.total_results, 42);
    assert!(search.has_searched);
    assert!(search.error.is_none());

    assert_eq!(app.history().entries.len(), 1);
    assert_eq!(app.history().entries[0].results_count, 42);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].query["primary_release_year"], "2023");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_search_after_success_clears_results() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json(&page_json(1, 3, 50, 4)))
        .await;
    mock.enqueue_response(MockResponse::error(503, "unavailable"))
        .await;

    let (tx, rx) = mpsc::channel();
    let mut app = make_app(None);
    app.set_command_sender(CatalogWorker::spawn(&Handle::current(), client_for(&mock), tx));

    type_year(&mut app, "1999");
    app.submit();
    pump_until(&mut app, &rx, |app| !app.search().loading);
    assert!(app.search().shows_results());

    assert!(app.next_page());
    pump_until(&mut app, &rx, |app| !app.search().loading);

    let search = app.search();
    assert_eq!(search.phase(), SearchPhase::Failed);
    assert_eq!(search.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
    assert!(search.movies.is_empty());
    assert_eq!(search.current_page, 1);
    assert_eq!(search.total_pages, 0);
    assert_eq!(search.total_results, 0);
    assert!(search.has_searched);
    assert_eq!(search.selected_year, "1999");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn paging_requests_the_next_page() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json(&page_json(1, 3, 50, 2)))
        .await;
    mock.enqueue_response(MockResponse::json(&page_json(2, 3, 50, 2)))
        .await;

    let (tx, rx) = mpsc::channel();
    let mut app = make_app(None);
    app.set_command_sender(CatalogWorker::spawn(&Handle::current(), client_for(&mock), tx));

    type_year(&mut app, "1999");
    app.submit();
    pump_until(&mut app, &rx, |app| !app.search().loading);
    app.next_page();
    pump_until(&mut app, &rx, |app| !app.search().loading);

    assert_eq!(app.search().current_page, 2);
    assert_eq!(app.search().movies[0].id, 200);
    assert!(app.search().has_previous_page());

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].query["page"], "2");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn posters_load_for_cards_with_paths() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json(&page_json(1, 1, 2, 2)))
        .await;
    mock.enqueue_response(MockResponse::bytes("image/png", png_bytes()))
        .await;

    let (tx, rx) = mpsc::channel();
    let mut app = make_app(Some(PosterSource {
        image_base_url: mock.image_url(),
        size: "w92".to_string(),
    }));
    app.set_command_sender(CatalogWorker::spawn(&Handle::current(), client_for(&mock), tx));

    type_year(&mut app, "1999");
    app.submit();
    pump_until(&mut app, &rx, |app| !app.search().loading);

    // Movie 100 has a poster, movie 101 does not.
    assert!(app.poster(101).unwrap().state.is_error());
    pump_until(&mut app, &rx, |app| !app.poster(100).unwrap().state.is_pending());

    let slot = app.poster(100).unwrap();
    assert!(slot.state.is_loaded());
    assert!(slot.thumbnail.is_some());
}
