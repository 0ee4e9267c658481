//! Integration tests for the news view lifecycle: mount, simulated load,
//! category filtering and teardown.
//!
//! Time is paused so the 1000 ms load delay runs instantly and
//! deterministically. Frames are drawn into ratatui's `TestBackend`.

use headlines::app::{App, AppEvent, Phase};
use headlines::news::{LoadError, MockNewsSource, NewsItem, NewsSource, LOAD_DELAY};
use headlines::theme::ThemeVariant;
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;

const EMPTY_MESSAGE: &str = "No articles found in this category.";
const SKELETON_BAR: &str = "▆";

fn screen(app: &mut App) -> String {
    let (width, height) = (100, 70);
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| headlines::ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn apply(app: &mut App, event: AppEvent) -> bool {
    match event {
        AppEvent::NewsLoaded { generation, result } => app.complete_load(generation, result),
        AppEvent::TaskPanicked {
            generation, error, ..
        } => app.complete_load(generation, Err(LoadError::Panicked(error))),
    }
}

async fn mounted() -> (App, mpsc::Receiver<AppEvent>) {
    let mut app = App::new(ThemeVariant::Dark);
    let (tx, rx) = mpsc::channel(4);
    assert!(app.activate(Arc::new(MockNewsSource::default()), tx));
    (app, rx)
}

async fn loaded() -> App {
    let (mut app, mut rx) = mounted().await;
    let event = rx.recv().await.unwrap();
    assert!(apply(&mut app, event));
    app
}

fn filtered_ids(app: &App) -> Vec<u32> {
    app.filtered().iter().map(|i| i.id).collect()
}

// ============================================================================
// Loading → Ready
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_loading_until_delay_elapses() {
    let (mut app, mut rx) = mounted().await;

    let early = time::timeout(LOAD_DELAY - Duration::from_millis(1), rx.recv()).await;
    assert!(early.is_err());
    assert_eq!(app.phase(), Phase::Loading);

    let out = screen(&mut app);
    assert!(out.contains(SKELETON_BAR));
    assert!(!out.contains("Latest News"));

    let event = rx.recv().await.unwrap();
    assert!(apply(&mut app, event));
    assert_eq!(app.phase(), Phase::ReadyWithResults);
}

#[tokio::test(start_paused = true)]
async fn test_clicks_while_loading_are_ignored() {
    let (mut app, mut rx) = mounted().await;
    screen(&mut app);
    assert!(!app.select_category("React"));
    assert!(!app.select_at_position(3, 5));

    let event = rx.recv().await.unwrap();
    apply(&mut app, event);
    assert_eq!(app.selected_category, "All");
    assert_eq!(filtered_ids(&app), vec![1, 2, 3, 4, 5]);
}

#[tokio::test(start_paused = true)]
async fn test_ready_never_returns_to_loading() {
    let mut app = loaded().await;
    for category in ["React", "Nope", "All", "CSS", "All"] {
        app.select_category(category);
        assert_ne!(app.phase(), Phase::Loading);
        assert!(!screen(&mut app).contains(SKELETON_BAR));
    }
    // Remounting the same instance does not start another load.
    let (tx, _rx) = mpsc::channel(1);
    assert!(!app.activate(Arc::new(MockNewsSource::default()), tx));
}

// ============================================================================
// Concrete scenario on the embedded dataset
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_menu_and_filtering() {
    let mut app = loaded().await;
    assert_eq!(
        app.categories(),
        vec!["All", "Technology", "React", "TypeScript", "CSS", "Build Tools"]
    );

    assert!(app.select_category("React"));
    let filtered = app.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);
    assert_eq!(filtered[0].title, "React 19 Features You Should Know");

    assert!(app.select_category("All"));
    assert_eq!(filtered_ids(&app), vec![1, 2, 3, 4, 5]);
}

#[tokio::test(start_paused = true)]
async fn test_absent_category_renders_empty_state() {
    let mut app = loaded().await;
    assert!(app.select_category("Robotics"));
    assert_eq!(app.filtered().len(), 0);
    assert_eq!(app.phase(), Phase::ReadyEmpty);

    let out = screen(&mut app);
    assert!(out.contains(EMPTY_MESSAGE));
    assert!(!out.contains(SKELETON_BAR));
    assert!(out.contains("Latest News"));
}

#[tokio::test(start_paused = true)]
async fn test_reselect_is_idempotent() {
    let mut app = loaded().await;
    app.select_category("TypeScript");
    let before = filtered_ids(&app);
    assert!(!app.select_category("TypeScript"));
    assert_eq!(filtered_ids(&app), before);
}

#[tokio::test(start_paused = true)]
async fn test_card_shows_initials_and_date() {
    let mut app = loaded().await;
    app.select_category("Build Tools");
    let out = screen(&mut app);
    assert!(out.contains("(LW) Lisa Wang"));
    assert!(out.contains("2025"));
    assert!(out.contains("Read more →"));
    assert!(out.contains("▣ image"));
}

// ============================================================================
// Teardown and failure
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_teardown_before_completion() {
    let (mut app, mut rx) = mounted().await;
    let generation = app.loader.generation();
    app.teardown();

    // The task was aborted, so nothing arrives.
    assert!(rx.recv().await.is_none());

    // Even a result delivered by hand is refused.
    let items = headlines::news::embedded().unwrap();
    assert!(!app.complete_load(generation, Ok(items)));
    assert_eq!(app.phase(), Phase::Loading);
}

struct SlowFailure;

impl NewsSource for SlowFailure {
    async fn fetch(&self) -> Result<Vec<NewsItem>, LoadError> {
        time::sleep(LOAD_DELAY).await;
        Err(LoadError::Unavailable("503 from upstream".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_load_failure_renders_error() {
    let mut app = App::new(ThemeVariant::Light);
    let (tx, mut rx) = mpsc::channel(4);
    app.activate(Arc::new(SlowFailure), tx);

    let event = rx.recv().await.unwrap();
    assert!(apply(&mut app, event));
    assert_eq!(app.phase(), Phase::Failed);

    let out = screen(&mut app);
    assert!(out.contains("Could not load articles."));
    assert!(out.contains("503 from upstream"));
    assert!(!out.contains(SKELETON_BAR));
    assert!(!out.contains(EMPTY_MESSAGE));
}
