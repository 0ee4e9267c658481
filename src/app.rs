use crate::news::{
    derive_categories, filter_by_category, LoadError, NewsItem, NewsSource, ALL_CATEGORIES,
};
use crate::theme::{StyleMap, ThemeVariant};
use crate::util::catch_task_panic;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Number of placeholder cards drawn while the news list is loading.
pub const SKELETON_CARDS: usize = 3;

/// How long a status message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

// ============================================================================
// View State
// ============================================================================

/// Source-of-truth state for the news list.
///
/// Categories and the filtered list are derived from `Ready::items` on demand
/// and never stored alongside it.
#[derive(Debug, Clone)]
pub enum FeedState {
    /// Waiting for the one-shot load to finish.
    Loading,
    /// Load finished; the collection is immutable from here on.
    Ready { items: Arc<[NewsItem]> },
    /// Load failed; no retry for this activation.
    Failed { error: String },
}

/// What the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    ReadyWithResults,
    ReadyEmpty,
    Failed,
}

/// Events from background tasks
pub enum AppEvent {
    /// The news source finished.
    ///
    /// Fields:
    /// - `generation`: The sequencer generation the load was spawned under
    /// - `result`: The full collection, or why it could not be produced
    NewsLoaded {
        generation: u64,
        result: Result<Vec<NewsItem>, LoadError>,
    },
    /// A background task panicked.
    TaskPanicked {
        task: &'static str,
        generation: u64,
        error: String,
    },
}

// ============================================================================
// Load Sequencer
// ============================================================================

/// One-shot, cancellable driver for the initial news load.
///
/// `start` spawns the fetch at most once. Completions are accepted only while
/// the sequencer is live and the generation matches, so a load that finishes
/// after `cancel` can never touch the view.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    generation: u64,
    started: bool,
    cancelled: bool,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl LoadSequencer {
    /// Spawn the load. Returns `false` without doing anything if a load was
    /// already started or the sequencer was cancelled.
    pub fn start<S: NewsSource>(&mut self, source: Arc<S>, event_tx: mpsc::Sender<AppEvent>) -> bool {
        if self.started || self.cancelled {
            return false;
        }
        self.started = true;
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        tracing::info!(generation, "Starting news load");

        self.handle = Some(tokio::spawn(async move {
            let event = match catch_task_panic(source.fetch()).await {
                Ok(result) => AppEvent::NewsLoaded { generation, result },
                Err(error) => {
                    tracing::error!(error = %error, "News load task panicked");
                    AppEvent::TaskPanicked {
                        task: "news_load",
                        generation,
                        error,
                    }
                }
            };

            if let Err(e) = event_tx.send(event).await {
                tracing::warn!(error = %e, "Failed to send news load result (receiver dropped)");
            }
        }));
        true
    }

    /// Whether a completion tagged with `generation` may be applied.
    pub fn accepts(&self, generation: u64) -> bool {
        self.started && !self.cancelled && generation == self.generation
    }

    /// Release the task handle once its result has been applied.
    fn finish(&mut self) {
        self.handle = None;
    }

    /// Abort any in-flight load and refuse all later completions.
    pub fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Aborted news load task");
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state
pub struct App {
    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    // Data
    pub feed: FeedState,
    /// Active filter. `"All"` until the user picks something else.
    pub selected_category: String,

    // UI State
    /// Highlighted pill in the category selector (keyboard focus).
    pub category_cursor: usize,
    /// Index of the first visible card in the filtered list.
    pub scroll_offset: usize,
    /// Pill areas from the last frame, for mouse hit-testing.
    pub pill_hitboxes: Vec<(Rect, usize)>,

    pub loader: LoadSequencer,

    /// Status message with the time it was set.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Skeleton pulse animation frame, advanced by the tick handler.
    pub pulse_frame: usize,

    /// Dirty flag to skip unnecessary frame renders
    pub needs_redraw: bool,
}

impl App {
    pub fn new(theme_variant: ThemeVariant) -> Self {
        Self {
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            feed: FeedState::Loading,
            selected_category: ALL_CATEGORIES.to_string(),
            category_cursor: 0,
            scroll_offset: 0,
            pill_hitboxes: Vec::new(),
            loader: LoadSequencer::default(),
            status_message: None,
            pulse_frame: 0,
            needs_redraw: true,
        }
    }

    /// Mount the view: begin the one-shot load.
    ///
    /// Calling this again (e.g. on a re-render) does not start a second load.
    pub fn activate<S: NewsSource>(&mut self, source: Arc<S>, event_tx: mpsc::Sender<AppEvent>) -> bool {
        let started = self.loader.start(source, event_tx);
        if !started {
            tracing::debug!("News load already started, ignoring activation");
        }
        started
    }

    /// Unmount the view. Pending load results are dropped from here on.
    pub fn teardown(&mut self) {
        self.loader.cancel();
    }

    /// Apply the outcome of the load task.
    ///
    /// Returns `false` when the result was discarded: stale generation, a
    /// torn-down view, or a view that already left `Loading`.
    pub fn complete_load(
        &mut self,
        generation: u64,
        result: Result<Vec<NewsItem>, LoadError>,
    ) -> bool {
        if !self.loader.accepts(generation) || !matches!(self.feed, FeedState::Loading) {
            tracing::debug!(
                generation,
                current = self.loader.generation(),
                cancelled = self.loader.is_cancelled(),
                "Discarding news load result"
            );
            return false;
        }
        self.loader.finish();

        match result {
            Ok(items) => {
                tracing::info!(items = items.len(), "News loaded");
                self.feed = FeedState::Ready {
                    items: Arc::from(items),
                };
                self.sync_cursor_to_selection();
            }
            Err(e) => {
                tracing::error!(error = %e, "News load failed");
                self.feed = FeedState::Failed {
                    error: e.to_string(),
                };
            }
        }
        self.needs_redraw = true;
        true
    }

    // ------------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        match &self.feed {
            FeedState::Loading => Phase::Loading,
            FeedState::Failed { .. } => Phase::Failed,
            FeedState::Ready { items } => {
                if filter_by_category(items, &self.selected_category).is_empty() {
                    Phase::ReadyEmpty
                } else {
                    Phase::ReadyWithResults
                }
            }
        }
    }

    /// Loaded articles; empty until the load completes.
    pub fn items(&self) -> &[NewsItem] {
        match &self.feed {
            FeedState::Ready { items } => items,
            _ => &[],
        }
    }

    /// Category menu: `"All"` plus each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        derive_categories(self.items())
    }

    /// Articles matching the selected category, in dataset order.
    pub fn filtered(&self) -> Vec<&NewsItem> {
        filter_by_category(self.items(), &self.selected_category)
    }

    // ------------------------------------------------------------------------
    // Category selection
    // ------------------------------------------------------------------------

    /// Select a category by label.
    ///
    /// No-op (returns `false`) before the list is ready, since there is no
    /// selector to click yet, and when `category` is already active. Labels
    /// absent from the menu are accepted and simply match nothing.
    pub fn select_category(&mut self, category: &str) -> bool {
        if !matches!(self.feed, FeedState::Ready { .. }) {
            tracing::debug!(category, "Ignoring category selection before load completes");
            return false;
        }
        if self.selected_category == category {
            return false;
        }

        self.selected_category = category.to_string();
        self.scroll_offset = 0;
        self.sync_cursor_to_selection();

        let count = self.filtered().len();
        tracing::info!(category, matches = count, "Category selected");
        let noun = if count == 1 { "article" } else { "articles" };
        self.set_status(format!("Showing {} {} in {}", count, noun, category));
        self.needs_redraw = true;
        true
    }

    /// Select the `index`-th entry of the category menu.
    pub fn select_category_index(&mut self, index: usize) -> bool {
        let Some(category) = self.categories().get(index).map(|c| c.to_string()) else {
            return false;
        };
        self.category_cursor = index;
        self.select_category(&category)
    }

    /// Select whatever pill the keyboard cursor is on.
    pub fn select_at_cursor(&mut self) -> bool {
        self.select_category_index(self.category_cursor)
    }

    /// Select the pill under a mouse click, if any.
    pub fn select_at_position(&mut self, column: u16, row: u16) -> bool {
        let hit = self
            .pill_hitboxes
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|(_, idx)| *idx);
        match hit {
            Some(idx) => self.select_category_index(idx),
            None => false,
        }
    }

    pub fn cursor_left(&mut self) {
        self.category_cursor = self.category_cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let last = self.categories().len().saturating_sub(1);
        self.category_cursor = (self.category_cursor + 1).min(last);
    }

    fn sync_cursor_to_selection(&mut self) {
        let position = self
            .categories()
            .iter()
            .position(|c| *c == self.selected_category);
        if let Some(idx) = position {
            self.category_cursor = idx;
        }
    }

    // ------------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------------

    pub fn scroll_down(&mut self) {
        let last = self.filtered().len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + 1).min(last);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    // ------------------------------------------------------------------------
    // Theme and status
    // ------------------------------------------------------------------------

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant, returning its name.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    /// Set status message (expires after `STATUS_TTL`)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear the status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed() >= STATUS_TTL {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::{embedded, MockNewsSource, LOAD_DELAY};
    use pretty_assertions::assert_eq;
    use tokio::time;

    fn ready_app() -> App {
        let mut app = App::new(ThemeVariant::Dark);
        app.loader.started = true;
        app.loader.generation = 1;
        assert!(app.complete_load(1, embedded()));
        app
    }

    fn ids(app: &App) -> Vec<u32> {
        app.filtered().iter().map(|i| i.id).collect()
    }

    struct FailingSource;

    impl NewsSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<NewsItem>, LoadError> {
            Err(LoadError::Unavailable("offline".to_string()))
        }
    }

    struct PanickingSource;

    impl NewsSource for PanickingSource {
        async fn fetch(&self) -> Result<Vec<NewsItem>, LoadError> {
            panic!("source exploded")
        }
    }

    async fn drain_one(app: &mut App, rx: &mut mpsc::Receiver<AppEvent>) {
        match rx.recv().await.unwrap() {
            AppEvent::NewsLoaded { generation, result } => {
                app.complete_load(generation, result);
            }
            AppEvent::TaskPanicked {
                generation, error, ..
            } => {
                app.complete_load(generation, Err(LoadError::Panicked(error)));
            }
        }
    }

    #[test]
    fn test_initial_state_is_loading_with_all_selected() {
        let app = App::new(ThemeVariant::Dark);
        assert_eq!(app.phase(), Phase::Loading);
        assert_eq!(app.selected_category, "All");
        assert!(app.items().is_empty());
        assert_eq!(app.categories(), vec!["All"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_completes_after_delay() {
        let mut app = App::new(ThemeVariant::Dark);
        let (tx, mut rx) = mpsc::channel(4);
        let start = time::Instant::now();

        assert!(app.activate(Arc::new(MockNewsSource::default()), tx));

        let early = time::timeout(Duration::from_millis(999), rx.recv()).await;
        assert!(early.is_err(), "load finished before the delay");
        assert_eq!(app.phase(), Phase::Loading);

        drain_one(&mut app, &mut rx).await;
        assert!(start.elapsed() >= LOAD_DELAY);
        assert_eq!(app.phase(), Phase::ReadyWithResults);
        assert_eq!(ids(&app), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_during_loading_is_noop() {
        let mut app = App::new(ThemeVariant::Dark);
        let (tx, mut rx) = mpsc::channel(4);
        app.activate(Arc::new(MockNewsSource::default()), tx);

        assert!(!app.select_category("React"));
        assert!(!app.select_category_index(1));
        assert!(!app.select_at_position(0, 0));
        assert_eq!(app.selected_category, "All");
        assert_eq!(app.phase(), Phase::Loading);

        drain_one(&mut app, &mut rx).await;
        assert_eq!(app.selected_category, "All");
        assert_eq!(app.filtered().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activate_twice_starts_one_load() {
        let mut app = App::new(ThemeVariant::Dark);
        let (tx, mut rx) = mpsc::channel(4);
        assert!(app.activate(Arc::new(MockNewsSource::default()), tx.clone()));
        assert!(!app.activate(Arc::new(MockNewsSource::default()), tx));
        assert_eq!(app.loader.generation(), 1);

        drain_one(&mut app, &mut rx).await;
        // The only sender lived in the first task, so the channel now closes.
        assert!(rx.recv().await.is_none(), "a second load was spawned");
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_suppresses_late_completion() {
        let mut app = App::new(ThemeVariant::Dark);
        let (tx, _rx) = mpsc::channel(4);
        app.activate(Arc::new(MockNewsSource::default()), tx);
        let generation = app.loader.generation();

        app.teardown();
        assert!(app.loader.is_cancelled());
        assert!(!app.complete_load(generation, embedded()));
        assert_eq!(app.phase(), Phase::Loading);
        assert!(app.items().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_aborts_the_task() {
        let mut app = App::new(ThemeVariant::Dark);
        let (tx, mut rx) = mpsc::channel(4);
        app.activate(Arc::new(MockNewsSource::default()), tx);
        app.teardown();

        // Aborted task drops its sender, closing the channel without a message.
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut app = App::new(ThemeVariant::Dark);
        app.loader.started = true;
        app.loader.generation = 2;
        assert!(!app.complete_load(1, embedded()));
        assert_eq!(app.phase(), Phase::Loading);
    }

    #[test]
    fn test_ready_never_reverts() {
        let mut app = ready_app();
        assert!(!app.complete_load(1, Err(LoadError::Unavailable("x".into()))));
        assert_eq!(app.phase(), Phase::ReadyWithResults);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_source_moves_to_failed() {
        let mut app = App::new(ThemeVariant::Dark);
        let (tx, mut rx) = mpsc::channel(4);
        app.activate(Arc::new(FailingSource), tx);
        drain_one(&mut app, &mut rx).await;

        assert_eq!(app.phase(), Phase::Failed);
        match &app.feed {
            FeedState::Failed { error } => assert!(error.contains("offline")),
            other => panic!("unexpected state {:?}", other),
        }
        assert!(!app.select_category("React"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_source_moves_to_failed() {
        let mut app = App::new(ThemeVariant::Dark);
        let (tx, mut rx) = mpsc::channel(4);
        app.activate(Arc::new(PanickingSource), tx);
        drain_one(&mut app, &mut rx).await;

        assert_eq!(app.phase(), Phase::Failed);
        match &app.feed {
            FeedState::Failed { error } => assert!(error.contains("source exploded")),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_select_react_yields_article_two() {
        let mut app = ready_app();
        assert!(app.select_category("React"));
        let filtered = app.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
        assert_eq!(filtered[0].title, "React 19 Features You Should Know");
        assert_eq!(app.category_cursor, 2);
    }

    #[test]
    fn test_select_all_restores_order() {
        let mut app = ready_app();
        app.select_category("CSS");
        assert!(app.select_category("All"));
        assert_eq!(ids(&app), vec![1, 2, 3, 4, 5]);
        assert_eq!(app.category_cursor, 0);
    }

    #[test]
    fn test_absent_category_is_ready_empty() {
        let mut app = ready_app();
        assert!(app.select_category("Science"));
        assert!(app.filtered().is_empty());
        assert_eq!(app.phase(), Phase::ReadyEmpty);

        assert!(app.select_category("TypeScript"));
        assert_eq!(app.phase(), Phase::ReadyWithResults);
    }

    #[test]
    fn test_reselecting_active_category_is_noop() {
        let mut app = ready_app();
        app.select_category("React");
        app.scroll_offset = 0;
        let before = ids(&app);
        assert!(!app.select_category("React"));
        assert_eq!(ids(&app), before);
        assert!(!app.select_category_index(2));
    }

    #[test]
    fn test_selection_resets_scroll_and_sets_status() {
        let mut app = ready_app();
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.scroll_offset, 2);

        app.select_category("Technology");
        assert_eq!(app.scroll_offset, 0);
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Showing 1 article in Technology");
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut app = ready_app();
        app.cursor_left();
        assert_eq!(app.category_cursor, 0);
        for _ in 0..20 {
            app.cursor_right();
        }
        assert_eq!(app.category_cursor, 5);
        assert!(app.select_at_cursor());
        assert_eq!(app.selected_category, "Build Tools");
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut app = ready_app();
        assert!(!app.select_category_index(42));
        assert_eq!(app.selected_category, "All");
    }

    #[test]
    fn test_scroll_clamps_to_filtered_len() {
        let mut app = ready_app();
        for _ in 0..10 {
            app.scroll_down();
        }
        assert_eq!(app.scroll_offset, 4);
        app.select_category("React");
        app.scroll_down();
        assert_eq!(app.scroll_offset, 0);
        app.scroll_up();
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_mouse_hit_selects_pill() {
        let mut app = ready_app();
        app.pill_hitboxes = vec![
            (Rect::new(2, 4, 5, 1), 0),
            (Rect::new(8, 4, 12, 1), 1),
        ];
        assert!(!app.select_at_position(7, 4));
        assert!(app.select_at_position(10, 4));
        assert_eq!(app.selected_category, "Technology");
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = App::new(ThemeVariant::Dark);
        assert_eq!(app.cycle_theme(), "Light");
        assert_eq!(app.theme_variant, ThemeVariant::Light);
        assert_eq!(
            app.style("heading"),
            ThemeVariant::Light.palette().heading
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_expires() {
        let mut app = App::new(ThemeVariant::Dark);
        app.set_status("hello");
        time::advance(Duration::from_millis(2900)).await;
        assert!(!app.clear_expired_status());
        time::advance(Duration::from_millis(200)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }
}
