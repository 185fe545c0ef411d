use crate::catalog::{
    parse_year, poster_url, CatalogError, DiscoverRequest, Movie, ResultPage, FETCH_FAILED_MESSAGE,
};
use crate::preference::{ColorMode, ThemeProvider};
use crate::ui::grid::columns_for_width;
use crate::ui::history::{HistoryIntent, HistoryReducer, HistoryState};
use crate::ui::mvi::Reducer;
use crate::ui::poster::{PosterIntent, PosterReducer, PosterSlot, Thumbnail};
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use crate::ui::theme::ThemeContext;
use crate::worker::{UiCommand, UiCommandSender};
use std::collections::HashMap;
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// Maximum digits accepted in the year field.
pub const YEAR_MAX_LEN: usize = 4;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Where poster images come from.
#[derive(Debug, Clone)]
pub struct PosterSource {
    pub image_base_url: String,
    pub size: String,
}

#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Page size used for the "Showing movies X to Y" line.
    pub items_per_page: u32,
    /// `None` disables poster downloads; every card shows the placeholder.
    pub posters: Option<PosterSource>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            items_per_page: 20,
            posters: None,
        }
    }
}

pub struct App {
    should_quit: bool,
    options: AppOptions,
    /// Search state (MVI pattern).
    search: SearchState,
    /// Search history and its popup (MVI pattern).
    history: HistoryState,
    /// Poster load state per movie id on the current page.
    posters: HashMap<u64, PosterSlot>,
    /// Index of the highlighted card.
    selected: usize,
    columns: usize,
    theme: ThemeProvider,
    command_sender: Option<UiCommandSender>,
    /// Bumped on every issued search; only the latest response is applied.
    generation: u64,
    tick: u64,
}

impl App {
    pub fn new(theme: ThemeProvider, options: AppOptions) -> Self {
        Self {
            should_quit: false,
            options,
            search: SearchState::default(),
            history: HistoryState::default(),
            posters: HashMap::new(),
            selected: 0,
            columns: 1,
            theme,
            command_sender: None,
            generation: 0,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn history(&self) -> &HistoryState {
        &self.history
    }

    pub fn items_per_page(&self) -> u32 {
        self.options.items_per_page
    }

    pub fn poster(&self, movie_id: u64) -> Option<&PosterSlot> {
        self.posters.get(&movie_id)
    }

    pub fn posters(&self) -> &HashMap<u64, PosterSlot> {
        &self.posters
    }

    /// Movie under the card cursor, if any.
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.search.movies.get(self.selected)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn theme(&self) -> ThemeContext {
        ThemeContext::new(self.theme.mode())
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn on_resize(&mut self, cols: u16, _rows: u16) {
        self.columns = columns_for_width(cols);
        self.clamp_selection();
    }

    pub fn toggle_theme(&mut self) -> ColorMode {
        let mode = self.theme.toggle();
        info!(mode = mode.as_str(), "Color mode toggled");
        mode
    }

    // ========================================================================
    // Search (MVI pattern)
    // ========================================================================

    fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    pub fn type_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() || self.search.selected_year.len() >= YEAR_MAX_LEN {
            return;
        }
        let mut year = self.search.selected_year.clone();
        year.push(digit);
        self.dispatch_search(SearchIntent::SetYear { year });
    }

    pub fn delete_digit(&mut self) {
        let mut year = self.search.selected_year.clone();
        if year.pop().is_none() {
            return;
        }
        self.dispatch_search(SearchIntent::SetYear { year });
    }

    pub fn set_year(&mut self, year: String) {
        self.dispatch_search(SearchIntent::SetYear { year });
    }

    /// "Go": search page 1 for the typed year.
    ///
    /// Ignored while a search is loading or the year is empty. A year that
    /// does not parse leaves the current page untouched.
    pub fn submit(&mut self) -> bool {
        if !self.search.can_submit() {
            return false;
        }
        if parse_year(&self.search.selected_year).is_none() {
            debug!(input = %self.search.selected_year, "Year is not a number, search skipped");
            return false;
        }
        self.dispatch_search(SearchIntent::SetPage { page: 1 });
        self.run_search(1)
    }

    pub fn next_page(&mut self) -> bool {
        if !self.search.shows_results() || !self.search.has_next_page() {
            return false;
        }
        self.run_search(self.search.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.search.shows_results() || !self.search.has_previous_page() {
            return false;
        }
        self.run_search(self.search.current_page - 1)
    }

    /// Clear results, keeping the year. Ignored while loading.
    pub fn reset_search(&mut self) {
        if self.search.loading {
            return;
        }
        self.dispatch_search(SearchIntent::ResetSearch);
        self.posters.clear();
        self.selected = 0;
    }

    fn run_search(&mut self, page: u32) -> bool {
        let Some(year) = parse_year(&self.search.selected_year) else {
            debug!(input = %self.search.selected_year, "Year is not a number, search skipped");
            return false;
        };

        self.generation += 1;
        let generation = self.generation;
        let request = DiscoverRequest::new(year, page);
        self.dispatch_search(SearchIntent::StartSearch);
        info!(year, page = request.page, generation, "Search started");

        if !self.send_command(UiCommand::Discover {
            generation,
            request,
        }) {
            self.dispatch_search(SearchIntent::SearchFailed {
                message: FETCH_FAILED_MESSAGE.to_string(),
            });
            return false;
        }
        true
    }

    /// Apply a discovery outcome. Responses from superseded searches are dropped.
    pub fn on_discovered(
        &mut self,
        generation: u64,
        request: DiscoverRequest,
        result: Result<ResultPage, CatalogError>,
    ) {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "Discarding stale discover response"
            );
            return;
        }

        match result {
            Ok(page) => {
                info!(
                    year = request.year,
                    page = page.page,
                    results = page.movies.len(),
                    "Search succeeded"
                );
                let results_count = page.total_results;
                self.dispatch_search(SearchIntent::SearchSucceeded { page });
                self.dispatch_history(HistoryIntent::Record {
                    year: request.year.to_string(),
                    results_count,
                    timestamp: SystemTime::now(),
                });
                self.selected = 0;
                self.sync_posters();
            }
            Err(err) => {
                warn!(year = request.year, page = request.page, error = %err, "Search failed");
                self.dispatch_search(SearchIntent::SearchFailed {
                    message: err.user_message().to_string(),
                });
                self.posters.clear();
                self.selected = 0;
            }
        }
    }

    // ========================================================================
    // Posters (MVI pattern, one state per card)
    // ========================================================================

    /// Keep slots whose poster reference is unchanged, reset the ones whose
    /// reference moved and start new ones.
    fn sync_posters(&mut self) {
        let mut previous = std::mem::take(&mut self.posters);
        let mut wanted = Vec::new();

        for movie in &self.search.movies {
            let poster_path = movie.poster_ref();
            let mut slot = match previous.remove(&movie.id) {
                Some(slot) if slot.tracks(poster_path) => {
                    self.posters.insert(movie.id, slot);
                    continue;
                }
                Some(mut slot) => {
                    debug!(movie_id = movie.id, "Poster reference changed");
                    slot.state = PosterReducer::reduce(slot.state, PosterIntent::Reset);
                    slot.poster_path = poster_path.map(str::to_string);
                    slot.thumbnail = None;
                    slot
                }
                None => PosterSlot::new(poster_path.map(str::to_string)),
            };
            let url = self
                .options
                .posters
                .as_ref()
                .and_then(|source| poster_url(&source.image_base_url, &source.size, poster_path));
            match (poster_path, url) {
                (Some(path), Some(url)) => {
                    slot.state = PosterReducer::reduce(slot.state, PosterIntent::Start);
                    wanted.push((
                        movie.id,
                        UiCommand::FetchPoster {
                            movie_id: movie.id,
                            poster_path: path.to_string(),
                            url,
                        },
                    ));
                }
                _ => {
                    slot.state = PosterReducer::reduce(slot.state, PosterIntent::Failed);
                }
            }
            self.posters.insert(movie.id, slot);
        }

        for (movie_id, command) in wanted {
            if !self.send_command(command) {
                self.apply_poster(movie_id, PosterIntent::Failed);
            }
        }
    }

    fn apply_poster(&mut self, movie_id: u64, intent: PosterIntent) {
        if let Some(slot) = self.posters.get_mut(&movie_id) {
            slot.state = PosterReducer::reduce(slot.state, intent);
        }
    }

    /// Apply a poster download outcome if the card still shows that poster.
    pub fn on_poster_fetched(
        &mut self,
        movie_id: u64,
        poster_path: &str,
        thumbnail: Option<Thumbnail>,
    ) {
        let Some(slot) = self.posters.get_mut(&movie_id) else {
            return;
        };
        if !slot.tracks(Some(poster_path)) {
            return;
        }
        match thumbnail {
            Some(thumbnail) => {
                slot.thumbnail = Some(thumbnail);
                slot.state = PosterReducer::reduce(slot.state, PosterIntent::Loaded);
            }
            None => {
                slot.thumbnail = None;
                slot.state = PosterReducer::reduce(slot.state, PosterIntent::Failed);
            }
        }
    }

    // ========================================================================
    // Card selection
    // ========================================================================

    pub fn move_selection(&mut self, dx: i32, dy: i32) {
        let count = self.search.movies.len();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let columns = self.columns.max(1) as i64;
        let target = self.selected as i64 + dx as i64 + dy as i64 * columns;
        self.selected = target.clamp(0, count as i64 - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        let count = self.search.movies.len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    // ========================================================================
    // History (MVI pattern)
    // ========================================================================

    pub fn dispatch_history(&mut self, intent: HistoryIntent) {
        dispatch_mvi!(self, history, HistoryReducer, intent);
    }

    /// Load the selected history entry's year and search it.
    pub fn search_history_selection(&mut self) -> bool {
        let Some(year) = self.history.selected_entry().map(|entry| entry.year.clone()) else {
            return false;
        };
        self.dispatch_history(HistoryIntent::Close);
        self.set_year(year);
        self.submit()
    }

    fn send_command(&self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            warn!("Catalog worker not running, command dropped");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Failed to queue catalog command");
                false
            }
        }
    }
}
