use crate::error::ApiError;
use crate::models::{Movie, MovieDetail};
use crate::tmdb::TmdbApi;
use crate::watchlist::WatchLaterStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Owns the published result sets and flags the presentation layer reads.
///
/// All mutation happens on the caller's context; network calls suspend the
/// operation without blocking it. Each result set carries a generation
/// counter: a load captures a token on entry and applies its result only
/// if the token is still current, so a response from a superseded load is
/// discarded instead of overwriting newer data.
pub struct Catalog {
    api: Arc<dyn TmdbApi>,
    store: WatchLaterStore,

    pub popular: Vec<Movie>,
    pub trending: Vec<Movie>,
    pub search_results: Vec<Movie>,
    pub watch_later: Vec<Movie>,

    pub is_loading_popular: bool,
    pub is_loading_trending: bool,
    pub is_searching: bool,
    pub error_message: Option<String>,

    popular_gen: u64,
    trending_gen: u64,
    search_gen: u64,
}

impl Catalog {
    pub fn new(api: Arc<dyn TmdbApi>, store: WatchLaterStore) -> Self {
        Self {
            api,
            store,
            popular: Vec::new(),
            trending: Vec::new(),
            search_results: Vec::new(),
            watch_later: Vec::new(),
            is_loading_popular: false,
            is_loading_trending: false,
            is_searching: false,
            error_message: None,
            popular_gen: 0,
            trending_gen: 0,
            search_gen: 0,
        }
    }

    /// Fetches the popular list and fully replaces `popular` — stale
    /// entries are dropped even if the new list is empty. A failure is
    /// recorded in `error_message`; a success does not clear it.
    pub async fn load_popular(&mut self) {
        self.popular_gen = self.popular_gen.wrapping_add(1);
        let token = self.popular_gen;
        self.is_loading_popular = true;

        let api = Arc::clone(&self.api);
        let fetched = api.fetch_popular().await;

        if token != self.popular_gen {
            debug!("discarding stale popular response");
            return;
        }
        match fetched {
            Ok(movies) => self.popular = movies,
            Err(e) => self.error_message = Some(e.to_string()),
        }
        self.is_loading_popular = false;
    }

    pub async fn load_trending(&mut self) {
        self.trending_gen = self.trending_gen.wrapping_add(1);
        let token = self.trending_gen;
        self.is_loading_trending = true;

        let api = Arc::clone(&self.api);
        let fetched = api.fetch_trending().await;

        if token != self.trending_gen {
            debug!("discarding stale trending response");
            return;
        }
        match fetched {
            Ok(movies) => self.trending = movies,
            Err(e) => self.error_message = Some(e.to_string()),
        }
        self.is_loading_trending = false;
    }

    /// Direct passthrough; detail is displayed transiently, so failures
    /// propagate to the caller instead of landing in `error_message`.
    pub async fn get_detail(&self, id: i32) -> Result<MovieDetail, ApiError> {
        self.api.fetch_detail(id).await
    }

    /// An empty query clears the results without a network call — "no
    /// query" is distinct from "query with zero matches".
    pub async fn search(&mut self, query: &str) {
        self.search_gen = self.search_gen.wrapping_add(1);
        if query.is_empty() {
            self.search_results = Vec::new();
            return;
        }
        let token = self.search_gen;
        self.is_searching = true;

        let api = Arc::clone(&self.api);
        let fetched = api.search(query).await;

        if token != self.search_gen {
            debug!("discarding stale search response");
            return;
        }
        match fetched {
            Ok(movies) => self.search_results = movies,
            Err(e) => self.error_message = Some(e.to_string()),
        }
        self.is_searching = false;
    }

    /// Startup read of the persisted list.
    pub fn load_watch_later(&mut self) {
        self.watch_later = self.store.load();
    }

    /// No-op when a movie with the same id is already present.
    pub fn add_to_watch_later(&mut self, movie: Movie) {
        if self.is_in_watch_later(&movie) {
            return;
        }
        self.watch_later.push(movie);
        self.persist_watch_later();
    }

    /// Removes every entry with a matching id and persists unconditionally,
    /// even when nothing was removed.
    pub fn remove_from_watch_later(&mut self, movie: &Movie) {
        self.watch_later.retain(|m| m.id != movie.id);
        self.persist_watch_later();
    }

    pub fn is_in_watch_later(&self, movie: &Movie) -> bool {
        self.watch_later.iter().any(|m| m.id == movie.id)
    }

    fn persist_watch_later(&self) {
        if let Err(e) = self.store.save(&self.watch_later) {
            warn!("failed to persist watch-later list: {e:#}");
        }
    }
}
