//! The single owner of transient UI state.
//!
//! [`RecipeApp`] receives host events, updates its [`ViewState`], favorites
//! and card toggles, and recomputes the visible list through the pipeline.
//! Search input is debounced; the host calls [`RecipeApp::tick`] from its
//! event loop to let pending queries through.

use crate::config::AppConfig;
use crate::debounce::{Debouncer, DEFAULT_WINDOW};
use crate::favorites::{
    FavoriteSet, FileStore, KeyValueStore, MemoryStore, StorageError, FAVORITES_KEY,
};
use crate::model::Recipe;
use crate::pipeline::{self, Filter, SortKey, ViewState};
use crate::store::{RecipeStore, StoreError};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;

mod card;

pub use card::{RecipeCard, Section};
use card::SectionToggles;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load catalog: {0}")]
    StoreError(#[from] StoreError),

    #[error("Failed to open storage: {0}")]
    StorageError(#[from] StorageError),
}

/// A discrete intent delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetFilter(String),
    SetSort(String),
    SetSearchQuery(String),
    ToggleFavorite(u32),
    ToggleSection(u32, Section),
}

pub struct RecipeApp {
    store: RecipeStore,
    state: ViewState,
    favorites: FavoriteSet,
    storage: Box<dyn KeyValueStore>,
    favorites_key: String,
    search_input: Debouncer<String>,
    toggles: HashMap<u32, SectionToggles>,
    /// Ids of the recipes to display, in display order
    visible: Vec<u32>,
    recomputes: usize,
}

impl RecipeApp {
    /// Creates an app with the default favorites key and debounce window.
    pub fn new(store: RecipeStore, storage: Box<dyn KeyValueStore>) -> Self {
        Self::with_options(store, storage, FAVORITES_KEY, DEFAULT_WINDOW)
    }

    pub fn with_options(
        store: RecipeStore,
        storage: Box<dyn KeyValueStore>,
        favorites_key: &str,
        debounce: Duration,
    ) -> Self {
        tracing::info!("Recipe app initializing...");
        let favorites = FavoriteSet::load(storage.as_ref(), favorites_key);

        let mut app = RecipeApp {
            store,
            state: ViewState::default(),
            favorites,
            storage,
            favorites_key: favorites_key.to_string(),
            search_input: Debouncer::new(debounce),
            toggles: HashMap::new(),
            visible: Vec::new(),
            recomputes: 0,
        };
        app.recompute();

        tracing::info!(
            "Recipe app ready: {} recipes, {} favorites",
            app.store.len(),
            app.favorites.len()
        );
        app
    }

    /// Builds an app from configuration: loads the catalog (or the built-in
    /// sample) and opens the configured storage (or an in-memory one).
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let store = match &config.catalog {
            Some(path) => RecipeStore::load(path)?,
            None => RecipeStore::sample(),
        };
        let storage: Box<dyn KeyValueStore> = match &config.storage {
            Some(path) => Box::new(FileStore::open(path)?),
            None => Box::new(MemoryStore::new()),
        };
        Ok(Self::with_options(
            store,
            storage,
            &config.favorites_key,
            config.debounce(),
        ))
    }

    /// Applies one host event. Search queries are scheduled relative to `now`.
    pub fn handle(&mut self, event: Event, now: Instant) {
        match event {
            Event::SetFilter(value) => self.set_filter(Filter::parse(&value)),
            Event::SetSort(value) => self.set_sort(SortKey::parse(&value)),
            Event::SetSearchQuery(query) => self.set_search_query(query, now),
            Event::ToggleFavorite(id) => {
                self.toggle_favorite(id);
            }
            Event::ToggleSection(id, section) => {
                self.toggle_section(id, section);
            }
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.state.sort = sort;
        self.recompute();
    }

    /// Schedules `query` to be committed once the input has been quiet for
    /// the debounce window. Replaces any query still waiting.
    pub fn set_search_query(&mut self, query: impl Into<String>, now: Instant) {
        self.search_input.schedule(query.into(), now);
    }

    /// Commits a pending query whose window has elapsed.
    ///
    /// Returns `true` if the visible list was recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search_input.poll(now) {
            Some(query) => {
                self.commit_query(query);
                true
            }
            None => false,
        }
    }

    /// Commits a pending query immediately, e.g. when the user presses enter.
    pub fn flush_search(&mut self) -> bool {
        match self.search_input.flush() {
            Some(query) => {
                self.commit_query(query);
                true
            }
            None => false,
        }
    }

    /// When the host should call [`RecipeApp::tick`] next, if a query is waiting.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search_input.deadline()
    }

    pub fn pending_query(&self) -> Option<&str> {
        self.search_input.pending().map(String::as_str)
    }

    fn commit_query(&mut self, query: String) {
        self.state.query = query;
        self.recompute();
    }

    /// Flips favorite membership of `id`, persists the full set and
    /// recomputes. Returns the new membership.
    ///
    /// A failed write is logged; the in-memory set keeps the new state.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if !self.store.contains(id) {
            tracing::debug!("Toggling favorite for unknown recipe {}", id);
        }
        let favorite = self.favorites.toggle(id);
        if let Err(e) = self.favorites.save(self.storage.as_mut(), &self.favorites_key) {
            tracing::warn!("Failed to persist favorites: {}", e);
        }
        self.recompute();
        favorite
    }

    /// Expands or collapses a section of a card and returns whether it is
    /// now visible. Unknown ids are ignored and report `false`.
    pub fn toggle_section(&mut self, id: u32, section: Section) -> bool {
        if !self.store.contains(id) {
            tracing::debug!("Ignoring {} toggle for unknown recipe {}", section, id);
            return false;
        }
        self.toggles.entry(id).or_default().toggle(section)
    }

    pub fn is_section_visible(&self, id: u32, section: Section) -> bool {
        self.toggles
            .get(&id)
            .is_some_and(|toggles| toggles.is_visible(section))
    }

    fn recompute(&mut self) {
        self.visible = pipeline::apply(&self.store, &self.state, &self.favorites)
            .into_iter()
            .map(Recipe::id)
            .collect();
        self.recomputes += 1;
        tracing::debug!(
            filter = %self.state.filter,
            sort = %self.state.sort,
            query = %self.state.query,
            "Recomputed {} visible recipes",
            self.visible.len()
        );
    }

    /// Recipes to display, in display order.
    pub fn visible(&self) -> Vec<&Recipe> {
        self.visible
            .iter()
            .filter_map(|id| self.store.get(*id))
            .collect()
    }

    pub fn visible_ids(&self) -> &[u32] {
        &self.visible
    }

    /// Cards for the visible recipes, in display order.
    pub fn cards(&self) -> Vec<RecipeCard> {
        self.visible()
            .into_iter()
            .map(|recipe| self.card_for(recipe))
            .collect()
    }

    /// The card for any recipe in the catalog, visible or not.
    pub fn card(&self, id: u32) -> Option<RecipeCard> {
        self.store.get(id).map(|recipe| self.card_for(recipe))
    }

    fn card_for(&self, recipe: &Recipe) -> RecipeCard {
        let toggles = self.toggles.get(&recipe.id()).copied().unwrap_or_default();
        RecipeCard::new(recipe, self.favorites.contains(recipe.id()), toggles)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// How many times the visible list has been computed, including the
    /// initial computation.
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }
}
