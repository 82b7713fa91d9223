//! UniFFI bindings for cross-platform hosts (iOS, Android).
//!
//! The controller is wrapped in a `Mutex` so it can be shared across the FFI
//! boundary; all calls still run one at a time. Step trees are flattened
//! into outline lines because hosts render them as indented rows.

use crate::config::{AppConfig, ConfigError};
use crate::controller::{AppError, RecipeApp, RecipeCard, Section};
use crate::favorites::{FileStore, KeyValueStore, MemoryStore, StorageError};
use crate::pipeline::{Filter, SortKey};
use crate::render::StepLine;
use crate::store::{RecipeStore, StoreError};
use camino::Utf8Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeCardsError {
    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },
}

impl From<StoreError> for RecipeCardsError {
    fn from(e: StoreError) -> Self {
        RecipeCardsError::CatalogError {
            message: e.to_string(),
        }
    }
}

impl From<StorageError> for RecipeCardsError {
    fn from(e: StorageError) -> Self {
        RecipeCardsError::StorageError {
            message: e.to_string(),
        }
    }
}

impl From<ConfigError> for RecipeCardsError {
    fn from(e: ConfigError) -> Self {
        RecipeCardsError::ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<AppError> for RecipeCardsError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::StoreError(e) => e.into(),
            AppError::StorageError(e) => e.into(),
        }
    }
}

/// A collapsible card section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiSection {
    Ingredients,
    Steps,
}

impl From<FfiSection> for Section {
    fn from(s: FfiSection) -> Self {
        match s {
            FfiSection::Ingredients => Section::Ingredients,
            FfiSection::Steps => Section::Steps,
        }
    }
}

/// One rendered step, flattened in outline order.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiStepLine {
    /// Nesting level (0 for top-level steps)
    pub depth: u32,
    /// Outline number such as "2.1"
    pub label: String,
    pub text: String,
}

impl From<StepLine> for FfiStepLine {
    fn from(line: StepLine) -> Self {
        FfiStepLine {
            depth: line.depth as u32,
            label: line.label(),
            text: line.text,
        }
    }
}

/// FFI-safe representation of a recipe card.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiRecipeCard {
    pub id: u32,
    pub title: String,
    /// Minutes
    pub time: u32,
    /// "easy", "medium" or "hard"
    pub difficulty: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<FfiStepLine>,
    pub favorite: bool,
    pub ingredients_visible: bool,
    pub steps_visible: bool,
    /// Label for the ingredients toggle button
    pub ingredients_label: String,
    /// Label for the steps toggle button
    pub steps_label: String,
}

impl From<RecipeCard> for FfiRecipeCard {
    fn from(card: RecipeCard) -> Self {
        FfiRecipeCard {
            ingredients_label: card.toggle_label(Section::Ingredients),
            steps_label: card.toggle_label(Section::Steps),
            id: card.id,
            title: card.title,
            time: card.time,
            difficulty: card.difficulty.to_string(),
            description: card.description,
            ingredients: card.ingredients,
            steps: card.steps.flatten().into_iter().map(Into::into).collect(),
            favorite: card.favorite,
            ingredients_visible: card.ingredients_visible,
            steps_visible: card.steps_visible,
        }
    }
}

/// FFI-safe handle to the recipe controller.
#[derive(uniffi::Object)]
pub struct FfiRecipeApp {
    inner: Mutex<RecipeApp>,
}

impl FfiRecipeApp {
    fn new(app: RecipeApp) -> Self {
        FfiRecipeApp {
            inner: Mutex::new(app),
        }
    }

    fn app(&self) -> MutexGuard<'_, RecipeApp> {
        // A panic mid-call leaves no partial state worth discarding
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl FfiRecipeApp {
    /// Sets the category filter ("all", "quick", "favorites", "easy",
    /// "medium", "hard"). Unknown values show all recipes.
    pub fn set_filter(&self, filter: String) {
        self.app().set_filter(Filter::parse(&filter));
    }

    /// Sets the ordering ("none", "name", "time"). Unknown values keep
    /// catalog order.
    pub fn set_sort(&self, sort: String) {
        self.app().set_sort(SortKey::parse(&sort));
    }

    /// Schedules a search query; call `tick` after `millis_until_tick`.
    pub fn set_search_query(&self, query: String) {
        self.app().set_search_query(query, Instant::now());
    }

    /// Commits a due search query. Returns true if the cards changed.
    pub fn tick(&self) -> bool {
        self.app().tick(Instant::now())
    }

    /// Commits the pending search query immediately.
    pub fn flush_search(&self) -> bool {
        self.app().flush_search()
    }

    /// Milliseconds until a pending query is due, if one is waiting.
    pub fn millis_until_tick(&self) -> Option<u64> {
        self.app()
            .next_deadline()
            .map(|due| due.saturating_duration_since(Instant::now()).as_millis() as u64)
    }

    /// Toggles a favorite and returns the new membership.
    pub fn toggle_favorite(&self, id: u32) -> bool {
        self.app().toggle_favorite(id)
    }

    /// Toggles a card section and returns whether it is now visible.
    pub fn toggle_section(&self, id: u32, section: FfiSection) -> bool {
        self.app().toggle_section(id, section.into())
    }

    /// Cards to display, in display order.
    pub fn cards(&self) -> Vec<FfiRecipeCard> {
        self.app().cards().into_iter().map(Into::into).collect()
    }

    /// Ids of the cards to display, in display order.
    pub fn visible_ids(&self) -> Vec<u32> {
        self.app().visible_ids().to_vec()
    }

    /// Favorite ids in the order they were added.
    pub fn favorite_ids(&self) -> Vec<u32> {
        self.app().favorites().ids().to_vec()
    }

    /// Current filter, sort and committed query.
    pub fn current_filter(&self) -> String {
        self.app().state().filter.to_string()
    }

    pub fn current_sort(&self) -> String {
        self.app().state().sort.to_string()
    }

    pub fn current_query(&self) -> String {
        self.app().state().query.clone()
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Creates an app over the built-in sample catalog with in-memory storage.
#[uniffi::export]
pub fn sample_app() -> Arc<FfiRecipeApp> {
    let app = RecipeApp::new(RecipeStore::sample(), Box::new(MemoryStore::new()));
    Arc::new(FfiRecipeApp::new(app))
}

/// Creates an app from a catalog file or directory.
///
/// # Arguments
/// * `catalog_path` - YAML/JSON catalog file, or a directory of them
/// * `storage_path` - JSON file for favorites; in-memory if `None`
#[uniffi::export]
pub fn app_from_catalog(
    catalog_path: String,
    storage_path: Option<String>,
) -> Result<Arc<FfiRecipeApp>, RecipeCardsError> {
    let store = RecipeStore::load(Utf8Path::new(&catalog_path))?;
    let storage: Box<dyn KeyValueStore> = match storage_path {
        Some(path) => Box::new(FileStore::open(Utf8Path::new(&path))?),
        None => Box::new(MemoryStore::new()),
    };
    Ok(Arc::new(FfiRecipeApp::new(RecipeApp::new(store, storage))))
}

/// Creates an app from a YAML config file.
#[uniffi::export]
pub fn app_from_config(config_path: String) -> Result<Arc<FfiRecipeApp>, RecipeCardsError> {
    let config = AppConfig::from_path(Utf8Path::new(&config_path))?;
    let app = RecipeApp::from_config(&config)?;
    Ok(Arc::new(FfiRecipeApp::new(app)))
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
