pub mod config;
pub mod controller;
pub mod debounce;
pub mod favorites;
pub mod ffi;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use controller::{AppError, Event, RecipeApp, RecipeCard, Section};
pub use debounce::Debouncer;
pub use favorites::{FavoriteSet, FileStore, KeyValueStore, MemoryStore, StorageError};
pub use model::*;
pub use pipeline::{apply, filter, search, sort, Filter, SortKey, ViewState};
pub use render::{render_steps, StepItem, StepLine, StepList};
pub use store::{RecipeStore, StoreError};

uniffi::setup_scaffolding!();
