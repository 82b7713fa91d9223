//! The read-only recipe catalog.
//!
//! A [`RecipeStore`] is built once, either from the built-in sample data or
//! from YAML/JSON catalogs on disk, and never changes afterwards.

use crate::model::Recipe;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;
use thiserror::Error;

mod sample;

/// Errors that can occur when loading a catalog.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML catalog: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),

    #[error("Recipe id must be positive (title: {0})")]
    InvalidId(String),

    #[error("Recipe {0} has an empty title")]
    EmptyTitle(u32),
}

/// Immutable, ordered collection of recipes with unique ids.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    /// id -> position in `recipes`
    index: HashMap<u32, usize>,
}

impl RecipeStore {
    /// Builds a store, checking that every id is positive and unique and
    /// every title is non-empty. Insertion order is kept.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(recipes.len());
        for (pos, recipe) in recipes.iter().enumerate() {
            if recipe.id == 0 {
                return Err(StoreError::InvalidId(recipe.title.clone()));
            }
            if recipe.title.trim().is_empty() {
                return Err(StoreError::EmptyTitle(recipe.id));
            }
            if index.insert(recipe.id, pos).is_some() {
                return Err(StoreError::DuplicateId(recipe.id));
            }
        }
        tracing::debug!("Loaded {} recipes", recipes.len());
        Ok(RecipeStore { recipes, index })
    }

    /// The catalog bundled with the library.
    pub fn sample() -> Self {
        let recipes = sample::recipes();
        let index = recipes.iter().enumerate().map(|(pos, r)| (r.id, pos)).collect();
        RecipeStore { recipes, index }
    }

    /// Parses a YAML sequence of recipes.
    pub fn from_yaml_str(content: &str) -> Result<Self, StoreError> {
        let recipes: Vec<Recipe> = serde_yaml::from_str(content)?;
        Self::from_recipes(recipes)
    }

    /// Parses a JSON array of recipes.
    pub fn from_json_str(content: &str) -> Result<Self, StoreError> {
        let recipes: Vec<Recipe> = serde_json::from_str(content)?;
        Self::from_recipes(recipes)
    }

    /// Loads a single catalog file, choosing the format from its extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn from_path(path: &Utf8Path) -> Result<Self, StoreError> {
        Self::from_recipes(read_catalog_file(path)?)
    }

    /// Loads every catalog file below `base_dir`, in path order.
    ///
    /// Ids must be unique across all files.
    pub fn from_dir(base_dir: &Utf8Path) -> Result<Self, StoreError> {
        let mut paths = Vec::new();
        for ext in CATALOG_EXTENSIONS {
            let pattern = base_dir.join(format!("**/*.{ext}"));
            for entry in glob::glob(pattern.as_str())? {
                let path = entry?;
                let path = Utf8PathBuf::from_path_buf(path)
                    .map_err(|p| StoreError::InvalidPath(p.display().to_string()))?;
                paths.push(path);
            }
        }
        paths.sort();

        let mut recipes = Vec::new();
        for path in &paths {
            recipes.extend(read_catalog_file(path)?);
        }
        Self::from_recipes(recipes)
    }

    /// Loads a catalog from a file or a directory.
    pub fn load(path: &Utf8Path) -> Result<Self, StoreError> {
        if path.is_dir() {
            Self::from_dir(path)
        } else {
            Self::from_path(path)
        }
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.index.get(&id).map(|&pos| &self.recipes[pos])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecipeStore {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

const CATALOG_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

fn read_catalog_file(path: &Utf8Path) -> Result<Vec<Recipe>, StoreError> {
    let content = std::fs::read_to_string(path)?;
    match path.extension() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(StoreError::UnsupportedFormat(path.to_path_buf())),
    }
}
