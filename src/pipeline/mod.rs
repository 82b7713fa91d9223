//! The search → filter → sort pipeline that derives the displayed list.
//!
//! Every stage is a pure function over borrowed recipes: the catalog is never
//! reordered or copied, and each stage returns a fresh vector.

use crate::favorites::FavoriteSet;
use crate::model::Recipe;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

mod model;

pub use model::{Filter, SortKey, ViewState};

/// Recipes strictly shorter than this many minutes count as quick.
pub const QUICK_MAX_MINUTES: u32 = 30;

/// Run search, filter and sort in that order.
pub fn apply<'a, I>(recipes: I, state: &ViewState, favorites: &FavoriteSet) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let found = search(recipes, &state.query);
    let filtered = filter(found, &state.filter, favorites);
    sort(&filtered, state.sort)
}

/// Keep recipes whose title, description or any ingredient contains the
/// query, ignoring case. An empty query keeps everything.
pub fn search<'a, I>(recipes: I, query: &str) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let query = query.to_lowercase();
    if query.is_empty() {
        return recipes.into_iter().collect();
    }

    recipes
        .into_iter()
        .filter(|recipe| matches_query(recipe, &query))
        .collect()
}

/// `query` must already be lowercase
fn matches_query(recipe: &Recipe, query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);

    contains(&recipe.title)
        || contains(&recipe.description)
        || recipe.ingredients.iter().any(|i| contains(i))
}

/// Keep recipes matching `criterion`, preserving order.
pub fn filter<'a, I>(recipes: I, criterion: &Filter, favorites: &FavoriteSet) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let recipes = recipes.into_iter();
    match criterion {
        Filter::All => recipes.collect(),
        Filter::Quick => recipes.filter(|r| r.time < QUICK_MAX_MINUTES).collect(),
        Filter::Favorites => recipes.filter(|r| favorites.contains(r.id)).collect(),
        Filter::Difficulty(difficulty) => {
            recipes.filter(|r| r.difficulty == *difficulty).collect()
        }
    }
}

/// Return the recipes reordered by `key`. The sort is stable, so equal keys
/// keep their input order, and the input slice is left untouched.
pub fn sort<'a>(recipes: &[&'a Recipe], key: SortKey) -> Vec<&'a Recipe> {
    let mut sorted = recipes.to_vec();
    match key {
        SortKey::None => {}
        SortKey::Name => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::Time => sorted.sort_by_key(|r| r.time),
    }
    sorted
}

/// Dictionary-style ordering: accents and case are ignored first, then
/// accents break ties, then case. "Éclairs" sorts among the E's.
fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lowercased text with diacritics removed (NFD, combining marks dropped).
fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use crate::RecipeStore;

    fn pair() -> Vec<Recipe> {
        vec![
            Recipe::new(1, "Greek Salad", 15, Difficulty::Easy),
            Recipe::new(2, "Croissants", 180, Difficulty::Hard),
        ]
    }

    fn ids(recipes: &[&Recipe]) -> Vec<u32> {
        recipes.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_quick_filter_example() {
        let recipes = pair();
        let quick = filter(&recipes, &Filter::Quick, &FavoriteSet::new());
        assert_eq!(ids(&quick), vec![1]);
    }

    #[test]
    fn test_name_sort_example() {
        let recipes = pair();
        let all: Vec<&Recipe> = recipes.iter().collect();
        let sorted = sort(&all, SortKey::Name);
        assert_eq!(ids(&sorted), vec![2, 1]);
        // Input untouched
        assert_eq!(ids(&all), vec![1, 2]);
    }

    #[test]
    fn test_quick_threshold_is_exclusive() {
        let recipes = vec![
            Recipe::new(1, "A", 29, Difficulty::Easy),
            Recipe::new(2, "B", 30, Difficulty::Easy),
            Recipe::new(3, "C", 0, Difficulty::Easy),
        ];
        let quick = filter(&recipes, &Filter::Quick, &FavoriteSet::new());
        assert_eq!(ids(&quick), vec![1, 3]);
    }

    #[test]
    fn test_favorites_filter_with_empty_set() {
        let store = RecipeStore::sample();
        let result = filter(&store, &Filter::Favorites, &FavoriteSet::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_favorites_filter_keeps_catalog_order() {
        let store = RecipeStore::sample();
        let favorites: FavoriteSet = [3, 1].into_iter().collect();
        let result = filter(&store, &Filter::Favorites, &favorites);
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_difficulty_filter() {
        let store = RecipeStore::sample();
        let easy = filter(&store, &Filter::Difficulty(Difficulty::Easy), &FavoriteSet::new());
        assert!(!easy.is_empty());
        assert!(easy.iter().all(|r| r.difficulty() == Difficulty::Easy));
    }

    #[test]
    fn test_all_filter_is_identity() {
        let store = RecipeStore::sample();
        let all = filter(&store, &Filter::All, &FavoriteSet::new());
        assert_eq!(all.len(), store.len());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("quick"), Filter::Quick);
        assert_eq!(Filter::parse("favorites"), Filter::Favorites);
        assert_eq!(Filter::parse("hard"), Filter::Difficulty(Difficulty::Hard));
        // Unknown values fall back to showing everything
        assert_eq!(Filter::parse("Hard"), Filter::All);
        assert_eq!(Filter::parse("vegan"), Filter::All);
        assert_eq!(Filter::parse(""), Filter::All);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(SortKey::parse("name"), SortKey::Name);
        assert_eq!(SortKey::parse("time"), SortKey::Time);
        assert_eq!(SortKey::parse("none"), SortKey::None);
        assert_eq!(SortKey::parse("rating"), SortKey::None);
    }

    #[test]
    fn test_time_sort_is_stable() {
        let recipes = vec![
            Recipe::new(1, "A", 20, Difficulty::Easy),
            Recipe::new(2, "B", 10, Difficulty::Easy),
            Recipe::new(3, "C", 20, Difficulty::Easy),
            Recipe::new(4, "D", 10, Difficulty::Easy),
        ];
        let all: Vec<&Recipe> = recipes.iter().collect();
        assert_eq!(ids(&sort(&all, SortKey::Time)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_name_sort_ignores_case_and_is_stable() {
        let recipes = vec![
            Recipe::new(1, "banana bread", 60, Difficulty::Easy),
            Recipe::new(2, "Apple Pie", 90, Difficulty::Medium),
            Recipe::new(3, "Banana Bread", 50, Difficulty::Easy),
            Recipe::new(4, "apple pie", 80, Difficulty::Medium),
            Recipe::new(5, "Apple Pie", 10, Difficulty::Easy),
        ];
        let all: Vec<&Recipe> = recipes.iter().collect();
        // Same title (ids 2 and 5) keeps input order
        assert_eq!(ids(&sort(&all, SortKey::Name)), vec![2, 5, 4, 3, 1]);
    }

    #[test]
    fn test_none_sort_is_identity() {
        let store = RecipeStore::sample();
        let all: Vec<&Recipe> = store.iter().collect();
        assert_eq!(sort(&all, SortKey::None), all);
    }

    #[test]
    fn test_search_matches_ingredient_case_insensitively() {
        let recipes = vec![Recipe::new(1, "Salad", 10, Difficulty::Easy)
            .with_ingredients(["Tomato", "Cucumber"])];
        assert_eq!(ids(&search(&recipes, "tomato")), vec![1]);
    }

    #[test]
    fn test_search_fields() {
        let store = RecipeStore::sample();
        assert_eq!(ids(&search(&store, "SALAD")), vec![1]);
        assert_eq!(ids(&search(&store, "curry")), vec![2]);
        assert_eq!(ids(&search(&store, "butter")), vec![3, 4]);
        assert!(search(&store, "chocolate").is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let store = RecipeStore::sample();
        assert_eq!(search(&store, "").len(), store.len());
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let store = RecipeStore::sample();
        assert_eq!(ids(&search(&store, " salad")), vec![1]);
        assert!(search(&store, "salad ").is_empty());
    }

    #[test]
    fn test_name_sort_ignores_accents() {
        let recipes = vec![
            Recipe::new(1, "Zucchini Fritters", 25, Difficulty::Easy),
            Recipe::new(2, "Éclairs", 120, Difficulty::Hard),
            Recipe::new(3, "Fish Tacos", 30, Difficulty::Medium),
            Recipe::new(4, "eclairs", 90, Difficulty::Hard),
            Recipe::new(5, "Crème Brûlée", 60, Difficulty::Medium),
        ];
        let all: Vec<&Recipe> = recipes.iter().collect();
        let titles: Vec<&str> = sort(&all, SortKey::Name)
            .iter()
            .map(|r| r.title())
            .collect();
        assert_eq!(
            titles,
            vec!["Crème Brûlée", "eclairs", "Éclairs", "Fish Tacos", "Zucchini Fritters"]
        );
    }

    #[test]
    fn test_apply_runs_search_filter_sort() {
        let store = RecipeStore::sample();
        let state = ViewState {
            filter: Filter::Quick,
            sort: SortKey::Name,
            query: "e".to_string(),
        };
        // "e" matches everything; quick leaves Greek Salad and Omelette
        let result = apply(&store, &state, &FavoriteSet::new());
        assert_eq!(ids(&result), vec![1, 4]);

        let state = ViewState {
            filter: Filter::All,
            sort: SortKey::Time,
            query: "tomato".to_string(),
        };
        let result = apply(&store, &state, &FavoriteSet::new());
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn test_apply_empty_result_is_valid() {
        let store = RecipeStore::sample();
        let state = ViewState {
            filter: Filter::Difficulty(Difficulty::Hard),
            sort: SortKey::None,
            query: "salad".to_string(),
        };
        assert!(apply(&store, &state, &FavoriteSet::new()).is_empty());
    }
}
