use super::Step;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How demanding a recipe is to cook.
///
/// Serialized in lowercase (`easy`, `medium`, `hard`), which is also the
/// only spelling accepted by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty: {0}")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// A single catalog entry.
///
/// Recipes are read-only once loaded into a [`crate::RecipeStore`]; the
/// accessors hand out borrowed views only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub(crate) id: u32,
    pub(crate) title: String,
    /// Preparation time in minutes
    pub(crate) time: u32,
    pub(crate) difficulty: Difficulty,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) ingredients: Vec<String>,
    #[serde(default)]
    pub(crate) steps: Vec<Step>,
}

impl Recipe {
    /// Creates a recipe with no description, ingredients or steps.
    pub fn new(id: u32, title: impl Into<String>, time: u32, difficulty: Difficulty) -> Self {
        Recipe {
            id,
            title: title.into(),
            time,
            difficulty,
            description: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Preparation time in minutes.
    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_is_case_sensitive() {
        let err = "Easy".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, ParseDifficultyError("Easy".to_string()));
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_recipe_from_yaml_defaults() {
        let recipe: Recipe = serde_yaml::from_str(indoc! {r#"
            id: 7
            title: Toast
            time: 5
            difficulty: easy
        "#})
        .unwrap();

        assert_eq!(recipe.id(), 7);
        assert_eq!(recipe.title(), "Toast");
        assert_eq!(recipe.difficulty(), Difficulty::Easy);
        assert!(recipe.description().is_empty());
        assert!(recipe.ingredients().is_empty());
        assert!(recipe.steps().is_empty());
    }

    #[test]
    fn test_recipe_rejects_unknown_difficulty() {
        let result: Result<Recipe, _> = serde_yaml::from_str(indoc! {r#"
            id: 7
            title: Toast
            time: 5
            difficulty: trivial
        "#});
        assert!(result.is_err());
    }

    #[test]
    fn test_recipe_builder() {
        let recipe = Recipe::new(1, "Greek Salad", 15, Difficulty::Easy)
            .with_description("Fresh vegetables with feta.")
            .with_ingredients(["Tomato", "Cucumber"])
            .with_steps(vec![Step::leaf("Chop vegetables")]);

        assert_eq!(recipe.ingredients(), ["Tomato", "Cucumber"]);
        assert_eq!(recipe.steps().len(), 1);
        assert_eq!(recipe.description(), "Fresh vegetables with feta.");
    }
}
