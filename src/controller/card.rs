use crate::model::{Difficulty, Recipe};
use crate::render::{render_steps, StepList};
use serde::Serialize;
use std::fmt;

/// A collapsible part of a recipe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Ingredients,
    Steps,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Ingredients => "ingredients",
            Section::Steps => "steps",
        }
    }

    /// Label for the button that toggles this section.
    pub fn label(&self, visible: bool) -> String {
        let verb = if visible { "Hide" } else { "Show" };
        format!("{verb} {self}")
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which sections of one card are expanded. Both start hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct SectionToggles {
    ingredients: bool,
    steps: bool,
}

impl SectionToggles {
    pub(crate) fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::Ingredients => self.ingredients,
            Section::Steps => self.steps,
        }
    }

    pub(crate) fn toggle(&mut self, section: Section) -> bool {
        let flag = match section {
            Section::Ingredients => &mut self.ingredients,
            Section::Steps => &mut self.steps,
        };
        *flag = !*flag;
        *flag
    }
}

/// Everything a host needs to draw one recipe card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCard {
    pub id: u32,
    pub title: String,
    pub time: u32,
    pub difficulty: Difficulty,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: StepList,
    pub favorite: bool,
    pub ingredients_visible: bool,
    pub steps_visible: bool,
}

impl RecipeCard {
    pub(crate) fn new(recipe: &Recipe, favorite: bool, toggles: SectionToggles) -> Self {
        RecipeCard {
            id: recipe.id(),
            title: recipe.title().to_string(),
            time: recipe.time(),
            difficulty: recipe.difficulty(),
            description: recipe.description().to_string(),
            ingredients: recipe.ingredients().to_vec(),
            steps: render_steps(recipe.steps()),
            favorite,
            ingredients_visible: toggles.is_visible(Section::Ingredients),
            steps_visible: toggles.is_visible(Section::Steps),
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::Ingredients => self.ingredients_visible,
            Section::Steps => self.steps_visible,
        }
    }

    /// Current label of the toggle button for `section`.
    pub fn toggle_label(&self, section: Section) -> String {
        section.label(self.is_visible(section))
    }
}
