mod recipe;
mod step;

pub use recipe::{Difficulty, ParseDifficultyError, Recipe};
pub use step::Step;
