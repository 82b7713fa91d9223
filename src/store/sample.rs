use crate::model::{Difficulty, Recipe, Step};

/// Built-in catalog used when no catalog path is configured.
pub(super) fn recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Greek Salad", 15, Difficulty::Easy)
            .with_description("Fresh vegetables with feta.")
            .with_ingredients(["Tomato", "Cucumber", "Feta", "Olives"])
            .with_steps(vec![
                Step::leaf("Chop vegetables"),
                Step::group(
                    "Prepare dressing",
                    vec![
                        Step::leaf("Mix olive oil"),
                        Step::leaf("Add lemon"),
                        Step::leaf("Season"),
                    ],
                ),
                Step::leaf("Combine and serve"),
            ]),
        Recipe::new(2, "Chicken Tikka Masala", 45, Difficulty::Medium)
            .with_description("Creamy spiced curry.")
            .with_ingredients(["Chicken", "Tomato", "Cream", "Spices"])
            .with_steps(vec![
                Step::leaf("Marinate chicken"),
                Step::group(
                    "Make sauce",
                    vec![
                        Step::leaf("Heat pan"),
                        Step::leaf("Add spices"),
                        Step::group(
                            "Simmer",
                            vec![Step::leaf("Lower heat"), Step::leaf("Stir occasionally")],
                        ),
                    ],
                ),
                Step::leaf("Combine chicken and sauce"),
            ]),
        Recipe::new(3, "Croissants", 180, Difficulty::Hard)
            .with_description("Flaky laminated pastry.")
            .with_ingredients(["Flour", "Butter", "Yeast", "Milk"])
            .with_steps(vec![
                Step::leaf("Make the dough"),
                Step::group(
                    "Laminate",
                    vec![
                        Step::leaf("Roll out dough"),
                        Step::group(
                            "Fold in butter",
                            vec![Step::leaf("Letter fold"), Step::leaf("Chill 30 minutes")],
                        ),
                        Step::leaf("Repeat three times"),
                    ],
                ),
                Step::leaf("Shape and bake"),
            ]),
        Recipe::new(4, "Omelette", 10, Difficulty::Easy)
            .with_description("Quick breakfast with cheese.")
            .with_ingredients(["Eggs", "Cheese", "Butter"])
            .with_steps(vec![
                Step::leaf("Whisk eggs"),
                Step::leaf("Cook in butter"),
                Step::leaf("Fold over cheese"),
            ]),
    ]
}
