//! Recursive rendering of recipe step trees.

use crate::model::Step;

mod model;

pub use model::{StepItem, StepLine, StepList};

/// Render a step sequence into a nested [`StepList`].
///
/// Order is preserved at every level. A leaf becomes an item with no nested
/// list; a group becomes an item whose nested list is the rendering of its
/// substeps. An empty sequence renders as an empty list.
pub fn render_steps(steps: &[Step]) -> StepList {
    StepList {
        items: steps.iter().map(render_step).collect(),
    }
}

fn render_step(step: &Step) -> StepItem {
    match step {
        Step::Leaf(text) => StepItem {
            text: text.clone(),
            substeps: None,
        },
        Step::Group { text, substeps } => StepItem {
            text: text.clone(),
            substeps: Some(render_steps(substeps)),
        },
    }
}
