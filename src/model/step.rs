use serde::{Deserialize, Serialize};

/// One instruction in a recipe's step tree.
///
/// In YAML/JSON a bare string is a [`Step::Leaf`] and a mapping with `text`
/// and `substeps` is a [`Step::Group`]:
///
/// ```
/// # use recipe_cards::Step;
/// let steps: Vec<Step> = serde_json::from_str(
///     r#"["Chop vegetables", {"text": "Prepare dressing", "substeps": ["Mix olive oil"]}]"#,
/// ).unwrap();
/// assert_eq!(steps[1].substeps().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Leaf(String),
    Group {
        text: String,
        #[serde(default)]
        substeps: Vec<Step>,
    },
}

impl Step {
    pub fn leaf(text: impl Into<String>) -> Self {
        Step::Leaf(text.into())
    }

    pub fn group(text: impl Into<String>, substeps: Vec<Step>) -> Self {
        Step::Group {
            text: text.into(),
            substeps,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Step::Leaf(text) | Step::Group { text, .. } => text,
        }
    }

    /// Nested instructions; always empty for a leaf.
    pub fn substeps(&self) -> &[Step] {
        match self {
            Step::Leaf(_) => &[],
            Step::Group { substeps, .. } => substeps,
        }
    }

    /// Number of levels in this subtree, counting the step itself.
    pub fn depth(&self) -> usize {
        1 + self.substeps().iter().map(Step::depth).max().unwrap_or(0)
    }

    /// Number of steps in this subtree, counting the step itself.
    pub fn count(&self) -> usize {
        1 + self.substeps().iter().map(Step::count).sum::<usize>()
    }
}
