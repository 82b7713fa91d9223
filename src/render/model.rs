use serde::Serialize;
use std::fmt;

/// An ordered list of rendered steps. Nested lists hang off the item of the
/// group that owns them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StepList {
    pub items: Vec<StepItem>,
}

/// One entry of a [`StepList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepItem {
    pub text: String,
    /// Present for groups, even when the group has no substeps
    pub substeps: Option<StepList>,
}

/// A rendered step flattened for hosts that cannot walk a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepLine {
    /// Nesting level, 0 for top-level steps
    pub depth: usize,
    /// One-based outline position, e.g. `[2, 1]` for "2.1"
    pub number: Vec<usize>,
    pub text: String,
}

impl StepLine {
    /// The outline number joined with dots.
    pub fn label(&self) -> String {
        self.number
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl StepList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Deepest nesting level, 0 for an empty list.
    pub fn depth(&self) -> usize {
        self.items
            .iter()
            .map(|item| 1 + item.substeps.as_ref().map_or(0, StepList::depth))
            .max()
            .unwrap_or(0)
    }

    /// Pre-order walk of the tree.
    pub fn flatten(&self) -> Vec<StepLine> {
        let mut lines = Vec::new();
        collect_lines(self, &mut Vec::new(), &mut lines);
        lines
    }
}

fn collect_lines(list: &StepList, prefix: &mut Vec<usize>, lines: &mut Vec<StepLine>) {
    for (idx, item) in list.items.iter().enumerate() {
        prefix.push(idx + 1);
        lines.push(StepLine {
            depth: prefix.len() - 1,
            number: prefix.clone(),
            text: item.text.clone(),
        });
        if let Some(substeps) = &item.substeps {
            collect_lines(substeps, prefix, lines);
        }
        prefix.pop();
    }
}

/// Indented outline, two spaces per level:
///
/// ```text
/// 1. Chop vegetables
/// 2. Prepare dressing
///   2.1. Mix olive oil
/// ```
impl fmt::Display for StepList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.flatten() {
            writeln!(
                f,
                "{:indent$}{}. {}",
                "",
                line.label(),
                line.text,
                indent = line.depth * 2
            )?;
        }
        Ok(())
    }
}
