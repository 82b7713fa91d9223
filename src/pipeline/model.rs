use crate::model::Difficulty;
use std::fmt;

/// Category filter applied after search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Quick,
    Favorites,
    Difficulty(Difficulty),
}

impl Filter {
    /// Parses a filter value as delivered by the host.
    ///
    /// Matching is exact and case-sensitive. Unrecognized values fall back
    /// to [`Filter::All`].
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Filter::All,
            "quick" => Filter::Quick,
            "favorites" => Filter::Favorites,
            other => match other.parse::<Difficulty>() {
                Ok(difficulty) => Filter::Difficulty(difficulty),
                Err(_) => {
                    tracing::debug!("Unknown filter {:?}, showing all recipes", other);
                    Filter::All
                }
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Quick => "quick",
            Filter::Favorites => "favorites",
            Filter::Difficulty(d) => d.as_str(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied last in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog order
    #[default]
    None,
    Name,
    Time,
}

impl SortKey {
    /// Parses a sort value; unrecognized values keep catalog order.
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => SortKey::None,
            "name" => SortKey::Name,
            "time" => SortKey::Time,
            other => {
                tracing::debug!("Unknown sort key {:?}, keeping catalog order", other);
                SortKey::None
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Name => "name",
            SortKey::Time => "time",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient view settings that drive the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: Filter,
    pub sort: SortKey,
    /// Committed search query
    pub query: String,
}
