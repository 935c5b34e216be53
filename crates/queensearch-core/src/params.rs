//! Run parameters.
//!
//! Each parameter is a closed set of variants chosen once when a search is
//! configured. All of them parse case-insensitively from their display
//! names, and the strategies also accept the short forms `bfs`, `dfs` and
//! `best`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Order in which the frontier hands out states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchStrategy {
    /// FIFO frontier: explores level by level.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "bfs"))]
    BreadthFirst,

    /// LIFO frontier: explores deepest states first.
    #[cfg_attr(feature = "serde", serde(alias = "dfs"))]
    DepthFirst,

    /// Min-priority frontier keyed by a heuristic score.
    #[cfg_attr(feature = "serde", serde(alias = "best"))]
    BestFirst,
}

impl SearchStrategy {
    /// Returns true if the strategy needs a heuristic.
    pub fn requires_heuristic(&self) -> bool {
        matches!(self, SearchStrategy::BestFirst)
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::BreadthFirst => write!(f, "BreadthFirst"),
            SearchStrategy::DepthFirst => write!(f, "DepthFirst"),
            SearchStrategy::BestFirst => write!(f, "BestFirst"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "bfs" | "breadthfirst" => Ok(SearchStrategy::BreadthFirst),
            "dfs" | "depthfirst" => Ok(SearchStrategy::DepthFirst),
            "best" | "bestfirst" => Ok(SearchStrategy::BestFirst),
            _ => Err(SearchError::invalid(format!("unknown search strategy '{}'", s))),
        }
    }
}

/// How aggressively conflicting states are discarded.
///
/// | Level   | When a child is generated        | When a state is popped     |
/// |---------|----------------------------------|----------------------------|
/// | None    | keep everything                  | expand everything          |
/// | Minimal | drop if last queen shares column | expand everything          |
/// | Partial | drop on any conflict             | expand everything          |
/// | Full    | drop on any conflict             | skip conflicted states     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PruningLevel {
    None,
    Minimal,
    Partial,
    #[default]
    Full,
}

impl fmt::Display for PruningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PruningLevel::None => write!(f, "None"),
            PruningLevel::Minimal => write!(f, "Minimal"),
            PruningLevel::Partial => write!(f, "Partial"),
            PruningLevel::Full => write!(f, "Full"),
        }
    }
}

impl FromStr for PruningLevel {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "none" => Ok(PruningLevel::None),
            "minimal" => Ok(PruningLevel::Minimal),
            "partial" => Ok(PruningLevel::Partial),
            "full" => Ok(PruningLevel::Full),
            _ => Err(SearchError::invalid(format!("unknown pruning level '{}'", s))),
        }
    }
}

/// Whether the search stops at the first solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolutionMode {
    /// Stop as soon as one solution is recorded.
    First,

    /// Drain the frontier and record every solution.
    #[default]
    All,
}

impl fmt::Display for SolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionMode::First => write!(f, "First"),
            SolutionMode::All => write!(f, "All"),
        }
    }
}

impl FromStr for SolutionMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "first" => Ok(SolutionMode::First),
            "all" => Ok(SolutionMode::All),
            _ => Err(SearchError::invalid(format!("unknown solution mode '{}'", s))),
        }
    }
}

/// Scoring function used to order a best-first frontier.
///
/// Lower scores are more promising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeuristicKind {
    /// Remaining rows times the summed edge-row weights of placed queens.
    #[default]
    H1,

    /// Attacking pairs so far plus remaining rows.
    H2,
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::H1 => write!(f, "H1"),
            HeuristicKind::H2 => write!(f, "H2"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "h1" => Ok(HeuristicKind::H1),
            "h2" => Ok(HeuristicKind::H2),
            _ => Err(SearchError::invalid(format!("unknown heuristic '{}'", s))),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase()
}
