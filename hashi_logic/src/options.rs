use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GridError;

///
/// Settings for generating and playing a puzzle.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    /// Number of random walk steps, i.e. the upper bound of islands besides the start.
    pub island_count: usize,
    /// Maximum distance of a click to a bridge for the click to hit it.
    pub line_hit_threshold: f64,
    /// Add random non-crossing bridges on top of the walk before demands are frozen.
    pub seed_extra_bridges: bool,
    /// Fixed seed for reproducible puzzles.
    pub seed: Option<u64>,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            island_count: 20,
            line_hit_threshold: 8.0,
            seed_extra_bridges: true,
            seed: None,
        }
    }
}

impl GridOptions {
    pub fn with_seed(self, seed: u64) -> Self {
        GridOptions {
            seed: Some(seed),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.island_count < 1 {
            return Err(GridError::InvalidIslandCount(self.island_count));
        }
        if !self.line_hit_threshold.is_finite() || self.line_hit_threshold <= 0.0 {
            return Err(GridError::InvalidLineThreshold(self.line_hit_threshold));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub fn options(self) -> GridOptions {
        let (island_count, seed_extra_bridges) = match self {
            Difficulty::Easy => (10, false),
            Difficulty::Medium => (20, true),
            Difficulty::Hard => (35, true),
            Difficulty::Extreme => (60, true),
        };
        GridOptions {
            island_count,
            seed_extra_bridges,
            ..GridOptions::default()
        }
    }
}

impl FromStr for Difficulty {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "extreme" => Ok(Difficulty::Extreme),
            _ => Err(GridError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        })
    }
}
