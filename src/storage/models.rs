//! Data models for the player pool

use crate::{storage::schema::Column, PlayerId};
use std::fmt;

/// One row of the draft board.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
    pub position: String,
    pub team: Option<String>,
    pub adjusted_points: Option<f64>,
    pub projected_points: Option<f64>,
    pub adp: Option<f64>,
    pub positional_rank: Option<f64>,
    pub overall_rank: Option<f64>,
    pub auction_value: Option<f64>,
    pub adp_trend: Option<String>,
    /// Canonical full name used for substring matching
    pub normalized_name: String,
    /// Canonical last name used for exact surname matching
    pub last_name_token: String,
    pub available: bool,
}

impl Player {
    /// "Name (POS, TEAM)" as shown when a player is removed or restored.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {})",
            self.full_name,
            self.position,
            self.team.as_deref().unwrap_or("-")
        )
    }

    /// Whether this player plays `position` (case-insensitive).
    pub fn plays(&self, position: &str) -> bool {
        self.position.trim().eq_ignore_ascii_case(position.trim())
    }
}

/// Metric the pool is ranked by, chosen once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    AdjustedPoints,
    ProjectedPoints,
}

impl SortKey {
    /// Prefer adjusted points, fall back to projected points.
    pub fn choose(columns: &[Column]) -> Option<Self> {
        if columns.contains(&Column::AdjustedPoints) {
            Some(SortKey::AdjustedPoints)
        } else if columns.contains(&Column::ProjectedPoints) {
            Some(SortKey::ProjectedPoints)
        } else {
            None
        }
    }

    pub fn column(&self) -> Column {
        match self {
            SortKey::AdjustedPoints => Column::AdjustedPoints,
            SortKey::ProjectedPoints => Column::ProjectedPoints,
        }
    }

    pub fn value(&self, player: &Player) -> Option<f64> {
        match self {
            SortKey::AdjustedPoints => player.adjusted_points,
            SortKey::ProjectedPoints => player.projected_points,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column().header())
    }
}
