// Season-wide rules: how results translate to points, and which table
// positions belong to a named zone.

use serde::{Deserialize, Serialize};

use crate::types::Points;

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub points_for_win: Points,
    pub points_for_draw: Points,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points_for_win: 3,
            points_for_draw: 1,
        }
    }
}

// Whether a zone is counted from the top or the bottom of the table.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TableEnd {
    Top,
    Bottom,
}

// A zone given as season metadata, e.g. "Relegation" / Bottom / 3.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct ZoneRule {
    pub name: String,
    pub side: TableEnd,
    pub size: u8,
}

impl ZoneRule {
    pub fn build(name: &str, side: TableEnd, size: u8) -> Self {
        Self {
            name: name.to_string(),
            side: side,
            size: size,
        }
    }
}
