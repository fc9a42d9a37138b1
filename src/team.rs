// A club taking part in the season. Teams own no statistics themselves;
// those live in the season's records.

use serde::{Deserialize, Serialize};

use crate::types::TeamName;

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct Team {
    pub name: TeamName,
}

impl Team {
    pub fn build(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
