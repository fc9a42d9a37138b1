// Prize and relegation zones, resolved from season metadata to concrete
// table positions.

use serde::Serialize;

use crate::rules::{TableEnd, ZoneRule};

#[derive(Debug, Serialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct Zone {
    pub name: String,

    // Both ends inclusive, positions counted from 1.
    pub first_position: usize,
    pub last_position: usize,
}

impl Zone {
    pub fn contains(&self, position: usize) -> bool {
        position >= self.first_position && position <= self.last_position
    }

    // Turn zone rules into position bands for a table of the given size.
    pub fn resolve(rules: &[ZoneRule], team_count: usize) -> Vec<Zone> {
        rules
            .iter()
            .map(|rule| {
                let size = usize::from(rule.size).min(team_count);
                match rule.side {
                    TableEnd::Top => Zone {
                        name: rule.name.clone(),
                        first_position: 1,
                        last_position: size,
                    },
                    TableEnd::Bottom => Zone {
                        name: rule.name.clone(),
                        first_position: team_count - size + 1,
                        last_position: team_count,
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> Vec<Zone> {
        let rules = [
            ZoneRule::build("Champions League", TableEnd::Top, 4),
            ZoneRule::build("Relegation", TableEnd::Bottom, 3),
        ];
        Zone::resolve(&rules, 20)
    }

    #[test]
    fn top_zone_counts_from_first_place() {
        let zones = zones();
        assert_eq!(zones[0].first_position, 1);
        assert_eq!(zones[0].last_position, 4);
        assert!(zones[0].contains(4));
        assert!(!zones[0].contains(5));
    }

    #[test]
    fn bottom_zone_counts_from_last_place() {
        let zones = zones();
        assert_eq!(zones[1].first_position, 18);
        assert_eq!(zones[1].last_position, 20);
        assert!(!zones[1].contains(17));
        assert!(zones[1].contains(20));
    }

    #[test]
    fn oversized_zone_is_clamped_to_the_table() {
        let rules = [ZoneRule::build("Promotion", TableEnd::Top, 10)];
        let zones = Zone::resolve(&rules, 4);
        assert_eq!(zones[0].last_position, 4);
    }
}
