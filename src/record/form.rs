// The recent-form record: bounded windows over a team's latest results.
// Older results drop out silently as new ones arrive, and points
// adjustments never apply here.

use std::cmp::Ordering;

use crate::{
    error::StatsError,
    match_result::MatchResult,
    record::{venue_of, Tally, TeamRecord},
    rules::ScoringRules,
    top_list::TopList,
    types::{Points, TeamName, Venue},
};

pub const HOME_WINDOW: usize = 4;
pub const AWAY_WINDOW: usize = 4;
pub const OVERALL_WINDOW: usize = 6;

// Window entries carry an arrival number to split results played on the
// same day. The date decides first: a result older than everything in a
// full window never gets in.
type Entry = (u32, MatchResult);

fn compare_recency(a: &Entry, b: &Entry) -> Ordering {
    b.1.date.cmp(&a.1.date).then_with(|| b.0.cmp(&a.0))
}

#[derive(Debug, Clone)]
pub struct FormRecord {
    team: TeamName,
    arrivals: u32,
    home: TopList<Entry>,
    away: TopList<Entry>,
    overall: TopList<Entry>,
}

// Basics.
impl FormRecord {
    pub fn build(team: &str) -> Self {
        Self {
            team: team.to_string(),
            arrivals: 0,
            home: TopList::build(HOME_WINDOW, compare_recency),
            away: TopList::build(AWAY_WINDOW, compare_recency),
            overall: TopList::build(OVERALL_WINDOW, compare_recency),
        }
    }

    fn window(&self, venue: Venue) -> &TopList<Entry> {
        match venue {
            Venue::Home => &self.home,
            Venue::Away => &self.away,
            Venue::Overall => &self.overall,
        }
    }

    // The results currently in the window, newest first.
    pub fn window_results(&self, venue: Venue) -> Vec<&MatchResult> {
        self.window(venue)
            .items()
            .iter()
            .map(|(_, result)| result)
            .collect()
    }
}

// Functional.
impl FormRecord {
    // "WDL" style summary of the window, newest game first.
    pub fn form_string(&self, venue: Venue) -> String {
        self.window(venue)
            .items()
            .iter()
            .map(|(_, result)| {
                if result.is_win(&self.team) {
                    'W'
                } else if result.is_draw() {
                    'D'
                } else {
                    'L'
                }
            })
            .collect()
    }
}

impl TeamRecord for FormRecord {
    fn team_name(&self) -> &str {
        &self.team
    }

    fn add_result(&mut self, result: &MatchResult) -> Result<(), StatsError> {
        let venue = venue_of(&self.team, result)?;

        self.arrivals += 1;
        let entry = (self.arrivals, result.clone());

        if venue == Venue::Home {
            self.home.add(entry.clone());
        } else {
            self.away.add(entry.clone());
        }
        self.overall.add(entry);

        Ok(())
    }

    // Aggregated fresh from whatever the window holds right now.
    fn tally(&self, venue: Venue) -> Tally {
        let mut tally = Tally::default();
        for (_, result) in self.window(venue).items() {
            tally.add_game(
                result.goals_for(&self.team),
                result.goals_against(&self.team),
            );
        }
        return tally;
    }

    fn points(&self, venue: Venue, rules: &ScoringRules) -> Points {
        self.tally(venue).points(rules)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    // Eight straight wins for Athletic, alternating venues, rising scores.
    fn long_run() -> FormRecord {
        let mut record = FormRecord::build("Athletic");
        for round in 0..8u16 {
            let date = date!(2025 - 09 - 01) + time::Duration::weeks(i64::from(round));
            let result = if round % 2 == 0 {
                MatchResult::build(date, "Athletic", round + 1, "Borough", 0, None)
            } else {
                MatchResult::build(date, "Borough", 0, "Athletic", round + 1, None)
            };
            record.add_result(&result).unwrap();
        }
        return record;
    }

    #[test]
    fn windows_stay_bounded() {
        let record = long_run();

        assert_eq!(record.window_results(Venue::Overall).len(), OVERALL_WINDOW);
        assert_eq!(record.window_results(Venue::Home).len(), HOME_WINDOW);
        assert_eq!(record.window_results(Venue::Away).len(), AWAY_WINDOW);
        assert_eq!(record.tally(Venue::Overall).played, 6);
    }

    #[test]
    fn oldest_results_drop_out_first() {
        let record = long_run();

        // Rounds 0 and 1 (1 and 2 goals scored) have been evicted.
        let tally = record.tally(Venue::Overall);
        assert_eq!(tally.scored, 3 + 4 + 5 + 6 + 7 + 8);
        assert_eq!(tally.conceded, 0);
    }

    #[test]
    fn form_string_reads_newest_first() {
        let mut record = FormRecord::build("Athletic");
        let games = [
            ("Athletic", 2, "Borough", 0),
            ("Borough", 1, "Athletic", 1),
            ("Athletic", 0, "Borough", 3),
        ];
        for (i, (home, home_goals, away, away_goals)) in games.iter().enumerate() {
            let date = date!(2025 - 09 - 01) + time::Duration::weeks(i as i64);
            record
                .add_result(&MatchResult::build(date, home, *home_goals, away, *away_goals, None))
                .unwrap();
        }

        assert_eq!(record.form_string(Venue::Overall), "LDW");
        assert_eq!(record.form_string(Venue::Home), "LW");
        assert_eq!(record.form_string(Venue::Away), "D");
    }

    #[test]
    fn window_points_ignore_evicted_games() {
        let record = long_run();
        let rules = ScoringRules::default();

        assert_eq!(record.points(Venue::Overall, &rules), 18);
        assert_eq!(record.points(Venue::Home, &rules), 12);
    }

    #[test]
    fn an_older_result_cannot_enter_a_full_window() {
        let mut record = long_run();
        let stale =
            MatchResult::build(date!(2025 - 08 - 01), "Athletic", 9, "Borough", 0, None);
        record.add_result(&stale).unwrap();

        // The window is already full of newer games; nothing changes.
        let tally = record.tally(Venue::Overall);
        assert_eq!(tally.played, 6);
        assert_eq!(tally.scored, 3 + 4 + 5 + 6 + 7 + 8);
    }

    #[test]
    fn foreign_result_is_rejected() {
        let mut record = FormRecord::build("Athletic");
        let foreign = MatchResult::build(date!(2025 - 09 - 01), "Borough", 1, "City", 0, None);

        assert!(record.add_result(&foreign).is_err());
        assert!(record.window_results(Venue::Overall).is_empty());
    }
}
