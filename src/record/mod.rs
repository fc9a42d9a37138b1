// Accumulated statistics for one team. Two variants exist: the full-season
// StandardRecord and the recent-window FormRecord. Both provide the
// TeamRecord capability so the same orderings can sort either table.

pub mod form;
pub mod sequences;
pub mod standard;

use serde::Serialize;

use crate::{
    error::StatsError,
    match_result::MatchResult,
    rules::ScoringRules,
    types::{convert, GameCount, GoalCount, Points, TeamName, Venue},
};

// Win/draw/loss and goal counters for one venue bucket.
#[derive(Debug, Serialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub played: GameCount,
    pub won: GameCount,
    pub drawn: GameCount,
    pub lost: GameCount,
    pub scored: GoalCount,
    pub conceded: GoalCount,
}

impl Tally {
    // Count one game into the bucket.
    pub fn add_game(&mut self, scored: GoalCount, conceded: GoalCount) {
        self.played += 1;
        if scored > conceded {
            self.won += 1;
        } else if scored == conceded {
            self.drawn += 1;
        } else {
            self.lost += 1;
        }

        self.scored += scored;
        self.conceded += conceded;
    }

    pub fn goal_difference(&self) -> i32 {
        let scored: i32 = convert::int(self.scored);
        let conceded: i32 = convert::int(self.conceded);
        return scored - conceded;
    }

    // Points earned by results alone, before any adjustment.
    pub fn points(&self, rules: &ScoringRules) -> Points {
        let won: Points = convert::int(self.won);
        let drawn: Points = convert::int(self.drawn);
        won * rules.points_for_win + drawn * rules.points_for_draw
    }
}

// The capability shared by both record variants.
pub trait TeamRecord {
    fn team_name(&self) -> &str;

    // Results must arrive in the order they were played; sequences and
    // form windows depend on it.
    fn add_result(&mut self, result: &MatchResult) -> Result<(), StatsError>;

    fn tally(&self, venue: Venue) -> Tally;

    // Points for the venue, with whatever corrections the variant applies.
    fn points(&self, venue: Venue, rules: &ScoringRules) -> Points;

    fn goal_difference(&self, venue: Venue) -> i32 {
        self.tally(venue).goal_difference()
    }

    // Points thrown away against a season of nothing but wins.
    fn dropped_points(&self, venue: Venue, rules: &ScoringRules) -> Points {
        let played: Points = convert::int(self.tally(venue).played);
        played * rules.points_for_win - self.points(venue, rules)
    }

    // Display value only: table orderings never compare these floats.
    fn average_points(&self, venue: Venue, rules: &ScoringRules) -> f64 {
        let played = self.tally(venue).played;
        if played == 0 {
            return 0.0;
        }
        f64::from(self.points(venue, rules)) / f64::from(played)
    }
}

// Resolve where the record's team played, or fail the record contract.
pub(crate) fn venue_of(team: &TeamName, result: &MatchResult) -> Result<Venue, StatsError> {
    match result.venue_for(team) {
        Some(venue) => Ok(venue),
        None => Err(StatsError::TeamNotInResult {
            team: team.clone(),
            home: result.home_team.clone(),
            away: result.away_team.clone(),
        }),
    }
}
