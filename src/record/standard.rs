// The full-season record of one team: a tally, sequences and key results
// per venue, the home attendance figures, and where the team has sat in
// the table after each match day.

use serde::Serialize;

use crate::{
    error::StatsError,
    match_result::MatchResult,
    record::{sequences::Sequences, venue_of, Tally, TeamRecord},
    rules::ScoringRules,
    types::{Attendance, GameCount, Points, TeamName, Venue},
};

// Biggest win, biggest defeat and latest result of one venue bucket.
#[derive(Debug, Serialize)]
#[derive(Default, Clone, PartialEq)]
pub struct KeyResults {
    pub biggest_win: Option<MatchResult>,
    pub biggest_defeat: Option<MatchResult>,
    pub latest: Option<MatchResult>,
}

impl KeyResults {
    fn add_game(&mut self, team: &TeamName, result: &MatchResult) {
        if result.is_win(team) && Self::outranks(&self.biggest_win, result) {
            self.biggest_win = Some(result.clone());
        }
        if result.is_defeat(team) && Self::outranks(&self.biggest_defeat, result) {
            self.biggest_defeat = Some(result.clone());
        }
        self.latest = Some(result.clone());
    }

    // Equal margins go to the higher-scoring game.
    fn outranks(held: &Option<MatchResult>, candidate: &MatchResult) -> bool {
        match held {
            None => true,
            Some(held) => {
                candidate.margin_of_victory() > held.margin_of_victory()
                    || (candidate.margin_of_victory() == held.margin_of_victory()
                        && candidate.match_aggregate() > held.match_aggregate())
            }
        }
    }
}

// One venue bucket: home, away, or everything combined.
#[derive(Debug, Serialize)]
#[derive(Default, Clone, PartialEq)]
pub struct VenueRecord {
    pub tally: Tally,
    pub sequences: Sequences,
    pub key_results: KeyResults,
}

impl VenueRecord {
    fn add_game(&mut self, team: &TeamName, result: &MatchResult) {
        let scored = result.goals_for(team);
        let conceded = result.goals_against(team);

        self.tally.add_game(scored, conceded);
        self.sequences
            .add_game(result.is_win(team), result.is_draw(), scored, conceded);
        self.key_results.add_game(team, result);
    }
}

// Home crowd statistics. Only known figures count.
#[derive(Debug, Serialize)]
#[derive(Default, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub aggregate: u64,
    pub counted: GameCount,
    pub highest: Option<MatchResult>,
    pub lowest: Option<MatchResult>,
}

// Basics.
impl AttendanceRecord {
    pub fn average(&self) -> f64 {
        if self.counted == 0 {
            return 0.0;
        }
        (self.aggregate as f64) / f64::from(self.counted)
    }

    pub fn highest_crowd(&self) -> Option<Attendance> {
        self.highest.as_ref().and_then(|result| result.attendance)
    }

    pub fn lowest_crowd(&self) -> Option<Attendance> {
        self.lowest.as_ref().and_then(|result| result.attendance)
    }
}

// Functional.
impl AttendanceRecord {
    fn add_game(&mut self, result: &MatchResult) {
        let Some(crowd) = result.attendance else {
            return;
        };

        self.aggregate += u64::from(crowd);
        self.counted += 1;

        if self.highest_crowd().map_or(true, |held| crowd > held) {
            self.highest = Some(result.clone());
        }
        if self.lowest_crowd().map_or(true, |held| crowd < held) {
            self.lowest = Some(result.clone());
        }
    }
}

#[derive(Debug, Serialize)]
#[derive(Clone, PartialEq)]
pub struct StandardRecord {
    team: TeamName,
    pub home: VenueRecord,
    pub away: VenueRecord,
    pub overall: VenueRecord,

    // Administrative correction; counts toward overall points only.
    pub adjustment: Points,

    pub attendance: AttendanceRecord,
    positions: Vec<usize>,
}

// Basics.
impl StandardRecord {
    pub fn build(team: &str) -> Self {
        Self {
            team: team.to_string(),
            home: VenueRecord::default(),
            away: VenueRecord::default(),
            overall: VenueRecord::default(),
            adjustment: 0,
            attendance: AttendanceRecord::default(),
            positions: Vec::new(),
        }
    }

    pub fn venue_record(&self, venue: Venue) -> &VenueRecord {
        match venue {
            Venue::Home => &self.home,
            Venue::Away => &self.away,
            Venue::Overall => &self.overall,
        }
    }

    pub fn sequences(&self, venue: Venue) -> &Sequences {
        &self.venue_record(venue).sequences
    }

    pub fn key_results(&self, venue: Venue) -> &KeyResults {
        &self.venue_record(venue).key_results
    }

    // Table position after each completed match day, earliest first.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

// Functional.
impl StandardRecord {
    pub fn adjust_points(&mut self, amount: Points) {
        self.adjustment += amount;
    }

    pub(crate) fn push_position(&mut self, position: usize) {
        self.positions.push(position);
    }
}

impl TeamRecord for StandardRecord {
    fn team_name(&self) -> &str {
        &self.team
    }

    fn add_result(&mut self, result: &MatchResult) -> Result<(), StatsError> {
        let venue = venue_of(&self.team, result)?;

        if venue == Venue::Home {
            self.home.add_game(&self.team, result);
            self.attendance.add_game(result);
        } else {
            self.away.add_game(&self.team, result);
        }
        self.overall.add_game(&self.team, result);

        Ok(())
    }

    fn tally(&self, venue: Venue) -> Tally {
        self.venue_record(venue).tally
    }

    fn points(&self, venue: Venue, rules: &ScoringRules) -> Points {
        let base = self.tally(venue).points(rules);
        match venue {
            Venue::Overall => base + self.adjustment,
            _ => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::record::sequences::SequenceKind;

    fn rules() -> ScoringRules {
        ScoringRules::default()
    }

    // Two home games and an away game for Athletic.
    fn athletic_record() -> StandardRecord {
        let mut record = StandardRecord::build("Athletic");
        record
            .add_result(&MatchResult::build(
                date!(2025 - 08 - 09),
                "Athletic",
                2,
                "Borough",
                0,
                Some(1500),
            ))
            .unwrap();
        record
            .add_result(&MatchResult::build(
                date!(2025 - 08 - 16),
                "City",
                2,
                "Athletic",
                2,
                Some(4000),
            ))
            .unwrap();
        record
            .add_result(&MatchResult::build(
                date!(2025 - 08 - 23),
                "Athletic",
                4,
                "City",
                2,
                Some(2100),
            ))
            .unwrap();
        return record;
    }

    #[test]
    fn venue_buckets_are_independent() {
        let record = athletic_record();

        assert_eq!(record.tally(Venue::Home).played, 2);
        assert_eq!(record.tally(Venue::Away).played, 1);
        assert_eq!(record.tally(Venue::Overall).played, 3);
        assert_eq!(record.points(Venue::Home, &rules()), 6);
        assert_eq!(record.points(Venue::Away, &rules()), 1);
        assert_eq!(record.points(Venue::Overall, &rules()), 7);
    }

    #[test]
    fn derived_values_follow_the_identities() {
        let record = athletic_record();
        let rules = rules();

        for venue in [Venue::Home, Venue::Away, Venue::Overall] {
            let tally = record.tally(venue);
            assert_eq!(tally.won + tally.drawn + tally.lost, tally.played);
            assert_eq!(
                record.dropped_points(venue, &rules) + record.points(venue, &rules),
                i32::from(tally.played) * rules.points_for_win
            );
        }
    }

    #[test]
    fn adjustment_touches_overall_points_only() {
        let mut record = athletic_record();
        record.adjust_points(-10);

        assert_eq!(record.points(Venue::Overall, &rules()), -3);
        assert_eq!(record.points(Venue::Home, &rules()), 6);
        assert_eq!(record.points(Venue::Away, &rules()), 1);
    }

    #[test]
    fn biggest_win_prefers_margin_then_aggregate() {
        let record = athletic_record();

        // 4-2 and 2-0 share the margin; the higher-scoring game wins.
        let biggest = record.key_results(Venue::Overall).biggest_win.as_ref();
        assert_eq!(biggest.map(|r| r.score_line()).as_deref(), Some("Athletic 4-2 City"));

        // Home bucket tracked separately, same outcome here.
        let latest = record.key_results(Venue::Home).latest.as_ref();
        assert_eq!(latest.map(|r| r.date), Some(date!(2025 - 08 - 23)));
    }

    #[test]
    fn attendance_covers_home_fixtures_only() {
        let record = athletic_record();

        assert_eq!(record.attendance.counted, 2);
        assert_eq!(record.attendance.aggregate, 3600);
        assert_eq!(record.attendance.highest_crowd(), Some(2100));
        assert_eq!(record.attendance.lowest_crowd(), Some(1500));
        assert_eq!(record.attendance.average(), 1800.0);
    }

    #[test]
    fn unknown_attendance_is_skipped() {
        let mut record = StandardRecord::build("Athletic");
        record
            .add_result(&MatchResult::build(
                date!(2025 - 08 - 09),
                "Athletic",
                1,
                "Borough",
                0,
                None,
            ))
            .unwrap();

        assert_eq!(record.attendance.counted, 0);
        assert_eq!(record.attendance.highest_crowd(), None);
    }

    #[test]
    fn sequences_split_by_venue() {
        let record = athletic_record();

        assert_eq!(record.sequences(Venue::Home).current(SequenceKind::Wins), 2);
        assert_eq!(record.sequences(Venue::Away).current(SequenceKind::Draws), 1);
        assert_eq!(
            record.sequences(Venue::Overall).current(SequenceKind::Unbeaten),
            3
        );
    }

    #[test]
    fn foreign_result_is_a_contract_violation() {
        let mut record = StandardRecord::build("Athletic");
        let foreign = MatchResult::build(date!(2025 - 08 - 09), "Borough", 1, "City", 1, None);

        let error = record.add_result(&foreign).unwrap_err();
        assert_eq!(
            error,
            StatsError::TeamNotInResult {
                team: "Athletic".to_string(),
                home: "Borough".to_string(),
                away: "City".to_string(),
            }
        );
        assert_eq!(record.tally(Venue::Overall).played, 0);
    }
}
