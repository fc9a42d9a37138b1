// One league season: every team, every result in the order it was played,
// and the records accumulated from them. Table queries sort fresh from the
// records on every call; nothing is cached.

pub mod ranking;
pub mod zone;

use std::collections::HashMap;

use log::{debug, info};
use time::Date;

use crate::{
    error::StatsError,
    match_result::MatchResult,
    record::{form::FormRecord, sequences::SequenceKind, standard::StandardRecord, TeamRecord},
    rules::{ScoringRules, ZoneRule},
    season::ranking::{
        AttendanceStat, RankContext, ResultCriteria, SequenceTime, TableCriteria,
    },
    season::zone::Zone,
    team::Team,
    top_list::TopList,
    types::{Points, TeamName, Venue},
};

// How many results the attendance leaderboards keep.
pub const ATTENDANCE_LEADERBOARD_SIZE: usize = 20;

#[derive(Debug)]
pub struct LeagueSeason {
    pub name: String,
    rules: ScoringRules,
    zones: Vec<Zone>,
    teams: HashMap<TeamName, Team>,
    results: Vec<MatchResult>,
    records: HashMap<TeamName, StandardRecord>,
    form_records: HashMap<TeamName, FormRecord>,
}

// Basics.
impl LeagueSeason {
    // Build a season by replaying results in the order supplied. Sequence
    // and form outputs depend on that order. Either every result is
    // accepted or the whole construction fails.
    pub fn build(
        name: &str,
        teams: Vec<Team>,
        results: Vec<MatchResult>,
        rules: ScoringRules,
        zone_rules: &[ZoneRule],
    ) -> Result<Self, StatsError> {
        let mut season = Self {
            name: name.to_string(),
            rules: rules,
            zones: Zone::resolve(zone_rules, teams.len()),
            records: teams
                .iter()
                .map(|team| (team.name.clone(), StandardRecord::build(&team.name)))
                .collect(),
            form_records: teams
                .iter()
                .map(|team| (team.name.clone(), FormRecord::build(&team.name)))
                .collect(),
            teams: teams.into_iter().map(|team| (team.name.clone(), team)).collect(),
            results: Vec::with_capacity(results.len()),
        };

        for result in results {
            // A finished match day updates the position history before
            // the next one starts.
            if season.results.last().is_some_and(|last| last.date != result.date) {
                season.record_positions();
            }
            season.apply_result(result)?;
        }
        if !season.results.is_empty() {
            season.record_positions();
        }

        info!(
            "built season {} with {} teams and {} results",
            season.name,
            season.teams.len(),
            season.results.len()
        );
        return Ok(season);
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn record(&self, team: &str) -> Option<&StandardRecord> {
        self.records.get(team)
    }

    pub fn form_record(&self, team: &str) -> Option<&FormRecord> {
        self.form_records.get(team)
    }
}

// Construction internals.
impl LeagueSeason {
    fn apply_result(&mut self, result: MatchResult) -> Result<(), StatsError> {
        if result.home_team == result.away_team {
            return Err(StatsError::SameTeam(result.home_team));
        }
        for team in [&result.home_team, &result.away_team] {
            if !self.records.contains_key(team) {
                return Err(StatsError::UnknownTeam(team.clone()));
            }
        }

        for team in [result.home_team.clone(), result.away_team.clone()] {
            // Presence was checked above; feed both record variants.
            if let Some(record) = self.records.get_mut(&team) {
                record.add_result(&result)?;
            }
            if let Some(form) = self.form_records.get_mut(&team) {
                form.add_result(&result)?;
            }
        }

        self.results.push(result);
        Ok(())
    }

    // Append every team's overall table position after a match day.
    fn record_positions(&mut self) {
        let table = self.standard_table(Venue::Overall);
        for (i, row) in table.iter().enumerate() {
            if let Some(record) = self.records.get_mut(row.team_name()) {
                record.push_position(i + 1);
            }
        }
    }
}

// Table queries.
impl LeagueSeason {
    fn sorted_records(&self, primary: TableCriteria, venue: Venue) -> Vec<StandardRecord> {
        let mut records: Vec<StandardRecord> = self.records.values().cloned().collect();
        let ctx = RankContext {
            venue: venue,
            rules: &self.rules,
        };
        ranking::sort_records(&mut records, &ranking::table_criteria(primary), &ctx);
        return records;
    }

    pub fn standard_table(&self, venue: Venue) -> Vec<StandardRecord> {
        self.sorted_records(TableCriteria::Points, venue)
    }

    pub fn average_table(&self, venue: Venue) -> Vec<StandardRecord> {
        self.sorted_records(TableCriteria::AveragePoints, venue)
    }

    pub fn dropped_points_table(&self, venue: Venue) -> Vec<StandardRecord> {
        self.sorted_records(TableCriteria::DroppedPoints, venue)
    }

    // Form never carries adjustments; its records only know their windows.
    pub fn form_table(&self, venue: Venue) -> Vec<FormRecord> {
        let mut records: Vec<FormRecord> = self.form_records.values().cloned().collect();
        let ctx = RankContext {
            venue: venue,
            rules: &self.rules,
        };
        ranking::sort_records(
            &mut records,
            &ranking::table_criteria(TableCriteria::Points),
            &ctx,
        );
        return records;
    }

    pub fn sequence_table(&self, when: SequenceTime, kind: SequenceKind) -> Vec<StandardRecord> {
        let mut records: Vec<StandardRecord> = self.records.values().cloned().collect();
        ranking::sort_by_sequence(&mut records, Venue::Overall, when, kind);
        return records;
    }

    pub fn attendance_table(&self, stat: AttendanceStat) -> Vec<StandardRecord> {
        let mut records: Vec<StandardRecord> = self.records.values().cloned().collect();
        ranking::sort_by_attendance(&mut records, stat);
        return records;
    }
}

// Result queries.
impl LeagueSeason {
    pub fn result_rankings(&self, criteria: ResultCriteria) -> Vec<MatchResult> {
        let mut results = self.results.clone();
        results.sort_by(ranking::result_sort_function(&criteria));
        return results;
    }

    // The best-attended results of the season, biggest crowd first.
    pub fn top_attendances(&self) -> Vec<MatchResult> {
        self.attendance_leaderboard(ranking::result_sort_function(&ResultCriteria::Attendance))
    }

    // The other end of the list, smallest crowd first.
    pub fn bottom_attendances(&self) -> Vec<MatchResult> {
        self.attendance_leaderboard(ranking::compare_by_attendance_ascending)
    }

    fn attendance_leaderboard(
        &self,
        compare: fn(&MatchResult, &MatchResult) -> std::cmp::Ordering,
    ) -> Vec<MatchResult> {
        let mut leaderboard = TopList::build(ATTENDANCE_LEADERBOARD_SIZE, compare);
        for result in self.results.iter() {
            // Unknown crowds never make either end of the list.
            if result.attendance.is_some() {
                leaderboard.add(result.clone());
            }
        }
        return leaderboard.items().to_vec();
    }

    pub fn results_on_date(&self, date: Date) -> Vec<MatchResult> {
        self.results
            .iter()
            .filter(|result| result.date == date)
            .cloned()
            .collect()
    }

    pub fn results_for_team(&self, team: &str, venue: Venue) -> Vec<MatchResult> {
        self.results
            .iter()
            .filter(|result| match venue {
                Venue::Home => result.home_team == team,
                Venue::Away => result.away_team == team,
                Venue::Overall => result.involves(team),
            })
            .cloned()
            .collect()
    }

    pub fn zone_for_position(&self, position: usize) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.contains(position))
    }
}

// Mutation after construction.
impl LeagueSeason {
    // Administrative points correction. A mutation, so an unknown team is
    // an error rather than an empty answer.
    pub fn adjust_points(&mut self, team: &str, amount: Points) -> Result<(), StatsError> {
        let record = self
            .records
            .get_mut(team)
            .ok_or_else(|| StatsError::UnknownTeam(team.to_string()))?;

        record.adjust_points(amount);
        debug!("adjusted {team} by {amount} points");
        Ok(())
    }
}

// Display.
impl LeagueSeason {
    // Get the standings as a plain text table.
    pub fn display_standings(&self, venue: Venue) -> String {
        let table = self.standard_table(venue);

        let mut s: String = "Pos\tName\tP\tW\tD\tL\tGF\tGA\tGD\tPts".to_string();
        for (i, record) in table.iter().enumerate() {
            let tally = record.tally(venue);
            s += &format!(
                "\n{}.\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                i + 1,
                record.team_name(),
                tally.played,
                tally.won,
                tally.drawn,
                tally.lost,
                tally.scored,
                tally.conceded,
                tally.goal_difference(),
                record.points(venue, &self.rules)
            );
        }

        return s;
    }
}
