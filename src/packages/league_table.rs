// Table rows for the front-end: league tables, form tables, sequence and
// attendance tables.

use ordinal::ToOrdinal;
use serde::Serialize;

use crate::{
    record::{form::FormRecord, sequences::SequenceKind, standard::StandardRecord, TeamRecord},
    rules::ScoringRules,
    season::ranking::SequenceTime,
    types::{convert, Attendance, GameCount, GoalCount, Points, Venue},
};

// One row of a points-based table.
#[derive(Debug, Serialize)]
#[derive(Clone, PartialEq)]
pub struct TeamPackage {
    pub rank: String,
    pub name: String,
    pub played: GameCount,
    pub won: GameCount,
    pub drawn: GameCount,
    pub lost: GameCount,
    pub scored: GoalCount,
    pub conceded: GoalCount,
    pub goal_difference: i32,
    pub points: Points,
    pub average_points: f64,
    pub dropped_points: Points,
}

impl TeamPackage {
    pub fn build<R: TeamRecord>(rank: usize, record: &R, venue: Venue, rules: &ScoringRules) -> Self {
        let tally = record.tally(venue);
        let rank: u8 = convert::int(rank);
        Self {
            rank: rank.to_ordinal_string(),
            name: record.team_name().to_string(),
            played: tally.played,
            won: tally.won,
            drawn: tally.drawn,
            lost: tally.lost,
            scored: tally.scored,
            conceded: tally.conceded,
            goal_difference: tally.goal_difference(),
            points: record.points(venue, rules),
            average_points: record.average_points(venue, rules),
            dropped_points: record.dropped_points(venue, rules),
        }
    }
}

// A whole sorted table, ready to render.
#[derive(Debug, Serialize)]
#[derive(Clone, PartialEq)]
pub struct TablePackage {
    pub name: String,
    pub rows: Vec<TeamPackage>,
}

impl TablePackage {
    pub fn build<R: TeamRecord>(
        name: &str,
        table: &[R],
        venue: Venue,
        rules: &ScoringRules,
    ) -> Self {
        Self {
            name: name.to_string(),
            rows: table
                .iter()
                .enumerate()
                .map(|(i, record)| TeamPackage::build(i + 1, record, venue, rules))
                .collect(),
        }
    }
}

// A form table row carries the letter summary of the window as well.
#[derive(Debug, Serialize)]
#[derive(Clone, PartialEq)]
pub struct FormTeamPackage {
    pub row: TeamPackage,
    pub form: String,
}

impl FormTeamPackage {
    pub fn build(rank: usize, record: &FormRecord, venue: Venue, rules: &ScoringRules) -> Self {
        Self {
            row: TeamPackage::build(rank, record, venue, rules),
            form: record.form_string(venue),
        }
    }

    // Package a sorted form table.
    pub fn build_table(
        table: &[FormRecord],
        venue: Venue,
        rules: &ScoringRules,
    ) -> Vec<FormTeamPackage> {
        table
            .iter()
            .enumerate()
            .map(|(i, record)| Self::build(i + 1, record, venue, rules))
            .collect()
    }
}

// One row of a sequence table.
#[derive(Debug, Serialize)]
#[derive(Clone, PartialEq)]
pub struct SequencePackage {
    pub rank: String,
    pub name: String,
    pub run: GameCount,
}

impl SequencePackage {
    // Package a sorted sequence table for one kind and time.
    pub fn build_table(
        table: &[StandardRecord],
        when: SequenceTime,
        kind: SequenceKind,
    ) -> Vec<SequencePackage> {
        table
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let sequences = record.sequences(Venue::Overall);
                let run = match when {
                    SequenceTime::Current => sequences.current(kind),
                    SequenceTime::Season => sequences.best(kind),
                };
                let rank: u8 = convert::int(i + 1);
                Self {
                    rank: rank.to_ordinal_string(),
                    name: record.team_name().to_string(),
                    run: run,
                }
            })
            .collect()
    }
}

// One row of an attendance table.
#[derive(Debug, Serialize)]
#[derive(Clone, PartialEq)]
pub struct AttendancePackage {
    pub rank: String,
    pub name: String,
    pub average: f64,
    pub highest: Option<Attendance>,
    pub lowest: Option<Attendance>,
    pub aggregate: u64,
}

impl AttendancePackage {
    pub fn build_table(table: &[StandardRecord]) -> Vec<AttendancePackage> {
        table
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let rank: u8 = convert::int(i + 1);
                Self {
                    rank: rank.to_ordinal_string(),
                    name: record.team_name().to_string(),
                    average: record.attendance.average(),
                    highest: record.attendance.highest_crowd(),
                    lowest: record.attendance.lowest_crowd(),
                    aggregate: record.attendance.aggregate,
                }
            })
            .collect()
    }
}
