// Functions and methods for ordering teams and results within tables.

use std::{cmp::Ordering, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::{
    match_result::MatchResult,
    record::{sequences::SequenceKind, standard::StandardRecord, TeamRecord},
    rules::ScoringRules,
    types::Venue,
};

// What a team table can be ranked by.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Eq, Hash, PartialEq)]
#[derive(Clone, Copy)]
pub enum TableCriteria {
    Points,
    AveragePoints,
    DroppedPoints,
    GoalDifference,
    GoalsScored,
    Wins,
    Name,
}

// Whether a sequence table shows the active run or the season-best run.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SequenceTime {
    Current,
    Season,
}

// Which home crowd figure an attendance table is ranked by.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStat {
    Average,
    Highest,
    Lowest,
    Aggregate,
}

// What whole-result rankings are ordered by.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ResultCriteria {
    MatchAggregate,
    Attendance,
    MarginOfVictory,
}

// Everything the compare functions need besides the two records.
pub struct RankContext<'a> {
    pub venue: Venue,
    pub rules: &'a ScoringRules,
}

type CmpFunc<R> = fn(&R, &R, &RankContext) -> Ordering;

// Compare functions here. Ordering::Less puts the first argument higher
// up the table.

fn compare_points<R: TeamRecord>(a: &R, b: &R, ctx: &RankContext) -> Ordering {
    b.points(ctx.venue, ctx.rules).cmp(&a.points(ctx.venue, ctx.rules))
}

// Points per game. Decided by cross-multiplying, so float rounding can
// never decide a table place; exact ties fall through to the next rule.
fn compare_average_points<R: TeamRecord>(a: &R, b: &R, ctx: &RankContext) -> Ordering {
    let a_points = i64::from(a.points(ctx.venue, ctx.rules));
    let b_points = i64::from(b.points(ctx.venue, ctx.rules));
    let a_played = i64::from(a.tally(ctx.venue).played);
    let b_played = i64::from(b.tally(ctx.venue).played);

    return (b_points * a_played).cmp(&(a_points * b_played));
}

// Fewest thrown-away points first.
fn compare_dropped_points<R: TeamRecord>(a: &R, b: &R, ctx: &RankContext) -> Ordering {
    a.dropped_points(ctx.venue, ctx.rules)
        .cmp(&b.dropped_points(ctx.venue, ctx.rules))
}

fn compare_goal_difference<R: TeamRecord>(a: &R, b: &R, ctx: &RankContext) -> Ordering {
    b.goal_difference(ctx.venue).cmp(&a.goal_difference(ctx.venue))
}

fn compare_goals_scored<R: TeamRecord>(a: &R, b: &R, ctx: &RankContext) -> Ordering {
    b.tally(ctx.venue).scored.cmp(&a.tally(ctx.venue).scored)
}

fn compare_wins<R: TeamRecord>(a: &R, b: &R, ctx: &RankContext) -> Ordering {
    b.tally(ctx.venue).won.cmp(&a.tally(ctx.venue).won)
}

// Case-insensitive, and the final word in every chain: names are unique,
// so no two teams ever compare equal overall.
fn compare_name<R: TeamRecord>(a: &R, b: &R, _ctx: &RankContext) -> Ordering {
    a.team_name()
        .to_lowercase()
        .cmp(&b.team_name().to_lowercase())
        .then_with(|| a.team_name().cmp(b.team_name()))
}

// Get the available sort functions.
fn get_sort_functions<R: TeamRecord>() -> HashMap<TableCriteria, CmpFunc<R>> {
    let mut functions: HashMap<TableCriteria, CmpFunc<R>> = HashMap::new();
    functions.insert(TableCriteria::Points, compare_points);
    functions.insert(TableCriteria::AveragePoints, compare_average_points);
    functions.insert(TableCriteria::DroppedPoints, compare_dropped_points);
    functions.insert(TableCriteria::GoalDifference, compare_goal_difference);
    functions.insert(TableCriteria::GoalsScored, compare_goals_scored);
    functions.insert(TableCriteria::Wins, compare_wins);
    functions.insert(TableCriteria::Name, compare_name);
    return functions;
}

// The tie-break tail every points table falls through to.
const TIE_BREAKERS: [TableCriteria; 4] = [
    TableCriteria::GoalDifference,
    TableCriteria::GoalsScored,
    TableCriteria::Wins,
    TableCriteria::Name,
];

// A primary criterium followed by the common tail.
pub fn table_criteria(primary: TableCriteria) -> Vec<TableCriteria> {
    let mut criteria = vec![primary];
    criteria.extend(TIE_BREAKERS);
    return criteria;
}

// Sort records with a chain of criteria; the first unequal one decides.
pub fn sort_records<R: TeamRecord>(
    records: &mut [R],
    criteria: &[TableCriteria],
    ctx: &RankContext,
) {
    let sort_functions = get_sort_functions::<R>();

    records.sort_by(|a, b| {
        let mut order = Ordering::Equal;
        for criterium in criteria.iter() {
            order = sort_functions[criterium](a, b, ctx);
            if order.is_ne() {
                break;
            }
        }
        order
    });
}

// Sequence tables rank one run length, ties broken by name alone.
pub fn sort_by_sequence(
    records: &mut [StandardRecord],
    venue: Venue,
    when: SequenceTime,
    kind: SequenceKind,
) {
    records.sort_by(|a, b| {
        let a_run = sequence_value(a, venue, when, kind);
        let b_run = sequence_value(b, venue, when, kind);

        b_run
            .cmp(&a_run)
            .then_with(|| compare_names(a.team_name(), b.team_name()))
    });
}

fn sequence_value(
    record: &StandardRecord,
    venue: Venue,
    when: SequenceTime,
    kind: SequenceKind,
) -> u16 {
    match when {
        SequenceTime::Current => record.sequences(venue).current(kind),
        SequenceTime::Season => record.sequences(venue).best(kind),
    }
}

// Attendance tables rank one crowd figure, ties broken by name alone.
// Averages compare exactly, the same way average points do.
pub fn sort_by_attendance(records: &mut [StandardRecord], stat: AttendanceStat) {
    records.sort_by(|a, b| {
        let order = match stat {
            AttendanceStat::Average => {
                let a_value = u128::from(a.attendance.aggregate) * u128::from(b.attendance.counted);
                let b_value = u128::from(b.attendance.aggregate) * u128::from(a.attendance.counted);
                b_value.cmp(&a_value)
            }
            AttendanceStat::Highest => b
                .attendance
                .highest_crowd()
                .unwrap_or(0)
                .cmp(&a.attendance.highest_crowd().unwrap_or(0)),
            AttendanceStat::Lowest => b
                .attendance
                .lowest_crowd()
                .unwrap_or(0)
                .cmp(&a.attendance.lowest_crowd().unwrap_or(0)),
            AttendanceStat::Aggregate => b.attendance.aggregate.cmp(&a.attendance.aggregate),
        };

        order.then_with(|| compare_names(a.team_name(), b.team_name()))
    });
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// Result compare functions: primary figure first, then the shared
// earlier-date / home-name tail.

type ResultCmpFunc = fn(&MatchResult, &MatchResult) -> Ordering;

fn compare_result_tail(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| compare_names(&a.home_team, &b.home_team))
}

fn compare_by_aggregate(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.match_aggregate()
        .cmp(&a.match_aggregate())
        .then_with(|| compare_result_tail(a, b))
}

fn compare_by_attendance(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.attendance
        .unwrap_or(0)
        .cmp(&a.attendance.unwrap_or(0))
        .then_with(|| compare_result_tail(a, b))
}

// Margin ties prefer the higher-scoring game, like the key-result slots.
fn compare_by_margin(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.margin_of_victory()
        .cmp(&a.margin_of_victory())
        .then_with(|| b.match_aggregate().cmp(&a.match_aggregate()))
        .then_with(|| compare_result_tail(a, b))
}

// Smallest crowds first, for the bottom end of the attendance list.
pub(crate) fn compare_by_attendance_ascending(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.attendance
        .unwrap_or(0)
        .cmp(&b.attendance.unwrap_or(0))
        .then_with(|| compare_result_tail(a, b))
}

pub fn result_sort_function(criteria: &ResultCriteria) -> ResultCmpFunc {
    match criteria {
        ResultCriteria::MatchAggregate => compare_by_aggregate,
        ResultCriteria::Attendance => compare_by_attendance,
        ResultCriteria::MarginOfVictory => compare_by_margin,
    }
}
