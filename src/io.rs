// Input/output logic. The import collaborator parses results files; what
// arrives here is already structured season data. Dates travel in the
// usual year-month-day form.

use serde::{Deserialize, Deserializer, Serialize};
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

use crate::{
    error::StatsError,
    match_result::MatchResult,
    rules::{ScoringRules, ZoneRule},
    season::LeagueSeason,
    team::Team,
    types::{Attendance, GoalCount, TeamName},
};

// Use this format for formatting and parsing dates.
static DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

pub fn date_to_string(date: Date) -> String {
    match date.format(&DATE_FORMAT) {
        Ok(s) => s,
        Err(e) => panic!("{e} - date: {date}"),
    }
}

pub fn string_to_date(s: &str) -> Result<Date, StatsError> {
    Date::parse(s, &DATE_FORMAT).map_err(|e| StatsError::Parse(format!("{s}: {e}")))
}

// One result as the import collaborator hands it over.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct ResultInput {
    pub date: Date,
    pub home_team: TeamName,
    pub home_goals: GoalCount,
    pub away_team: TeamName,
    pub away_goals: GoalCount,

    // Results files mark an unknown crowd with -1.
    #[serde(default, deserialize_with = "attendance_from_sentinel")]
    pub attendance: Option<Attendance>,
}

fn attendance_from_sentinel<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Attendance>, D::Error> {
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.and_then(|crowd| Attendance::try_from(crowd).ok()))
}

// The full season document: teams, metadata, and results in played order.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct SeasonInput {
    pub name: String,

    #[serde(default)]
    pub rules: ScoringRules,

    #[serde(default)]
    pub zones: Vec<ZoneRule>,

    pub teams: Vec<TeamName>,
    pub results: Vec<ResultInput>,
}

impl SeasonInput {
    // Build the season this input describes.
    pub fn into_season(self) -> Result<LeagueSeason, StatsError> {
        let teams: Vec<Team> = self.teams.iter().map(|name| Team::build(name)).collect();
        let results: Vec<MatchResult> = self
            .results
            .into_iter()
            .map(|result| {
                MatchResult::build(
                    result.date,
                    &result.home_team,
                    result.home_goals,
                    &result.away_team,
                    result.away_goals,
                    result.attendance,
                )
            })
            .collect();

        LeagueSeason::build(&self.name, teams, results, self.rules, &self.zones)
    }
}

// Read a season from the JSON document the import collaborator produces.
pub fn season_from_json(json: &str) -> Result<LeagueSeason, StatsError> {
    let input: SeasonInput =
        serde_json::from_str(json).map_err(|e| StatsError::Parse(e.to_string()))?;
    input.into_season()
}
