// Result rows for the front-end: match lists and result rankings.

use serde::Serialize;

use crate::{
    io::date_to_string,
    match_result::MatchResult,
    types::{Attendance, GoalCount, TeamName},
};

#[derive(Debug, Serialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct ResultPackage {
    pub date: String,
    pub home_team: TeamName,
    pub home_goals: GoalCount,
    pub away_team: TeamName,
    pub away_goals: GoalCount,
    pub attendance: Option<Attendance>,
}

impl ResultPackage {
    pub fn build(result: &MatchResult) -> Self {
        Self {
            date: date_to_string(result.date),
            home_team: result.home_team.clone(),
            home_goals: result.home_goals,
            away_team: result.away_team.clone(),
            away_goals: result.away_goals,
            attendance: result.attendance,
        }
    }

    // Package an already ordered result list.
    pub fn build_list(results: &[MatchResult]) -> Vec<ResultPackage> {
        results.iter().map(ResultPackage::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::three_team_season;

    #[test]
    fn rows_format_the_date_and_keep_the_crowd() {
        let season = three_team_season();
        let rows = ResultPackage::build_list(season.results());

        assert_eq!(rows[0].date, "2025-08-09");
        assert_eq!(rows[0].home_team, "Athletic");
        assert_eq!(rows[0].attendance, Some(1000));
        assert_eq!(rows[1].attendance, None);
    }
}
