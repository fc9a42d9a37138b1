// A single played match. Results are immutable facts; every statistic in
// the season is derived from them.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::types::{Attendance, GoalCount, TeamName, Venue};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub date: Date,
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub home_goals: GoalCount,
    pub away_goals: GoalCount,

    // None when the source did not record a crowd figure.
    pub attendance: Option<Attendance>,
}

// Basics.
impl MatchResult {
    pub fn build(
        date: Date,
        home_team: &str,
        home_goals: GoalCount,
        away_team: &str,
        away_goals: GoalCount,
        attendance: Option<Attendance>,
    ) -> Self {
        Self {
            date: date,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_goals: home_goals,
            away_goals: away_goals,
            attendance: attendance,
        }
    }

    pub fn score_line(&self) -> String {
        format!(
            "{} {}-{} {}",
            self.home_team, self.home_goals, self.away_goals, self.away_team
        )
    }
}

// Functional.
impl MatchResult {
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    // Where the given team played, if it took part at all.
    pub fn venue_for(&self, team: &str) -> Option<Venue> {
        if self.home_team == team {
            Some(Venue::Home)
        } else if self.away_team == team {
            Some(Venue::Away)
        } else {
            None
        }
    }

    pub fn is_draw(&self) -> bool {
        self.home_goals == self.away_goals
    }

    pub fn is_win(&self, team: &str) -> bool {
        self.goals_for(team) > self.goals_against(team)
    }

    pub fn is_defeat(&self, team: &str) -> bool {
        self.goals_for(team) < self.goals_against(team)
    }

    pub fn goals_for(&self, team: &str) -> GoalCount {
        if self.home_team == team {
            self.home_goals
        } else if self.away_team == team {
            self.away_goals
        } else {
            0
        }
    }

    pub fn goals_against(&self, team: &str) -> GoalCount {
        if self.home_team == team {
            self.away_goals
        } else if self.away_team == team {
            self.home_goals
        } else {
            0
        }
    }

    // Both sides' goals added together.
    pub fn match_aggregate(&self) -> GoalCount {
        self.home_goals + self.away_goals
    }

    pub fn margin_of_victory(&self) -> GoalCount {
        self.home_goals.abs_diff(self.away_goals)
    }
}
