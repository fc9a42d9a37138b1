// Errors raised during season construction and by record contracts.

use thiserror::Error;

use crate::types::TeamName;

#[derive(Debug, Error)]
#[derive(Clone, PartialEq, Eq)]
pub enum StatsError {
    // Construction errors: the season is not built if one of these comes up.
    #[error("unknown team in result: {0}")]
    UnknownTeam(TeamName),

    #[error("{0} cannot play against itself")]
    SameTeam(TeamName),

    #[error("could not read season input: {0}")]
    Parse(String),

    // Contract violation: a record was fed a result it has no part in.
    #[error("result {home} v {away} does not involve {team}")]
    TeamNotInResult {
        team: TeamName,
        home: TeamName,
        away: TeamName,
    },
}
