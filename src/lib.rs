// League statistics computed from one season of match results: standings,
// form, sequences, attendance and key results under venue filters. The
// desktop front-end consumes the query interface through the packages
// module; nothing in here draws widgets or parses results files.

pub mod error;
pub mod io;
pub mod match_result;
pub mod packages;
pub mod record;
pub mod rules;
pub mod season;
pub mod team;
pub mod top_list;
pub mod types;


pub use error::StatsError;
pub use match_result::MatchResult;
pub use record::form::FormRecord;
pub use record::sequences::SequenceKind;
pub use record::standard::StandardRecord;
pub use record::{Tally, TeamRecord};
pub use rules::{ScoringRules, TableEnd, ZoneRule};
pub use season::ranking::{AttendanceStat, ResultCriteria, SequenceTime};
pub use season::LeagueSeason;
pub use team::Team;
pub use top_list::TopList;
pub use types::Venue;
