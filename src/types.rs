// Custom types that are widely used are defined here.

use serde::{Deserialize, Serialize};

// Team names double as identifiers. Identity is case-sensitive;
// table orderings compare names case-insensitively.
pub type TeamName = String;

pub type GoalCount = u16;
pub type GameCount = u16;

// Points can go negative through administrative adjustments.
pub type Points = i32;

pub type Attendance = u32;

// Which of a team's fixtures an aggregate covers.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Home,
    Away,
    Overall,
}

// Type conversions.
pub mod convert {
    use std::fmt::Display;

    // Convert between integers.
    pub fn int<N1: Display + Copy, N2: TryFrom<N1>>(num: N1) -> N2 {
        match num.try_into() {
            Ok(n) => n,
            Err(_) => panic!("num: {num}"),
        }
    }
}
