// Running sequences: counts of consecutive games satisfying a property,
// tracked as the active run and as the longest run of the season.

use serde::Serialize;

use crate::types::{GameCount, GoalCount};

#[derive(Debug, Serialize)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    Wins,
    Draws,
    Defeats,
    Unbeaten,
    NoWin,
    CleanSheets,
    GamesScoredIn,
    NoGoal,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 8] = [
        SequenceKind::Wins,
        SequenceKind::Draws,
        SequenceKind::Defeats,
        SequenceKind::Unbeaten,
        SequenceKind::NoWin,
        SequenceKind::CleanSheets,
        SequenceKind::GamesScoredIn,
        SequenceKind::NoGoal,
    ];
}

#[derive(Debug, Serialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceCounter {
    pub current: GameCount,
    pub best: GameCount,
}

impl SequenceCounter {
    // A game of the counted kind extends the run; anything else ends it.
    fn update(&mut self, extends: bool) {
        if extends {
            self.current += 1;
            if self.current > self.best {
                self.best = self.current;
            }
        } else {
            self.current = 0;
        }
    }
}

// One counter per sequence kind.
#[derive(Debug, Serialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct Sequences {
    wins: SequenceCounter,
    draws: SequenceCounter,
    defeats: SequenceCounter,
    unbeaten: SequenceCounter,
    no_win: SequenceCounter,
    clean_sheets: SequenceCounter,
    games_scored_in: SequenceCounter,
    no_goal: SequenceCounter,
}

// Basics.
impl Sequences {
    pub fn counter(&self, kind: SequenceKind) -> &SequenceCounter {
        match kind {
            SequenceKind::Wins => &self.wins,
            SequenceKind::Draws => &self.draws,
            SequenceKind::Defeats => &self.defeats,
            SequenceKind::Unbeaten => &self.unbeaten,
            SequenceKind::NoWin => &self.no_win,
            SequenceKind::CleanSheets => &self.clean_sheets,
            SequenceKind::GamesScoredIn => &self.games_scored_in,
            SequenceKind::NoGoal => &self.no_goal,
        }
    }

    pub fn current(&self, kind: SequenceKind) -> GameCount {
        self.counter(kind).current
    }

    pub fn best(&self, kind: SequenceKind) -> GameCount {
        self.counter(kind).best
    }
}

// Functional.
impl Sequences {
    // Feed one game, seen from the counted team's side.
    pub fn add_game(&mut self, won: bool, drawn: bool, scored: GoalCount, conceded: GoalCount) {
        let lost = !won && !drawn;

        self.wins.update(won);
        self.draws.update(drawn);
        self.defeats.update(lost);
        self.unbeaten.update(!lost);
        self.no_win.update(!won);
        self.clean_sheets.update(conceded == 0);
        self.games_scored_in.update(scored > 0);
        self.no_goal.update(scored == 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // win, win, loss
    fn win_win_loss() -> Sequences {
        let mut sequences = Sequences::default();
        sequences.add_game(true, false, 2, 0);
        sequences.add_game(true, false, 1, 0);
        sequences.add_game(false, false, 0, 3);
        return sequences;
    }

    #[test]
    fn a_defeat_ends_the_unbeaten_run_but_keeps_the_best() {
        let sequences = win_win_loss();
        assert_eq!(sequences.current(SequenceKind::Unbeaten), 0);
        assert_eq!(sequences.best(SequenceKind::Unbeaten), 2);
    }

    #[test]
    fn opposite_counters_move_in_step() {
        let sequences = win_win_loss();
        assert_eq!(sequences.current(SequenceKind::Wins), 0);
        assert_eq!(sequences.best(SequenceKind::Wins), 2);
        assert_eq!(sequences.current(SequenceKind::NoWin), 1);
        assert_eq!(sequences.current(SequenceKind::Defeats), 1);
    }

    #[test]
    fn goal_sequences_follow_the_scoreline() {
        let sequences = win_win_loss();
        assert_eq!(sequences.best(SequenceKind::CleanSheets), 2);
        assert_eq!(sequences.current(SequenceKind::CleanSheets), 0);
        assert_eq!(sequences.best(SequenceKind::GamesScoredIn), 2);
        assert_eq!(sequences.current(SequenceKind::NoGoal), 1);
    }

    #[test]
    fn a_draw_counts_for_both_unbeaten_and_no_win() {
        let mut sequences = Sequences::default();
        sequences.add_game(false, true, 1, 1);
        assert_eq!(sequences.current(SequenceKind::Unbeaten), 1);
        assert_eq!(sequences.current(SequenceKind::NoWin), 1);
        assert_eq!(sequences.current(SequenceKind::Draws), 1);
        assert_eq!(sequences.current(SequenceKind::Wins), 0);
    }
}
