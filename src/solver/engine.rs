use std::time::Instant;

use tracing::debug;

use crate::{
    error::Result,
    solver::{board::Board, clue::Clue, stats::SolveStats},
};

pub type ClueId = usize;

/// The fixed-point driver.
///
/// Re-executes an ordered clue script, whole passes at a time, until a pass
/// leaves every domain untouched. Propagation is confluent for this puzzle
/// class: script order affects how quickly the fixed point is reached, not
/// which one.
pub struct Solver;

impl Solver {
    /// Creates a new `Solver`.
    pub fn new() -> Self {
        Self
    }

    /// Runs the clue script to its fixed point.
    ///
    /// The returned board is not necessarily solved: an under-constrained
    /// script halts with some domains still holding several candidates, and
    /// callers decide what that means via [`Board::is_solved`]. A
    /// contradictory script fails with the first forced empty domain.
    ///
    /// There is no iteration cap. Domains only shrink and are bounded below
    /// by one candidate, so the number of changing passes is bounded by the
    /// total candidate count.
    pub fn solve(
        &self,
        clues: &[Box<dyn Clue>],
        board: Board,
    ) -> Result<(Board, SolveStats)> {
        let mut board = board;
        let mut stats = SolveStats::default();
        loop {
            let mut changed = false;
            for (clue_id, clue) in clues.iter().enumerate() {
                let started = Instant::now();
                let clue_changed = clue.apply(&mut board)?;
                stats.record(clue_id, clue_changed, started.elapsed().as_micros() as u64);
                changed |= clue_changed;
            }
            stats.passes += 1;
            debug!(
                pass = stats.passes,
                candidates = board.candidate_count(),
                "pass complete"
            );
            if !changed {
                break;
            }
        }
        debug!(
            passes = stats.passes,
            solved = board.is_solved(),
            "fixed point reached"
        );
        Ok((board, stats))
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        attribute::{Color, Nationality},
        clues::{in_house::InHouse, next_to::NextTo},
    };

    fn script() -> Vec<Box<dyn Clue>> {
        vec![
            Box::new(InHouse::new(1, Nationality::Norwegian)),
            Box::new(NextTo::new(Nationality::Norwegian, Color::Blue)),
        ]
    }

    #[test]
    fn runs_until_a_pass_changes_nothing() {
        let solver = Solver::new();
        let (board, stats) = solver.solve(&script(), Board::new()).unwrap();

        assert!(board.house(1).has_definitely(Nationality::Norwegian));
        assert!(board.house(2).has_definitely(Color::Blue));
        // One productive pass, one quiescent pass.
        assert_eq!(stats.passes, 2);
        assert_eq!(stats.applications, 4);
    }

    #[test]
    fn a_fixed_point_is_stable_under_resolving() {
        let solver = Solver::new();
        let (board, _) = solver.solve(&script(), Board::new()).unwrap();
        let (board_again, stats) = solver.solve(&script(), board.clone()).unwrap();

        assert_eq!(board, board_again);
        assert_eq!(stats.passes, 1);
    }

    #[test]
    fn an_empty_script_halts_after_one_pass() {
        let solver = Solver::new();
        let (board, stats) = solver.solve(&[], Board::new()).unwrap();
        assert_eq!(stats.passes, 1);
        assert!(!board.is_solved());
    }

    #[test]
    fn a_contradictory_script_fails() {
        let clues: Vec<Box<dyn Clue>> = vec![
            Box::new(InHouse::new(1, Color::Red)),
            Box::new(InHouse::new(2, Color::Red)),
        ];
        let solver = Solver::new();
        assert!(solver.solve(&clues, Board::new()).is_err());
    }
}
