use crate::{error::Result, solver::board::Board};

#[derive(Debug, Clone)]
pub struct ClueDescriptor {
    pub name: String,
    pub description: String,
}

/// A single propagation rule over the whole board.
///
/// Clues are pure narrowing steps: applying one may shrink candidate domains
/// but never grows them, and a clue applied at its own fixed point reports
/// no change. The driver's termination argument rests on both facts.
pub trait Clue: std::fmt::Debug {
    fn descriptor(&self) -> ClueDescriptor;

    /// Applies the rule once, mutating `board` in place. Returns `true` iff
    /// any house's domain changed.
    fn apply(&self, board: &mut Board) -> Result<bool>;
}
