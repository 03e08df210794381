use crate::{
    error::Result,
    solver::{
        attribute::Attribute,
        board::Board,
        clue::{Clue, ClueDescriptor},
    },
};

/// Binds two attributes from different categories to the same house, for
/// clues of the form "the Englishman lives in the red house".
///
/// A house that definitely holds one of the values is assigned the other; a
/// house that cannot hold one of them loses the other. Both directions are
/// checked independently on every application.
#[derive(Debug, Clone)]
pub struct SameHouse {
    a: Attribute,
    b: Attribute,
}

impl SameHouse {
    pub fn new(a: impl Into<Attribute>, b: impl Into<Attribute>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Clue for SameHouse {
    fn descriptor(&self) -> ClueDescriptor {
        ClueDescriptor {
            name: "SameHouse".to_string(),
            description: format!("{:?} with {:?}", self.a, self.b),
        }
    }

    fn apply(&self, board: &mut Board) -> Result<bool> {
        let mut changed = false;
        for position in 1..=board.houses().len() {
            if board.house(position).has_definitely(self.a) {
                changed |= board.assign(position, self.b)?;
            }
            if board.house(position).has_definitely(self.b) {
                changed |= board.assign(position, self.a)?;
            }
            if !board.house(position).has_possibly(self.a) {
                changed |= board.remove(position, self.b);
            }
            if !board.house(position).has_possibly(self.b) {
                changed |= board.remove(position, self.a);
            }
        }
        Ok(changed)
    }
}
