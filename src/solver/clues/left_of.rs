use crate::{
    error::Result,
    solver::{
        attribute::Attribute,
        board::Board,
        clue::{Clue, ClueDescriptor},
    },
};

/// Places the first attribute immediately to the left of the second, for
/// clues of the form "the green house is immediately left of the white
/// house".
#[derive(Debug, Clone)]
pub struct LeftOf {
    a: Attribute,
    b: Attribute,
}

impl LeftOf {
    pub fn new(a: impl Into<Attribute>, b: impl Into<Attribute>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Clue for LeftOf {
    fn descriptor(&self) -> ClueDescriptor {
        ClueDescriptor {
            name: "LeftOf".to_string(),
            description: format!("{:?} immediately left of {:?}", self.a, self.b),
        }
    }

    fn apply(&self, board: &mut Board) -> Result<bool> {
        let count = board.houses().len();
        let mut changed = false;

        // No house precedes the first or follows the last.
        changed |= board.remove(1, self.b);
        changed |= board.remove(count, self.a);

        for position in 2..=count {
            if board.house(position).has_definitely(self.b) {
                changed |= board.assign(position - 1, self.a)?;
            }
            if !board.house(position).has_possibly(self.b) {
                changed |= board.remove(position - 1, self.a);
            }
        }
        for position in 1..count {
            if board.house(position).has_definitely(self.a) {
                changed |= board.assign(position + 1, self.b)?;
            }
            if !board.house(position).has_possibly(self.a) {
                changed |= board.remove(position + 1, self.b);
            }
        }
        Ok(changed)
    }
}
