use crate::{
    error::Result,
    solver::{
        attribute::Attribute,
        board::Board,
        clue::{Clue, ClueDescriptor},
    },
};

/// Binds two attributes to adjacent houses, in either direction, for clues
/// of the form "the Norwegian lives next to the blue house".
#[derive(Debug, Clone)]
pub struct NextTo {
    a: Attribute,
    b: Attribute,
}

impl NextTo {
    pub fn new(a: impl Into<Attribute>, b: impl Into<Attribute>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Clue for NextTo {
    fn descriptor(&self) -> ClueDescriptor {
        ClueDescriptor {
            name: "NextTo".to_string(),
            description: format!("{:?} next to {:?}", self.a, self.b),
        }
    }

    fn apply(&self, board: &mut Board) -> Result<bool> {
        let mut changed = false;
        for position in 1..=board.houses().len() {
            let neighbours = board.neighbours(position);

            // An end house that definitely holds one value pins the other
            // onto its only neighbour.
            if board.house(position).has_definitely(self.a) && neighbours.len() == 1 {
                changed |= board.assign(neighbours[0], self.b)?;
            }
            if board.house(position).has_definitely(self.b) && neighbours.len() == 1 {
                changed |= board.assign(neighbours[0], self.a)?;
            }

            // A candidate with no viable neighbour cannot stand.
            if board.house(position).has_possibly(self.a)
                && neighbours.iter().all(|n| !board.house(*n).has_possibly(self.b))
            {
                changed |= board.remove(position, self.a);
            }
            if board.house(position).has_possibly(self.b)
                && neighbours.iter().all(|n| !board.house(*n).has_possibly(self.a))
            {
                changed |= board.remove(position, self.b);
            }
        }
        Ok(changed)
    }
}
