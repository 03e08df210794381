use crate::{
    error::Result,
    solver::{
        attribute::Attribute,
        board::Board,
        clue::{Clue, ClueDescriptor},
    },
};

/// Pins an attribute to a known house outright, for clues of the form "in
/// the middle house they drink milk". Harmless to re-apply: once the value
/// is definite, further applications report no change.
#[derive(Debug, Clone)]
pub struct InHouse {
    position: usize,
    attr: Attribute,
}

impl InHouse {
    pub fn new(position: usize, attr: impl Into<Attribute>) -> Self {
        Self {
            position,
            attr: attr.into(),
        }
    }
}

impl Clue for InHouse {
    fn descriptor(&self) -> ClueDescriptor {
        ClueDescriptor {
            name: "InHouse".to_string(),
            description: format!("{:?} in house {}", self.attr, self.position),
        }
    }

    fn apply(&self, board: &mut Board) -> Result<bool> {
        board.assign(self.position, self.attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::attribute::Drink;

    #[test]
    fn pins_the_value_and_reports_no_change_thereafter() {
        let mut board = Board::new();
        let clue = InHouse::new(3, Drink::Milk);

        assert!(clue.apply(&mut board).unwrap());
        assert!(board.house(3).has_definitely(Drink::Milk));
        assert!(!clue.apply(&mut board).unwrap());
    }
}
