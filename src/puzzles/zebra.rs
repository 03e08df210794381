//! The classic five-house zebra puzzle.
//!
//! Sixteen clues, the first of which ("there are five houses") is the board
//! itself. Propagation alone pins every attribute; the famous questions —
//! who drinks water, who keeps the zebra — resolve to the Norwegian in house
//! 1 and the German in house 4.

use crate::{
    error::Result,
    solver::{
        attribute::{Color, Drink, Nationality, Pet, Smoke},
        board::Board,
        clue::Clue,
        clues::{in_house::InHouse, left_of::LeftOf, next_to::NextTo, same_house::SameHouse},
        engine::Solver,
        stats::SolveStats,
    },
};

/// The full clue script, in the traditional numbering and order.
pub fn clues() -> Vec<Box<dyn Clue>> {
    vec![
        // 9. In the middle house they drink milk.
        Box::new(InHouse::new(3, Drink::Milk)),
        // 10. The Norwegian lives in the first house.
        Box::new(InHouse::new(1, Nationality::Norwegian)),
        // 2. The Englishman lives in the red house.
        Box::new(SameHouse::new(Nationality::English, Color::Red)),
        // 3. The Swede keeps a dog.
        Box::new(SameHouse::new(Nationality::Swede, Pet::Dog)),
        // 4. The Dane drinks tea.
        Box::new(SameHouse::new(Nationality::Dane, Drink::Tea)),
        // 5. The green house is immediately to the left of the white house.
        Box::new(LeftOf::new(Color::Green, Color::White)),
        // 6. They drink coffee in the green house.
        Box::new(SameHouse::new(Drink::Coffee, Color::Green)),
        // 7. The man who smokes Pall Mall keeps birds.
        Box::new(SameHouse::new(Smoke::PallMall, Pet::Bird)),
        // 8. In the yellow house they smoke Dunhill.
        Box::new(SameHouse::new(Color::Yellow, Smoke::Dunhill)),
        // 11. The man who smokes Blend lives next to the house with cats.
        Box::new(NextTo::new(Smoke::Blend, Pet::Cat)),
        // 12. In a house next to the house with a horse, they smoke Dunhill.
        Box::new(NextTo::new(Pet::Horse, Smoke::Dunhill)),
        // 13. The man who smokes Blue Master drinks beer.
        Box::new(SameHouse::new(Smoke::BlueMaster, Drink::Beer)),
        // 14. The German smokes Prince.
        Box::new(SameHouse::new(Nationality::German, Smoke::Prince)),
        // 15. The Norwegian lives next to the blue house.
        Box::new(NextTo::new(Nationality::Norwegian, Color::Blue)),
        // 16. They drink water in a house next to the house where they smoke Blend.
        Box::new(NextTo::new(Drink::Water, Smoke::Blend)),
    ]
}

/// Solves the classic puzzle from a fresh board.
pub fn solve() -> Result<(Board, SolveStats)> {
    Solver::new().solve(&clues(), Board::new())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::solver::attribute::{Attribute, Category};

    #[test]
    fn solves_the_classic_puzzle_exactly() {
        let (board, _stats) = solve().unwrap();
        assert!(board.is_solved());

        let expected: [(Color, Nationality, Pet, Drink, Smoke); 5] = [
            (
                Color::Yellow,
                Nationality::Norwegian,
                Pet::Cat,
                Drink::Water,
                Smoke::Dunhill,
            ),
            (
                Color::Blue,
                Nationality::Dane,
                Pet::Horse,
                Drink::Tea,
                Smoke::Blend,
            ),
            (
                Color::Red,
                Nationality::English,
                Pet::Bird,
                Drink::Milk,
                Smoke::PallMall,
            ),
            (
                Color::Green,
                Nationality::German,
                Pet::Zebra,
                Drink::Coffee,
                Smoke::Prince,
            ),
            (
                Color::White,
                Nationality::Swede,
                Pet::Dog,
                Drink::Beer,
                Smoke::BlueMaster,
            ),
        ];
        for (i, (color, nationality, pet, drink, smoke)) in expected.into_iter().enumerate() {
            let house = board.house(i + 1);
            assert!(house.has_definitely(color), "house {} colour", i + 1);
            assert!(house.has_definitely(nationality), "house {} nationality", i + 1);
            assert!(house.has_definitely(pet), "house {} pet", i + 1);
            assert!(house.has_definitely(drink), "house {} drink", i + 1);
            assert!(house.has_definitely(smoke), "house {} smoke", i + 1);
        }
    }

    #[test]
    fn the_german_keeps_the_zebra_and_the_norwegian_drinks_water() {
        let (board, _stats) = solve().unwrap();
        assert!(board.house(4).has_definitely(Pet::Zebra));
        assert!(board.house(4).has_definitely(Nationality::German));
        assert!(board.house(1).has_definitely(Drink::Water));
        assert!(board.house(1).has_definitely(Nationality::Norwegian));
    }

    #[test]
    fn resolving_the_fixed_point_changes_nothing() {
        let (board, _) = solve().unwrap();
        let (board_again, stats) = Solver::new().solve(&clues(), board.clone()).unwrap();
        assert_eq!(board, board_again);
        assert_eq!(stats.passes, 1);
    }

    fn definite_values_are_mutually_exclusive(board: &Board) -> bool {
        Category::ALL.iter().all(|category| {
            let definite: Vec<Attribute> = board
                .houses()
                .iter()
                .filter_map(|h| h.domain(*category).singleton_value())
                .collect();
            let unique: std::collections::HashSet<Attribute> =
                definite.iter().copied().collect();
            unique.len() == definite.len()
        })
    }

    proptest! {
        #[test]
        fn clue_order_does_not_change_the_fixed_point(
            order in Just((0..clues().len()).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let mut script = clues();
            let mut keyed: Vec<(usize, Box<dyn Clue>)> =
                order.iter().copied().zip(script.drain(..)).collect();
            keyed.sort_by_key(|(rank, _)| *rank);
            let reordered: Vec<Box<dyn Clue>> = keyed.into_iter().map(|(_, c)| c).collect();

            let (reference, _) = solve().unwrap();
            let (board, _) = Solver::new().solve(&reordered, Board::new()).unwrap();
            prop_assert_eq!(reference, board);
        }

        #[test]
        fn domains_shrink_monotonically_in_any_application_order(
            sequence in proptest::collection::vec(0..clues().len(), 1..60)
        ) {
            let script = clues();
            let mut board = Board::new();
            let mut last = board.candidate_count();
            for index in sequence {
                script[index].apply(&mut board).unwrap();
                let count = board.candidate_count();
                prop_assert!(count <= last);
                prop_assert!(definite_values_are_mutually_exclusive(&board));
                last = count;
            }
        }
    }
}
