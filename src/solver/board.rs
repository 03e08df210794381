use std::collections::VecDeque;

use im::HashSet;
use serde::Serialize;
use tracing::trace;

use crate::{
    error::{Result, SolverError},
    solver::attribute::{Attribute, Category},
};

/// Number of houses on the board. Every category has exactly this many
/// values, so a fully solved board pairs each value with one house.
pub const HOUSE_COUNT: usize = 5;

/// The set of values still considered possible for one (house, category)
/// pair.
///
/// All members share a single category. Domains only ever shrink over a
/// solve; a domain of size one is *definite*. All narrowing goes through
/// [`Board`] so that a removal which makes a value definite can cascade to
/// the other houses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Domain(HashSet<Attribute>);

impl Domain {
    /// Creates the all-values domain for a category.
    pub fn full(category: Category) -> Self {
        Self(category.members().into_iter().collect())
    }

    /// Returns the number of values still possible.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the domain contains exactly one value.
    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// If the domain is a singleton, returns the single value.
    pub fn singleton_value(&self) -> Option<Attribute> {
        if self.is_singleton() {
            self.0.iter().next().copied()
        } else {
            None
        }
    }

    pub fn contains(&self, attr: Attribute) -> bool {
        self.0.contains(&attr)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    fn remove(&mut self, attr: Attribute) -> bool {
        self.0.remove(&attr).is_some()
    }

    /// Keeps only `attr`. The caller has already checked membership, so a
    /// singleton domain here can only be `{attr}` and there is no change to
    /// report.
    fn narrow_to(&mut self, attr: Attribute) -> bool {
        if self.is_singleton() {
            return false;
        }
        self.0 = HashSet::unit(attr);
        true
    }
}

/// One of the ordered houses, holding a candidate domain per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct House {
    position: usize,
    domains: [Domain; 5],
}

impl House {
    fn new(position: usize) -> Self {
        Self {
            position,
            domains: Category::ALL.map(Domain::full),
        }
    }

    /// This house's position, starting at 1.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The candidate domain for a category.
    pub fn domain(&self, category: Category) -> &Domain {
        &self.domains[category.index()]
    }

    fn domain_mut(&mut self, category: Category) -> &mut Domain {
        &mut self.domains[category.index()]
    }

    /// Whether `attr` is the definite value for its category in this house.
    pub fn has_definitely(&self, attr: impl Into<Attribute>) -> bool {
        let attr = attr.into();
        self.domain(attr.category()).singleton_value() == Some(attr)
    }

    /// Whether `attr` is still a candidate for this house.
    pub fn has_possibly(&self, attr: impl Into<Attribute>) -> bool {
        let attr = attr.into();
        self.domain(attr.category()).contains(attr)
    }
}

/// The ordered collection of houses, and the single entry point through
/// which clue propagation narrows their domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    houses: Vec<House>,
}

impl Board {
    /// Creates a board of [`HOUSE_COUNT`] houses with every value possible
    /// everywhere.
    pub fn new() -> Self {
        Self {
            houses: (1..=HOUSE_COUNT).map(House::new).collect(),
        }
    }

    /// All houses, in position order.
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// The house at `position` (1-based).
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside `1..=HOUSE_COUNT`.
    pub fn house(&self, position: usize) -> &House {
        &self.houses[position - 1]
    }

    /// Positions adjacent to `position`: the first house borders only the
    /// second, the last house borders only its predecessor, and interior
    /// houses border both sides.
    pub fn neighbours(&self, position: usize) -> Vec<usize> {
        if position == 1 {
            vec![2]
        } else if position == self.houses.len() {
            vec![position - 1]
        } else {
            vec![position - 1, position + 1]
        }
    }

    /// Whether every domain in every house has been narrowed to a single
    /// value.
    pub fn is_solved(&self) -> bool {
        self.houses
            .iter()
            .all(|house| Category::ALL.iter().all(|c| house.domain(*c).is_singleton()))
    }

    /// Total number of candidates across all houses and categories. This is
    /// the measure that shrinks monotonically under propagation; it bottoms
    /// out at one candidate per (house, category) pair when the board is
    /// solved.
    pub fn candidate_count(&self) -> usize {
        self.houses
            .iter()
            .map(|house| {
                Category::ALL
                    .iter()
                    .map(|c| house.domain(*c).len())
                    .sum::<usize>()
            })
            .sum()
    }

    /// Narrows `position`'s domain to exactly `attr`, and removes `attr`
    /// from every other house in that category.
    ///
    /// Returns `true` if this house's domain or any other house's domain
    /// changed. Fails if the house can no longer hold `attr`, since the
    /// narrowing would leave its domain empty.
    pub fn assign(&mut self, position: usize, attr: impl Into<Attribute>) -> Result<bool> {
        let attr = attr.into();
        let category = attr.category();
        let domain = self.houses[position - 1].domain_mut(category);
        if !domain.contains(attr) {
            return Err(SolverError::Contradiction { position, category }.into());
        }
        let narrowed = domain.narrow_to(attr);
        if narrowed {
            trace!(position, ?attr, "assigned");
        }
        let removed = self.remove_from_others(position, attr);
        Ok(narrowed || removed)
    }

    /// Removes `attr` from `position`'s domain if it is present and not the
    /// sole remaining candidate. A removal that leaves exactly one candidate
    /// makes that candidate definite, which in turn removes it from every
    /// other house. Returns `true` if any domain changed.
    ///
    /// The size guard means a removal can never empty a domain; only
    /// [`Board::assign`] can reject a board as contradictory.
    pub fn remove(&mut self, position: usize, attr: impl Into<Attribute>) -> bool {
        self.drain(VecDeque::from([(position, attr.into())]))
    }

    fn remove_from_others(&mut self, position: usize, attr: Attribute) -> bool {
        let pending = (1..=self.houses.len())
            .filter(|p| *p != position)
            .map(|p| (p, attr))
            .collect();
        self.drain(pending)
    }

    /// Processes pending removals to exhaustion, FIFO. Each removal that
    /// narrows a domain to a singleton queues that value's removal from
    /// every other house, in position order.
    fn drain(&mut self, mut pending: VecDeque<(usize, Attribute)>) -> bool {
        let mut changed = false;
        while let Some((position, attr)) = pending.pop_front() {
            let count = self.houses.len();
            let domain = self.houses[position - 1].domain_mut(attr.category());
            if !domain.contains(attr) || domain.len() == 1 {
                continue;
            }
            domain.remove(attr);
            changed = true;
            trace!(position, ?attr, remaining = domain.len(), "removed candidate");
            if let Some(definite) = domain.singleton_value() {
                for other in (1..=count).filter(|p| *p != position) {
                    pending.push_back((other, definite));
                }
            }
        }
        changed
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        error::Error,
        solver::attribute::{Color, Drink},
    };

    #[test]
    fn fresh_board_has_every_candidate() {
        let board = Board::new();
        assert_eq!(board.candidate_count(), HOUSE_COUNT * 5 * 5);
        assert!(!board.is_solved());
        assert!(board.house(3).has_possibly(Color::Green));
        assert!(!board.house(3).has_definitely(Color::Green));
    }

    #[test]
    fn neighbours_of_end_and_interior_houses() {
        let board = Board::new();
        assert_eq!(board.neighbours(1), vec![2]);
        assert_eq!(board.neighbours(5), vec![4]);
        assert_eq!(board.neighbours(3), vec![2, 4]);
    }

    #[test]
    fn assign_narrows_and_strips_the_other_houses() {
        let mut board = Board::new();
        let changed = board.assign(1, Color::Red).unwrap();

        assert!(changed);
        assert!(board.house(1).has_definitely(Color::Red));
        for position in 2..=HOUSE_COUNT {
            assert!(!board.house(position).has_possibly(Color::Red));
            assert_eq!(board.house(position).domain(Category::Color).len(), 4);
        }
    }

    #[test]
    fn assign_is_idempotent() {
        let mut board = Board::new();
        board.assign(2, Drink::Tea).unwrap();
        let changed = board.assign(2, Drink::Tea).unwrap();
        assert!(!changed);
    }

    #[test]
    fn assign_of_an_excluded_value_is_a_contradiction() {
        let mut board = Board::new();
        board.assign(1, Color::Red).unwrap();

        let err = board.assign(2, Color::Red).unwrap_err();
        let Error::Inner { inner, .. } = err;
        let SolverError::Contradiction { position, category } = *inner;
        assert_eq!(position, 2);
        assert_eq!(category, Category::Color);
    }

    #[test]
    fn remove_is_a_no_op_on_absent_or_sole_values() {
        let mut board = Board::new();
        board.assign(1, Color::Red).unwrap();

        // Already gone from house 2.
        assert!(!board.remove(2, Color::Red));
        // Sole candidate in house 1 is never removed.
        assert!(!board.remove(1, Color::Red));
        assert!(board.house(1).has_definitely(Color::Red));
    }

    #[test]
    fn removal_down_to_one_candidate_cascades_to_other_houses() {
        let mut board = Board::new();
        board.remove(2, Color::Red);
        board.remove(2, Color::Green);
        board.remove(2, Color::Yellow);
        let changed = board.remove(2, Color::White);

        assert!(changed);
        assert!(board.house(2).has_definitely(Color::Blue));
        for position in [1, 3, 4, 5] {
            assert!(!board.house(position).has_possibly(Color::Blue));
        }
        // Unrelated candidates are untouched.
        assert!(board.house(1).has_possibly(Color::Red));
        assert_eq!(board.house(1).domain(Category::Color).len(), 4);
    }

    #[test]
    fn no_two_houses_share_a_definite_value() {
        let mut board = Board::new();
        board.assign(1, Color::Red).unwrap();
        board.assign(4, Color::Green).unwrap();
        board.remove(2, Color::Yellow);
        board.remove(2, Color::White);

        for category in Category::ALL {
            let definite: Vec<Attribute> = board
                .houses()
                .iter()
                .filter_map(|h| h.domain(category).singleton_value())
                .collect();
            let unique: std::collections::HashSet<Attribute> =
                definite.iter().copied().collect();
            assert_eq!(unique.len(), definite.len());
        }
    }
}
