//! Zebra is a constraint-propagation solver for zebra-style logic puzzles:
//! a fixed row of houses, each holding exactly one value from each of five
//! attribute categories, narrowed to a unique assignment by a list of clues.
//!
//! The engine is deliberately search-free. Each clue is a pure narrowing
//! rule over the candidate domains, and the solver simply re-runs the whole
//! clue script until a pass changes nothing. For the classic puzzle class
//! this reaches the unique solution; an under-constrained script halts at
//! whatever fixed point propagation can reach.
//!
//! # Core Concepts
//!
//! - **[`Attribute`]**: a puzzle value tagged with its category (colour,
//!   nationality, pet, drink, smoke).
//! - **[`Board`]**: the ordered houses, each owning one candidate domain per
//!   category. All narrowing goes through the board, so a value that becomes
//!   definite in one house is removed from every other house automatically.
//! - **[`Clue`]**: a propagation rule. The crate provides the four rule
//!   shapes zebra puzzles are built from: [`InHouse`], [`SameHouse`],
//!   [`NextTo`] and [`LeftOf`].
//! - **[`Solver`]**: the fixed-point driver.
//!
//! # Example: two clues, one deduction
//!
//! ```
//! use zebra::solver::attribute::{Color, Drink};
//! use zebra::solver::board::Board;
//! use zebra::solver::clue::Clue;
//! use zebra::solver::clues::{in_house::InHouse, same_house::SameHouse};
//! use zebra::solver::engine::Solver;
//!
//! let clues: Vec<Box<dyn Clue>> = vec![
//!     Box::new(InHouse::new(1, Color::Green)),
//!     Box::new(SameHouse::new(Drink::Coffee, Color::Green)),
//! ];
//!
//! let solver = Solver::new();
//! let (board, stats) = solver.solve(&clues, Board::new()).unwrap();
//!
//! assert!(board.house(1).has_definitely(Drink::Coffee));
//! assert!(!board.house(2).has_possibly(Color::Green));
//! assert!(stats.passes >= 1);
//! ```
//!
//! The classic puzzle itself ships in [`puzzles::zebra`].
//!
//! [`Attribute`]: solver::attribute::Attribute
//! [`Board`]: solver::board::Board
//! [`Clue`]: solver::clue::Clue
//! [`InHouse`]: solver::clues::in_house::InHouse
//! [`SameHouse`]: solver::clues::same_house::SameHouse
//! [`NextTo`]: solver::clues::next_to::NextTo
//! [`LeftOf`]: solver::clues::left_of::LeftOf
//! [`Solver`]: solver::engine::Solver

pub mod error;
pub mod puzzles;
pub mod solver;
