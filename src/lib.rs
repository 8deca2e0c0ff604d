#![warn(missing_docs)]

//! # `hitori`
//!
//! An exhaustive solver for [Hitori](https://en.wikipedia.org/wiki/Hitori) puzzles.
//! Build a [`Board`] from the puzzle's rows with [`Board::from_lines`] or [`str::parse`], then call [`solve()`] to enumerate every valid solution.
//! A solution blanks cells so that no row or column repeats a symbol, no two blanked cells touch orthogonally, and the remaining cells form one connected region.
//!
//! # Internals
//! Candidate boards are threaded through a fixed chain of stages: one duplicate-resolution stage per row, one per column, then a connectivity filter and a collector.
//! A duplicate-resolution stage picks one group of equal symbols in its line and branches over every admissible resolution — keep a single occurrence and blank the rest, or blank them all — re-entering itself until the line is clean.
//! Boards that survive every line reach the connectivity filter, which keeps them only if the non-blank cells form a single orthogonally connected region, decided by a [`UnionFind`] over the cell set.
//!
//! [`Board`]s are immutable values.
//! Blanking a cell yields a new board and fails if an orthogonal neighbor is already blank, so the adjacency rule holds for every board the search ever constructs and no later stage re-checks it.

pub use board::{BlankError, Board, ParseBoardError};
pub use location::Location;
pub use solver::solve;
pub use union_find::UnionFind;

pub(crate) mod board;
pub(crate) mod location;
pub(crate) mod union_find;
pub(crate) mod step;
pub(crate) mod cell;
pub(crate) mod solver;
