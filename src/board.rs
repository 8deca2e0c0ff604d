use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::IndexMut;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use strum::VariantArray;

use crate::cell::Cell;
use crate::location::Location;
use crate::step::Step;

/// Reasons a [`Board`] cannot be constructed from input lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseBoardError {
    /// The input contained no lines, or only zero-length ones.
    Empty,
    /// Not every input line had the same length.
    UnequalLineLengths,
}

/// The reason a cell cannot be blanked.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BlankError {
    /// An orthogonal neighbor of the target cell is already blank.
    AdjacentBlank,
}

/// A rectangular Hitori board.
///
/// Boards are immutable values: [`blank`](Board::blank) returns a new board and leaves the receiver untouched, so every branch of a search keeps its own snapshot.
/// Two boards are equal iff their grids match cell for cell, and hashing agrees with equality, so boards deduplicate in a [`HashSet`](std::collections::HashSet).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// The character standing for a blanked cell in a board's text rendering.
    pub const BLANK: char = '#';

    /// Builds a board from one string per row, one symbol per character.
    ///
    /// Every line must have the same nonzero length; anything else fails fast.
    /// Well-formed input does not contain [`Board::BLANK`] — a `#` parses as an already-blank cell, and what the solver does with such a board is undefined.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, ParseBoardError> {
        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.as_ref().chars().count());
        if height == 0 || width == 0 {
            return Err(ParseBoardError::Empty);
        }
        if lines.iter().any(|line| line.as_ref().chars().count() != width) {
            return Err(ParseBoardError::UnequalLineLengths);
        }

        let cells = lines.iter()
            .flat_map(|line| line.as_ref().chars())
            .map(Cell::from)
            .collect_vec();

        Ok(Self { cells: Array2::from_shape_vec((height, width), cells).unwrap() })
    }

    /// The `(width, height)` of this board.
    pub fn size(&self) -> (usize, usize) {
        let (height, width) = self.cells.dim();
        (width, height)
    }

    pub(crate) fn cell(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    /// The symbol at `location`, with blanked cells reading as [`Board::BLANK`].
    ///
    /// Returns `None` for out-of-range locations.
    pub fn value_at(&self, location: Location) -> Option<char> {
        self.cell(location).map(char::from)
    }

    /// Whether the cell at `location` is blanked.
    ///
    /// Out-of-range locations count as not blank, so neighbor checks at the board's edges need no special casing.
    pub fn is_blank(&self, location: Location) -> bool {
        self.cell(location) == Some(Cell::Blank)
    }

    /// The locations of row `y`, left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = Location> {
        let (width, _) = self.size();
        (0..width).map(move |x| Location(x, y))
    }

    /// The locations of column `x`, top to bottom.
    pub fn col(&self, x: usize) -> impl Iterator<Item = Location> {
        let (_, height) = self.size();
        (0..height).map(move |y| Location(x, y))
    }

    /// Every location holding a symbol, in row-major order.
    pub(crate) fn non_blank(&self) -> impl Iterator<Item = Location> + '_ {
        self.cells.indexed_iter()
            .filter(|(_, cell)| **cell != Cell::Blank)
            .map(|(index, _)| Location::from(index))
    }

    /// Returns a copy of this board with the cell at `location` blanked.
    ///
    /// Fails with [`BlankError::AdjacentBlank`] when any of the four orthogonal neighbors is already blank; the receiver is unchanged either way.
    /// Defined only for in-range locations.
    pub fn blank(&self, location: Location) -> Result<Self, BlankError> {
        if Step::VARIANTS.iter().any(|step| self.is_blank(step.attempt_from(location))) {
            return Err(BlankError::AdjacentBlank);
        }

        let mut cells = self.cells.clone();
        cells.index_mut(location.as_index()).assign_elem(Cell::Blank);
        Ok(Self { cells })
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(&s.lines().collect_vec())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cells.rows().into_iter()
            .map(|row| row.iter().copied().map(char::from).collect::<String>())
            .join("\n"))
    }
}

// ndarray arrays implement Eq but not Hash; dimensions then cells in row-major order agrees with the derived equality
impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.dim().hash(state);
        for cell in self.cells.iter() {
            cell.hash(state);
        }
    }
}
