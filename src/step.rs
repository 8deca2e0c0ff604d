use strum::VariantArray;

use crate::location::Location;

/// The four orthogonal steps between neighboring cells on a board.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Offsets past the top or left edge wrap to out-of-range coordinates rather than panicking.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }
}
