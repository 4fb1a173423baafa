//! Diagonal step vocabulary.
//!
//! Each direction carries a fixed index delta under the `rank * 8 + file`
//! layout. Adding the delta alone can wrap around a board edge (h1 + 9 lands
//! on a3), so `step` re-derives the file and rank deltas and rejects any
//! result that is not the intended diagonal.

use crate::game_state::checkers_types::{Color, Piece, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Generation order; enumeration ties depend on it.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

impl Direction {
    #[inline]
    pub const fn index_delta(self) -> i32 {
        match self {
            Direction::NorthEast => 9,
            Direction::NorthWest => 7,
            Direction::SouthEast => -7,
            Direction::SouthWest => -9,
        }
    }

    #[inline]
    pub const fn file_delta(self) -> i8 {
        match self {
            Direction::NorthEast | Direction::SouthEast => 1,
            Direction::NorthWest | Direction::SouthWest => -1,
        }
    }

    #[inline]
    pub const fn rank_delta(self) -> i8 {
        match self {
            Direction::NorthEast | Direction::NorthWest => 1,
            Direction::SouthEast | Direction::SouthWest => -1,
        }
    }

    /// Square `distance` diagonal steps away, or `None` when that leaves the
    /// board or wraps across an edge.
    pub fn step(self, from: Square, distance: i8) -> Option<Square> {
        let to = Square::new(from.index() as i32 + self.index_delta() * distance as i32)?;
        let df = to.file() as i8 - from.file() as i8;
        let dr = to.rank() as i8 - from.rank() as i8;
        if df == self.file_delta() * distance && dr == self.rank_delta() * distance {
            Some(to)
        } else {
            None
        }
    }

    /// Men only move toward the opponent's back rank; kings go anywhere.
    #[inline]
    pub fn allowed_for(self, piece: Piece) -> bool {
        piece.is_king() || self.is_forward_for(piece.color)
    }

    #[inline]
    pub const fn is_forward_for(self, color: Color) -> bool {
        self.rank_delta() == color.forward()
    }
}
