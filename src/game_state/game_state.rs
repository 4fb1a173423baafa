//! Bitboard board state.
//!
//! `GameState` is the central model for the engine: one bitboard per color,
//! a king overlay shared by both colors, and the side to move. It is `Copy`,
//! so callers that want to explore a move can keep the previous value around
//! for free.

use crate::bits::bit_ops::BitWord;
use crate::game_state::checkers_rules::{BLACK_START, DARK_SQUARES, RED_START};
use crate::game_state::checkers_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Squares holding a red man or king.
    pub red: u64,
    /// Squares holding a black man or king.
    pub black: u64,
    /// Squares holding a king of either color; always a subset of `red | black`.
    pub kings: u64,
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            red: 0,
            black: 0,
            kings: 0,
            side_to_move: Color::Red,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard setup: twelve men per side on their three home ranks, red to move.
    #[inline]
    pub fn new_game() -> Self {
        Self {
            red: RED_START,
            black: BLACK_START,
            kings: 0,
            side_to_move: Color::Red,
        }
    }

    /// Build a state from raw bitboards, rejecting anything that breaks the
    /// board invariants.
    pub fn from_bitboards(red: u64, black: u64, kings: u64, side_to_move: Color) -> Result<Self, String> {
        let state = Self {
            red,
            black,
            kings,
            side_to_move,
        };
        state.validate()?;
        Ok(state)
    }

    /// Report the first violated board invariant, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.red & self.black != 0 {
            return Err(format!(
                "red and black overlap on {:#018x}",
                self.red & self.black
            ));
        }
        if self.kings & !self.occupied() != 0 {
            return Err(format!(
                "kings set on empty squares {:#018x}",
                self.kings & !self.occupied()
            ));
        }
        if self.occupied() & !DARK_SQUARES != 0 {
            return Err(format!(
                "pieces on light squares {:#018x}",
                self.occupied() & !DARK_SQUARES
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.red | self.black
    }

    #[inline]
    pub fn empty_squares(&self) -> u64 {
        !self.occupied()
    }

    #[inline]
    pub fn red_pieces(&self) -> u64 {
        self.red
    }

    #[inline]
    pub fn black_pieces(&self) -> u64 {
        self.black
    }

    #[inline]
    pub fn pieces(&self, color: Color) -> u64 {
        match color {
            Color::Red => self.red,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub(crate) fn pieces_mut(&mut self, color: Color) -> &mut u64 {
        match color {
            Color::Red => &mut self.red,
            Color::Black => &mut self.black,
        }
    }

    #[inline]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.pieces(color).count_bits()
    }

    /// `false` for indices off the board.
    #[inline]
    pub fn is_king(&self, index: i32) -> bool {
        self.kings.get_bit(index)
    }

    /// `false` for indices off the board.
    #[inline]
    pub fn is_red(&self, index: i32) -> bool {
        self.red.get_bit(index)
    }

    /// `false` for indices off the board.
    #[inline]
    pub fn is_black(&self, index: i32) -> bool {
        self.black.get_bit(index)
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.occupied() & square.mask() == 0
    }

    pub fn color_on(&self, square: Square) -> Option<Color> {
        if self.red & square.mask() != 0 {
            Some(Color::Red)
        } else if self.black & square.mask() != 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let color = self.color_on(square)?;
        let kind = if self.kings & square.mask() != 0 {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some(Piece { color, kind })
    }
}
