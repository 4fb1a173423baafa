//! Core value types shared by the board model and the rules engine.

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Rank a man of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Red => 7,
            Color::Black => 0,
        }
    }

    /// Sign of the rank delta for a forward step of a man.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Black => "Black",
        }
    }
}

/// Man or king; color is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }
}

/// Board square index (`0..=63`, `a1 == 0`, `h8 == 63`).
///
/// Only constructible through a range check, so everything downstream of
/// `Square::new` can shift and index without re-validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    #[inline]
    pub const fn new(index: i32) -> Option<Self> {
        if index >= 0 && index < Self::COUNT as i32 {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_file_rank(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }
        Some(Self((rank as u8) * 8 + file as u8))
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    /// Playable squares are the ones where `rank + file` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.rank() + self.file()) % 2 == 1
    }

    /// Iterate the set squares of `bitboard` in ascending index order.
    pub fn iter_bits(bitboard: u64) -> impl Iterator<Item = Square> {
        let mut remaining = bitboard;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let sq = Square(remaining.trailing_zeros() as u8);
            remaining &= remaining - 1;
            Some(sq)
        })
    }
}

impl TryFrom<i32> for Square {
    type Error = String;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Square::new(index).ok_or_else(|| format!("Square index out of bounds: {index}"))
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> Self {
        square.0 as usize
    }
}
