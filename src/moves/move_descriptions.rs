//! Half-move value type produced by generation and consumed by application.

use crate::game_state::checkers_types::Square;

/// A single step or a single jump. A multi-jump is a sequence of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The jumped-over square; `None` for a simple step.
    pub captured: Option<Square>,
}

impl Move {
    #[inline]
    pub const fn simple(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    #[inline]
    pub const fn jump(from: Square, over: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(over),
        }
    }

    /// Build a move from its endpoints, filling in the jumped square when the
    /// displacement is a two-step diagonal.
    pub fn between(from: Square, to: Square) -> Self {
        let df = to.file() as i8 - from.file() as i8;
        let dr = to.rank() as i8 - from.rank() as i8;
        if df.abs() == 2 && dr.abs() == 2 {
            let over = Square::from_file_rank(from.file() as i8 + df / 2, from.rank() as i8 + dr / 2);
            Self {
                from,
                to,
                captured: over,
            }
        } else {
            Self::simple(from, to)
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
