use std::error::Error;
use std::fmt;

use crate::game_state::checkers_types::{Color, Square};
use crate::utils::algebraic::square_to_algebraic;

pub type MoveResult<T> = Result<T, MoveError>;

/// Why a submitted half-move was rejected. The board is never modified when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A raw index fell outside `0..64`.
    OffBoard(i32),
    EmptyOrigin(Square),
    DestinationOccupied(Square),
    WrongTurn { expected: Color, found: Color },
    /// Displacement is not a one- or two-step diagonal.
    NotDiagonal { from: Square, to: Square },
    /// A man tried to move toward its own back rank.
    IllegalDirection { from: Square, to: Square },
    /// Two-step diagonal without an opponent piece in between.
    NothingToCapture(Square),
    /// Simple move attempted while the side to move has a capture somewhere.
    ForcedCaptureAvailable,
    /// Chain continuation started from the wrong square.
    ChainContinuityViolation { expected: Square, got: Square },
    /// Only further jumps are accepted mid-chain.
    ChainRequiresCapture,
    /// Stopping was requested but the rules demand the chain be finished.
    ChainMustContinue(Square),
    NoChainInProgress,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard(index) => write!(f, "square index {index} is off the board"),
            MoveError::EmptyOrigin(sq) => {
                write!(f, "no piece on {}", square_to_algebraic(*sq))
            }
            MoveError::DestinationOccupied(sq) => {
                write!(f, "{} is occupied", square_to_algebraic(*sq))
            }
            MoveError::WrongTurn { expected, found } => write!(
                f,
                "it is {}'s turn, not {}'s",
                expected.name(),
                found.name()
            ),
            MoveError::NotDiagonal { from, to } => write!(
                f,
                "{}-{} is not a one- or two-square diagonal",
                square_to_algebraic(*from),
                square_to_algebraic(*to)
            ),
            MoveError::IllegalDirection { from, to } => write!(
                f,
                "a man cannot move backwards ({}-{})",
                square_to_algebraic(*from),
                square_to_algebraic(*to)
            ),
            MoveError::NothingToCapture(sq) => {
                write!(f, "no opponent piece to jump on {}", square_to_algebraic(*sq))
            }
            MoveError::ForcedCaptureAvailable => write!(f, "a capture is available and must be taken"),
            MoveError::ChainContinuityViolation { expected, got } => write!(
                f,
                "the next jump must start from {}, not {}",
                square_to_algebraic(*expected),
                square_to_algebraic(*got)
            ),
            MoveError::ChainRequiresCapture => write!(f, "only a jump may continue a capture chain"),
            MoveError::ChainMustContinue(sq) => write!(
                f,
                "further jumps from {} are mandatory",
                square_to_algebraic(*sq)
            ),
            MoveError::NoChainInProgress => write!(f, "no capture chain in progress"),
        }
    }
}

impl Error for MoveError {}
