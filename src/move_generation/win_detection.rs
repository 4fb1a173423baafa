//! Terminal-position detection, evaluated after a turn completes.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves_into;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser has no pieces left.
    NoPiecesLeft,
    /// The side to move has pieces but no legal move; blocked counts as lost.
    NoLegalMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Color, reason: WinReason },
}

pub fn game_status(game_state: &GameState) -> GameStatus {
    if game_state.red == 0 {
        return GameStatus::Won {
            winner: Color::Black,
            reason: WinReason::NoPiecesLeft,
        };
    }
    if game_state.black == 0 {
        return GameStatus::Won {
            winner: Color::Red,
            reason: WinReason::NoPiecesLeft,
        };
    }

    let mut probe = Vec::with_capacity(1);
    if generate_legal_moves_into(game_state, &mut probe, 1) == 0 {
        return GameStatus::Won {
            winner: game_state.side_to_move.opposite(),
            reason: WinReason::NoLegalMoves,
        };
    }

    GameStatus::InProgress
}

/// Winner of the position, or `None` while the game continues.
pub fn check_winner(game_state: &GameState) -> Option<Color> {
    match game_status(game_state) {
        GameStatus::Won { winner, .. } => Some(winner),
        GameStatus::InProgress => None,
    }
}
