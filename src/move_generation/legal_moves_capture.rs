//! Jump generation and the board-wide forced-capture probe.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::jump_step;
use crate::moves::directions::ALL_DIRECTIONS;
use crate::moves::move_descriptions::Move;

/// Append every single jump available to the piece on `from`, stopping once
/// `out` holds `max_out` moves. Returns how many were appended.
///
/// This is also the multi-jump probe: after a capture lands, a non-zero
/// result from the landing square means the chain may continue.
pub fn generate_captures_from(
    game_state: &GameState,
    from: Square,
    out: &mut Vec<Move>,
    max_out: usize,
) -> usize {
    let Some(piece) = game_state.piece_at(from) else {
        return 0;
    };

    let start = out.len();
    for direction in ALL_DIRECTIONS {
        if out.len() >= max_out {
            break;
        }
        if let Some(mv) = jump_step(game_state, piece, from, direction) {
            out.push(mv);
        }
    }
    out.len() - start
}

/// Whether the piece on `from` has at least one jump.
pub fn has_capture_from(game_state: &GameState, from: Square) -> bool {
    let Some(piece) = game_state.piece_at(from) else {
        return false;
    };
    ALL_DIRECTIONS
        .into_iter()
        .any(|direction| jump_step(game_state, piece, from, direction).is_some())
}

/// Whether any piece of `color` can jump. Short-circuits on the first hit.
pub fn any_capture_available(game_state: &GameState, color: Color) -> bool {
    Square::iter_bits(game_state.pieces(color)).any(|from| has_capture_from(game_state, from))
}
