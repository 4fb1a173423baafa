use crate::game_state::checkers_types::*;
use crate::moves::directions::Direction;
use crate::moves::move_descriptions::Move;

/// Upper bound on legal half-moves in any position: 32 dark squares times
/// 4 directions. Real positions stay far below it.
pub const MAX_LEGAL_MOVES: usize = 128;

/// Bitboard of pieces that `color` may jump.
#[inline]
pub fn opponent_pieces(game_state: &GameState, color: Color) -> u64 {
    game_state.pieces(color.opposite())
}

/// Simple step for the piece on `from` in `direction`, if legal.
#[inline]
pub fn simple_step(game_state: &GameState, piece: Piece, from: Square, direction: Direction) -> Option<Move> {
    if !direction.allowed_for(piece) {
        return None;
    }
    let to = direction.step(from, 1)?;
    game_state.is_empty_square(to).then(|| Move::simple(from, to))
}

/// Jump for the piece on `from` in `direction`, if legal.
#[inline]
pub fn jump_step(game_state: &GameState, piece: Piece, from: Square, direction: Direction) -> Option<Move> {
    if !direction.allowed_for(piece) {
        return None;
    }
    let over = direction.step(from, 1)?;
    let to = direction.step(from, 2)?;
    let captures_opponent = opponent_pieces(game_state, piece.color) & over.mask() != 0;
    (captures_opponent && game_state.is_empty_square(to)).then(|| Move::jump(from, over, to))
}
