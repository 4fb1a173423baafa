//! Legal half-move generation for the side to move.
//!
//! Forced capture is board-wide: if any piece of the side to move can jump,
//! only jumps are legal, for every piece. Output order is deterministic:
//! origin squares ascending, then directions NE, NW, SE, SW.

use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::MAX_LEGAL_MOVES;
use crate::move_generation::legal_moves_capture::{any_capture_available, generate_captures_from};
use crate::move_generation::legal_moves_simple::generate_simple_moves_from;
use crate::moves::move_descriptions::Move;

/// Append legal moves to `out` until it holds `max_out` entries; anything
/// beyond that is silently dropped. Returns how many were appended.
pub fn generate_legal_moves_into(game_state: &GameState, out: &mut Vec<Move>, max_out: usize) -> usize {
    let side = game_state.side_to_move;
    let force_capture = any_capture_available(game_state, side);

    let start = out.len();
    for from in Square::iter_bits(game_state.pieces(side)) {
        if out.len() >= max_out {
            break;
        }
        if force_capture {
            generate_captures_from(game_state, from, out, max_out);
        } else {
            generate_simple_moves_from(game_state, from, out, max_out);
        }
    }
    out.len() - start
}

/// All legal moves for the side to move.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    let count = generate_legal_moves_into(game_state, &mut out, MAX_LEGAL_MOVES);
    debug_assert!(
        count < MAX_LEGAL_MOVES,
        "legal move bound reached; generation may have truncated"
    );
    out
}

/// The generated legal move with these endpoints, if there is one.
pub fn find_legal_move(game_state: &GameState, from: Square, to: Square) -> Option<Move> {
    generate_legal_moves(game_state)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to)
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, generate_legal_moves_into, find_legal_move};
    use crate::game_state::checkers_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    fn sq(index: i32) -> Square {
        Square::new(index).expect("test square on board")
    }

    fn mask(indices: &[i32]) -> u64 {
        indices.iter().fold(0u64, |acc, &i| acc | sq(i).mask())
    }

    #[test]
    fn startpos_has_seven_moves_in_square_then_direction_order() {
        let game = GameState::new_game();
        let moves = generate_legal_moves(&game);
        let pairs: Vec<(u8, u8)> = moves.iter().map(|m| (m.from.index(), m.to.index())).collect();
        assert_eq!(
            pairs,
            vec![(17, 26), (17, 24), (19, 28), (19, 26), (21, 30), (21, 28), (23, 30)]
        );
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn black_replies_from_startpos() {
        let mut game = GameState::new_game();
        game.side_to_move = Color::Black;
        let moves = generate_legal_moves(&game);
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|m| m.from.rank() == 5 && m.to.rank() == 4));
    }

    #[test]
    fn capture_anywhere_suppresses_every_simple_move() {
        // Red d3 can jump e4; red b1 alone could step but must not be offered.
        let game = GameState::from_bitboards(mask(&[1, 19]), mask(&[28, 62]), 0, Color::Red)
            .expect("valid position");
        let moves = generate_legal_moves(&game);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_capture());
        assert_eq!(moves[0].from, sq(19));
    }

    #[test]
    fn capacity_truncates_silently() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        assert_eq!(generate_legal_moves_into(&game, &mut out, 3), 3);
        assert_eq!(out.len(), 3);

        let mut none = Vec::new();
        assert_eq!(generate_legal_moves_into(&game, &mut none, 0), 0);
    }

    #[test]
    fn no_pieces_means_no_moves() {
        let game = GameState::from_bitboards(0, mask(&[62]), 0, Color::Red).expect("valid position");
        assert!(generate_legal_moves(&game).is_empty());
    }

    #[test]
    fn lookup_by_endpoints() {
        let game = GameState::new_game();
        assert!(find_legal_move(&game, sq(17), sq(24)).is_some());
        assert!(find_legal_move(&game, sq(8), sq(17)).is_none());
    }
}
