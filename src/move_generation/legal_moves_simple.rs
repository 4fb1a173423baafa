use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::simple_step;
use crate::moves::directions::ALL_DIRECTIONS;
use crate::moves::move_descriptions::Move;

/// Append the non-capturing steps of the piece on `from`, stopping once `out`
/// holds `max_out` moves. Returns how many were appended.
pub fn generate_simple_moves_from(
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
        if let Some(mv) = simple_step(game_state, piece, from, direction) {
            out.push(mv);
        }
    }
    out.len() - start
}

#[cfg(test)]
mod tests {
    use super::generate_simple_moves_from;
    use crate::game_state::checkers_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    fn sq(index: i32) -> Square {
        Square::new(index).expect("test square on board")
    }

    #[test]
    fn red_man_on_front_rank_steps_forward_in_ne_nw_order() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        // d3
        let n = generate_simple_moves_from(&game, sq(19), &mut out, 8);
        assert_eq!(n, 2);
        assert_eq!(out[0].to, sq(28));
        assert_eq!(out[1].to, sq(26));
    }

    #[test]
    fn blocked_back_rank_man_has_no_steps() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        assert_eq!(generate_simple_moves_from(&game, sq(1), &mut out, 8), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn king_steps_all_four_ways_and_respects_capacity() {
        let e4 = sq(28);
        let game = GameState::from_bitboards(e4.mask(), 0, e4.mask(), Color::Red)
            .expect("valid position");

        let mut out = Vec::new();
        assert_eq!(generate_simple_moves_from(&game, e4, &mut out, 8), 4);
        let targets: Vec<u8> = out.iter().map(|m| m.to.index()).collect();
        assert_eq!(targets, vec![37, 35, 21, 19]);

        let mut capped = Vec::new();
        assert_eq!(generate_simple_moves_from(&game, e4, &mut capped, 3), 3);
    }

    #[test]
    fn empty_square_generates_nothing() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        assert_eq!(generate_simple_moves_from(&game, sq(28), &mut out, 8), 0);
    }
}
