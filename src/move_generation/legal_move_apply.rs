//! Half-move validation and application.
//!
//! Validation always runs to completion before anything is written, so a
//! rejected move leaves the board bit-for-bit unchanged. The side to move is
//! never advanced here; finishing a turn belongs to the turn controller.

use crate::game_state::checkers_rules::{RANK_1, RANK_8};
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_moves_capture::any_capture_available;
use crate::move_generation::move_generator::{MoveError, MoveResult};
use crate::moves::move_descriptions::Move;

/// What a successful half-move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The applied move, with `captured` filled in for jumps.
    pub mv: Move,
    pub promoted: bool,
}

impl MoveOutcome {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.mv.is_capture()
    }

    #[inline]
    pub const fn landing(&self) -> Square {
        self.mv.to
    }
}

/// A move that passed every rule check against a specific position.
#[derive(Debug, Clone, Copy)]
struct ValidatedMove {
    mv: Move,
    mover: Piece,
}

/// Apply `mv` to a copy of `game_state`. The input is never modified.
pub fn apply_move(game_state: &GameState, mv: Move) -> MoveResult<(GameState, MoveOutcome)> {
    let validated = validate_move(game_state, mv)?;
    let mut next = *game_state;
    let outcome = commit_move(&mut next, validated);
    Ok((next, outcome))
}

/// Validate, then mutate `game_state` in place on success only.
pub fn apply_move_in_place(game_state: &mut GameState, mv: Move) -> MoveResult<MoveOutcome> {
    let validated = validate_move(game_state, mv)?;
    Ok(commit_move(game_state, validated))
}

/// Raw-index entry point for callers that resolved coordinates themselves.
pub fn submit_move(game_state: &mut GameState, from: i32, to: i32) -> MoveResult<MoveOutcome> {
    let from = Square::new(from).ok_or(MoveError::OffBoard(from))?;
    let to = Square::new(to).ok_or(MoveError::OffBoard(to))?;
    apply_move_in_place(game_state, Move::between(from, to))
}

fn validate_move(game_state: &GameState, mv: Move) -> MoveResult<ValidatedMove> {
    let Move { from, to, .. } = mv;

    let mover = game_state.piece_at(from).ok_or(MoveError::EmptyOrigin(from))?;
    if !game_state.is_empty_square(to) {
        return Err(MoveError::DestinationOccupied(to));
    }

    if mover.color != game_state.side_to_move {
        return Err(MoveError::WrongTurn {
            expected: game_state.side_to_move,
            found: mover.color,
        });
    }

    let df = to.file() as i8 - from.file() as i8;
    let dr = to.rank() as i8 - from.rank() as i8;
    let distance = df.abs();
    if distance != dr.abs() || !(1..=2).contains(&distance) {
        return Err(MoveError::NotDiagonal { from, to });
    }

    if !mover.is_king() && dr.signum() != mover.color.forward() {
        return Err(MoveError::IllegalDirection { from, to });
    }

    if distance == 2 {
        let over = Square::from_file_rank(from.file() as i8 + df / 2, from.rank() as i8 + dr / 2)
            .ok_or(MoveError::NotDiagonal { from, to })?;
        if game_state.color_on(over) != Some(mover.color.opposite()) {
            return Err(MoveError::NothingToCapture(over));
        }
        return Ok(ValidatedMove {
            mv: Move::jump(from, over, to),
            mover,
        });
    }

    if any_capture_available(game_state, mover.color) {
        return Err(MoveError::ForcedCaptureAvailable);
    }

    Ok(ValidatedMove {
        mv: Move::simple(from, to),
        mover,
    })
}

fn commit_move(game_state: &mut GameState, validated: ValidatedMove) -> MoveOutcome {
    let ValidatedMove { mv, mover } = validated;

    if let Some(over) = mv.captured {
        *game_state.pieces_mut(mover.color.opposite()) &= !over.mask();
        game_state.kings &= !over.mask();
    }

    let own = game_state.pieces_mut(mover.color);
    *own = (*own & !mv.from.mask()) | mv.to.mask();
    if mover.is_king() {
        game_state.kings = (game_state.kings & !mv.from.mask()) | mv.to.mask();
    }

    let promoted = promote_if_on_back_rank(game_state, mover.color, mv.to);
    MoveOutcome { mv, promoted }
}

/// Crown a man of `color` standing on its promotion rank. Returns whether a
/// new king was made; re-checking an existing king is a no-op.
fn promote_if_on_back_rank(game_state: &mut GameState, color: Color, square: Square) -> bool {
    let back_rank = match color {
        Color::Red => RANK_8,
        Color::Black => RANK_1,
    };
    let on_back_rank = back_rank & square.mask() != 0;
    let already_king = game_state.kings & square.mask() != 0;
    if on_back_rank && !already_king {
        game_state.kings |= square.mask();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{apply_move, apply_move_in_place, submit_move};
    use crate::game_state::checkers_types::{Color, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::move_generation::move_generator::MoveError;
    use crate::moves::move_descriptions::Move;

    fn sq(index: i32) -> Square {
        Square::new(index).expect("test square on board")
    }

    fn mask(indices: &[i32]) -> u64 {
        indices.iter().fold(0u64, |acc, &i| acc | sq(i).mask())
    }

    #[test]
    fn opening_step_moves_piece_and_keeps_turn() {
        let game = GameState::new_game();
        // b3-a4
        let (next, outcome) = apply_move(&game, Move::simple(sq(17), sq(24))).expect("legal step");
        assert!(!outcome.is_capture());
        assert_eq!(outcome.landing(), sq(24));
        assert!(next.is_red(24));
        assert!(!next.is_red(17));
        assert_eq!(next.side_to_move, Color::Red);
        assert_eq!(next.black, game.black);
        assert_eq!(game, GameState::new_game(), "input state is untouched");
    }

    #[test]
    fn every_generated_opening_move_is_accepted() {
        let game = GameState::new_game();
        for mv in generate_legal_moves(&game) {
            assert!(apply_move(&game, mv).is_ok(), "{mv:?} should apply");
        }
    }

    #[test]
    fn rejected_moves_leave_board_identical() {
        let mut game = GameState::new_game();
        let before = game;

        // Occupied destination.
        assert_eq!(
            submit_move(&mut game, 8, 17),
            Err(MoveError::DestinationOccupied(sq(17)))
        );
        // Black piece while red is to move.
        assert_eq!(
            submit_move(&mut game, 40, 33),
            Err(MoveError::WrongTurn {
                expected: Color::Red,
                found: Color::Black
            })
        );
        // Empty origin.
        assert_eq!(submit_move(&mut game, 26, 35), Err(MoveError::EmptyOrigin(sq(26))));
        // Straight up the file.
        assert_eq!(
            submit_move(&mut game, 17, 33),
            Err(MoveError::NotDiagonal {
                from: sq(17),
                to: sq(33)
            })
        );
        // Raw index off the board.
        assert_eq!(submit_move(&mut game, 17, 64), Err(MoveError::OffBoard(64)));
        assert_eq!(submit_move(&mut game, -1, 8), Err(MoveError::OffBoard(-1)));

        assert_eq!(game, before);
    }

    #[test]
    fn man_cannot_step_backwards_but_king_can() {
        let man = GameState::from_bitboards(mask(&[28]), mask(&[62]), 0, Color::Red)
            .expect("valid position");
        assert_eq!(
            apply_move(&man, Move::simple(sq(28), sq(19))).map(|(s, _)| s),
            Err(MoveError::IllegalDirection {
                from: sq(28),
                to: sq(19)
            })
        );

        let king = GameState::from_bitboards(mask(&[28]), mask(&[62]), mask(&[28]), Color::Red)
            .expect("valid position");
        let (next, _) = apply_move(&king, Move::simple(sq(28), sq(19))).expect("king steps back");
        assert_eq!(next.kings, mask(&[19]));
        assert_eq!(next.red, mask(&[19]));
    }

    #[test]
    fn jump_removes_exactly_the_midpoint_including_its_crown() {
        // Red d3 jumps black king on e4 to f5; another black man stays on h8.
        let game = GameState::from_bitboards(mask(&[19]), mask(&[28, 62]), mask(&[28]), Color::Red)
            .expect("valid position");
        let (next, outcome) = apply_move(&game, Move::between(sq(19), sq(37))).expect("legal jump");

        assert!(outcome.is_capture());
        assert_eq!(outcome.mv.captured, Some(sq(28)));
        assert_eq!(next.black, mask(&[62]));
        assert_eq!(next.kings, 0);
        assert_eq!(next.red, mask(&[37]));
    }

    #[test]
    fn jump_over_own_piece_or_empty_square_is_rejected() {
        let game = GameState::from_bitboards(mask(&[19, 28]), mask(&[62]), 0, Color::Red)
            .expect("valid position");
        assert_eq!(
            apply_move(&game, Move::between(sq(19), sq(37))).map(|(s, _)| s),
            Err(MoveError::NothingToCapture(sq(28)))
        );
        let game = GameState::from_bitboards(mask(&[19]), mask(&[62]), 0, Color::Red)
            .expect("valid position");
        assert_eq!(
            apply_move(&game, Move::between(sq(19), sq(37))).map(|(s, _)| s),
            Err(MoveError::NothingToCapture(sq(28)))
        );
    }

    #[test]
    fn simple_move_rejected_while_any_capture_exists() {
        // The jump belongs to d3; b1 tries to step instead.
        let mut game = GameState::from_bitboards(mask(&[1, 19]), mask(&[28, 62]), 0, Color::Red)
            .expect("valid position");
        let before = game;
        assert_eq!(
            apply_move_in_place(&mut game, Move::simple(sq(1), sq(10))),
            Err(MoveError::ForcedCaptureAvailable)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn promotion_happens_on_landing_and_only_there() {
        // Red man on d7 steps to e8.
        let game = GameState::from_bitboards(mask(&[51]), mask(&[1]), 0, Color::Red)
            .expect("valid position");
        let (next, outcome) = apply_move(&game, Move::simple(sq(51), sq(60))).expect("legal step");
        assert!(outcome.promoted);
        assert_eq!(next.kings, mask(&[60]));

        // Black man on e2 steps to d1.
        let mut game = GameState::from_bitboards(mask(&[62]), mask(&[12]), 0, Color::Black)
            .expect("valid position");
        let outcome = submit_move(&mut game, 12, 3).expect("legal step");
        assert!(outcome.promoted);
        assert!(game.is_king(3));

        // A non-promoting move leaves the king set alone.
        let game = GameState::from_bitboards(mask(&[40]), mask(&[1]), 0, Color::Red)
            .expect("valid position");
        let (next, outcome) = apply_move(&game, Move::simple(sq(40), sq(49))).expect("legal step");
        assert!(!outcome.promoted);
        assert_eq!(next.kings, 0);
    }

    #[test]
    fn king_reaching_back_rank_again_is_not_a_new_promotion() {
        let game = GameState::from_bitboards(mask(&[51]), mask(&[1]), mask(&[51]), Color::Red)
            .expect("valid position");
        let (next, outcome) = apply_move(&game, Move::simple(sq(51), sq(58))).expect("legal step");
        assert!(!outcome.promoted);
        assert_eq!(next.kings, mask(&[58]));
    }
}
