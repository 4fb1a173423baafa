//! Move-path enumeration (perft) over complete turns.
//!
//! A turn is a simple step or a whole jump sequence: chains are always
//! followed to the end here, and distinct jump paths count as distinct
//! turns even when they finish on the same square.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::legal_move_shared::MAX_LEGAL_MOVES;
use crate::move_generation::legal_moves_capture::generate_captures_from;
use crate::move_generation::move_generator::MoveResult;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub multi_jumps: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.multi_jumps += rhs.multi_jumps;
        self.promotions += rhs.promotions;
    }
}

/// One legal turn expanded to its full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTurn {
    pub path: Vec<Move>,
    /// Position after the turn, with the side to move already flipped.
    pub game_after_turn: GameState,
    pub promoted: bool,
}

impl CompletedTurn {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.path.first().is_some_and(Move::is_capture)
    }
}

/// Every complete turn available to the side to move, in generation order.
pub fn enumerate_turns(game_state: &GameState) -> MoveResult<Vec<CompletedTurn>> {
    let mut turns = Vec::new();
    for mv in generate_legal_moves(game_state) {
        extend_turn(game_state, mv, Vec::new(), false, &mut turns)?;
    }
    Ok(turns)
}

fn extend_turn(
    game_state: &GameState,
    mv: Move,
    mut path: Vec<Move>,
    promoted_so_far: bool,
    out: &mut Vec<CompletedTurn>,
) -> MoveResult<()> {
    let (mut next, outcome) = apply_move(game_state, mv)?;
    path.push(outcome.mv);
    let promoted = promoted_so_far || outcome.promoted;

    let mut continuations = Vec::new();
    if outcome.is_capture() {
        generate_captures_from(&next, outcome.landing(), &mut continuations, MAX_LEGAL_MOVES);
    }

    if continuations.is_empty() {
        next.side_to_move = next.side_to_move.opposite();
        out.push(CompletedTurn {
            path,
            game_after_turn: next,
            promoted,
        });
        return Ok(());
    }

    for follow_up in continuations {
        extend_turn(&next, follow_up, path.clone(), promoted, out)?;
    }
    Ok(())
}

pub fn perft(game_state: &GameState, depth: u8) -> MoveResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for turn in enumerate_turns(game_state)? {
        perft_recurse(&turn, depth, 1, &mut total)?;
    }
    Ok(total)
}

fn perft_recurse(
    turn: &CompletedTurn,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveResult<()> {
    if current_depth == search_depth {
        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if turn.is_capture() {
            leaf.captures = 1;
        }
        if turn.path.len() > 1 {
            leaf.multi_jumps = 1;
        }
        if turn.promoted {
            leaf.promotions = 1;
        }
        counts.merge(leaf);
        return Ok(());
    }

    for child in enumerate_turns(&turn.game_after_turn)? {
        perft_recurse(&child, search_depth, current_depth + 1, counts)?;
    }
    Ok(())
}
