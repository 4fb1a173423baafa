//! Turn controller: drives one player's turn through any multi-jump.
//!
//! ```text
//! AwaitingInitialMove --simple--------------------------> TurnComplete
//! AwaitingInitialMove --jump, more jumps from landing---> ChainFrom(landing)
//! AwaitingInitialMove --jump, no more jumps-------------> TurnComplete
//! ChainFrom(s) --jump from s, more jumps----------------> ChainFrom(landing)
//! ChainFrom(s) --jump from s, no more jumps-------------> TurnComplete
//! ChainFrom(s) --stop (if RulesConfig allows)-----------> TurnComplete
//! ```
//!
//! Entering `TurnComplete` flips the side to move. Submitting a move while
//! in `TurnComplete` starts the next player's turn.

use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move_in_place, MoveOutcome};
use crate::move_generation::legal_moves_capture::has_capture_from;
use crate::move_generation::move_generator::{MoveError, MoveResult};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingInitialMove,
    /// Mid-chain: only a jump by the piece on this square is accepted.
    ChainFrom(Square),
    TurnComplete,
}

/// Result of a half-move accepted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStep {
    /// Same player, same piece: another jump is available from this square.
    ContinueFrom(Square),
    /// The turn ended and the side to move has flipped.
    TurnComplete,
}

#[derive(Debug, Clone)]
pub struct TurnController {
    phase: TurnPhase,
    rules: RulesConfig,
    last_outcome: Option<MoveOutcome>,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl TurnController {
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            phase: TurnPhase::AwaitingInitialMove,
            rules,
            last_outcome: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[inline]
    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    pub fn set_rules(&mut self, rules: RulesConfig) {
        self.rules = rules;
    }

    /// Most recent accepted half-move, for callers that report it.
    #[inline]
    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    /// Forget any chain in progress, e.g. after loading a different position.
    pub fn reset(&mut self) {
        self.phase = TurnPhase::AwaitingInitialMove;
        self.last_outcome = None;
    }

    /// Validate and apply one half-move, advancing the turn state machine.
    /// On error neither the board nor the phase changes.
    pub fn submit(&mut self, game_state: &mut GameState, mv: Move) -> MoveResult<ChainStep> {
        if let TurnPhase::ChainFrom(chain_square) = self.phase {
            if mv.from != chain_square {
                return Err(MoveError::ChainContinuityViolation {
                    expected: chain_square,
                    got: mv.from,
                });
            }
            if Move::between(mv.from, mv.to).captured.is_none() {
                return Err(MoveError::ChainRequiresCapture);
            }
        }

        let outcome = apply_move_in_place(game_state, mv)?;
        self.last_outcome = Some(outcome);

        if outcome.is_capture() && has_capture_from(game_state, outcome.landing()) {
            self.phase = TurnPhase::ChainFrom(outcome.landing());
            return Ok(ChainStep::ContinueFrom(outcome.landing()));
        }

        self.complete_turn(game_state);
        Ok(ChainStep::TurnComplete)
    }

    /// End a chain early. Refused when the rules make chains mandatory or
    /// when no chain is in progress.
    pub fn stop(&mut self, game_state: &mut GameState) -> MoveResult<()> {
        match self.phase {
            TurnPhase::ChainFrom(square) => {
                if !self.rules.allow_stop_mid_chain {
                    return Err(MoveError::ChainMustContinue(square));
                }
                self.complete_turn(game_state);
                Ok(())
            }
            _ => Err(MoveError::NoChainInProgress),
        }
    }

    fn complete_turn(&mut self, game_state: &mut GameState) {
        game_state.side_to_move = game_state.side_to_move.opposite();
        self.phase = TurnPhase::TurnComplete;
    }
}
