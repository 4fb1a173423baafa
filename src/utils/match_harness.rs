//! Seeded random self-play for rules verification.
//!
//! Both sides pick uniformly among legal moves, chains are always jumped to
//! the end, and the board invariants are re-checked after every half-move.

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::capture_chain::{ChainStep, TurnController};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::legal_move_shared::MAX_LEGAL_MOVES;
use crate::move_generation::legal_moves_capture::{any_capture_available, generate_captures_from};
use crate::move_generation::win_detection::{game_status, GameStatus, WinReason};
use crate::moves::move_descriptions::Move;
use crate::utils::move_notation::path_to_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won { winner: Color, reason: WinReason },
    DrawMaxTurns,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_turns: u16,
    pub rules: RulesConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 300,
            rules: RulesConfig::mandatory_chains(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    /// One entry per turn, jump paths joined ("b1-d3-f5").
    pub played_turns: Vec<String>,
    pub half_moves: u32,
    pub captures: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub red_wins: u16,
    pub black_wins: u16,
    pub draws: u16,
    pub total_turns: u32,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} red_wins={} black_wins={} draws={} avg_turns={:.1}",
            self.games,
            self.red_wins,
            self.black_wins,
            self.draws,
            if self.games == 0 {
                0.0
            } else {
                f64::from(self.total_turns) / f64::from(self.games)
            }
        )
    }
}

/// Play one seeded random game from the standard setup.
pub fn play_random_match(seed: u64, config: &MatchConfig) -> Result<MatchResult, String> {
    play_random_match_from_state(GameState::new_game(), seed, config)
}

pub fn play_random_match_from_state(
    start: GameState,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    start.validate()?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game_state = start;
    let mut controller = TurnController::new(config.rules);
    let mut played_turns = Vec::new();
    let mut half_moves = 0u32;
    let mut captures = 0u32;

    for _ in 0..config.max_turns {
        if let GameStatus::Won { winner, reason } = game_status(&game_state) {
            return Ok(MatchResult {
                outcome: MatchOutcome::Won { winner, reason },
                final_state: game_state,
                played_turns,
                half_moves,
                captures,
            });
        }

        let mover = game_state.side_to_move;
        let must_capture = any_capture_available(&game_state, mover);
        let candidates = generate_legal_moves(&game_state);
        if candidates.iter().any(|mv| mv.is_capture() != must_capture) {
            return Err(format!(
                "forced-capture mismatch for {} at turn {}",
                mover.name(),
                played_turns.len()
            ));
        }

        let mut path: Vec<Move> = Vec::new();
        let mut choice = *candidates
            .choose(&mut rng)
            .ok_or("no legal moves but game not over")?;

        loop {
            let before = game_state;
            let step = controller
                .submit(&mut game_state, choice)
                .map_err(|e| format!("generated move {choice:?} was rejected: {e}"))?;
            half_moves += 1;
            check_half_move(&before, &game_state, choice)?;

            let applied = controller
                .last_outcome()
                .ok_or("controller accepted a move without an outcome")?;
            if applied.is_capture() {
                captures += 1;
            }
            path.push(applied.mv);

            match step {
                ChainStep::TurnComplete => break,
                ChainStep::ContinueFrom(square) => {
                    let mut follow_ups = Vec::new();
                    generate_captures_from(&game_state, square, &mut follow_ups, MAX_LEGAL_MOVES);
                    choice = *follow_ups
                        .choose(&mut rng)
                        .ok_or("chain continued without a capture")?;
                }
            }
        }

        if game_state.side_to_move == mover {
            return Err("turn completed without passing the move".to_owned());
        }
        played_turns.push(path_to_text(&path));
    }

    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxTurns,
        final_state: game_state,
        played_turns,
        half_moves,
        captures,
    })
}

fn check_half_move(before: &GameState, after: &GameState, mv: Move) -> Result<(), String> {
    after.validate()?;

    let mover = before
        .piece_at(mv.from)
        .ok_or("half-move accepted from an empty square")?;
    let opponent = mover.color.opposite();

    if after.piece_count(mover.color) != before.piece_count(mover.color) {
        return Err("mover's piece count changed".to_owned());
    }
    let expected_loss = u32::from(mv.is_capture());
    if before.piece_count(opponent).checked_sub(after.piece_count(opponent)) != Some(expected_loss) {
        return Err(format!("{mv:?} removed the wrong number of pieces"));
    }
    if (before.kings & !after.kings & after.occupied()) != 0 {
        return Err("a king lost its crown".to_owned());
    }
    Ok(())
}

/// Play `games` seeded random games and tally the results.
pub fn play_random_series(games: u16, base_seed: u64, config: &MatchConfig) -> Result<MatchSeriesStats, String> {
    let mut stats = MatchSeriesStats::default();
    for game_index in 0..games {
        let result = play_random_match(base_seed.wrapping_add(u64::from(game_index)), config)?;
        stats.games += 1;
        stats.total_turns += result.played_turns.len() as u32;
        match result.outcome {
            MatchOutcome::Won {
                winner: Color::Red, ..
            } => stats.red_wins += 1,
            MatchOutcome::Won {
                winner: Color::Black, ..
            } => stats.black_wins += 1,
            MatchOutcome::DrawMaxTurns => stats.draws += 1,
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::{play_random_match, play_random_series, MatchConfig, MatchOutcome};
    use crate::game_state::checkers_rules::RulesConfig;
    use crate::move_generation::win_detection::check_winner;

    #[test]
    fn seeded_games_are_reproducible() {
        let config = MatchConfig::default();
        let a = play_random_match(7, &config).expect("match should run");
        let b = play_random_match(7, &config).expect("match should run");
        assert_eq!(a.played_turns, b.played_turns);
        assert_eq!(a.final_state, b.final_state);
    }

    #[test]
    fn random_games_keep_invariants_and_end_consistently() {
        let config = MatchConfig::default();
        for seed in 0..20u64 {
            let result = play_random_match(seed, &config).expect("match should run");
            match result.outcome {
                MatchOutcome::Won { winner, .. } => {
                    assert_eq!(check_winner(&result.final_state), Some(winner));
                }
                MatchOutcome::DrawMaxTurns => {
                    assert_eq!(result.played_turns.len(), usize::from(config.max_turns));
                }
            }
            assert!(result.half_moves as usize >= result.played_turns.len());
        }
    }

    #[test]
    fn permissive_rules_do_not_change_generated_play() {
        let config = MatchConfig {
            max_turns: 120,
            rules: RulesConfig::default(),
        };
        let stats = play_random_series(5, 100, &config).expect("series should run");
        assert_eq!(stats.games, 5);
        assert_eq!(stats.red_wins + stats.black_wins + stats.draws, 5);
        assert!(stats.report().starts_with("games=5 "));
    }

    #[test]
    fn zero_turn_budget_is_an_immediate_draw() {
        let config = MatchConfig {
            max_turns: 0,
            ..MatchConfig::default()
        };
        let result = play_random_match(1, &config).expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawMaxTurns);
        assert!(result.played_turns.is_empty());
    }
}
