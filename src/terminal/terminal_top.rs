//! Line-oriented terminal front-end.
//!
//! Reads one command per line, keeps the current game and turn controller,
//! and writes replies to any `Write` sink. Diagnostics are emitted as
//! `info string ...` lines while `debug on` is active.

use std::io::{self, BufRead, Write};

use crate::game_state::checkers_rules::RulesConfig;
use crate::game_state::{checkers_types::*, game_state::GameState};
use crate::move_generation::capture_chain::{ChainStep, TurnController, TurnPhase};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::legal_move_shared::MAX_LEGAL_MOVES;
use crate::move_generation::legal_moves_capture::generate_captures_from;
use crate::move_generation::win_detection::{game_status, GameStatus};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::move_notation::{move_from_text, move_to_text};
use crate::utils::render_game_state::{render_game_state, render_legend};
use crate::utils::save_file::{load_game_from_file, save_game_to_file};

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TerminalSession::new();

    session.write_intro(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TerminalSession {
    game_state: GameState,
    controller: TurnController,
    winner: Option<Color>,
    debug_mode: bool,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            controller: TurnController::new(RulesConfig::default()),
            winner: None,
            debug_mode: false,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn write_intro(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{} to move.", self.game_state.side_to_move.name())?;
        write!(out, "{}", render_game_state(&self.game_state))?;
        write!(out, "{}", render_legend())
    }

    /// Handle one input line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => write!(out, "{}", render_legend())?,
            "board" => write!(out, "{}", render_game_state(&self.game_state))?,
            "new" => {
                self.replace_game(GameState::new_game());
                writeln!(out, "New game.")?;
                self.write_intro(out)?;
            }
            "moves" => self.write_moves(out)?,
            "done" => match self.controller.stop(&mut self.game_state) {
                Ok(()) => {
                    writeln!(out, "Turn ended.")?;
                    self.finish_turn(out)?;
                }
                Err(err) => writeln!(out, "Cannot stop: {err}")?,
            },
            "save" => {
                let path = command_argument(trimmed, cmd);
                if path.is_empty() {
                    writeln!(out, "Usage: save <file>")?;
                } else {
                    match save_game_to_file(&self.game_state, path) {
                        Ok(()) => writeln!(out, "Saved to '{path}'.")?,
                        Err(err) => writeln!(out, "Failed to save '{path}': {err}")?,
                    }
                }
            }
            "load" => {
                let path = command_argument(trimmed, cmd);
                if path.is_empty() {
                    writeln!(out, "Usage: load <file>")?;
                } else {
                    match load_game_from_file(path) {
                        Ok(loaded) => {
                            self.replace_game(loaded);
                            writeln!(out, "Loaded '{path}'.")?;
                            self.write_intro(out)?;
                        }
                        Err(err) => writeln!(out, "Failed to load '{path}': {err}")?,
                    }
                }
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    writeln!(out, "info string setoption error: {err}")?;
                }
            }
            "debug" => {
                let mode = parts.next().unwrap_or_default();
                self.debug_mode = mode.eq_ignore_ascii_case("on");
            }
            _ => self.handle_move_text(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ").to_ascii_lowercase();

        if name.eq_ignore_ascii_case("AllowChainStop") {
            let allow = match value.as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => return Err(format!("invalid AllowChainStop value '{value}'")),
            };
            self.controller.set_rules(RulesConfig {
                allow_stop_mid_chain: allow,
            });
            Ok(())
        } else {
            Err(format!("unknown option '{name}'"))
        }
    }

    fn handle_move_text(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let mv = match move_from_text(text) {
            Ok(mv) => mv,
            Err(err) => {
                writeln!(out, "Could not parse. Try like 'b6-a5'.")?;
                if self.debug_mode {
                    writeln!(out, "info string parse error: {err}")?;
                }
                return Ok(());
            }
        };

        if let Some(winner) = self.winner {
            writeln!(
                out,
                "Game over, {} won. Type 'new' to play again.",
                winner.name()
            )?;
            return Ok(());
        }

        match self.controller.submit(&mut self.game_state, mv) {
            Ok(step) => {
                self.log_applied(out)?;
                match step {
                    ChainStep::ContinueFrom(square) => {
                        let at = square_to_algebraic(square);
                        write!(out, "{}", render_game_state(&self.game_state))?;
                        if self.controller.rules().allow_stop_mid_chain {
                            writeln!(
                                out,
                                "Multi-jump available from {at}. Enter next jump (from {at}), or 'done' to stop."
                            )?;
                        } else {
                            writeln!(out, "Multi-jump available from {at}. Enter next jump (from {at}).")?;
                        }
                    }
                    ChainStep::TurnComplete => self.finish_turn(out)?,
                }
            }
            Err(err) => writeln!(out, "Illegal move: {err}")?,
        }
        Ok(())
    }

    fn finish_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", render_game_state(&self.game_state))?;
        match game_status(&self.game_state) {
            GameStatus::Won { winner, reason } => {
                self.winner = Some(winner);
                writeln!(out, "{} wins!", winner.name().to_ascii_uppercase())?;
                if self.debug_mode {
                    writeln!(out, "info string game over: {reason:?}")?;
                }
            }
            GameStatus::InProgress => {
                writeln!(out, "{} to move.", self.game_state.side_to_move.name())?;
            }
        }
        Ok(())
    }

    fn write_moves(&self, out: &mut impl Write) -> io::Result<()> {
        let moves: Vec<Move> = match self.controller.phase() {
            TurnPhase::ChainFrom(square) => {
                let mut follow_ups = Vec::new();
                generate_captures_from(&self.game_state, square, &mut follow_ups, MAX_LEGAL_MOVES);
                follow_ups
            }
            _ => generate_legal_moves(&self.game_state),
        };

        if moves.is_empty() {
            return writeln!(out, "No legal moves.");
        }
        let listed: Vec<String> = moves.into_iter().map(move_to_text).collect();
        writeln!(out, "Legal moves: {}", listed.join(" "))
    }

    fn log_applied(&self, out: &mut impl Write) -> io::Result<()> {
        if !self.debug_mode {
            return Ok(());
        }
        if let Some(outcome) = self.controller.last_outcome() {
            writeln!(
                out,
                "info string applied {} capture={} promoted={}",
                move_to_text(outcome.mv),
                outcome.is_capture(),
                outcome.promoted
            )?;
        }
        Ok(())
    }

    fn replace_game(&mut self, game_state: GameState) {
        self.game_state = game_state;
        self.controller.reset();
        self.winner = None;
    }
}

/// Everything after the command word, so file paths may contain spaces.
fn command_argument<'a>(line: &'a str, cmd: &str) -> &'a str {
    line[cmd.len()..].trim()
}
