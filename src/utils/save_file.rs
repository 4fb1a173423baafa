//! Plain-text save format.
//!
//! ```text
//! red <u64>
//! black <u64>
//! kings <u64>
//! turn <0|1>
//! ```
//!
//! `turn 0` is red to move, `turn 1` black. Loading never touches the caller's
//! state unless the whole file parses and the position is valid.

use std::fs;
use std::path::Path;

use crate::game_state::{checkers_types::Color, game_state::GameState};

pub fn generate_save_text(game_state: &GameState) -> String {
    let turn = match game_state.side_to_move {
        Color::Red => 0,
        Color::Black => 1,
    };
    format!(
        "red {}\nblack {}\nkings {}\nturn {}\n",
        game_state.red, game_state.black, game_state.kings, turn
    )
}

pub fn parse_save_text(text: &str) -> Result<GameState, String> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let red = parse_field(lines.next(), "red")?;
    let black = parse_field(lines.next(), "black")?;
    let kings = parse_field(lines.next(), "kings")?;
    let side_to_move = match parse_field(lines.next(), "turn")? {
        0 => Color::Red,
        1 => Color::Black,
        other => return Err(format!("Invalid turn value: {other}")),
    };

    if lines.next().is_some() {
        return Err("Save file has extra trailing lines".to_owned());
    }

    GameState::from_bitboards(red, black, kings, side_to_move)
}

fn parse_field(line: Option<&str>, key: &str) -> Result<u64, String> {
    let line = line.ok_or_else(|| format!("Missing '{key}' line in save file"))?;
    let mut parts = line.split_whitespace();

    let found_key = parts.next().ok_or_else(|| format!("Missing '{key}' line in save file"))?;
    if found_key != key {
        return Err(format!("Expected '{key}' but found '{found_key}'"));
    }

    let value = parts.next().ok_or_else(|| format!("Missing value for '{key}'"))?;
    if parts.next().is_some() {
        return Err(format!("Unexpected trailing data on '{key}' line"));
    }

    value
        .parse::<u64>()
        .map_err(|_| format!("Invalid value for '{key}': {value}"))
}

pub fn save_game_to_file(game_state: &GameState, path: impl AsRef<Path>) -> Result<(), String> {
    let path = path.as_ref();
    fs::write(path, generate_save_text(game_state))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

pub fn load_game_from_file(path: impl AsRef<Path>) -> Result<GameState, String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    parse_save_text(&text)
}
