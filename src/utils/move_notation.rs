//! Text form of a half-move: two coordinates joined by any run of `-`/`>`,
//! or by nothing.
//!
//! Parsing only resolves coordinates. Whether the move is legal is decided by
//! the move applier, which also derives the jumped square.

use crate::game_state::checkers_types::Square;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

const SEPARATORS: [char; 2] = ['-', '>'];

/// Parse "b6-a5", "b6>a5", "b6->a5" or "b6a5" (surrounding whitespace ignored).
pub fn parse_move_text(text: &str) -> Result<(Square, Square), String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Empty move".to_owned());
    }

    let (from_part, to_part) = match trimmed.find(SEPARATORS) {
        Some(pos) => (
            &trimmed[..pos],
            trimmed[pos..].trim_start_matches(|c: char| SEPARATORS.contains(&c) || c.is_whitespace()),
        ),
        None if trimmed.len() == 4 && trimmed.is_ascii() => trimmed.split_at(2),
        None => return Err(format!("Invalid move text: {trimmed}")),
    };

    let from = algebraic_to_square(from_part.trim())?;
    let to = algebraic_to_square(to_part.trim())?;
    Ok((from, to))
}

/// Parse move text into a `Move`, deriving the jumped square for two-step
/// diagonals.
pub fn move_from_text(text: &str) -> Result<Move, String> {
    let (from, to) = parse_move_text(text)?;
    Ok(Move::between(from, to))
}

pub fn move_to_text(mv: Move) -> String {
    format!("{}-{}", square_to_algebraic(mv.from), square_to_algebraic(mv.to))
}

/// Jump path as one string, e.g. "b1-d3-f5".
pub fn path_to_text(path: &[Move]) -> String {
    let mut out = String::new();
    for (i, mv) in path.iter().enumerate() {
        if i == 0 {
            out.push_str(&square_to_algebraic(mv.from));
        }
        out.push('-');
        out.push_str(&square_to_algebraic(mv.to));
    }
    out
}
