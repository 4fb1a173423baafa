//! Terminal-oriented ASCII board renderer.
//!
//! Rank 8 is printed first. Men are `r`/`b`, kings `R`/`B`; empty dark squares
//! show `.` and light squares stay blank.

use crate::game_state::{checkers_types::*, game_state::GameState};

const RANK_BORDER: &str = "  +---+---+---+---+---+---+---+---+\n";
const FILE_LABELS: &str = "    a   b   c   d   e   f   g   h\n";

/// Render the board to a multi-line string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::with_capacity(RANK_BORDER.len() * 18);
    out.push_str(RANK_BORDER);

    for rank in (0..8i8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push_str(" |");

        for file in 0..8i8 {
            let ch = Square::from_file_rank(file, rank)
                .map(|square| square_char(game_state, square))
                .unwrap_or(' ');
            out.push(' ');
            out.push(ch);
            out.push_str(" |");
        }

        out.push('\n');
        out.push_str(RANK_BORDER);
    }

    out.push_str(FILE_LABELS);
    out
}

/// Piece key plus input hints, shown under the board.
pub fn render_legend() -> String {
    "Legend: r=Red man, R=Red king, b=Black man, B=Black king\n\
     Enter moves as from-to (e.g. b6-a5, or c3-e5 for jumps). \
     Other commands: done, moves, board, new, save <file>, load <file>, quit.\n"
        .to_owned()
}

fn square_char(game_state: &GameState, square: Square) -> char {
    match game_state.piece_at(square) {
        Some(piece) => piece_to_char(piece),
        None if square.is_dark() => '.',
        None => ' ',
    }
}

fn piece_to_char(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Red, PieceKind::Man) => 'r',
        (Color::Red, PieceKind::King) => 'R',
        (Color::Black, PieceKind::Man) => 'b',
        (Color::Black, PieceKind::King) => 'B',
    }
}
