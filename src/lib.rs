//! Crate root module declarations for the Plum Checkers rules engine.
//!
//! Exposes the bitboard game state, move generation and application, the
//! multi-jump turn controller, win detection, text utilities, and the
//! terminal front-end so binaries, tests, and benches share stable paths.

pub mod bits {
    pub mod bit_ops;
}

pub mod game_state {
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod moves {
    pub mod directions;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod capture_chain;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_capture;
    pub mod legal_moves_simple;
    pub mod move_generator;
    pub mod perft;
    pub mod win_detection;
}

pub mod terminal {
    pub mod terminal_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod match_harness;
    pub mod move_notation;
    pub mod render_game_state;
    pub mod save_file;
}
