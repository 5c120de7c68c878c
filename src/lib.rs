//! Crate root module declarations for the Plum Board position engine.
//!
//! The crate keeps the authoritative state of a chess position (`game_state`),
//! the per-piece movement geometry (`moves`), destination generation and move
//! application (`move_generation`), hashing (`search`), the contract used by a
//! drag-and-drop front end (`interface`) and notation helpers (`utils`).

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position_error;
}

pub mod moves {
    pub mod jump_tables;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod zobrist;
}

pub mod interface {
    pub mod board_session;
    pub mod shell_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_walk;
    pub mod render_game_state;
}
