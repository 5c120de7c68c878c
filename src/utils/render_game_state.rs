//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the position snapshot for the
//! terminal shell, tests and diagnostics.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::fen_generator::piece_to_fen_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    #[default]
    Unicode,
    Ascii,
}

/// Render the board with rank 8 at the top. A picked-up square is drawn
/// bracketed so the shell can show what is being dragged.
pub fn render_game_state(game_state: &GameState, style: GlyphStyle, picked_up: Option<Square>) -> String {
    let snapshot = game_state.board_snapshot();
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let sq = square_of(rank, file);
            let glyph = match snapshot[sq as usize] {
                Some((color, piece)) => piece_glyph(color, piece, style),
                None => match style {
                    GlyphStyle::Unicode => '·',
                    GlyphStyle::Ascii => '.',
                },
            };

            if picked_up == Some(sq) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn piece_glyph(color: Color, piece: PieceKind, style: GlyphStyle) -> char {
    if style == GlyphStyle::Ascii {
        return piece_to_fen_char(color, piece);
    }

    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
