//! Environment-driven settings for the terminal shell.

use std::env;

use log::warn;

use crate::game_state::game_state::GameState;
use crate::utils::render_game_state::GlyphStyle;

pub const START_FEN_VAR: &str = "PLUM_BOARD_START_FEN";
pub const ASCII_VAR: &str = "PLUM_BOARD_ASCII";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellConfig {
    pub start_fen: Option<String>,
    pub glyph_style: GlyphStyle,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let start_fen = lookup(START_FEN_VAR)
            .map(|fen| fen.trim().to_owned())
            .filter(|fen| !fen.is_empty());
        let glyph_style = match lookup(ASCII_VAR).as_deref().map(str::trim) {
            Some("1") | Some("true") | Some("yes") => GlyphStyle::Ascii,
            _ => GlyphStyle::Unicode,
        };

        Self {
            start_fen,
            glyph_style,
        }
    }

    /// Position the shell starts from; a bad FEN falls back to the standard setup.
    pub fn starting_position(&self) -> GameState {
        match self.start_fen.as_deref() {
            Some(fen) => GameState::from_fen(fen).unwrap_or_else(|err| {
                warn!("ignoring {START_FEN_VAR}: {err}");
                GameState::new_game()
            }),
            None => GameState::new_game(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_owned())
        }
    }

    #[test]
    fn defaults_without_variables() {
        let config = ShellConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.starting_position(), GameState::new_game());
    }

    #[test]
    fn reads_fen_and_ascii_flag() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            (START_FEN_VAR, " 4k3/8/8/8/8/8/8/4K3 b - - 0 1 "),
            (ASCII_VAR, "1"),
        ]));
        assert_eq!(config.glyph_style, GlyphStyle::Ascii);
        let game = config.starting_position();
        assert_eq!(game.occupancy_all.count_ones(), 2);
    }

    #[test]
    fn invalid_fen_falls_back_to_standard_position() {
        let config = ShellConfig::from_lookup(lookup_from(&[(START_FEN_VAR, "not a fen")]));
        assert_eq!(config.starting_position(), GameState::new_game());
    }
}
