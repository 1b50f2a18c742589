//! Exportable summary of a finished or ongoing game.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::Color;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in standard algebraic notation, White's first.
    pub moves: Vec<String>,
    /// Moves as `<from><to>[promotion]` coordinates.
    pub coords: Vec<String>,
    /// PGN-style result tag: `1-0`, `0-1`, `1/2-1/2` or `*` while unfinished.
    pub result: String,
    pub winner: Option<Color>,
}

impl GameRecord {
    pub fn from_board(board: &Board) -> Self {
        let history = board.history();
        let result = match (board.is_game_over(), board.winner()) {
            (true, Some(Color::White)) => "1-0",
            (true, Some(Color::Black)) => "0-1",
            (true, None) => "1/2-1/2",
            (false, _) => "*",
        };
        GameRecord {
            moves: history.iter().map(|m| m.to_algebraic()).collect(),
            coords: history.iter().map(|m| m.to_coord()).collect(),
            result: result.to_string(),
            winner: board.winner(),
        }
    }

    /// Numbered move text, e.g. `1. f3 e5 2. g4 Qh4# 0-1`.
    pub fn movetext(&self) -> String {
        let mut out = String::new();
        for (i, san) in self.moves.iter().enumerate() {
            if i % 2 == 0 {
                out.push_str(&format!("{}. ", i / 2 + 1));
            }
            out.push_str(san);
            out.push(' ');
        }
        out.push_str(&self.result);
        out
    }
}
