//! Command handling for one console game.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use crossbeam_channel::Receiver;

use chess_core::{parse_coord_move, Board, Color, Game, GameEvent, Move, MoveList, Square};
use minimax_engine::{EngineConfig, MachinePlayer, MinimaxEngine};

pub enum Flow {
    Continue,
    Quit,
}

const HELP: &str = "\
commands:
  move <e2e4>        play a move (promotion letter optional: e7e8n)
  moves [sq|color]   list legal moves of a square or a side
  go                 let the machine move for the side to move
  board              print the board
  history            print the moves played so far
  save <file>        write the game record as JSON
  new                start a new game
  quit";

pub struct Session {
    game: Game,
    player: MachinePlayer<MinimaxEngine>,
    events: Receiver<GameEvent>,
}

impl Session {
    pub fn new(board: Board, config: EngineConfig) -> Self {
        let mut game = Game::from_board(board);
        let events = game.subscribe();
        Self {
            game,
            player: MachinePlayer::new(MinimaxEngine::new(), config),
            events,
        }
    }

    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&cmd) = parts.first() else {
            return Ok(Flow::Continue);
        };

        match cmd {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{HELP}")?,
            "new" => {
                self.game.reset();
                self.player.new_game();
                self.report(out)?;
                self.machine_turn(out)?;
            }
            "board" => write!(out, "{}", self.game.board().to_ascii())?,
            "history" => writeln!(out, "{}", self.game.record().movetext())?,
            "moves" => {
                let moves = match parts.get(1) {
                    None => self.game.legal_moves(self.game.side_to_move()),
                    Some(&"white") => self.game.legal_moves(Color::White),
                    Some(&"black") => self.game.legal_moves(Color::Black),
                    Some(sq) => self.game.legal_moves_for_piece(sq.parse::<Square>()?),
                };
                writeln!(out, "{}", list(&moves))?;
            }
            "move" => {
                let Some(text) = parts.get(1) else {
                    bail!("usage: move <from><to>[promotion]");
                };
                self.human_move(text, out)?;
            }
            "go" => {
                if self.game.is_game_over() {
                    bail!("the game is over; use `new`");
                }
                let side = self.game.side_to_move();
                match self.player.choose_move(self.game.board()) {
                    Some(mv) => {
                        let done = self.game.execute(mv).context("engine move was rejected")?;
                        writeln!(out, "{side} plays {done}")?;
                        self.report(out)?;
                        self.machine_turn(out)?;
                    }
                    None => writeln!(out, "no move available")?,
                }
            }
            "save" => {
                let Some(path) = parts.get(1) else {
                    bail!("usage: save <file>");
                };
                self.save(Path::new(path))?;
                writeln!(out, "saved to {path}")?;
            }
            // bare coordinates are accepted as moves
            other if other.len() >= 4 && parse_coord_move(other).is_ok() => {
                self.human_move(other, out)?;
            }
            other => bail!("unknown command `{other}`, try `help`"),
        }
        Ok(Flow::Continue)
    }

    fn human_move(&mut self, text: &str, out: &mut impl Write) -> Result<()> {
        if self.game.is_game_over() {
            bail!("the game is over; use `new`");
        }
        let coord = parse_coord_move(text)?;
        let played = match coord.promotion {
            Some(kind) => self.game.try_move_promoting(coord.from, coord.to, kind),
            None => self.game.try_move(coord.from, coord.to),
        };
        let Some(mv) = played else {
            bail!("illegal move `{text}`");
        };
        writeln!(out, "you play {mv}")?;
        self.report(out)?;
        self.machine_turn(out)
    }

    /// Lets the machine reply when it is its turn.
    pub fn machine_turn(&mut self, out: &mut impl Write) -> Result<()> {
        let machine = self.player.config().machine_color;
        if self.game.is_game_over() || self.game.side_to_move() != machine {
            return Ok(());
        }
        if let Some(mv) = self.player.play(&mut self.game) {
            writeln!(out, "{machine} plays {mv}")?;
        }
        self.report(out)
    }

    /// Prints whatever the game announced since the last call.
    fn report(&mut self, out: &mut impl Write) -> Result<()> {
        for event in self.events.try_iter() {
            match event {
                GameEvent::Check(color) => writeln!(out, "{color} is in check")?,
                GameEvent::Checkmate { loser } => {
                    writeln!(out, "checkmate, {} wins", loser.other())?
                }
                GameEvent::Stalemate => writeln!(out, "stalemate")?,
                GameEvent::GameReset => writeln!(out, "new game")?,
                GameEvent::MoveMade(_) => {}
            }
        }
        Ok(())
    }

    fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.game.record())?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn list(moves: &MoveList) -> String {
    let coords: Vec<String> = moves.iter().map(Move::to_coord).collect();
    if coords.is_empty() {
        "(none)".to_string()
    } else {
        coords.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(machine: Color) -> Session {
        let config = EngineConfig {
            max_depth: 1,
            thinking_delay_secs: 0.0,
            show_thinking: false,
            machine_color: machine,
            ..EngineConfig::default()
        };
        Session::new(Board::startpos(), config)
    }

    fn run(s: &mut Session, line: &str) -> String {
        let mut out = Vec::new();
        s.handle(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_move_gets_machine_reply() {
        let mut s = session(Color::Black);
        let out = run(&mut s, "move e2e4");
        assert!(out.contains("you play e4"));
        assert!(out.contains("Black plays"));
        assert_eq!(s.game.history().len(), 2);
    }

    #[test]
    fn test_illegal_and_malformed_moves() {
        let mut s = session(Color::Black);
        let mut out = Vec::new();
        assert!(s.handle("move e2e5", &mut out).is_err());
        assert!(s.handle("move z9e4", &mut out).is_err());
        assert!(s.handle("frobnicate", &mut out).is_err());
        assert!(s.game.history().is_empty());
    }

    #[test]
    fn test_moves_listing() {
        let mut s = session(Color::Black);
        assert_eq!(run(&mut s, "moves g1").trim(), "g1f3 g1h3");
        assert_eq!(run(&mut s, "moves e4").trim(), "(none)");
        assert_eq!(run(&mut s, "moves black").split_whitespace().count(), 20);
    }

    #[test]
    fn test_fools_mate_reported() {
        let mut s = session(Color::White);
        let mut out = Vec::new();
        for mv in ["f2f3", "e7e5", "g2g4"] {
            let coord = parse_coord_move(mv).unwrap();
            s.game.try_move(coord.from, coord.to).unwrap();
        }
        s.report(&mut out).unwrap();
        let text = run(&mut s, "d8h4");
        assert!(text.contains("White is in check"));
        assert!(text.contains("checkmate, Black wins"));
        assert!(s.handle("move a2a3", &mut out).is_err());
        assert_eq!(run(&mut s, "history").trim(), "1. f3 e5 2. g4 Qh4# 0-1");
    }

    #[test]
    fn test_go_plays_for_side_to_move_then_machine_replies() {
        let mut s = session(Color::Black);
        let out = run(&mut s, "go");
        assert!(out.contains("White plays"));
        assert!(out.contains("Black plays"));
        assert_eq!(s.game.history().len(), 2);
        assert_eq!(s.game.side_to_move(), Color::White);
    }

    #[test]
    fn test_save_writes_record() {
        let mut s = session(Color::Black);
        run(&mut s, "e2e4");
        let path = std::env::temp_dir().join(format!("chess_console_{}.json", std::process::id()));
        let out = run(&mut s, &format!("save {}", path.display()));
        assert!(out.starts_with("saved to"));
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["moves"][0], "e4");
        assert_eq!(json["result"], "*");
    }

    #[test]
    fn test_quit() {
        let mut s = session(Color::Black);
        let mut out = Vec::new();
        assert!(matches!(s.handle("quit", &mut out).unwrap(), Flow::Quit));
        assert!(matches!(s.handle("", &mut out).unwrap(), Flow::Continue));
    }
}
