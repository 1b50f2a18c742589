//! Drives an [`Engine`] on behalf of the machine side: thinking delay,
//! thinking/selection notifications and handing the choice to the game.

use std::thread;

use chess_core::{Board, Engine, EventBus, Game, Move, SearchLimits};
use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;

#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    ThinkingChanged(bool),
    MoveSelected(Move),
    /// The machine side had no legal move to offer.
    NoMoveFound,
}

pub struct MachinePlayer<E: Engine> {
    engine: E,
    config: EngineConfig,
    events: EventBus<EngineEvent>,
}

impl<E: Engine> MachinePlayer<E> {
    pub fn new(engine: E, config: EngineConfig) -> Self {
        Self {
            engine,
            config,
            events: EventBus::new(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<EngineEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Waits out the thinking delay, then searches `board` and returns the
    /// selected move. `None` means the position is already decided and the
    /// caller must not retry.
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.events.publish(EngineEvent::ThinkingChanged(true));
        if self.config.show_thinking {
            info!(engine = self.engine.name(), "thinking...");
        } else {
            debug!(engine = self.engine.name(), "thinking...");
        }

        let delay = self.config.thinking_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        let limits =
            SearchLimits::depth_and_time(self.config.search_depth(), self.config.time_limit());
        let result = self.engine.search(board, limits);

        self.events.publish(EngineEvent::ThinkingChanged(false));
        if result.stopped {
            if self.config.show_thinking {
                info!(depth = result.depth, "time limit reached");
            } else {
                debug!(depth = result.depth, "time limit reached");
            }
        }

        match result.best_move {
            Some(mv) => {
                info!(
                    mv = %mv.to_coord(),
                    score = result.score,
                    depth = result.depth,
                    nodes = result.nodes,
                    stopped = result.stopped,
                    "machine selected move"
                );
                self.events.publish(EngineEvent::MoveSelected(mv));
                Some(mv)
            }
            None => {
                warn!("machine could not find a valid move");
                self.events.publish(EngineEvent::NoMoveFound);
                None
            }
        }
    }

    /// Chooses and executes the machine's move on `game` when it is the
    /// machine's turn. Returns the executed record.
    pub fn play(&mut self, game: &mut Game) -> Option<Move> {
        if game.is_game_over() || game.side_to_move() != self.config.machine_color {
            return None;
        }
        let mv = self.choose_move(game.board())?;
        game.execute(mv)
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
