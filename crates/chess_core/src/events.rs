//! Fan-out of game notifications to any number of listeners.
//!
//! Each subscriber gets its own unbounded channel; publishing never blocks
//! and subscribers that dropped their receiver are pruned on the next send.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::types::Color;

/// Notifications raised by the game facade, in the order they happen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    MoveMade(Move),
    /// The given color's king is attacked after the last move.
    Check(Color),
    Checkmate { loser: Color },
    Stalemate,
    GameReset,
}

#[derive(Debug)]
pub struct EventBus<E> {
    senders: Vec<Sender<E>>,
}

impl<E: Clone> EventBus<E> {
    pub fn new() -> Self {
        Self { senders: Vec::new() }
    }

    /// Registers a new listener. Events published before this call are not replayed.
    pub fn subscribe(&mut self) -> Receiver<E> {
        let (tx, rx) = unbounded();
        self.senders.push(tx);
        rx
    }

    pub fn publish(&mut self, event: E) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl<E: Clone> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_receives() {
        let mut bus = EventBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();
        bus.publish(GameEvent::Stalemate);
        assert_eq!(a.try_recv(), Ok(GameEvent::Stalemate));
        assert_eq!(b.try_recv(), Ok(GameEvent::Stalemate));
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut bus = EventBus::new();
        let keep = bus.subscribe();
        drop(bus.subscribe());
        bus.publish(GameEvent::GameReset);
        assert_eq!(bus.senders.len(), 1);
        assert_eq!(keep.try_recv(), Ok(GameEvent::GameReset));
    }

    #[test]
    fn test_no_replay_for_late_subscribers() {
        let mut bus = EventBus::new();
        bus.publish(GameEvent::Check(Color::White));
        let late = bus.subscribe();
        assert!(late.try_recv().is_err());
    }
}
