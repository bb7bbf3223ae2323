use serde::{Deserialize, Serialize};

use crate::{Card, Symbol};

/// Advisory notifications produced while a match runs.
///
/// Observers (logger, UI, recorder) drain these from the engine's bus
/// between turns; the engine never waits on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CardsDrawn {
        player: String,
        count: usize,
        hand_size: usize,
    },
    CardPlayed {
        player: String,
        card: Card,
        hand_size: usize,
    },
    PlayerSkipped {
        player: String,
        hand_size: usize,
    },
    DeckReplenished {
        count: usize,
    },
    /// The draw pile ran dry and the table had nothing left to reclaim.
    DeckExhausted,
    FaceChosen {
        player: String,
        face: Symbol,
    },
    PlayerFinished {
        player: String,
        place: usize,
    },
    MatchOver {
        ranking: Vec<String>,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
