use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Card, PlayError, Symbol, CHAIN_RANK, WILD_RANK};

/// A player's decision for the action-select step of their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Draw the pending number of cards instead of playing.
    Draw,
    /// Play the card at this index of the own hand.
    Play(usize),
}

/// Everything a strategy may look at while choosing a card.
pub struct TurnContext<'a> {
    /// The card on top of the table.
    pub top_card: &'a Card,
    /// The face the next play must match (set by the last play, or by a
    /// wild).
    pub required_face: &'a Symbol,
    /// Pending forced-draw count; 2 or more means a chain is waiting.
    pub cards_to_draw: usize,
    /// Hand sizes of the players still in the match, in seating order.
    pub hand_sizes: &'a [usize],
    /// The engine's legality predicate. Strategies may pre-filter with it,
    /// but the engine validates every decision again on its own.
    pub allowed: &'a dyn Fn(&Card) -> bool,
}

/// The decision-maker for one seat.
///
/// Strategies only return decisions, they never touch the piles; the
/// engine applies what they choose. A strategy must eventually return
/// something the engine accepts — the engine keeps asking otherwise.
pub trait Strategy {
    /// Pick a card to play, or ask to draw.
    fn choose_card(&mut self, hand: &[Card], ctx: &TurnContext<'_>) -> Action;

    /// Pick the face the next play must match. Called right after this
    /// seat played a wild; the result must be one of `available`.
    fn choose_face(
        &mut self,
        hand: &[Card],
        current_face: &Symbol,
        available: &[Symbol],
    ) -> Symbol;

    /// Decide whether a single freshly drawn, playable card goes straight
    /// onto the table.
    fn play_drawn_card(&mut self, hand: &[Card], drawn: &Card) -> bool;

    /// Called when the engine rejected the previous decision, just before
    /// it asks again. Interactive strategies show this to the player.
    fn card_rejected(&mut self, _reason: &PlayError) {}
}

/// The automated opponent.
///
/// Scans the hand in a random order and plays the first legal card found,
/// with two exceptions: wilds are held back unless nothing else works, and
/// while a forced-draw chain is pending only another "7" is considered at
/// all — a held wild does not get a chain out of drawing.
pub struct GreedyStrategy {
    rng: StdRng,
}

impl GreedyStrategy {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for GreedyStrategy {
    fn choose_card(&mut self, hand: &[Card], ctx: &TurnContext<'_>) -> Action {
        let mut order: Vec<usize> = (0..hand.len()).collect();
        order.shuffle(&mut self.rng);

        let mut held_wild: Option<usize> = None;
        for index in order {
            let card = &hand[index];
            if card.rank.is(WILD_RANK) {
                // don't waste wilds
                if held_wild.is_none() {
                    held_wild = Some(index);
                }
                continue;
            }
            if !(ctx.allowed)(card) {
                continue;
            }
            let seven_on_table = ctx.top_card.rank.is(CHAIN_RANK);
            if (seven_on_table && card.rank.is(CHAIN_RANK))
                || !seven_on_table
                || ctx.cards_to_draw < 2
            {
                return Action::Play(index);
            }
        }
        if let Some(index) = held_wild {
            if ctx.cards_to_draw < 2 {
                return Action::Play(index);
            }
        }
        Action::Draw
    }

    fn choose_face(
        &mut self,
        hand: &[Card],
        _current_face: &Symbol,
        available: &[Symbol],
    ) -> Symbol {
        let mut counts = vec![0usize; available.len()];
        for card in hand {
            if let Some(position) = available.iter().position(|face| face == &card.face) {
                counts[position] += 1;
            }
        }
        // Ties go to the face encountered first
        let mut best = 0;
        for (position, &count) in counts.iter().enumerate() {
            if count > counts[best] {
                best = position;
            }
        }
        available[best].clone()
    }

    fn play_drawn_card(&mut self, _hand: &[Card], drawn: &Card) -> bool {
        // do not waste "good" cards
        !drawn.face.is(WILD_RANK) && !drawn.face.is(CHAIN_RANK)
    }
}
