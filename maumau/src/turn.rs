use crate::{Card, Symbol};

/// Rank label that may be played on anything and lets the player pick the
/// next face.
pub const WILD_RANK: &str = "J";
/// Rank label that forces the next player to draw two cards or chain.
pub const CHAIN_RANK: &str = "7";
/// Rank label that makes the next player miss their turn.
pub const SKIP_RANK: &str = "8";

/// The cross-turn state the engine carries from player to player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    /// Pending forced-draw count; 1 is the normal single-draw baseline.
    pub cards_to_draw: usize,
    /// Set when an "8" was played and the next player must sit out.
    pub miss_turn: bool,
    /// The face the next play must match, unless the play matches by rank
    /// or is wild.
    pub next_face: Symbol,
}

/// What a single call to [`Game::take_turn`](crate::Game::take_turn) did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player drew or played.
    Normal,
    /// The player sat out a pending skip.
    Skipped,
    /// Fewer than two players remain unfinished; the match is over.
    MatchOver { ranking: Vec<String> },
}

/// Whether `card` may be laid on the table right now.
///
/// True iff the card matches the required face, matches the top card's
/// rank, or is wild. This is the single source of truth for legality: it
/// is handed to strategies for pre-filtering, and the engine re-checks it
/// before mutating any pile.
pub fn is_card_allowed(turn: &TurnState, top_card: &Card, card: &Card) -> bool {
    card.face == turn.next_face || card.rank == top_card.rank || card.rank.is(WILD_RANK)
}
