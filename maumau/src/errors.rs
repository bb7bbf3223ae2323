use crate::{Card, Symbol};

/// The error type for building a deck from a pack catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogError {
    NoFaces,
    NoRanks,
}

impl std::error::Error for CatalogError {}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::NoFaces => write!(f, "The pack catalog contains no faces"),
            CatalogError::NoRanks => write!(f, "The pack catalog contains no ranks"),
        }
    }
}

/// The error type for drawing cards from a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawError {
    InvalidCount { requested: usize },
    Insufficient { requested: usize, available: usize },
}

impl std::error::Error for DrawError {}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::InvalidCount { requested } => write!(
                f,
                "It does not make sense to draw {} cards, at least one is required",
                requested
            ),
            DrawError::Insufficient {
                requested,
                available,
            } => write!(
                f,
                "Cannot draw {} cards when only {} are left",
                requested, available
            ),
        }
    }
}

/// The error type for match construction.
#[derive(Debug)]
pub enum SetupError {
    Catalog(CatalogError),
    DuplicatePlayerName { name: String },
    NotEnoughPlayers { count: usize },
    Deal(DrawError),
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Catalog(err) => Some(err),
            SetupError::Deal(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Catalog(_) => write!(f, "The pack catalog cannot produce a deck"),
            SetupError::DuplicatePlayerName { name } => {
                write!(f, "Cannot have multiple players named {}", name)
            }
            SetupError::NotEnoughPlayers { count } => {
                write!(f, "A match needs at least two players, got {}", count)
            }
            SetupError::Deal(_) => write!(f, "Could not deal the opening hands"),
        }
    }
}

impl From<CatalogError> for SetupError {
    fn from(err: CatalogError) -> Self {
        SetupError::Catalog(err)
    }
}

impl From<DrawError> for SetupError {
    fn from(err: DrawError) -> Self {
        SetupError::Deal(err)
    }
}

/// A rejected play attempt.
///
/// These are recoverable: the engine hands them back to the strategy via
/// [`Strategy::card_rejected`](crate::Strategy::card_rejected) and asks for
/// another decision within the same turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayError {
    /// The card matches neither the required face nor the top card's rank
    /// and is not wild.
    NotAllowed {
        card: Card,
        top_card: Card,
        required_face: Symbol,
    },
    /// The chosen index does not point into the hand.
    OutOfBounds { index: usize, hand_size: usize },
    /// A forced-draw chain is pending and the card does not continue it.
    ChainViolation { card: Card, cards_to_draw: usize },
}

impl std::error::Error for PlayError {}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::NotAllowed {
                card,
                top_card,
                required_face,
            } => {
                if required_face != &top_card.face && required_face != &card.face {
                    write!(
                        f,
                        "You are not allowed to play {} because face {} is expected",
                        card, required_face
                    )
                } else if top_card.rank != card.rank && top_card.face != card.face {
                    write!(
                        f,
                        "You are not allowed to play {} because it matches neither last card {}'s face nor rank",
                        card, top_card
                    )
                } else {
                    write!(f, "You are not allowed to play {}", card)
                }
            }
            PlayError::OutOfBounds { index, hand_size } => write!(
                f,
                "There is no card at position {} in a hand of {} cards",
                index, hand_size
            ),
            PlayError::ChainViolation {
                card,
                cards_to_draw,
            } => write!(
                f,
                "You cannot play a {} in response to a 7, you have to either draw {} cards or chain with another 7",
                card.rank, cards_to_draw
            ),
        }
    }
}
