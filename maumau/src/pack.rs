use serde::{Deserialize, Serialize};

/// The face/rank catalog a deck is built from.
///
/// Loading this from disk is the hosting application's job; the core only
/// checks that both lists are non-empty at deck construction. A list that
/// is missing from the source object deserializes to an empty one and
/// fails construction the same way.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PackCatalog {
    #[serde(default)]
    pub faces: Vec<String>,
    #[serde(default)]
    pub ranks: Vec<String>,
}

impl PackCatalog {
    /// The classic 32-card pack: four French faces, ranks 7 through ace.
    pub fn french_32() -> Self {
        Self {
            faces: ["♠", "♥", "♦", "♣"].map(String::from).to_vec(),
            ranks: ["7", "8", "9", "10", "J", "Q", "K", "A"]
                .map(String::from)
                .to_vec(),
        }
    }
}
