use serde::{Deserialize, Serialize};

/// One entry of a pack's face or rank catalog.
///
/// `index` is the position within the catalog and gives the stable sort
/// order; `label` is what the rules match on (e.g. rank "7" or "J"). Two
/// symbols are equal iff both fields match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub index: usize,
    pub label: String,
}

impl Symbol {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }

    pub fn is(&self, label: &str) -> bool {
        self.label == label
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A playing card: one face symbol and one rank symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub face: Symbol,
    pub rank: Symbol,
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.label, self.rank.label)
    }
}
