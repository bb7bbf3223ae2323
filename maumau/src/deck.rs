use rand::rngs::StdRng;

use crate::{Card, CatalogError, DrawError, PackCatalog, Pile, Symbol};

/// The draw pile, together with the pack's face and rank catalogs.
///
/// Hands and the table share the pile behavior, but only the deck carries
/// the catalogs: wild-face selection always consults the deck, never a
/// hand.
#[derive(Clone, Debug)]
pub struct Deck {
    pile: Pile,
    faces: Vec<Symbol>,
    ranks: Vec<Symbol>,
}

impl Deck {
    /// Builds one card per (face, rank) pair, face-outer, in catalog order.
    pub fn new(catalog: &PackCatalog) -> Result<Self, CatalogError> {
        if catalog.faces.is_empty() {
            return Err(CatalogError::NoFaces);
        }
        if catalog.ranks.is_empty() {
            return Err(CatalogError::NoRanks);
        }

        let faces: Vec<Symbol> = catalog
            .faces
            .iter()
            .enumerate()
            .map(|(index, label)| Symbol::new(index, label.clone()))
            .collect();
        let ranks: Vec<Symbol> = catalog
            .ranks
            .iter()
            .enumerate()
            .map(|(index, label)| Symbol::new(index, label.clone()))
            .collect();

        let mut cards = Vec::with_capacity(faces.len() * ranks.len());
        for face in &faces {
            for rank in &ranks {
                cards.push(Card {
                    face: face.clone(),
                    rank: rank.clone(),
                });
            }
        }

        Ok(Self {
            pile: Pile::from_cards(cards),
            faces,
            ranks,
        })
    }

    /// The pack's face catalog, in catalog order.
    pub fn faces(&self) -> &[Symbol] {
        &self.faces
    }

    /// The pack's rank catalog, in catalog order.
    pub fn ranks(&self) -> &[Symbol] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    pub fn shuffle(&mut self, rng: &mut StdRng) {
        self.pile.shuffle(rng);
    }

    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        self.pile.draw(count)
    }

    pub fn put_under(&mut self, card: Card) {
        self.pile.put_under(card);
    }
}
