use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Card, DrawError};

/// An ordered stack of cards.
///
/// The end of the vector is the top, i.e. the draw and discard point; the
/// front is the bottom, where replenished cards go.
#[derive(Clone, Debug, Default)]
pub struct Pile {
    pub(crate) cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card that would be drawn or matched against next.
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn shuffle(&mut self, rng: &mut StdRng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top `count` cards, popped one at a time.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        if count < 1 {
            return Err(DrawError::InvalidCount { requested: count });
        }
        if count > self.cards.len() {
            return Err(DrawError::Insufficient {
                requested: count,
                available: self.cards.len(),
            });
        }
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.cards.pop() {
                drawn.push(card);
            }
        }
        Ok(drawn)
    }

    /// Inserts one card at the bottom of the pile.
    pub fn put_under(&mut self, card: Card) {
        self.cards.insert(0, card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    fn card(face: (usize, &str), rank: (usize, &str)) -> Card {
        Card {
            face: Symbol::new(face.0, face.1),
            rank: Symbol::new(rank.0, rank.1),
        }
    }

    fn three_cards() -> Vec<Card> {
        vec![
            card((0, "♠"), (0, "7")),
            card((1, "♥"), (1, "8")),
            card((2, "♦"), (2, "9")),
        ]
    }

    #[test]
    fn draw_pops_from_the_top() {
        let mut pile = Pile::from_cards(three_cards());
        let drawn = pile.draw(2).unwrap();
        assert_eq!(drawn[0], card((2, "♦"), (2, "9")));
        assert_eq!(drawn[1], card((1, "♥"), (1, "8")));
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn draw_rejects_a_zero_count() {
        let mut pile = Pile::from_cards(three_cards());
        assert_eq!(
            pile.draw(0),
            Err(DrawError::InvalidCount { requested: 0 })
        );
        assert_eq!(pile.len(), 3);
    }

    #[test]
    fn draw_rejects_more_than_available() {
        let mut pile = Pile::from_cards(three_cards());
        assert_eq!(
            pile.draw(4),
            Err(DrawError::Insufficient {
                requested: 4,
                available: 3,
            })
        );
        assert_eq!(pile.len(), 3);
    }

    #[test]
    fn put_under_lands_at_the_bottom() {
        let mut pile = Pile::from_cards(three_cards());
        let extra = card((3, "♣"), (3, "10"));
        pile.put_under(extra.clone());
        assert_eq!(pile.cards()[0], extra);
        assert_eq!(pile.len(), 4);
        // The bottom card comes out last
        let drawn = pile.draw(4).unwrap();
        assert_eq!(drawn[3], extra);
    }
}
