use crate::{Card, Deck, DrawError, Pile};

/// A pile in the role of a player's hand, or of the table's discard pile.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    pile: Pile,
}

impl Hand {
    pub fn new() -> Self {
        Self { pile: Pile::new() }
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

    pub fn top(&self) -> Option<&Card> {
        self.pile.top()
    }

    /// Stable sort by (face index, rank index), ascending.
    pub fn sort(&mut self) {
        self.pile
            .cards
            .sort_by_key(|card| (card.face.index, card.rank.index));
    }

    /// Draws `count` cards from the deck into this hand.
    ///
    /// Returns the cards that arrived so the caller can look at them; they
    /// sit at the end of the hand until the next [`sort`](Hand::sort).
    pub fn draw_from(&mut self, deck: &mut Deck, count: usize) -> Result<&[Card], DrawError> {
        let drawn = deck.draw(count)?;
        let start = self.pile.cards.len();
        self.pile.cards.extend(drawn);
        Ok(&self.pile.cards[start..])
    }

    /// Removes the card at `index`. Callers check bounds first.
    pub(crate) fn remove(&mut self, index: usize) -> Card {
        self.pile.cards.remove(index)
    }

    /// Lays a card on top.
    pub(crate) fn put(&mut self, card: Card) {
        self.pile.cards.push(card);
    }

    /// Reclaims everything below the top card, bottom first.
    pub(crate) fn take_all_but_top(&mut self) -> Vec<Card> {
        if self.pile.cards.len() <= 1 {
            return Vec::new();
        }
        let top_index = self.pile.cards.len() - 1;
        self.pile.cards.drain(..top_index).collect()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::{PackCatalog, Symbol};

    fn card(face: (usize, &str), rank: (usize, &str)) -> Card {
        Card {
            face: Symbol::new(face.0, face.1),
            rank: Symbol::new(rank.0, rank.1),
        }
    }

    #[test]
    fn sort_orders_by_face_then_rank() {
        let mut hand = Hand::new();
        hand.put(card((3, "♣"), (0, "7")));
        hand.put(card((0, "♠"), (7, "A")));
        hand.put(card((0, "♠"), (2, "9")));
        hand.put(card((1, "♥"), (0, "7")));
        hand.sort();
        let labels: Vec<String> = hand.cards().iter().map(Card::to_string).collect();
        assert_eq!(labels, ["♠9", "♠A", "♥7", "♣7"]);
    }

    #[test]
    fn draw_from_appends_and_returns_the_drawn_cards() {
        let mut deck = Deck::new(&PackCatalog::french_32()).unwrap();
        let mut hand = Hand::new();
        hand.put(card((0, "♠"), (0, "7")));

        let drawn = hand.draw_from(&mut deck, 2).unwrap();
        assert_eq!(drawn.len(), 2);
        assert_eq!(hand.len(), 3);
        assert_eq!(deck.len(), 30);
    }

    #[test]
    fn draw_from_propagates_the_deck_failure() {
        let mut deck = Deck::new(&PackCatalog::french_32()).unwrap();
        let mut hand = Hand::new();
        assert_eq!(
            hand.draw_from(&mut deck, 33).unwrap_err(),
            DrawError::Insufficient {
                requested: 33,
                available: 32,
            }
        );
        assert!(hand.is_empty());
    }

    #[test]
    fn take_all_but_top_leaves_only_the_top() {
        let mut hand = Hand::new();
        hand.put(card((0, "♠"), (0, "7")));
        hand.put(card((1, "♥"), (1, "8")));
        hand.put(card((2, "♦"), (2, "9")));
        let taken = hand.take_all_but_top();
        assert_eq!(taken.len(), 2);
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.top().unwrap(), &card((2, "♦"), (2, "9")));
    }

    #[test]
    fn take_all_but_top_of_a_single_card_is_empty() {
        let mut hand = Hand::new();
        hand.put(card((0, "♠"), (0, "7")));
        assert!(hand.take_all_but_top().is_empty());
        assert_eq!(hand.len(), 1);
    }

    quickcheck! {
        fn sorting_twice_equals_sorting_once(cards: Vec<Card>) -> bool {
            let mut hand = Hand::new();
            for card in cards {
                hand.put(card);
            }
            hand.sort();
            let once = hand.cards().to_vec();
            hand.sort();
            once.as_slice() == hand.cards()
        }
    }
}
