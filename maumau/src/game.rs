use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{
    is_card_allowed, Action, Card, Deck, DrawError, Event, EventBus, Hand, PackCatalog, PlayError,
    SetupError, Strategy, TurnContext, TurnOutcome, TurnState, CHAIN_RANK, SKIP_RANK, WILD_RANK,
};

/// Cards dealt to every player at setup.
const OPENING_HAND: usize = 5;

/// A named seat and its decision-maker, input to [`Game::new`].
pub struct Seat {
    pub name: String,
    pub strategy: Box<dyn Strategy>,
}

impl Seat {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

struct Player {
    name: String,
    hand: Hand,
    strategy: Box<dyn Strategy>,
}

/// One match of Mau Mau.
///
/// Owns the deck, the table pile, the seats and the cross-turn state, and
/// advances one player per [`take_turn`](Game::take_turn) call. The host
/// loops on that and drains [`events`](Game::events) in between.
pub struct Game {
    deck: Deck,
    table: Hand,
    players: Vec<Player>,
    finishers: Vec<usize>,
    turn: TurnState,
    current: usize,
    rng: StdRng,
    events: EventBus,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("current", &self.current)
            .field("finishers", &self.finishers)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Sets up a match: shuffles, deals five sorted cards per seat, deals
    /// the table its starting card and takes the required face from it.
    pub fn new(
        catalog: &PackCatalog,
        seats: Vec<Seat>,
        mut rng: StdRng,
    ) -> Result<Self, SetupError> {
        if seats.len() < 2 {
            return Err(SetupError::NotEnoughPlayers { count: seats.len() });
        }

        let mut deck = Deck::new(catalog)?;
        deck.shuffle(&mut rng);

        let mut players: Vec<Player> = Vec::with_capacity(seats.len());
        for seat in seats {
            if players.iter().any(|player| player.name == seat.name) {
                return Err(SetupError::DuplicatePlayerName { name: seat.name });
            }
            let mut hand = Hand::new();
            hand.draw_from(&mut deck, OPENING_HAND)?;
            hand.sort();
            players.push(Player {
                name: seat.name,
                hand,
                strategy: seat.strategy,
            });
        }

        let mut table = Hand::new();
        table.draw_from(&mut deck, 1)?;
        // The table was just dealt its card
        let next_face = table.top().expect("table holds the starting card").face.clone();

        Ok(Self {
            deck,
            table,
            players,
            finishers: Vec::new(),
            turn: TurnState {
                cards_to_draw: 1,
                miss_turn: false,
                next_face,
            },
            current: 0,
            rng,
            events: EventBus::default(),
        })
    }

    /// Structured notifications since the last drain.
    pub fn events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn table(&self) -> &Hand {
        &self.table
    }

    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// Every seat's name and hand, in seating order.
    pub fn player_hands(&self) -> impl Iterator<Item = (&str, &Hand)> {
        self.players
            .iter()
            .map(|player| (player.name.as_str(), &player.hand))
    }

    /// Runs one player's turn and advances the seat cursor.
    ///
    /// Seats that already finished are passed over silently, so every call
    /// acts for a player who is still in the match. A `DrawError` coming
    /// out of here means the engine's own card accounting broke: all
    /// gameplay draws are clamped to what the deck and table can supply.
    pub fn take_turn(&mut self) -> Result<TurnOutcome, DrawError> {
        if self.active_count() < 2 {
            return Ok(TurnOutcome::MatchOver {
                ranking: self.ranking(),
            });
        }
        while self.finishers.contains(&self.current) {
            self.advance();
        }
        let seat = self.current;

        self.replenish(Some(1));

        if self.turn.miss_turn {
            self.turn.miss_turn = false;
            self.events.push(Event::PlayerSkipped {
                player: self.players[seat].name.clone(),
                hand_size: self.players[seat].hand.len(),
            });
            self.advance();
            return Ok(TurnOutcome::Skipped);
        }

        loop {
            match self.choose_action(seat) {
                Action::Draw => {
                    self.draw_cards(seat)?;
                    break;
                }
                Action::Play(index) => match self.check_play(seat, index) {
                    Ok(()) => {
                        self.play_card(seat, index);
                        break;
                    }
                    Err(reason) => {
                        self.players[seat].strategy.card_rejected(&reason);
                    }
                },
            }
        }

        if self.players[seat].hand.is_empty() {
            self.finishers.push(seat);
            self.events.push(Event::PlayerFinished {
                player: self.players[seat].name.clone(),
                place: self.finishers.len(),
            });
            if self.active_count() < 2 {
                let ranking = self.ranking();
                self.events.push(Event::MatchOver {
                    ranking: ranking.clone(),
                });
                return Ok(TurnOutcome::MatchOver { ranking });
            }
        }

        self.advance();
        Ok(TurnOutcome::Normal)
    }

    fn active_count(&self) -> usize {
        self.players.len() - self.finishers.len()
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    fn choose_action(&mut self, seat: usize) -> Action {
        let hand_sizes: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.finishers.contains(index))
            .map(|(_, player)| player.hand.len())
            .collect();
        let turn = &self.turn;
        let top_card = self.table.top().expect("table always holds a top card");
        let allowed = |card: &Card| is_card_allowed(turn, top_card, card);
        let ctx = TurnContext {
            top_card,
            required_face: &turn.next_face,
            cards_to_draw: turn.cards_to_draw,
            hand_sizes: &hand_sizes,
            allowed: &allowed,
        };
        let player = &mut self.players[seat];
        player.strategy.choose_card(player.hand.cards(), &ctx)
    }

    fn check_play(&self, seat: usize, index: usize) -> Result<(), PlayError> {
        let hand = &self.players[seat].hand;
        let card = match hand.cards().get(index) {
            Some(card) => card,
            None => {
                return Err(PlayError::OutOfBounds {
                    index,
                    hand_size: hand.len(),
                })
            }
        };
        if self.turn.cards_to_draw > 1 && !card.rank.is(CHAIN_RANK) {
            return Err(PlayError::ChainViolation {
                card: card.clone(),
                cards_to_draw: self.turn.cards_to_draw,
            });
        }
        let top_card = self.table.top().expect("table always holds a top card");
        if !is_card_allowed(&self.turn, top_card, card) {
            return Err(PlayError::NotAllowed {
                card: card.clone(),
                top_card: top_card.clone(),
                required_face: self.turn.next_face.clone(),
            });
        }
        Ok(())
    }

    /// Moves a validated card from the hand onto the table and applies its
    /// rank effect.
    fn play_card(&mut self, seat: usize, index: usize) {
        let card = self.players[seat].hand.remove(index);
        self.table.put(card.clone());
        self.events.push(Event::CardPlayed {
            player: self.players[seat].name.clone(),
            card: card.clone(),
            hand_size: self.players[seat].hand.len(),
        });

        if card.rank.is(CHAIN_RANK) {
            // Chained sevens accumulate by two per play
            if self.turn.cards_to_draw < 2 {
                self.turn.cards_to_draw = 0;
            }
            self.turn.cards_to_draw += 2;
        }
        if card.rank.is(SKIP_RANK) {
            self.turn.miss_turn = true;
        }
        if card.rank.is(WILD_RANK) {
            self.choose_face(seat);
        } else {
            self.turn.next_face = card.face;
        }
    }

    /// Asks the seat that just played a wild for the next required face,
    /// until the answer is a member of the pack's face catalog.
    fn choose_face(&mut self, seat: usize) {
        // The wild sits on top of the table; the face in effect before it
        // is the one shown to the strategy
        let table_cards = self.table.cards();
        let current_face = table_cards[table_cards.len() - 2].face.clone();
        let face = loop {
            let player = &mut self.players[seat];
            let choice =
                player
                    .strategy
                    .choose_face(player.hand.cards(), &current_face, self.deck.faces());
            if self.deck.faces().contains(&choice) {
                break choice;
            }
        };
        self.events.push(Event::FaceChosen {
            player: self.players[seat].name.clone(),
            face: face.clone(),
        });
        self.turn.next_face = face;
    }

    /// Draws the pending number of cards into the seat's hand, clamped to
    /// what the deck and table can still supply.
    fn draw_cards(&mut self, seat: usize) -> Result<(), DrawError> {
        self.replenish(Some(self.turn.cards_to_draw));
        if self.deck.len() < self.turn.cards_to_draw {
            self.turn.cards_to_draw = self.deck.len();
        }
        if self.turn.cards_to_draw > 0 {
            let count = self.turn.cards_to_draw;
            let player = &mut self.players[seat];
            let drawn = player.hand.draw_from(&mut self.deck, count)?;
            let single = if drawn.len() == 1 {
                Some(drawn[0].clone())
            } else {
                None
            };
            self.events.push(Event::CardsDrawn {
                player: player.name.clone(),
                count,
                hand_size: player.hand.len(),
            });
            if let Some(drawn_card) = single {
                let playable = {
                    let top_card = self.table.top().expect("table always holds a top card");
                    is_card_allowed(&self.turn, top_card, &drawn_card)
                };
                if playable {
                    let player = &mut self.players[seat];
                    let last = player.hand.len() - 1;
                    if player.strategy.play_drawn_card(player.hand.cards(), &drawn_card) {
                        self.play_card(seat, last);
                    }
                }
            }
            self.players[seat].hand.sort();
        }
        self.turn.cards_to_draw = 1;
        Ok(())
    }

    /// Shuffles everything but the table's top card back under the deck.
    ///
    /// With `min_count`, only replenishes when the deck holds fewer cards
    /// than that; `None` replenishes unconditionally.
    fn replenish(&mut self, min_count: Option<usize>) {
        if let Some(min_count) = min_count {
            if self.deck.len() >= min_count {
                return;
            }
        }
        let mut reclaimed = self.table.take_all_but_top();
        if reclaimed.is_empty() {
            self.events.push(Event::DeckExhausted);
            return;
        }
        reclaimed.shuffle(&mut self.rng);
        let count = reclaimed.len();
        for card in reclaimed {
            self.deck.put_under(card);
        }
        self.events.push(Event::DeckReplenished { count });
    }

    /// Finishers in finish order, then whoever is still playing.
    fn ranking(&self) -> Vec<String> {
        let mut ranking: Vec<String> = self
            .finishers
            .iter()
            .map(|&index| self.players[index].name.clone())
            .collect();
        for (index, player) in self.players.iter().enumerate() {
            if !self.finishers.contains(&index) {
                ranking.push(player.name.clone());
            }
        }
        ranking
    }
}
