use crate::{Card, Symbol};

const FACES: [&str; 4] = ["♠", "♥", "♦", "♣"];
const RANKS: [&str; 8] = ["7", "8", "9", "10", "J", "Q", "K", "A"];

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let face_index = usize::arbitrary(g) % FACES.len();
        let rank_index = usize::arbitrary(g) % RANKS.len();
        Card {
            face: Symbol::new(face_index, FACES[face_index]),
            rank: Symbol::new(rank_index, RANKS[rank_index]),
        }
    }
}
