use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};

/// Integer seed that fixes every shuffle of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Seed(pub u64);

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The draw pile. The top of the deck is the end of `cards`.
///
/// # Examples
///
/// ```
/// use sequence_engine::deck::{Deck, Seed};
///
/// let mut a = Deck::new_with_seed(Seed(42));
/// let mut b = Deck::new_with_seed(Seed(42));
/// assert_eq!(a.draw(), b.draw());
/// assert_eq!(a.remaining(), 103);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    seed: Seed,
}

impl Deck {
    /// Both decks merged and shuffled with `seed`.
    pub fn new_with_seed(seed: Seed) -> Self {
        let mut cards = full_deck();
        shuffle(&mut cards, seed);
        Self { cards, seed }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Cards per hand for a table of `num_players`.
    pub fn hand_size(num_players: usize) -> Option<usize> {
        match num_players {
            2 => Some(7),
            3 => Some(6),
            4 | 6 => Some(5),
            _ => None,
        }
    }

    /// Deals round-robin from the top, one card per player per pass.
    pub fn deal_hands(&mut self, num_players: usize) -> Option<Vec<Vec<Card>>> {
        let size = Self::hand_size(num_players)?;
        let mut hands = vec![Vec::with_capacity(size); num_players];
        for _ in 0..size {
            for hand in hands.iter_mut() {
                hand.push(self.draw()?);
            }
        }
        Some(hands)
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The card the next draw would return.
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Removes a named card wherever it sits. Returns `false` when the card is not in the deck.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().rposition(|c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Turns the discard pile into a fresh deck.
    ///
    /// The pile is shuffled with the game's original seed, so every reshuffle in
    /// a game applies the same permutation to a pile of a given size.
    pub fn reshuffle(&mut self, discards: Vec<Card>) {
        let mut cards = discards;
        shuffle(&mut cards, self.seed);
        self.cards = cards;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Fisher-Yates: position `i` swaps with a uniform pick from `[i, n)`.
pub fn shuffle(cards: &mut [Card], seed: Seed) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed.0);
    let n = cards.len();
    for i in 0..n {
        let j = rng.random_range(i..n);
        cards.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::FULL_DECK_SIZE;
    use std::collections::HashSet;

    #[test]
    fn hand_sizes_follow_player_count() {
        assert_eq!(Deck::hand_size(2), Some(7));
        assert_eq!(Deck::hand_size(3), Some(6));
        assert_eq!(Deck::hand_size(4), Some(5));
        assert_eq!(Deck::hand_size(6), Some(5));
        assert_eq!(Deck::hand_size(5), None);
    }

    #[test]
    fn dealing_takes_from_the_top_round_robin() {
        let mut deck = Deck::new_with_seed(Seed(9));
        let top: Vec<Card> = deck.cards().iter().rev().take(4).copied().collect();
        let hands = deck.deal_hands(2).unwrap();
        assert_eq!(hands[0][0], top[0]);
        assert_eq!(hands[1][0], top[1]);
        assert_eq!(hands[0][1], top[2]);
        assert_eq!(hands[1][1], top[3]);
        assert_eq!(deck.remaining(), FULL_DECK_SIZE - 14);
    }

    #[test]
    fn remove_takes_a_named_card_out() {
        let mut deck = Deck::new_with_seed(Seed(3));
        let card = deck.cards()[10];
        assert!(deck.remove(&card));
        assert!(!deck.remove(&card));
        assert_eq!(deck.remaining(), FULL_DECK_SIZE - 1);
    }

    #[test]
    fn reshuffle_reuses_the_game_seed() {
        let pile: Vec<Card> = full_deck().into_iter().take(20).collect();
        let mut a = Deck::new_with_seed(Seed(5));
        let mut b = Deck::new_with_seed(Seed(5));
        a.reshuffle(pile.clone());
        b.reshuffle(pile.clone());
        assert_eq!(a.cards(), b.cards());
        let set: HashSet<Card> = a.cards().iter().copied().collect();
        assert_eq!(set, pile.into_iter().collect());
    }
}
