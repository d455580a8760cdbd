use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the two physical decks a card was printed in.
/// The game merges two standard decks into a single 104-card pool.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum DeckNo {
    /// First physical deck
    One,
    /// Second physical deck
    Two,
}

/// Represents one of the four suits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

/// Represents the rank (face value) of a playing card from Ace through King.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl Suit {
    fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

/// The printed value of a board cell: a suit/rank pair without a deck number.
/// Every non-corner cell matches a card of the same suit and rank from either deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Tile {
    pub suit: Suit,
    pub rank: Rank,
}

impl Tile {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// A single physical card from one of the two merged decks.
/// Cards are value-equal: the same suit and rank from different decks are distinct cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Which physical deck the card belongs to
    pub deck: DeckNo,
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card
    pub rank: Rank,
}

impl Card {
    pub const fn new(deck: DeckNo, suit: Suit, rank: Rank) -> Self {
        Self { deck, suit, rank }
    }

    /// The board tile this card corresponds to.
    pub fn tile(&self) -> Tile {
        Tile::new(self.suit, self.rank)
    }

    /// Jacks of Hearts and Spades remove an opponent chip.
    pub fn is_one_eyed_jack(&self) -> bool {
        self.rank == Rank::Jack && matches!(self.suit, Suit::Hearts | Suit::Spades)
    }

    /// Jacks of Diamonds and Clubs may be placed on any open cell.
    pub fn is_two_eyed_jack(&self) -> bool {
        self.rank == Rank::Jack && matches!(self.suit, Suit::Diamonds | Suit::Clubs)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// Number of cards in the merged two-deck pool.
pub const FULL_DECK_SIZE: usize = 104;

/// Both physical decks in a fixed, unshuffled order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(FULL_DECK_SIZE);
    for deck in [DeckNo::One, DeckNo::Two] {
        for &s in &all_suits() {
            for &r in &all_ranks() {
                v.push(Card::new(deck, s, r));
            }
        }
    }
    v
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let deck = match self.deck {
            DeckNo::One => 1,
            DeckNo::Two => 2,
        };
        write!(f, "{}#{}", self.tile(), deck)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("Unrecognized rank in '{0}'")]
    Rank(String),
    #[error("Unrecognized suit in '{0}'")]
    Suit(String),
    #[error("Unrecognized deck number in '{0}' (expected #1 or #2)")]
    Deck(String),
}

impl FromStr for Tile {
    type Err = ParseCardError;

    /// Accepts `2S`, `TH`, `10H`, `qd` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_uppercase();
        let Some(suit_char) = t.chars().last() else {
            return Err(ParseCardError::Rank(s.to_string()));
        };
        let suit = match suit_char {
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            _ => return Err(ParseCardError::Suit(s.to_string())),
        };
        let rank = match &t[..t.len() - 1] {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        };
        Ok(Tile::new(suit, rank))
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts a tile with an optional deck suffix: `2S#1`, `TH#2`.
    /// Without a suffix the card is taken from the first deck.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tile_part, deck) = match s.trim().split_once('#') {
            Some((tile, "1")) => (tile, DeckNo::One),
            Some((tile, "2")) => (tile, DeckNo::Two),
            Some(_) => return Err(ParseCardError::Deck(s.to_string())),
            None => (s, DeckNo::One),
        };
        let tile: Tile = tile_part.parse()?;
        Ok(Card::new(deck, tile.suit, tile.rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_deck_has_104_unique_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), FULL_DECK_SIZE);
        let set: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(set.len(), FULL_DECK_SIZE);
    }

    #[test]
    fn jacks_are_classified_by_eyes() {
        let one_eyed: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| c.is_one_eyed_jack())
            .collect();
        let two_eyed: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| c.is_two_eyed_jack())
            .collect();
        assert_eq!(one_eyed.len(), 4);
        assert_eq!(two_eyed.len(), 4);
        assert!(one_eyed
            .iter()
            .all(|c| matches!(c.suit, Suit::Hearts | Suit::Spades)));
        assert!(!Card::new(DeckNo::One, Suit::Spades, Rank::Queen).is_one_eyed_jack());
    }

    #[test]
    fn parses_and_displays_cards() {
        let c: Card = "10h#2".parse().unwrap();
        assert_eq!(c, Card::new(DeckNo::Two, Suit::Hearts, Rank::Ten));
        assert_eq!(c.to_string(), "TH#2");
        let t: Tile = "2S".parse().unwrap();
        assert_eq!(t, Tile::new(Suit::Spades, Rank::Two));
        assert_eq!("QD".parse::<Card>().unwrap().deck, DeckNo::One);
    }

    #[test]
    fn rejects_malformed_cards() {
        assert!(matches!("ZS".parse::<Tile>(), Err(ParseCardError::Rank(_))));
        assert!(matches!("2X".parse::<Tile>(), Err(ParseCardError::Suit(_))));
        assert!(matches!("2S#3".parse::<Card>(), Err(ParseCardError::Deck(_))));
        assert!("".parse::<Tile>().is_err());
    }
}
