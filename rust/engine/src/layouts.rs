//! Printed board layouts.
//!
//! Each layout is a 10x10 grid indexed `[row][column]`. The four corners are
//! free cells; every other tile appears exactly twice. Jacks are never printed.

use crate::cards::{Rank, Suit, Tile};

pub(crate) type Layout = [[Option<Tile>; 10]; 10];

const FREE: Option<Tile> = None;

macro_rules! tiles {
    ($($name:ident = $suit:ident $rank:ident),* $(,)?) => {
        $(const $name: Option<Tile> = Some(Tile::new(Suit::$suit, Rank::$rank));)*
    };
}

tiles! {
    SA = Spades Ace, S2 = Spades Two, S3 = Spades Three, S4 = Spades Four,
    S5 = Spades Five, S6 = Spades Six, S7 = Spades Seven, S8 = Spades Eight,
    S9 = Spades Nine, ST = Spades Ten, SQ = Spades Queen, SK = Spades King,
    HA = Hearts Ace, H2 = Hearts Two, H3 = Hearts Three, H4 = Hearts Four,
    H5 = Hearts Five, H6 = Hearts Six, H7 = Hearts Seven, H8 = Hearts Eight,
    H9 = Hearts Nine, HT = Hearts Ten, HQ = Hearts Queen, HK = Hearts King,
    DA = Diamonds Ace, D2 = Diamonds Two, D3 = Diamonds Three, D4 = Diamonds Four,
    D5 = Diamonds Five, D6 = Diamonds Six, D7 = Diamonds Seven, D8 = Diamonds Eight,
    D9 = Diamonds Nine, DT = Diamonds Ten, DQ = Diamonds Queen, DK = Diamonds King,
    CA = Clubs Ace, C2 = Clubs Two, C3 = Clubs Three, C4 = Clubs Four,
    C5 = Clubs Five, C6 = Clubs Six, C7 = Clubs Seven, C8 = Clubs Eight,
    C9 = Clubs Nine, CT = Clubs Ten, CQ = Clubs Queen, CK = Clubs King,
}

// Classic printed board.
#[rustfmt::skip]
pub(crate) const SEQUENCE: Layout = [
    [FREE,   S2,   S3,   S4,   S5,   S6,   S7,   S8,   S9, FREE],
    [  C6,   C5,   C4,   C3,   C2,   HA,   HK,   HQ,   HT,   ST],
    [  C7,   SA,   D2,   D3,   D4,   D5,   D6,   D7,   H9,   SQ],
    [  C8,   SK,   C6,   C5,   C4,   C3,   C2,   D8,   H8,   SK],
    [  C9,   SQ,   C7,   H6,   H5,   H4,   HA,   D9,   H7,   SA],
    [  CT,   ST,   C8,   H7,   H2,   H3,   HK,   DT,   H6,   D2],
    [  CQ,   S9,   C9,   H8,   H9,   HT,   HQ,   DQ,   H5,   D3],
    [  CK,   S8,   CT,   CQ,   CK,   CA,   DA,   DK,   H4,   D4],
    [  CA,   S7,   S6,   S5,   S4,   S3,   S2,   H2,   H3,   D5],
    [FREE,   DA,   DK,   DQ,   DT,   D9,   D8,   D7,   D6, FREE],
];

// Spiral board: the outer ring starts at (1,9) and runs clockwise.
#[rustfmt::skip]
pub(crate) const ONE_EYED_JACK: Layout = [
    [FREE,   CA,   CK,   CQ,   CT,   C9,   C8,   C7,   C6, FREE],
    [  H2,   S7,   S6,   S5,   S4,   S3,   S2,   DA,   DK,   C5],
    [  H3,   S8,   H5,   H4,   H3,   H2,   CA,   CK,   DQ,   C4],
    [  H4,   S9,   H6,   D7,   D6,   D5,   D4,   CQ,   DT,   C3],
    [  H5,   ST,   H7,   D8,   DA,   DK,   D3,   CT,   D9,   C2],
    [  H6,   SQ,   H8,   D9,   DT,   DQ,   D2,   C9,   D8,   SA],
    [  H7,   SK,   H9,   HT,   HQ,   HK,   HA,   C8,   D7,   SK],
    [  H8,   SA,   C2,   C3,   C4,   C5,   C6,   C7,   D6,   SQ],
    [  H9,   HT,   HQ,   HK,   HA,   D2,   D3,   D4,   D5,   ST],
    [FREE,   S2,   S3,   S4,   S5,   S6,   S7,   S8,   S9, FREE],
];
