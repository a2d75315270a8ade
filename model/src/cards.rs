use std::fmt::{Debug, Display};

use getset::CopyGetters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enumn::N)]
#[repr(u8)]
pub enum Suit {
  // Order matters: a card's id modulo 4 is its suit.
  Hearts,
  Diamonds,
  Spades,
  Clubs,
}

impl Suit {
  pub const ALL: [Suit; 4] =
    [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

  pub fn short_char(&self) -> char {
    match self {
      Suit::Hearts => 'H',
      Suit::Diamonds => 'D',
      Suit::Spades => 'S',
      Suit::Clubs => 'C',
    }
  }
}

/// A card on the board, identified by a number in `0..52`.
///
/// The rank is `id / 4` and the suit is `id % 4`. Rank 0 is the ace, which
/// the game never shows: an ace is an empty slot that other cards move into.
///
/// This deliberately does not implement `Copy`, to encourage move semantics
/// to avoid duplicating cards on accident.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, CopyGetters)]
pub struct Card {
  #[getset(get_copy = "pub")]
  id: u8,
}

impl Card {
  pub const COUNT: u8 = 52;
  pub const ACE_RANK: u8 = 0;
  pub const TWO_RANK: u8 = 1;
  pub const KING_RANK: u8 = 12;

  pub fn new(rank: u8, suit: Suit) -> Self {
    if rank > Self::KING_RANK {
      panic!("rank must be between 0 and 12 but got {}", rank)
    }
    Self {
      id: rank * 4 + suit as u8,
    }
  }

  pub fn from_id(id: u8) -> Option<Self> {
    (id < Self::COUNT).then_some(Self { id })
  }

  pub fn rank(&self) -> u8 {
    self.id / 4
  }

  pub fn suit(&self) -> Suit {
    Suit::n(self.id % 4).unwrap()
  }

  pub fn is_ace(&self) -> bool {
    self.rank() == Self::ACE_RANK
  }

  /// The card of the same suit one rank higher, if there is one.
  pub fn successor(&self) -> Option<Card> {
    Card::from_id(self.id + 4)
  }

  /// The card of the same suit one rank lower, if there is one.
  pub fn predecessor(&self) -> Option<Card> {
    self.id.checked_sub(4).map(|id| Card { id })
  }

  /// Whether `self` may sit directly to the right of `prev` in a finished row.
  pub fn follows(&self, prev: &Card) -> bool {
    self.suit() == prev.suit() && self.rank() == prev.rank() + 1
  }

  pub fn display_key(&self) -> DisplayKey {
    if self.is_ace() {
      DisplayKey::Empty
    } else {
      DisplayKey::Face {
        rank: self.rank(),
        suit: self.suit(),
      }
    }
  }

  /// Get the string representation of a non-ace rank.
  pub fn rank_string(rank: u8) -> String {
    match rank {
      1..=9 => (rank + 1).to_string(),
      10 => "J".to_string(),
      11 => "Q".to_string(),
      12 => "K".to_string(),
      ono => format!("{}!", ono),
    }
  }

  /// Every card, in id order.
  pub fn all() -> impl Iterator<Item = Card> {
    (0..Self::COUNT).map(|id| Card { id })
  }
}

impl Display for Card {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.display_key())
  }
}

impl Debug for Card {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Card(")?;
    write!(f, "{}", self)?;
    f.write_str(")")
  }
}

/// What a renderer needs to draw one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKey {
  /// An ace, drawn as an empty slot.
  Empty,
  Face { rank: u8, suit: Suit },
}

impl Display for DisplayKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DisplayKey::Empty => f.write_str("absent"),
      DisplayKey::Face { rank, suit } => {
        f.write_str(&Card::rank_string(*rank))?;
        write!(f, "{}", suit.short_char())
      }
    }
  }
}
