mod cards;
mod error;
mod game;
mod movable;
pub mod random;
mod runs;

pub use cards::*;
pub use error::*;
pub use game::*;

use std::ops::Range;

use fastrand::Rng;
use getset::Getters;
use itertools::Itertools;

use crate::random::UnitRandom;

/// The 4x13 grid of cards.
///
/// Slots are numbered `0..52`, row by row, so row `r` owns the slots
/// `13 * r .. 13 * r + 13`. Aces are never shown; a slot holding an ace is an
/// empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Board {
  #[getset(get = "pub")]
  slots: [Card; Board::SLOT_COUNT],
}

impl Board {
  pub const ROW_COUNT: usize = 4;
  pub const ROW_LEN: usize = 13;
  pub const SLOT_COUNT: usize = Board::ROW_COUNT * Board::ROW_LEN;

  /// The first slot of every row. A 2 can only ever start a row here.
  pub const ROW_STARTS: [usize; Board::ROW_COUNT] = [0, 13, 26, 39];

  /// What [`Board::unsorted_slots`] reports once every row is finished:
  /// only the aces parked at the end of each row.
  pub const FINISHED_UNSORTED: [usize; Board::ROW_COUNT] = [12, 25, 38, 51];

  pub fn new(seed: Option<u64>) -> Self {
    let mut rng = match seed {
      Some(seed) => Rng::with_seed(seed),
      None => Rng::new(),
    };
    Self::dealt(&mut rng)
  }

  /// A fresh deal: every card, uniformly shuffled over the whole grid.
  pub fn dealt<R: UnitRandom + ?Sized>(rng: &mut R) -> Self {
    let mut board = Self::in_id_order();
    random::permute_all(&mut board.slots, rng);
    tracing::debug!("dealt {}", board.ids().iter().join(","));
    board
  }

  /// Every card laid out by id: the four aces first, the kings last.
  pub fn in_id_order() -> Self {
    let cards = Card::all().collect_vec();
    Self {
      slots: cards.try_into().unwrap(),
    }
  }

  /// Lay out a board from raw card ids, slot by slot.
  pub fn from_ids(ids: &[u8]) -> Result<Self, BoardError> {
    if ids.len() != Board::SLOT_COUNT {
      return Err(BoardError::WrongLength {
        expected: Board::SLOT_COUNT,
        got: ids.len(),
      });
    }

    let mut seen = [false; Board::SLOT_COUNT];
    let mut cards = Vec::with_capacity(Board::SLOT_COUNT);
    for &id in ids {
      let card = Card::from_id(id).ok_or(BoardError::CardOutOfRange(id))?;
      let already = &mut seen[id as usize];
      if *already {
        return Err(BoardError::DuplicateCard(id));
      }
      *already = true;
      cards.push(card);
    }

    Ok(Self {
      slots: cards.try_into().unwrap(),
    })
  }

  pub fn ids(&self) -> Vec<u8> {
    self.slots.iter().map(Card::id).collect()
  }

  /// Where a card currently lies. Every card is on the board exactly once.
  pub fn position_of(&self, card: &Card) -> usize {
    self.slots[..]
      .iter()
      .position(|here| here == card)
      .unwrap_or_else(|| unreachable!("{:?} is missing from the board", card))
  }

  pub fn row_slots(row: usize) -> Range<usize> {
    let start = row * Board::ROW_LEN;
    start..start + Board::ROW_LEN
  }

  pub fn is_row_start(slot: usize) -> bool {
    slot % Board::ROW_LEN == 0
  }

  /// Where the card in `slot` goes if it is moved.
  ///
  /// Only meaningful for a movable slot; see [`Board::movable_slots`].
  pub fn destination_of(&self, slot: usize) -> usize {
    let card = &self.slots[slot];

    if card.rank() != Card::TWO_RANK {
      // Right after the card one rank below.
      let below = card
        .predecessor()
        .unwrap_or_else(|| unreachable!("{:?} has no predecessor", card));
      return self.position_of(&below) + 1;
    }

    // A 2 heads for an empty slot at the start of a row.
    // If it is already at the start of a row, it hops to the next empty row
    // start after its own, wrapping around.
    let candidates = Board::ROW_STARTS
      .iter()
      .copied()
      .filter(|&start| {
        let here = &self.slots[start];
        here.is_ace() || here == card
      })
      .collect_vec();

    match candidates.iter().position(|&start| start == slot) {
      Some(own) => candidates[(own + 1) % candidates.len()],
      None => candidates[0],
    }
  }

  /// Move the card in `slot` into the empty slot it belongs in.
  ///
  /// Returns the slot it landed in.
  pub fn move_card(&mut self, slot: usize) -> Result<usize, MoveError> {
    if slot >= Board::SLOT_COUNT {
      return Err(MoveError::SlotOutOfRange { slot });
    }
    if !self.is_movable(slot) {
      return Err(MoveError::NotMovable { slot });
    }

    let dest = self.destination_of(slot);
    debug_assert!(
      self.slots[dest].is_ace(),
      "destination {} of slot {} holds {:?}",
      dest,
      slot,
      self.slots[dest],
    );
    tracing::debug!("moving {} from {} to {}", self.slots[slot], slot, dest);
    self.slots.swap(slot, dest);
    Ok(dest)
  }

  /// Re-deal only the cards that are not yet part of a finished run.
  ///
  /// Returns the slots that took part.
  pub fn shuffle_unsorted<R: UnitRandom + ?Sized>(
    &mut self,
    rng: &mut R,
  ) -> Vec<usize> {
    let unsorted = self.unsorted_slots();
    random::permute_positions(&mut self.slots, &unsorted, rng);
    tracing::debug!("reshuffled {} slots", unsorted.len());
    unsorted
  }

  /// Every row reads 2 through K of one suit, with its ace at the end.
  pub fn is_finished(&self) -> bool {
    self.unsorted_slots() == Board::FINISHED_UNSORTED
  }
}
