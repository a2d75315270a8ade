use itertools::Itertools;

use crate::{Board, Card, Suit};

impl Board {
  /// The slots whose card can move right now, in discovery order.
  ///
  /// An empty slot can take the card one rank above its left neighbour, of
  /// the same suit. Nothing can fill an empty slot that has no left neighbour
  /// or whose left neighbour is itself empty, except that any empty row start
  /// lets every 2 move.
  pub fn movable_slots(&self) -> Vec<usize> {
    let onto_gaps = Suit::ALL.iter().filter_map(|&suit| {
      let gap = self.position_of(&Card::new(Card::ACE_RANK, suit));
      if Board::is_row_start(gap) {
        return None;
      }
      let left = &self.slots[gap - 1];
      if left.is_ace() {
        return None;
      }
      left.successor().map(|next| self.position_of(&next))
    });

    let any_row_start_empty = Board::ROW_STARTS
      .iter()
      .any(|&start| self.slots[start].is_ace());
    let twos = Suit::ALL
      .iter()
      .filter(|_| any_row_start_empty)
      .map(|&suit| self.position_of(&Card::new(Card::TWO_RANK, suit)));

    onto_gaps.chain(twos).unique().collect()
  }

  pub fn is_movable(&self, slot: usize) -> bool {
    self.movable_slots().contains(&slot)
  }
}
