use crate::{Board, Card};

impl Board {
  /// Push the slots of `row` (0-based) that are not part of its finished
  /// prefix onto `out`.
  ///
  /// A row is built from its first slot: it must open with a 2, and every
  /// following card must be the next rank of the same suit. The first slot
  /// breaking that pattern and everything after it get pushed. A completed
  /// row still pushes its last slot, since that is where its ace sits.
  pub fn unsorted_slots_in_row(&self, row: usize, out: &mut Vec<usize>) {
    let slots = Board::row_slots(row);
    let end = slots.end;
    let break_at = slots.clone().find(|&slot| {
      let here = &self.slots[slot];
      if Board::is_row_start(slot) {
        here.rank() != Card::TWO_RANK
      } else {
        !here.follows(&self.slots[slot - 1])
      }
    });
    if let Some(start) = break_at {
      out.extend(start..end);
    }
  }

  /// Every slot that a reshuffle would touch, row by row.
  pub fn unsorted_slots(&self) -> Vec<usize> {
    let mut out = Vec::new();
    for row in 0..Board::ROW_COUNT {
      self.unsorted_slots_in_row(row, &mut out);
    }
    out
  }
}
