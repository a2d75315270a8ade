use super::UnitRandom;

/// Fisher-Yates over the values held at `positions`.
///
/// Walks the position list from the back. At step `i` a partner `j` is drawn
/// uniformly from `0..=i` and the values at `positions[j]` and `positions[i]`
/// trade places. Slots not listed are never touched.
pub fn permute_positions<T, R>(
  items: &mut [T],
  positions: &[usize],
  rng: &mut R,
) where
  R: UnitRandom + ?Sized,
{
  for i in (0..positions.len()).rev() {
    let j = ((rng.unit() * (i + 1) as f64).floor() as usize).min(i);
    if j == i {
      continue;
    }
    items.swap(positions[j], positions[i]);
  }
}

pub fn permute_all<T, R>(items: &mut [T], rng: &mut R)
where
  R: UnitRandom + ?Sized,
{
  let positions = (0..items.len()).collect::<Vec<_>>();
  permute_positions(items, &positions, rng);
}
