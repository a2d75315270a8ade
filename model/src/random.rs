mod permute;

/// Shuffle the values at an arbitrary set of positions in place.
pub use permute::permute_positions;
/// Shuffle a whole slice in place.
pub use permute::permute_all;

/// A source of uniform draws on `[0, 1)`.
///
/// Everything random in the game goes through this, so a seeded
/// [`fastrand::Rng`] replays a game exactly.
pub trait UnitRandom {
  fn unit(&mut self) -> f64;
}

impl UnitRandom for fastrand::Rng {
  fn unit(&mut self) -> f64 {
    self.f64()
  }
}
