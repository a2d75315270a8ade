use std::fmt::Display;

use fastrand::Rng;
use getset::{CopyGetters, Getters};

use crate::{random::UnitRandom, Board, GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
  InProgress,
  Won,
  Lost,
}

impl Status {
  pub fn is_over(&self) -> bool {
    match self {
      Status::InProgress => false,
      Status::Won | Status::Lost => true,
    }
  }
}

/// The line of text shown under the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
  ShufflesRemaining(u8),
  NoShufflesRemaining,
  /// Nothing can move, but a shuffle is still available.
  MustShuffle,
  Won,
  Lost,
}

impl Display for Message {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Message::ShufflesRemaining(1) => {
        f.write_str("You can still shuffle the cards 1 time")
      }
      Message::ShufflesRemaining(n) => {
        write!(f, "You can still shuffle the cards {} times", n)
      }
      Message::NoShufflesRemaining => {
        f.write_str("You can no longer shuffle the cards")
      }
      Message::MustShuffle => {
        f.write_str("No card can move: you must shuffle the cards")
      }
      Message::Won => f.write_str("You won! Well done!"),
      Message::Lost => {
        f.write_str("You could not place every card... Try again!")
      }
    }
  }
}

/// One game, from the deal to a win or a loss.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Game<R = Rng> {
  #[getset(get = "pub")]
  board: Board,
  /// Recomputed after every change to the board.
  movable: Vec<usize>,
  #[getset(get_copy = "pub")]
  shuffles_left: u8,
  rng: R,
}

impl Game<Rng> {
  pub fn new(seed: Option<u64>) -> Self {
    let rng = match seed {
      Some(seed) => Rng::with_seed(seed),
      None => Rng::new(),
    };
    Self::with_rng(rng)
  }
}

impl<R: UnitRandom> Game<R> {
  pub const SHUFFLE_BUDGET: u8 = 3;

  pub fn with_rng(mut rng: R) -> Self {
    let board = Board::dealt(&mut rng);
    Self::from_board(board, rng)
  }

  /// Start a game from a given layout, with the full shuffle budget.
  pub fn from_board(board: Board, rng: R) -> Self {
    let mut game = Self {
      board,
      movable: Vec::new(),
      shuffles_left: Self::SHUFFLE_BUDGET,
      rng,
    };
    game.refresh();
    game
  }

  /// Throw the current game away and deal a new one.
  pub fn new_game(&mut self) -> Status {
    self.board = Board::dealt(&mut self.rng);
    self.shuffles_left = Self::SHUFFLE_BUDGET;
    self.refresh()
  }

  pub fn movable_slots(&self) -> &[usize] {
    &self.movable
  }

  pub fn is_movable(&self, slot: usize) -> bool {
    self.movable.contains(&slot)
  }

  pub fn status(&self) -> Status {
    if !self.movable.is_empty() {
      Status::InProgress
    } else if self.board.is_finished() {
      Status::Won
    } else if self.shuffles_left == 0 {
      Status::Lost
    } else {
      Status::InProgress
    }
  }

  pub fn message(&self) -> Message {
    match self.status() {
      Status::Won => Message::Won,
      Status::Lost => Message::Lost,
      Status::InProgress if self.movable.is_empty() => Message::MustShuffle,
      Status::InProgress if self.shuffles_left == 0 => {
        Message::NoShufflesRemaining
      }
      Status::InProgress => Message::ShufflesRemaining(self.shuffles_left),
    }
  }

  /// Move the card in `slot` into the empty slot it belongs in.
  pub fn move_card(&mut self, slot: usize) -> GameResult<Status> {
    self.ensure_playing()?;
    self.board.move_card(slot)?;
    Ok(self.refresh())
  }

  /// Reshuffle every card that is not yet in place.
  ///
  /// This costs one shuffle even if every card is already in place.
  pub fn shuffle(&mut self) -> GameResult<Status> {
    self.ensure_playing()?;
    if self.shuffles_left == 0 {
      return Err(GameError::NoShufflesLeft);
    }
    self.board.shuffle_unsorted(&mut self.rng);
    self.shuffles_left -= 1;
    tracing::debug!("{} shuffles left", self.shuffles_left);
    Ok(self.refresh())
  }

  fn ensure_playing(&self) -> GameResult<()> {
    match self.status() {
      Status::InProgress => Ok(()),
      over => Err(GameError::GameOver(over)),
    }
  }

  fn refresh(&mut self) -> Status {
    self.movable = self.board.movable_slots();
    let status = self.status();
    tracing::trace!("movable slots: {:?}", &self.movable);
    if status.is_over() {
      tracing::info!("game over: {:?}", status);
    }
    status
  }
}
