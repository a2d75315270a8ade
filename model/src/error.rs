use thiserror::Error;

use crate::Status;

/// Problems building a [`crate::Board`] out of raw card ids.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
  #[error("a board holds {expected} cards, got {got}")]
  WrongLength { expected: usize, got: usize },

  #[error("card id {0} is out of range")]
  CardOutOfRange(u8),

  #[error("card id {0} appears more than once")]
  DuplicateCard(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
  #[error("slot {slot} does not exist")]
  SlotOutOfRange { slot: usize },

  #[error("the card in slot {slot} cannot move")]
  NotMovable { slot: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
  #[error(transparent)]
  Move(#[from] MoveError),

  #[error("no shuffles left")]
  NoShufflesLeft,

  #[error("the game is over ({0:?})")]
  GameOver(Status),
}

pub type GameResult<T> = Result<T, GameError>;
