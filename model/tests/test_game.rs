use addiction_model::{
  random::UnitRandom, Board, Game, GameError, Message, MoveError, Status,
};

/// Always draws the same value. `Fixed(0.999)` makes every shuffle a no-op.
#[derive(Debug, Clone)]
struct Fixed(f64);

impl UnitRandom for Fixed {
  fn unit(&mut self) -> f64 {
    self.0
  }
}

const STUCK_FREE: [u8; 52] = [
  51, 35, 40, 23, 41, 20, 28, 37, 19, 8, 47, 24, 34, 27, 9, 21, 39, 44, 33, 2,
  7, 38, 32, 46, 18, 16, 45, 31, 50, 26, 48, 10, 15, 1, 13, 43, 22, 6, 14, 49,
  5, 30, 4, 36, 11, 0, 12, 42, 17, 29, 25, 3,
];

const BLOCKED: [u8; 52] = [
  51, 0, 40, 23, 41, 20, 28, 37, 19, 8, 47, 24, 34, 27, 9, 21, 39, 44, 33, 5,
  7, 38, 32, 46, 18, 16, 45, 31, 50, 1, 48, 3, 15, 26, 13, 43, 22, 6, 14, 49,
  2, 30, 4, 36, 11, 35, 12, 42, 17, 29, 25, 10,
];

fn game_on(ids: &[u8], draw: f64) -> Game<Fixed> {
  Game::from_board(Board::from_ids(ids).unwrap(), Fixed(draw))
}

/// One move from a win: the king of hearts still has to slide left.
fn almost_won() -> Board {
  let ids = (0..4u8)
    .flat_map(|suit| {
      let row = (1..=12u8).map(move |rank| rank * 4 + suit).chain([suit]);
      let mut row = row.collect::<Vec<_>>();
      if suit == 0 {
        row.swap(11, 12);
      }
      row
    })
    .collect::<Vec<_>>();
  Board::from_ids(&ids).unwrap()
}

#[test]
fn test_new_game_state() {
  let game = Game::new(Some(5));
  assert_eq!(game.shuffles_left(), Game::<fastrand::Rng>::SHUFFLE_BUDGET);
  assert_eq!(game.shuffles_left(), 3);
  assert_eq!(game.movable_slots(), game.board().movable_slots());
  assert_eq!(game.status(), Status::InProgress);
}

#[test]
fn test_seeded_games_repeat() {
  let mut a = Game::new(Some(2024));
  let mut b = Game::new(Some(2024));
  assert_eq!(a.board(), b.board());

  a.shuffle().unwrap();
  b.shuffle().unwrap();
  assert_eq!(a.board(), b.board());
}

#[test]
fn test_win_after_final_move() {
  let mut game = Game::from_board(almost_won(), Fixed(0.5));
  assert_eq!(game.movable_slots(), &[12]);
  assert_eq!(game.status(), Status::InProgress);
  assert_eq!(game.message(), Message::ShufflesRemaining(3));

  assert_eq!(game.move_card(12), Ok(Status::Won));
  assert!(game.movable_slots().is_empty());
  assert_eq!(game.board().unsorted_slots(), Board::FINISHED_UNSORTED);
  assert_eq!(game.message(), Message::Won);
  assert_eq!(game.message().to_string(), "You won! Well done!");

  assert_eq!(game.move_card(12), Err(GameError::GameOver(Status::Won)));
  assert_eq!(game.shuffle(), Err(GameError::GameOver(Status::Won)));
  assert_eq!(game.shuffles_left(), 3);
}

#[test]
fn test_loss_when_stuck_without_shuffles() {
  let mut game = game_on(&BLOCKED, 0.999);
  assert!(game.movable_slots().is_empty());
  assert_eq!(game.status(), Status::InProgress);
  assert_eq!(game.message(), Message::MustShuffle);

  assert_eq!(game.shuffle(), Ok(Status::InProgress));
  assert_eq!(game.shuffle(), Ok(Status::InProgress));
  assert_eq!(game.shuffle(), Ok(Status::Lost));
  assert_eq!(game.shuffles_left(), 0);
  assert_eq!(game.message(), Message::Lost);

  assert_eq!(game.shuffle(), Err(GameError::GameOver(Status::Lost)));
  assert_eq!(game.move_card(3), Err(GameError::GameOver(Status::Lost)));
}

#[test]
fn test_shuffle_budget_only_goes_down() {
  let board = Board::from_ids(&STUCK_FREE).unwrap();
  let mut game = Game::from_board(board.clone(), Fixed(0.999));

  for left in (0..3).rev() {
    assert_eq!(game.shuffle(), Ok(Status::InProgress));
    assert_eq!(game.shuffles_left(), left);
  }
  assert_eq!(game.message(), Message::NoShufflesRemaining);
  assert_eq!(game.shuffle(), Err(GameError::NoShufflesLeft));
  assert_eq!(game.shuffles_left(), 0);

  // Nothing moved, since every draw kept its element in place.
  assert_eq!(game.board(), &board);
}

#[test]
fn test_shuffle_leaves_finished_prefixes_alone() {
  let mut ids = (0..4u8)
    .flat_map(|suit| (1..=12u8).map(move |rank| rank * 4 + suit).chain([suit]))
    .collect::<Vec<_>>();
  // Rows 0 and 1 now break where the swapped cards sit.
  ids.swap(5, 20);
  let board = Board::from_ids(&ids).unwrap();
  let unsorted = board.unsorted_slots();

  for seed in 0..30 {
    let mut game =
      Game::from_board(board.clone(), fastrand::Rng::with_seed(seed));
    if game.status() != Status::InProgress {
      continue;
    }
    game.shuffle().unwrap();
    for slot in 0..Board::SLOT_COUNT {
      if !unsorted.contains(&slot) {
        assert_eq!(game.board().slots()[slot], board.slots()[slot]);
      }
    }
    assert_eq!(game.movable_slots(), game.board().movable_slots());
  }
}

#[test]
fn test_move_rejects_unmovable_slots() {
  let mut game = game_on(&STUCK_FREE, 0.5);
  let before = game.board().clone();

  assert_eq!(
    game.move_card(0),
    Err(GameError::Move(MoveError::NotMovable { slot: 0 }))
  );
  assert_eq!(
    game.move_card(60),
    Err(GameError::Move(MoveError::SlotOutOfRange { slot: 60 }))
  );
  assert_eq!(game.board(), &before);
}

#[test]
fn test_moves_refresh_movable_slots() {
  let mut game = game_on(&STUCK_FREE, 0.5);
  assert_eq!(game.movable_slots(), &[32, 8, 7, 49]);
  assert!(game.is_movable(8));

  // The 5 of clubs (slot 8) slides next to the 4 of clubs.
  game.move_card(8).unwrap();
  assert_eq!(game.board().slots()[33].id(), 19);
  assert!(game.board().slots()[8].is_ace());
  assert_eq!(game.movable_slots(), game.board().movable_slots());
}

#[test]
fn test_new_game_restores_budget() {
  let mut game = Game::new(Some(11));
  game.shuffle().unwrap();
  game.shuffle().unwrap();
  assert_eq!(game.shuffles_left(), 1);

  let before = game.board().clone();
  game.new_game();
  assert_eq!(game.shuffles_left(), 3);
  assert_ne!(game.board(), &before);
  assert_ne!(game.status(), Status::Lost);
}

#[test]
fn test_message_text() {
  assert_eq!(
    Message::ShufflesRemaining(2).to_string(),
    "You can still shuffle the cards 2 times"
  );
  assert_eq!(
    Message::ShufflesRemaining(1).to_string(),
    "You can still shuffle the cards 1 time"
  );
  assert_eq!(
    Message::NoShufflesRemaining.to_string(),
    "You can no longer shuffle the cards"
  );
}
