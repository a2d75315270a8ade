use addiction_model::{Board, Game, GameError};
use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "addiction", about = "Addiction Solitaire in the terminal")]
struct Cli {
  /// Seed for the deal and every reshuffle after it.
  #[arg(long, env = "ADDICTION_SEED")]
  seed: Option<u64>,

  /// Log filter, same syntax as RUST_LOG. Logs go to stderr.
  #[arg(long)]
  log: Option<String>,
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.log.as_deref());

  let mut game = Game::new(cli.seed);
  let mut rl = rustyline::DefaultEditor::new().unwrap();

  println!("Welcome to Addiction Solitaire.");
  println!("Sort every row from 2 to K in a single suit.");
  println!("- <number>: move the card in that slot (movable cards have a *)");
  println!("- s: shuffle the cards that are not in place yet");
  println!("- n: new game");
  println!("- q: quit");
  println!();

  loop {
    print_game(&game);
    println!();

    let line = match rl.readline("> ") {
      Ok(it) => it,
      Err(_) => break,
    };
    let res = match line.trim() {
      "q" => break,
      "n" => {
        game.new_game();
        Ok(())
      }
      "s" => game.shuffle().map(|_| ()),
      other => match other.parse::<usize>() {
        Ok(slot) => game.move_card(slot).map(|_| ()),
        Err(_) => {
          println!("type a slot number, s, n or q");
          continue;
        }
      },
    };
    match res {
      Ok(()) => {}
      Err(GameError::GameOver(_)) => {
        println!("This game is over. Type n to deal a new one.")
      }
      Err(ono) => println!("You can't do that! {}", ono),
    }
  }
}

fn init_logging(filter: Option<&str>) {
  let filter = match filter {
    Some(it) => EnvFilter::new(it),
    None => EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("warn")),
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

fn print_game(game: &Game) {
  let board = game.board();
  let rows = (0..Board::ROW_COUNT)
    .map(|row| {
      let cells = Board::row_slots(row)
        .map(|slot| {
          let card = &board.slots()[slot];
          let shown = if card.is_ace() {
            "..".to_string()
          } else {
            card.to_string()
          };
          let mark = if game.is_movable(slot) { '*' } else { ' ' };
          format!("{:>2}:{:>3}{}", slot, shown, mark)
        })
        .join(" ");
      format!("{}. {}", row + 1, cells)
    })
    .join("\n");

  println!("{}", rows);
  println!("{}", game.message());
}
