mod engine;
mod game;
mod term;

use std::{env, process::exit};

pub type BoardInt = i16;
pub type Coords = (BoardInt, BoardInt);

const DEFAULT_ROWS: BoardInt = 10;
const DEFAULT_COLUMNS: BoardInt = 10;

fn main() {
    let (rows, columns) = match parse_dimensions(env::args().skip(1)) {
        Ok(dims) => dims,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Usage: gridsnake [ROWS COLUMNS]");
            exit(1);
        }
    };

    let mut game = game::SnakeGame::new(rows, columns);

    // The game loop takes care of exiting cleanly on CTRL+C
    game.run();
}

fn parse_dimensions(mut args: impl Iterator<Item = String>) -> Result<Coords, String> {
    let rows = match args.next() {
        None => return Ok((DEFAULT_ROWS, DEFAULT_COLUMNS)),
        Some(arg) => parse_dimension(&arg)?,
    };
    let columns = match args.next() {
        None => return Err(String::from("Expected both ROWS and COLUMNS")),
        Some(arg) => parse_dimension(&arg)?,
    };

    if rows < 1 {
        return Err(format!("ROWS must be at least 1, got {}", rows));
    }
    // Initial food placement sits 4 cells in from the right edge
    if columns < 4 {
        return Err(format!("COLUMNS must be at least 4, got {}", columns));
    }

    Ok((rows, columns))
}

fn parse_dimension(arg: &str) -> Result<BoardInt, String> {
    arg.parse().map_err(|_| format!("Not a valid dimension: {}", arg))
}
