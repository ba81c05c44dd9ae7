use minesweeper_engine::{Game, GameError, GameState, Position};
use std::io::{self, Write};

const GRID_SIZE: u32 = 20;
const MINE_COUNT: u32 = 50;

fn main() {
    match run_game() {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn run_game() -> Result<(), GameError> {
    let mut game = Game::new(GRID_SIZE, MINE_COUNT)?;

    loop {
        while game.state() == GameState::Playing {
            print_board(&game);

            if let Some(pos) = read_click(&game) {
                game.click(pos)?;
            }
        }

        print_board(&game);
        match game.state() {
            GameState::Won => println!("Congratulations! You won!"),
            GameState::Lost => println!("Game Over!"),
            GameState::Playing => unreachable!(),
        }

        if !read_play_again() {
            break;
        }
        game.reset()?;
    }

    Ok(())
}

fn print_board(game: &Game) {
    let size = game.size();

    // Print column numbers
    print!("   ");
    for col in 0..size {
        print!("{} ", col % 10);
    }
    println!();

    // Print rows
    for row in 0..size {
        print!("{:>2} ", row);
        for col in 0..size {
            let pos = Position::new(row as i32, col as i32);
            let cell = game.get_cell(pos).unwrap();
            if !cell.is_revealed {
                print!("□ ");
            } else if cell.is_mine {
                print!("* ");
            } else if cell.adjacent_mines == 0 {
                print!("  ");
            } else {
                print!("{} ", cell.adjacent_mines);
            }
        }
        println!();
    }
}

fn read_click(game: &Game) -> Option<Position> {
    print!("Enter cell to reveal (row col): ");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).ok()?;

    let mut parts = input.split_whitespace();

    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;

    let pos = Position::new(row, col);

    if game.get_cell(pos).is_err() {
        println!("Position out of bounds");
        return None;
    }

    Some(pos)
}

fn read_play_again() -> bool {
    print!("Play again? (y/n): ");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim(), "y" | "Y")
}
