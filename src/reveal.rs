use crate::{Board, GameError, Position};
use std::collections::HashSet;

/// Applies a reveal at `pos` and returns the resulting board together with
/// a flag that is true when the reveal hit a mine. The input board is left
/// untouched; callers swap in the returned snapshot.
pub fn reveal(board: &Board, pos: Position) -> Result<(Board, bool), GameError> {
    if !board.is_within_bounds(pos) {
        return Err(GameError::OutOfBounds(pos));
    }

    let mut next = board.clone();
    let target = *next.get_cell(pos)?;

    if target.is_revealed {
        return Ok((next, false));
    }

    if target.is_mine {
        reveal_all_mines(&mut next);
        return Ok((next, true));
    }

    // Frontier-batch flood fill; `is_revealed` doubles as the visited
    // mark, so every cell is processed at most once.
    let mut to_reveal = HashSet::from([pos]);

    while !to_reveal.is_empty() {
        let mut next_batch = HashSet::new();

        for &current in &to_reveal {
            let cell = match next.cells.get(&current) {
                Some(cell) => *cell,
                None => continue,
            };
            if cell.is_revealed {
                continue;
            }
            if let Some(cell) = next.cells.get_mut(&current) {
                cell.is_revealed = true;
            }

            // A zero cell has no mined neighbors, so the cascade can
            // continue through it; positive counts end their branch.
            if cell.adjacent_mines == 0 {
                for neighbor in current.neighbors() {
                    if next.is_within_bounds(neighbor) {
                        if let Ok(neighbor_cell) = next.get_cell(neighbor) {
                            if !neighbor_cell.is_revealed && !neighbor_cell.is_mine {
                                next_batch.insert(neighbor);
                            }
                        }
                    }
                }
            }
        }

        to_reveal = next_batch;
    }

    Ok((next, false))
}

fn reveal_all_mines(board: &mut Board) {
    for cell in board.cells.values_mut() {
        if cell.is_mine {
            cell.is_revealed = true;
        }
    }
}
