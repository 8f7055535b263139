use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH};

/// One of the two players. Empty cells are represented by `Option::None`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A Connect 4 position
///
/// Cells are stored row-major with row 0 at the top. Pieces only enter and
/// leave the board through [`drop_piece`] and [`undo`], so columns always
/// fill from the bottom up.
///
/// [`drop_piece`]: #method.drop_piece
/// [`undo`]: #method.undo
#[derive(Clone)]
pub struct Board {
    cells: [Option<Player>; WIDTH * HEIGHT],
    heights: [usize; WIDTH],
    num_moves: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            num_moves: 0,
        }
    }

    /// Builds a position from a string of 0-indexed column digits,
    /// alternating players starting with player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();

        let mut player = Player::One;
        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column < WIDTH => {
                    let _ = board.drop_piece(column, player)?;
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Returns the contents of the cell at (row, column)
    pub fn get(&self, row: usize, column: usize) -> Option<Player> {
        self.cells[column + WIDTH * row]
    }

    /// True if `column` has at least one empty cell
    pub fn is_legal(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    /// Drops a piece for `player` on top of the stack in `column`,
    /// returning the row it landed in
    ///
    /// Callers must check [`is_legal`] first; dropping into a full or
    /// out-of-range column is an error.
    ///
    /// [`is_legal`]: #method.is_legal
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 0 and {}",
                column,
                WIDTH - 1
            ));
        }
        if self.heights[column] >= HEIGHT {
            return Err(anyhow!("Invalid move, column {} full", column));
        }
        let row = HEIGHT - 1 - self.heights[column];
        self.cells[column + WIDTH * row] = Some(player);
        self.heights[column] += 1;
        self.num_moves += 1;
        Ok(row)
    }

    /// Reverses a speculative drop, clearing the cell it filled
    ///
    /// (row, column) must be exactly the coordinates returned by the
    /// matching [`drop_piece`] call.
    ///
    /// [`drop_piece`]: #method.drop_piece
    pub fn undo(&mut self, row: usize, column: usize) {
        debug_assert_eq!(row, HEIGHT - self.heights[column]);
        self.cells[column + WIDTH * row] = None;
        self.heights[column] -= 1;
        self.num_moves -= 1;
    }

    /// The number of pieces on the board
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// True if no column has an empty cell
    pub fn is_full(&self) -> bool {
        self.num_moves == WIDTH * HEIGHT
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
