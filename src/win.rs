//! Win detection for a just-placed piece

use crate::board::{Board, Player};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

// (row, column) deltas for the four alignment axes:
// horizontal, vertical, diagonal down-right, diagonal down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether the piece just placed at (row, column) completes a run of
/// [`WIN_LENGTH`] for `player`
///
/// Counts contiguous same-player cells outward from the placed cell in both
/// senses along each axis. Only valid immediately after a drop — the rest of
/// the board is never scanned.
///
/// [`WIN_LENGTH`]: ../constant.WIN_LENGTH.html
pub fn is_winning_move(board: &Board, row: usize, column: usize, player: Player) -> bool {
    for &(dr, dc) in DIRECTIONS.iter() {
        // the placed cell itself
        let mut count = 1;
        for &sense in [1isize, -1].iter() {
            let mut r = row as isize + sense * dr;
            let mut c = column as isize + sense * dc;
            while r >= 0
                && r < HEIGHT as isize
                && c >= 0
                && c < WIDTH as isize
                && board.get(r as usize, c as usize) == Some(player)
            {
                count += 1;
                r += sense * dr;
                c += sense * dc;
            }
        }
        if count >= WIN_LENGTH {
            return true;
        }
    }
    false
}
