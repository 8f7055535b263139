//! Static position evaluation
//!
//! Scores a board by sliding a window of [`WIN_LENGTH`] cells along every
//! alignment axis. A window containing pieces of only one player is worth
//! that player's piece count (heavily weighted at 4 and 3); a window
//! containing both players' pieces can never be completed and is worth
//! nothing. The result is a relative ranking signal for leaf nodes, not a
//! calibrated win probability.
//!
//! [`WIN_LENGTH`]: ../constant.WIN_LENGTH.html

use crate::board::{Board, Player};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// Score of a completed window of 4
pub const WIN_SCORE: i32 = 100_000;

/// Score of a window holding 3 pieces and an empty cell
pub const THREE_SCORE: i32 = 100;

// (row, column) deltas for the four alignment axes
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Every (row, column, direction) triple starting a window that fits on the
/// board. 69 windows for the standard 6x7 board.
pub(crate) fn window_starts() -> impl Iterator<Item = (usize, usize, (isize, isize))> {
    (0..HEIGHT).flat_map(|row| {
        (0..WIDTH).flat_map(move |column| {
            DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
                let end_row = row as isize + dr * (WIN_LENGTH as isize - 1);
                let end_column = column as isize + dc * (WIN_LENGTH as isize - 1);
                if end_row >= 0
                    && end_row < HEIGHT as isize
                    && end_column >= 0
                    && end_column < WIDTH as isize
                {
                    Some((row, column, (dr, dc)))
                } else {
                    None
                }
            })
        })
    })
}

fn window_reward(count: usize) -> i32 {
    match count {
        c if c == WIN_LENGTH => WIN_SCORE,
        c if c == WIN_LENGTH - 1 => THREE_SCORE,
        _ => 0,
    }
}

/// Heuristic score of `board` from `perspective`'s point of view
///
/// Independent of whose turn it is to move. Positive favours `perspective`,
/// negative favours the opponent.
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    let opponent = perspective.other();
    let mut score = 0;

    for (row, column, (dr, dc)) in window_starts() {
        let mut mine = 0;
        let mut theirs = 0;
        for k in 0..WIN_LENGTH as isize {
            let cell = board.get(
                (row as isize + dr * k) as usize,
                (column as isize + dc * k) as usize,
            );
            if cell == Some(perspective) {
                mine += 1;
            } else if cell == Some(opponent) {
                theirs += 1;
            }
        }
        if theirs == 0 {
            score += window_reward(mine);
        } else if mine == 0 {
            score -= window_reward(theirs);
        }
    }
    score
}
