//! Fixed-depth negamax search with alpha-beta pruning

use crate::board::{Board, Player};
use crate::eval::evaluate;
use crate::win::is_winning_move;
use crate::{SEARCH_DEPTH, WIDTH};

/// Root search window bound, far outside any reachable evaluation
pub const INF: i32 = 1_000_000_000;

/// Returns an array ordering the columns from the middle outwards, as
/// the middle columns participate in more winning windows
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (1 - i % 2) * (i / 2) - (i % 2) * (i / 2 + 1);
        i += 1;
    }
    move_order
}

/// A depth-limited Connect 4 search engine
///
/// # Notes
/// The engine first probes every column for a one-ply win or forced block,
/// then falls back to a negamax search to a fixed ply depth, ranking leaf
/// positions with the static evaluator. Wins that occur inside the tree
/// before the depth horizon are not detected as terminal; they surface only
/// through the evaluator's large completed-window reward at the leaves.
/// Downstream bot rankings depend on this exact behaviour, so it is kept
/// as-is rather than sharpened.
///
/// The engine holds no per-position state: the board is borrowed, mutated
/// in place while exploring and fully restored before every return.
pub struct Engine {
    depth: u32,
    move_order: [usize; WIDTH],

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    /// Creates an engine searching to the standard depth
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    /// Creates an engine searching to a custom ply depth (at least 1)
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            move_order: move_order(),
            node_count: 0,
        }
    }

    /// The ply depth this engine searches to
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Picks a column for `player` to play
    ///
    /// The board is mutated during the search but restored to its original
    /// contents before returning. If the board has no legal column at all
    /// (the game should already be over), column 0 is returned rather than
    /// an error, as the caller has no recovery path.
    pub fn choose_move(&mut self, board: &mut Board, player: Player) -> usize {
        self.node_count += 1;
        let opponent = player.other();
        let move_order = self.move_order;

        // a provable one-ply win beats anything the deeper search can find
        for &column in move_order.iter() {
            if !board.is_legal(column) {
                continue;
            }
            if let Ok(row) = board.drop_piece(column, player) {
                let wins = is_winning_move(board, row, column, player);
                board.undo(row, column);
                if wins {
                    return column;
                }
            }
        }

        // block the opponent's one-ply win before searching deeper
        for &column in move_order.iter() {
            if !board.is_legal(column) {
                continue;
            }
            if let Ok(row) = board.drop_piece(column, opponent) {
                let wins = is_winning_move(board, row, column, opponent);
                board.undo(row, column);
                if wins {
                    return column;
                }
            }
        }

        let mut best: Option<usize> = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for &column in move_order.iter() {
            if !board.is_legal(column) {
                continue;
            }
            if let Ok(row) = board.drop_piece(column, player) {
                // the search window is flipped for the other player
                let score = -self.negamax(board, self.depth - 1, -beta, -alpha, opponent, player);
                board.undo(row, column);

                if score > best_score {
                    best_score = score;
                    best = Some(column);
                }
                // tighten alpha for the remaining siblings; the root never
                // cuts on beta as every child must be examined
                if best_score > alpha {
                    alpha = best_score;
                }
            }
        }

        match best {
            Some(column) => column,
            // no candidate was evaluated, fall back to anything legal
            None => (0..WIDTH).find(|&column| board.is_legal(column)).unwrap_or(0),
        }
    }

    /// Performs the game tree search
    ///
    /// Returns the score of the position for `perspective` under the negamax
    /// sign convention: positive means good for the player to move.
    pub(crate) fn negamax(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        to_move: Player,
        perspective: Player,
    ) -> i32 {
        self.node_count += 1;
        if depth == 0 {
            // reconcile the perspective-fixed evaluator with the
            // negamax sign convention
            let sign = if to_move == perspective { 1 } else { -1 };
            return sign * evaluate(board, perspective);
        }

        let mut best = -INF;
        let mut any_legal = false;
        let move_order = self.move_order;

        for &column in move_order.iter() {
            if !board.is_legal(column) {
                continue;
            }
            any_legal = true;
            if let Ok(row) = board.drop_piece(column, to_move) {
                let score = -self.negamax(
                    board,
                    depth - 1,
                    -beta,
                    -alpha,
                    to_move.other(),
                    perspective,
                );
                board.undo(row, column);

                if score > best {
                    best = score;
                }
                if best > alpha {
                    alpha = best;
                }
                // a perfect opponent will never steer into this branch
                if alpha >= beta {
                    return alpha;
                }
            }
        }

        // a full board mid-recursion is a draw, not a loss
        if any_legal {
            best
        } else {
            0
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
