//! The bot interface and the bundled bot implementations

use crate::board::{Board, Player};
use crate::search::{move_order, Engine};
use crate::win::is_winning_move;
use crate::WIDTH;

/// A Connect 4 playing bot
///
/// A bot is handed a read-only snapshot of the position and the identity it
/// is playing as, and must answer with a column index. Returning an illegal
/// column forfeits the game in the match runner.
pub trait Bot {
    /// Picks a column for `player` to play in the given position
    fn choose_move(&mut self, board: &Board, player: Player) -> usize;

    /// The bot's display name
    fn name(&self) -> &str;
}

/// The game tree search bot, wrapping an [`Engine`]
///
/// Each decision clones the snapshot into a scratch board owned by that one
/// call, so concurrent games never share mutable state.
///
/// [`Engine`]: ../search/struct.Engine.html
pub struct AlphaBetaBot {
    engine: Engine,
}

impl AlphaBetaBot {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    pub fn with_depth(depth: u32) -> Self {
        Self {
            engine: Engine::with_depth(depth),
        }
    }

    /// Total nodes searched across this bot's decisions so far
    pub fn node_count(&self) -> usize {
        self.engine.node_count
    }
}

impl Bot for AlphaBetaBot {
    fn choose_move(&mut self, board: &Board, player: Player) -> usize {
        let mut scratch = board.clone();
        self.engine.choose_move(&mut scratch, player)
    }

    fn name(&self) -> &str {
        "AlphaBetaBot"
    }
}

impl Default for AlphaBetaBot {
    fn default() -> Self {
        Self::new()
    }
}

/// A shallow heuristic bot: win, block, then prefer central columns that
/// don't hand the opponent an immediate winning reply
pub struct StrategicBot;

impl StrategicBot {
    pub fn new() -> Self {
        StrategicBot
    }

    fn winning_column(board: &mut Board, player: Player) -> Option<usize> {
        for column in 0..WIDTH {
            if !board.is_legal(column) {
                continue;
            }
            if let Ok(row) = board.drop_piece(column, player) {
                let wins = is_winning_move(board, row, column, player);
                board.undo(row, column);
                if wins {
                    return Some(column);
                }
            }
        }
        None
    }
}

impl Bot for StrategicBot {
    fn choose_move(&mut self, board: &Board, player: Player) -> usize {
        let mut scratch = board.clone();
        let opponent = player.other();

        if let Some(column) = Self::winning_column(&mut scratch, player) {
            return column;
        }
        if let Some(column) = Self::winning_column(&mut scratch, opponent) {
            return column;
        }

        // central columns first, skipping any move that lets the opponent
        // win on the very next turn
        for &column in move_order().iter() {
            if !board.is_legal(column) {
                continue;
            }
            if let Ok(row) = scratch.drop_piece(column, player) {
                let loses = Self::winning_column(&mut scratch, opponent).is_some();
                scratch.undo(row, column);
                if !loses {
                    return column;
                }
            }
        }

        // every move loses (or the board is full), play anything legal
        (0..WIDTH).find(|&column| board.is_legal(column)).unwrap_or(0)
    }

    fn name(&self) -> &str {
        "StrategicBot"
    }
}

impl Default for StrategicBot {
    fn default() -> Self {
        Self::new()
    }
}
