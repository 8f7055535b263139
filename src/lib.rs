//! A game-playing agent for the board game 'Connect 4'
//!
//! This agent uses a fixed-depth game tree search with alpha-beta pruning
//! to pick a strong move for any position. It is not a perfect solver: a
//! one-ply win/block check catches immediate tactics, and everything deeper
//! is ranked by a static window-counting evaluation.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_bot::{board::{Board, Player}, search::Engine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_moves("001122")?;
//! let mut engine = Engine::new();
//!
//! // three in a row on the bottom rank, the engine completes it
//! assert_eq!(engine.choose_move(&mut board, Player::One), 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod eval;

pub mod search;

pub mod bot;

pub mod game;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const WIN_LENGTH: usize = 4;

/// The fixed ply depth of the game tree search
pub const SEARCH_DEPTH: u32 = 7;

// ensure a winning run can fit on the board in every direction
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
const_assert!(SEARCH_DEPTH >= 1);
