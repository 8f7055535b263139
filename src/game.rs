//! Game state tracking and the bot match runner

use anyhow::{anyhow, Result};

use crate::board::{Board, Player};
use crate::bot::Bot;
use crate::win::is_winning_move;
use crate::WIDTH;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// A Connect 4 game in progress
///
/// Owns the board, tracks whose turn it is and whether the game is over.
/// All moves go through [`play_checked`], which validates the column,
/// applies the drop and updates the game state.
///
/// [`play_checked`]: #method.play_checked
pub struct Game {
    board: Board,
    to_move: Player,
    state: GameState,
    moves: Vec<usize>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            state: GameState::Playing,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The columns played so far, in order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Plays a move for the side to move, returning the new game state
    ///
    /// Errors if the game is already over or the column is full or out of
    /// range; the position is unchanged on error.
    pub fn play_checked(&mut self, column: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column >= WIDTH || !self.board.is_legal(column) {
            return Err(anyhow!("Invalid move, column {} full or out of range", column));
        }

        let player = self.to_move;
        let row = self.board.drop_piece(column, player)?;
        self.moves.push(column);

        if is_winning_move(&self.board, row, column, player) {
            self.state = match player {
                Player::One => GameState::PlayerOneWin,
                Player::Two => GameState::PlayerTwoWin,
            };
        } else if self.board.is_full() {
            self.state = GameState::Draw;
        }
        self.to_move = player.other();

        Ok(self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// How a bot match ended
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The given player completed four in a row
    Win(Player),
    Draw,
    /// The given player returned an illegal column and forfeited
    Forfeit(Player),
}

/// Result of a completed bot match
pub struct MatchResult {
    pub outcome: Outcome,
    /// The columns played, in order
    pub moves: Vec<usize>,
}

impl MatchResult {
    /// The winning player, if any (a forfeit counts for the other player)
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Win(player) => Some(player),
            Outcome::Forfeit(player) => Some(player.other()),
            Outcome::Draw => None,
        }
    }
}

/// Runs a full game between two bots, player one moving first
///
/// Each bot sees only a snapshot of the board. A bot returning an illegal
/// column immediately forfeits the match.
pub fn run_match<'a>(player_one: &'a mut dyn Bot, player_two: &'a mut dyn Bot) -> MatchResult {
    let mut game = Game::new();

    loop {
        match game.state() {
            GameState::Playing => {}
            GameState::PlayerOneWin => {
                return MatchResult {
                    outcome: Outcome::Win(Player::One),
                    moves: game.moves().to_vec(),
                }
            }
            GameState::PlayerTwoWin => {
                return MatchResult {
                    outcome: Outcome::Win(Player::Two),
                    moves: game.moves().to_vec(),
                }
            }
            GameState::Draw => {
                return MatchResult {
                    outcome: Outcome::Draw,
                    moves: game.moves().to_vec(),
                }
            }
        }

        let side = game.to_move();
        let bot = match side {
            Player::One => &mut *player_one,
            Player::Two => &mut *player_two,
        };
        let column = bot.choose_move(game.board(), side);

        if game.play_checked(column).is_err() {
            return MatchResult {
                outcome: Outcome::Forfeit(side),
                moves: game.moves().to_vec(),
            };
        }
    }
}
