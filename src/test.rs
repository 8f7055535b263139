#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, Player};
    use crate::bot::{AlphaBetaBot, Bot, StrategicBot};
    use crate::eval::{evaluate, window_starts, THREE_SCORE};
    use crate::game::{run_match, Game, GameState, Outcome};
    use crate::search::{move_order, Engine, INF};
    use crate::win::is_winning_move;
    use crate::{HEIGHT, WIDTH};

    #[test]
    pub fn board_drop_and_undo() -> Result<()> {
        let mut board = Board::new();

        let row = board.drop_piece(3, Player::One)?;
        assert_eq!(row, HEIGHT - 1);
        assert_eq!(board.get(row, 3), Some(Player::One));
        assert_eq!(board.num_moves(), 1);

        let row2 = board.drop_piece(3, Player::Two)?;
        assert_eq!(row2, HEIGHT - 2);

        board.undo(row2, 3);
        assert_eq!(board.get(row2, 3), None);
        assert_eq!(board.num_moves(), 1);

        // the next drop lands back in the freed cell
        assert_eq!(board.drop_piece(3, Player::Two)?, row2);
        Ok(())
    }

    #[test]
    pub fn board_full_column_is_an_error() -> Result<()> {
        let mut board = Board::new();
        for i in 0..HEIGHT {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            board.drop_piece(0, player)?;
        }
        assert!(!board.is_legal(0));
        assert!(board.drop_piece(0, Player::One).is_err());
        assert!(board.drop_piece(WIDTH, Player::One).is_err());
        Ok(())
    }

    #[test]
    pub fn board_from_moves_rejects_garbage() {
        assert!(Board::from_moves("012x").is_err());
        assert!(Board::from_moves("9").is_err());
    }

    #[test]
    pub fn win_detection_horizontal() -> Result<()> {
        let mut board = Board::new();
        for column in 0..4 {
            board.drop_piece(column, Player::One)?;
        }
        // the completed run reads as a win from every cell in it
        for column in 0..4 {
            assert!(is_winning_move(&board, HEIGHT - 1, column, Player::One));
        }
        assert!(!is_winning_move(&board, HEIGHT - 1, 0, Player::Two));
        Ok(())
    }

    #[test]
    pub fn win_detection_three_is_not_a_win() -> Result<()> {
        let mut board = Board::new();
        for column in 0..3 {
            board.drop_piece(column, Player::One)?;
        }
        for column in 0..3 {
            assert!(!is_winning_move(&board, HEIGHT - 1, column, Player::One));
        }
        Ok(())
    }

    #[test]
    pub fn win_detection_vertical_and_diagonal() -> Result<()> {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(6, Player::Two)?;
        }
        assert!(is_winning_move(&board, HEIGHT - 4, 6, Player::Two));

        // staircase for an up-right diagonal of player one
        let mut board = Board::new();
        for column in 0..4 {
            for _ in 0..column {
                board.drop_piece(column, Player::Two)?;
            }
            let row = board.drop_piece(column, Player::One)?;
            assert_eq!(row, HEIGHT - 1 - column);
        }
        assert!(is_winning_move(&board, HEIGHT - 4, 3, Player::One));
        assert!(is_winning_move(&board, HEIGHT - 1, 0, Player::One));
        Ok(())
    }

    #[test]
    pub fn evaluator_window_enumeration_is_exhaustive() {
        // 6 rows of 4 horizontal windows, 3x7 vertical, 3x4 per diagonal
        let expected = (HEIGHT * (WIDTH - 3)) + ((HEIGHT - 3) * WIDTH) + 2 * ((HEIGHT - 3) * (WIDTH - 3));
        assert_eq!(expected, 69);
        assert_eq!(window_starts().count(), expected);
    }

    #[test]
    pub fn evaluator_scores_open_threes() -> Result<()> {
        let mut board = Board::new();
        for column in 0..3 {
            board.drop_piece(column, Player::One)?;
        }
        // exactly one window holds all three pieces and no opponent
        assert_eq!(evaluate(&board, Player::One), THREE_SCORE);
        assert_eq!(evaluate(&board, Player::Two), -THREE_SCORE);
        Ok(())
    }

    #[test]
    pub fn evaluator_ignores_dead_windows() -> Result<()> {
        let mut board = Board::new();
        for column in 0..3 {
            board.drop_piece(column, Player::One)?;
        }
        // the blocked run no longer scores for either side
        board.drop_piece(3, Player::Two)?;
        assert_eq!(evaluate(&board, Player::One), 0);
        assert_eq!(evaluate(&board, Player::Two), 0);
        Ok(())
    }

    #[test]
    pub fn move_order_is_center_out() {
        assert_eq!(move_order(), [3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    pub fn engine_takes_the_immediate_win() -> Result<()> {
        for &depth in [1, 7].iter() {
            let mut board = Board::new();
            for column in 0..3 {
                board.drop_piece(column, Player::One)?;
            }
            let mut engine = Engine::with_depth(depth);
            assert_eq!(engine.choose_move(&mut board, Player::One), 3);
        }
        Ok(())
    }

    #[test]
    pub fn engine_blocks_the_opponent() -> Result<()> {
        let mut board = Board::new();
        for column in 4..7 {
            board.drop_piece(column, Player::Two)?;
        }
        // player one has no win of their own, so the threat must be blocked
        let mut engine = Engine::new();
        assert_eq!(engine.choose_move(&mut board, Player::One), 3);
        Ok(())
    }

    #[test]
    pub fn engine_restores_the_board() -> Result<()> {
        let mut board = Board::from_moves("325601")?;
        let before: Vec<_> = (0..HEIGHT)
            .flat_map(|r| (0..WIDTH).map(move |c| (r, c)))
            .map(|(r, c)| board.get(r, c))
            .collect();

        let mut engine = Engine::with_depth(5);
        engine.choose_move(&mut board, Player::One);

        let after: Vec<_> = (0..HEIGHT)
            .flat_map(|r| (0..WIDTH).map(move |c| (r, c)))
            .map(|(r, c)| board.get(r, c))
            .collect();
        assert_eq!(before, after);
        Ok(())
    }

    // full-width negamax with no pruning, for the equivalence check below
    fn plain_negamax(board: &mut Board, depth: u32, to_move: Player, perspective: Player) -> i32 {
        if depth == 0 {
            let sign = if to_move == perspective { 1 } else { -1 };
            return sign * evaluate(board, perspective);
        }
        let mut best = -INF;
        let mut any_legal = false;
        for &column in move_order().iter() {
            if !board.is_legal(column) {
                continue;
            }
            any_legal = true;
            let row = board.drop_piece(column, to_move).unwrap();
            let score = -plain_negamax(board, depth - 1, to_move.other(), perspective);
            board.undo(row, column);
            if score > best {
                best = score;
            }
        }
        if any_legal {
            best
        } else {
            0
        }
    }

    fn plain_choose(board: &mut Board, player: Player, depth: u32) -> usize {
        let mut best = 0;
        let mut best_score = -INF - 1;
        for &column in move_order().iter() {
            if !board.is_legal(column) {
                continue;
            }
            let row = board.drop_piece(column, player).unwrap();
            let score = -plain_negamax(board, depth - 1, player.other(), player);
            board.undo(row, column);
            if score > best_score {
                best_score = score;
                best = column;
            }
        }
        best
    }

    #[test]
    pub fn pruning_never_changes_the_decision() -> Result<()> {
        // quiet positions with no one-ply tactics for either player
        let positions = ["", "3", "34", "0356", "251", "325601"];
        for moves in positions.iter() {
            for &depth in [3, 4, 5].iter() {
                let mut board = Board::from_moves(moves)?;
                let mut engine = Engine::with_depth(depth);
                let pruned = engine.choose_move(&mut board, Player::One);
                let unpruned = plain_choose(&mut board, Player::One, depth);
                assert_eq!(
                    pruned, unpruned,
                    "divergence at depth {} after moves '{}'",
                    depth, moves
                );
            }
        }
        Ok(())
    }

    #[test]
    pub fn full_board_is_a_draw_at_any_depth() -> Result<()> {
        let mut board = Board::new();
        for column in 0..WIDTH {
            for i in 0..HEIGHT {
                let player = if (column + i) % 2 == 0 {
                    Player::One
                } else {
                    Player::Two
                };
                board.drop_piece(column, player)?;
            }
        }
        assert!(board.is_full());

        let mut engine = Engine::new();
        for &depth in [1, 3, 7].iter() {
            assert_eq!(
                engine.negamax(&mut board, depth, -INF, INF, Player::One, Player::One),
                0
            );
        }
        // the defensive fallback fires rather than erroring outward
        assert_eq!(engine.choose_move(&mut board, Player::One), 0);
        Ok(())
    }

    #[test]
    pub fn opening_move_is_the_center() {
        let mut board = Board::new();
        let mut engine = Engine::new();
        assert_eq!(engine.choose_move(&mut board, Player::One), 3);
    }

    #[test]
    pub fn strategic_bot_wins_and_blocks() -> Result<()> {
        let mut bot = StrategicBot::new();

        let mut board = Board::new();
        for column in 0..3 {
            board.drop_piece(column, Player::One)?;
        }
        assert_eq!(bot.choose_move(&board, Player::One), 3);

        let mut board = Board::new();
        for column in 4..7 {
            board.drop_piece(column, Player::Two)?;
        }
        assert_eq!(bot.choose_move(&board, Player::One), 3);
        Ok(())
    }

    #[test]
    pub fn strategic_bot_avoids_handing_over_the_win() -> Result<()> {
        let mut board = Board::new();
        // player two's row-four run on columns 4-6 completes at (4,3),
        // which only becomes reachable if column 3 gets filled
        board.drop_piece(4, Player::One)?;
        board.drop_piece(4, Player::Two)?;
        board.drop_piece(5, Player::Two)?;
        board.drop_piece(5, Player::Two)?;
        board.drop_piece(6, Player::One)?;
        board.drop_piece(6, Player::Two)?;

        let mut bot = StrategicBot::new();
        // the center column is preferred but loses on the spot; the next
        // center-out column is safe
        assert_eq!(bot.choose_move(&board, Player::One), 2);
        Ok(())
    }

    #[test]
    pub fn game_tracks_wins_and_turns() -> Result<()> {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::One);

        // player one stacks column 0, player two column 1
        for _ in 0..3 {
            assert_eq!(game.play_checked(0)?, GameState::Playing);
            assert_eq!(game.play_checked(1)?, GameState::Playing);
        }
        assert_eq!(game.play_checked(0)?, GameState::PlayerOneWin);
        // no moves are accepted after the game ends
        assert!(game.play_checked(2).is_err());
        assert_eq!(game.moves().len(), 7);
        Ok(())
    }

    struct ColumnBot(usize);

    impl Bot for ColumnBot {
        fn choose_move(&mut self, _board: &Board, _player: Player) -> usize {
            self.0
        }
        fn name(&self) -> &str {
            "ColumnBot"
        }
    }

    #[test]
    pub fn match_runner_forfeits_illegal_moves() {
        let mut one = ColumnBot(0);
        let mut two = ColumnBot(0);
        let result = run_match(&mut one, &mut two);

        // column 0 fills after six moves, the seventh forfeits player one
        assert_eq!(result.outcome, Outcome::Forfeit(Player::One));
        assert_eq!(result.winner(), Some(Player::Two));
        assert_eq!(result.moves.len(), 6);
    }

    #[test]
    pub fn match_runner_completes_a_real_game() {
        let mut one = AlphaBetaBot::with_depth(3);
        let mut two = StrategicBot::new();
        let result = run_match(&mut one, &mut two);

        assert!(result.moves.len() <= WIDTH * HEIGHT);
        match result.outcome {
            Outcome::Forfeit(_) => panic!("neither bot should forfeit"),
            Outcome::Win(_) | Outcome::Draw => {}
        }
        assert!(one.node_count() > 0);
    }
}
