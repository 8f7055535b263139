use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_bot::board::Player;
use connect4_bot::game::{Game, GameState};
use connect4_bot::search::Engine;
use connect4_bot::WIDTH;

mod display;
use display::draw_board;

fn main() -> Result<()> {
    let mut game = Game::new();
    let mut engine = Engine::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // game loop
    loop {
        draw_board(game.board()).expect("Failed to draw board!");

        match game.state() {
            GameState::Playing => {
                let to_move = game.to_move();
                let ai_turn = match to_move {
                    Player::One => ai_players.0,
                    Player::Two => ai_players.1,
                };

                let next_move =
                    // AI player
                    if ai_turn {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let nodes_before = engine.node_count;
                        let mut scratch = game.board().clone();
                        let best_move = engine.choose_move(&mut scratch, to_move);

                        println!(
                            "Best move: {} ({} nodes searched)",
                            best_move + 1,
                            engine.node_count - nodes_before
                        );
                        best_move

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            // columns are 1-indexed at the prompt
                            Ok(column @ 1..=WIDTH) => column - 1,
                            Ok(column) => {
                                println!("Column {} out of range", column);
                                continue;
                            }
                        }
                    };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
