//! Round-robin comparison of the bundled bots
//!
//! Plays every pairing of engine depths and the strategic bot with both
//! colour assignments. Games run in parallel; every game owns its own
//! board, so nothing is shared between concurrent searches.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use std::sync::mpsc::channel;
use std::thread;
use std::time::{Duration, Instant};

use connect4_bot::board::Player;
use connect4_bot::bot::{AlphaBetaBot, Bot, StrategicBot};
use connect4_bot::game::run_match;

#[derive(Copy, Clone, Eq, PartialEq)]
enum BotSpec {
    AlphaBeta(u32),
    Strategic,
}

impl BotSpec {
    fn build(self) -> Box<dyn Bot> {
        match self {
            BotSpec::AlphaBeta(depth) => Box::new(AlphaBetaBot::with_depth(depth)),
            BotSpec::Strategic => Box::new(StrategicBot::new()),
        }
    }

    fn label(self) -> String {
        match self {
            BotSpec::AlphaBeta(depth) => format!("AlphaBetaBot(depth {})", depth),
            BotSpec::Strategic => "StrategicBot".to_string(),
        }
    }
}

const LINEUP: [BotSpec; 5] = [
    BotSpec::AlphaBeta(1),
    BotSpec::AlphaBeta(3),
    BotSpec::AlphaBeta(5),
    BotSpec::AlphaBeta(7),
    BotSpec::Strategic,
];

fn main() -> Result<()> {
    let start = Instant::now();
    let mut next_time = start;

    // every ordered pairing, so each matchup is played with both colours
    let mut games = Vec::new();
    for (i, &one) in LINEUP.iter().enumerate() {
        for (j, &two) in LINEUP.iter().enumerate() {
            if i != j {
                games.push((i, j, one, two));
            }
        }
    }

    enum Message {
        // player one index, player two index, winner (if any)
        Finished((usize, usize, Option<Player>)),
        Done,
    }
    let (tx, rx) = channel();

    let progress = ProgressBar::new(games.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing matches: {bar:40.cyan/blue} {msg} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    thread::spawn(move || {
        games
            .par_iter()
            .for_each_with(tx.clone(), |tx, &(i, j, one, two)| {
                let mut player_one = one.build();
                let mut player_two = two.build();
                let result = run_match(&mut *player_one, &mut *player_two);

                tx.send(Message::Finished((i, j, result.winner()))).unwrap();
            });
        tx.send(Message::Done).unwrap();
    });

    // wins, draws, losses per lineup entry
    let mut tally = vec![(0usize, 0usize, 0usize); LINEUP.len()];

    let mut running = true;
    while running {
        match rx.recv()? {
            Message::Done => running = false,
            Message::Finished((i, j, winner)) => {
                match winner {
                    Some(Player::One) => {
                        tally[i].0 += 1;
                        tally[j].2 += 1;
                    }
                    Some(Player::Two) => {
                        tally[j].0 += 1;
                        tally[i].2 += 1;
                    }
                    None => {
                        tally[i].1 += 1;
                        tally[j].1 += 1;
                    }
                }
                progress.inc(1);
            }
        }
        if Instant::now() > next_time {
            progress.set_message(&format!(
                "({} / {})",
                progress.position(),
                progress.length()
            ));
            next_time += Duration::from_millis(100);
        }
    }
    progress.finish();

    println!(
        "\nAll matches complete in {:.1}s\n",
        start.elapsed().as_secs_f64()
    );
    println!("{:<22} {:>5} {:>6} {:>7}", "Bot", "Wins", "Draws", "Losses");
    for (spec, (wins, draws, losses)) in LINEUP.iter().zip(tally.iter()) {
        println!(
            "{:<22} {:>5} {:>6} {:>7}",
            spec.label(),
            wins,
            draws,
            losses
        );
    }

    Ok(())
}
