use std::env;

use chess_core::board::{GameStatus, SearchParams};
use chess_core::engine::{Game, GameOptions};

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> T {
    args.get(idx)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("usage: self_play [plies=40] [seed=1] [depth=2] [threads=1]");
        return;
    }
    let plies: usize = parse_arg(&args, 1, 40);
    let seed: u64 = parse_arg(&args, 2, 1);
    let depth: u32 = parse_arg(&args, 3, 2);
    let threads: usize = parse_arg(&args, 4, 1);

    let mut game = Game::new(GameOptions {
        search: SearchParams {
            depth,
            seed: Some(seed),
            threads,
            ..SearchParams::default()
        },
        ..GameOptions::two_players()
    });

    for ply in 1..=plies {
        let color = game.to_move();
        match game.play_engine_move() {
            Ok((mv, status)) => {
                println!("{ply:>3}. {color}: {mv}");
                match status {
                    GameStatus::Checkmate { winner } => {
                        println!("Checkmate, {winner} wins");
                        return;
                    }
                    GameStatus::Check => println!("     {} is in check", game.to_move()),
                    GameStatus::Stalemate | GameStatus::Ongoing => {}
                }
            }
            Err(err) => {
                println!("{err}: stalemate");
                break;
            }
        }
    }
    println!("{}", game.board());
}
