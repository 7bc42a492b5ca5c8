use std::io::{self, BufRead, Write};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chess_rules::config::EngineConfig;
use chess_rules::uci::{go_command, parse_bestmove, position_command};
use chess_rules::{Color, Game, GameStatus};

const HELP: &str = "\
commands:
  e2e4 | e2 e4        play a move
  moves <square>      list legal destinations
  fen                 print the position in FEN
  engine              print the UCI commands for an external engine
  bestmove <move>     apply an engine reply
  history             list moves played so far
  reset               start a new game
  quit";

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut fen: Option<String> = None;
    let mut engine = EngineConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--fen" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--fen requires a FEN string");
                    std::process::exit(2);
                };
                fen = Some(v.clone());
                i += 2;
            }
            "--depth" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--depth requires an integer argument");
                    std::process::exit(2);
                };
                engine = match v.parse::<u32>() {
                    Ok(d) => engine.with_depth(d),
                    Err(e) => {
                        eprintln!("invalid --depth {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            "--movetime" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--movetime requires milliseconds");
                    std::process::exit(2);
                };
                engine = match v.parse::<u64>() {
                    Ok(ms) => engine.with_move_time_ms(Some(ms)),
                    Err(e) => {
                        eprintln!("invalid --movetime {v}: {e}");
                        std::process::exit(2);
                    }
                };
                i += 2;
            }
            x => {
                eprintln!("Unknown option: {x}");
                eprintln!("Usage: play [--fen <FEN>] [--depth <N>] [--movetime <MS>]");
                std::process::exit(2);
            }
        }
    }

    let mut game = match fen.as_deref().map(Game::from_fen) {
        None => Game::new(),
        Some(Ok(g)) => g,
        Some(Err(e)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    println!("{HELP}\n");
    show(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{HELP}"),
            ["fen"] => println!("{}", game.to_fen()),
            ["history"] => {
                let moves: Vec<String> = game.history().iter().map(|m| m.to_string()).collect();
                println!("{}", moves.join(" "));
            }
            ["reset"] => {
                game.reset();
                show(&game);
            }
            ["engine"] => {
                println!("{}", position_command(&game.to_fen()));
                println!("{}", go_command(&engine));
            }
            ["moves", sq] => match game.legal_moves_at(sq) {
                Ok(set) => {
                    let dests: Vec<String> = set.iter().map(|s| s.to_string()).collect();
                    println!("{sq}: {}", dests.join(" "));
                }
                Err(e) => println!("{e}"),
            },
            ["bestmove", ..] => match parse_bestmove(&line) {
                Ok(Some(mv)) => {
                    if game.make_move(mv.from, mv.to) {
                        show(&game);
                    } else {
                        println!("engine move {mv} is illegal here");
                    }
                }
                Ok(None) => println!("engine has no move"),
                Err(e) => println!("{e}"),
            },
            [from, to] => match game.play(from, to) {
                Ok(()) => show(&game),
                Err(e) => println!("{e}"),
            },
            [mv] => match game.play_uci(mv) {
                Ok(_) => show(&game),
                Err(e) => println!("{e}"),
            },
            _ => println!("unrecognised input; type 'help'"),
        }
        let _ = io::stdout().flush();
    }
}

fn show(game: &Game) {
    println!("{}\n", game.position());
    let side = match game.side_to_move() {
        Color::White => "White",
        Color::Black => "Black",
    };
    match game.status() {
        GameStatus::Ongoing => println!("{side} to move"),
        GameStatus::Check => println!("{side} to move, in check"),
        GameStatus::Checkmate => {
            let winner = match game.side_to_move() {
                Color::White => "Black",
                Color::Black => "White",
            };
            println!("Checkmate. {winner} wins");
        }
        GameStatus::Stalemate => println!("Stalemate"),
    }
}
