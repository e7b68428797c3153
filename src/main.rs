//! Terminal driver: perft counts, search and engine self-play.
//!
//! Usage:
//!   bitchess perft <depth> [fen]
//!   bitchess divide <depth> [fen]
//!   bitchess search <depth> [fen]
//!   bitchess play <plies> [easy|medium|hard|expert]
//!
//! `RUST_LOG=debug` shows per-move search output.

use std::process::ExitCode;
use std::time::Instant;

use bitchess::agent::ai::ParseDifficultyError;
use bitchess::agent::{play_game_from, Difficulty, NegamaxPlayer, SearchEngine};
use bitchess::game_repr::{FenError, Position};
use thiserror::Error;

const USAGE: &str = "usage: bitchess perft <depth> [fen] | divide <depth> [fen] \
                     | search <depth> [fen] | play <plies> [difficulty]";

#[derive(Debug, Error)]
enum CliError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a valid number")]
    BadNumber(String),
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error(transparent)]
    Difficulty(#[from] ParseDifficultyError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let command = args.first().ok_or(CliError::MissingCommand)?;
    let rest = &args[1..];

    match command.as_str() {
        "perft" => perft(rest),
        "divide" => divide(rest),
        "search" => search(rest),
        "play" => play(rest),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn number<T: std::str::FromStr>(args: &[String], what: &'static str) -> Result<T, CliError> {
    let text = args.first().ok_or(CliError::MissingArgument(what))?;
    text.parse().map_err(|_| CliError::BadNumber(text.clone()))
}

/// Everything after the numeric argument is the FEN, which contains spaces.
fn position(args: &[String]) -> Result<Position, CliError> {
    if args.len() < 2 {
        return Ok(Position::default());
    }
    Ok(Position::from_fen(&args[1..].join(" "))?)
}

fn perft(args: &[String]) -> Result<(), CliError> {
    let depth: u32 = number(args, "depth")?;
    let pos = position(args)?;
    print!("{}", pos);

    let start = Instant::now();
    let nodes = pos.perft_parallel(depth);
    let elapsed = start.elapsed();
    println!("perft({}) = {}", depth, nodes);
    log::info!("{} nodes in {:.3}s", nodes, elapsed.as_secs_f64());
    Ok(())
}

fn divide(args: &[String]) -> Result<(), CliError> {
    let depth: u32 = number(args, "depth")?;
    let mut pos = position(args)?;

    let split = pos.divide(depth);
    for (mv, nodes) in &split {
        println!("{}: {}", mv, nodes);
    }
    println!();
    println!("moves: {}", split.len());
    println!("nodes: {}", split.iter().map(|(_, n)| n).sum::<u64>());
    Ok(())
}

fn search(args: &[String]) -> Result<(), CliError> {
    let depth: u8 = number(args, "depth")?;
    let mut pos = position(args)?;
    print!("{}", pos);

    let mut engine = SearchEngine::with_depth(depth);
    let result = engine.search_root(&mut pos);
    match result.best_move {
        Some(mv) => println!("bestmove {} score {}", mv, result.score),
        None => println!("no legal moves: {:?}", pos.game_result()),
    }
    println!("nodes {} prunes {}", result.nodes_searched, result.prunes);
    Ok(())
}

fn play(args: &[String]) -> Result<(), CliError> {
    let plies: usize = number(args, "ply limit")?;
    let difficulty = match args.get(1) {
        Some(text) => text.parse()?,
        None => Difficulty::Medium,
    };

    let mut pos = Position::default();
    let mut white = NegamaxPlayer::with_difficulty(difficulty);
    let mut black = NegamaxPlayer::with_difficulty(difficulty);
    let result = play_game_from(&mut pos, &mut white, &mut black, plies);

    let moves: Vec<String> = pos.history().iter().map(|m| m.to_uci()).collect();
    println!("{}", moves.join(" "));
    print!("{}", pos);
    println!("{}", pos.to_fen());
    println!("result: {:?}", result);
    Ok(())
}
