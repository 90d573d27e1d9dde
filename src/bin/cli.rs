//! Minimal position analyzer: print a position and the engine's choice.
//!
//! Usage: `rookery [--depth N] [FEN]`
//! With no FEN the standard starting position is analyzed.

use rookery::board::Board;
use rookery::logger::init_logging;
use rookery::moves::attack_tables;
use rookery::moves::execute::generate_legal;
use rookery::moves::types::Move;
use rookery::search::{DEFAULT_DEPTH, Negamax};
use rookery::status::{GameStatus, position_status};
use std::process::ExitCode;
use std::str::FromStr;

fn main() -> ExitCode {
    init_logging("logs/rookery.log", "rookery=debug");

    let mut depth = DEFAULT_DEPTH;
    let mut fen_parts: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--depth" => {
                let Some(value) = args.next() else {
                    eprintln!("--depth requires a value");
                    return ExitCode::FAILURE;
                };
                depth = match value.parse() {
                    Ok(d) if d > 0 => d,
                    _ => {
                        eprintln!("invalid depth: {value}");
                        return ExitCode::FAILURE;
                    }
                };
            }
            _ => fen_parts.push(arg),
        }
    }

    let board = if fen_parts.is_empty() {
        Board::new()
    } else {
        match Board::from_str(&fen_parts.join(" ")) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("bad FEN: {err}");
                return ExitCode::FAILURE;
            }
        }
    };

    let tables = attack_tables();
    println!("{board}");

    let mut legal: Vec<Move> = Vec::new();
    generate_legal(&board, tables, &mut legal);
    println!("legal moves: {}", legal.len());

    match position_status(&board, tables) {
        GameStatus::Checkmate => {
            println!("checkmate, {:?} has lost", board.side_to_move);
            return ExitCode::SUCCESS;
        }
        GameStatus::Stalemate => {
            println!("stalemate");
            return ExitCode::SUCCESS;
        }
        GameStatus::InPlay => {}
    }

    let searcher = Negamax::new(depth);
    match searcher.best_move(&board, tables) {
        Some(mv) => println!("best move at depth {depth}: {mv}"),
        None => println!("no move available"),
    }

    ExitCode::SUCCESS
}
