//! Example generating Sudoku puzzles from the command line.
//!
//! This example shows how to:
//! - Generate a completed board, optionally from a fixed seed
//! - Reduce it to a unique-solution puzzle with the concurrent reducer
//! - Print the board and its puzzle code
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example generate_puzzle
//! ```
//!
//! Leave more clues in place (higher target = easier puzzle, 81 = none
//! removed):
//!
//! ```sh
//! cargo run --release --example generate_puzzle -- --target 45
//! ```
//!
//! Generate a reproducible board, reduce it on a single thread, or produce
//! a whole batch in parallel:
//!
//! ```sh
//! cargo run --release --example generate_puzzle -- --seed 42
//! cargo run --release --example generate_puzzle -- --sequential
//! cargo run --release --example generate_puzzle -- --count 8
//! ```

use clap::Parser;
use nonet_core::{Board, code};
use nonet_generator::{ReduceOptions, generate_completed, generate_completed_with, reduce};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Stop removing digits once this many candidate cells remain.
    #[arg(long, value_name = "COUNT", default_value_t = 30)]
    target: usize,

    /// How many puzzles to generate (batches run in parallel).
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: u64,

    /// Reduce on a single thread instead of the worker pool.
    #[arg(long)]
    sequential: bool,

    /// Seed for the completed-board stage; omit for a random board.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzles: Vec<Board> = (0..args.count)
        .into_par_iter()
        .map(|offset| {
            let mut board = match args.seed {
                Some(seed) => {
                    let mut rng = Pcg64Mcg::seed_from_u64(seed.wrapping_add(offset));
                    generate_completed_with(&mut rng)
                }
                None => generate_completed(),
            };
            let options = ReduceOptions {
                parallel: !args.sequential,
                ..ReduceOptions::default()
            };
            reduce(&mut board, args.target, &options);
            board
        })
        .collect();

    for (number, board) in (1..).zip(&puzzles) {
        if puzzles.len() > 1 {
            println!("Puzzle {number}:");
        }
        println!("{board}");
        println!();
        let givens = board.cells().iter().filter(|&&value| value != 0).count();
        println!("Givens: {givens}");
        println!("Code:   {}", code::encode(board));
        println!();
    }
}
