//! Puzzle generation for the Nonet engine: random completed boards and the
//! concurrent digit reducer that turns them into unique-solution puzzles.

pub use self::{
    generate::{generate_completed, generate_completed_with},
    reduce::{CancelSignal, ReduceOptions, ReduceProgress, reduce},
};

mod generate;
mod reduce;
