//! Game session facade for the Nonet engine.
//!
//! [`Game`] is the surface a presentation layer talks to: it owns the board
//! and its fixed mask, drives generation and reduction, imports and exports
//! puzzle codes, and applies player moves with given-cell protection. The
//! presentation layer only ever needs the board's `cells()` / `fixed()`
//! views and the methods here; rendering, input and persistence stay on
//! its side of the line.

pub use self::{
    error::{GameError, ImportError},
    game::Game,
};

mod error;
mod game;
