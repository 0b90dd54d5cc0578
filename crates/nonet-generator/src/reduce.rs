//! Concurrent removal of digits from a completed board.
//!
//! The reducer strips digits while keeping the puzzle's solution unique at
//! every step. A pool of candidate cell indices shrinks as cells are either
//! removed or found to be load-bearing; the caller's target bounds that
//! pool, exactly like the untried-cell threshold of a sequential removal
//! loop. Parallel rounds only speed up the *search* for a removable cell;
//! each round commits at most one removal, so the result quality does not
//! depend on the worker count.

use std::{
    mem,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    thread,
};

use nonet_core::Board;
use nonet_solver::solve_at_most;
use rand::RngExt as _;

/// Pool sizes above this probe with a single worker per round.
const SINGLE_WORKER_THRESHOLD: usize = 32;
/// Hard cap on workers per round.
const MAX_WORKERS: usize = 8;

/// Cooperative cancellation flag for [`reduce`].
///
/// Clone the signal, hand one copy to the reducing thread via
/// [`ReduceOptions`], and call [`cancel`](CancelSignal::cancel) from
/// anywhere else. The reducer polls it once per round, so an in-flight
/// round always completes before the call returns.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal(Arc<AtomicBool>);

impl CancelSignal {
    /// Creates a signal that is not yet set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](CancelSignal::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Shared remaining-candidate counter, for progress display.
///
/// The reducer publishes the candidate-pool size under this handle's lock
/// before every round; a presentation layer polls
/// [`remaining`](ReduceProgress::remaining) at whatever cadence it likes. A
/// briefly stale read is fine.
#[derive(Debug, Clone, Default)]
pub struct ReduceProgress(Arc<Mutex<usize>>);

impl ReduceProgress {
    /// Creates a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last published remaining-candidate count.
    #[must_use]
    pub fn remaining(&self) -> usize {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, remaining: usize) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = remaining;
    }
}

/// Options for [`reduce`].
#[derive(Debug, Clone)]
pub struct ReduceOptions {
    /// Search for removable cells with a pool of worker threads. Defaults
    /// to `true`.
    pub parallel: bool,
    /// Polled at the top of each round; when set, `reduce` returns with the
    /// board in its partially reduced state.
    pub cancel: CancelSignal,
    /// Receives the remaining-candidate count before each round.
    pub progress: ReduceProgress,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            cancel: CancelSignal::new(),
            progress: ReduceProgress::new(),
        }
    }
}

/// Pool and discovered-options lists shared by one round's workers.
///
/// Everything mutable in a round lives behind this one mutex; workers hold
/// it only to pop or push an index, never while solving.
struct RoundState {
    pool: Vec<usize>,
    found: Vec<usize>,
}

/// Removes digits from `board` until at most `target_remaining` candidate
/// cells are left, keeping the puzzle uniquely solvable at every step.
///
/// Each removed cell is cleared and unmarked fixed. Cells whose value turns
/// out to be load-bearing (clearing them would admit a second solution)
/// keep their value and leave the candidate pool, so the givens remaining
/// on return equal `target_remaining` plus the number of load-bearing cells
/// encountered along the way. A `target_remaining` of 81 or more is a
/// no-op.
///
/// # Examples
///
/// ```
/// use nonet_generator::{ReduceOptions, generate_completed, reduce};
/// use nonet_solver::solve_at_most;
///
/// let mut board = generate_completed();
/// reduce(&mut board, 75, &ReduceOptions::default());
/// assert_eq!(solve_at_most(&board, 2).len(), 1);
/// ```
pub fn reduce(board: &mut Board, target_remaining: usize, options: &ReduceOptions) {
    let mut remaining: Vec<usize> = (0..81).filter(|&index| board.value(index) != 0).collect();
    while remaining.len() > target_remaining {
        if options.cancel.is_cancelled() {
            log::debug!("reduction cancelled with {} candidate cells left", remaining.len());
            break;
        }
        options.progress.publish(remaining.len());
        if options.parallel {
            parallel_round(board, &mut remaining);
        } else {
            sequential_round(board, &mut remaining);
        }
    }
    options.progress.publish(remaining.len());
}

/// Tries one random candidate on the calling thread.
fn sequential_round(board: &mut Board, remaining: &mut Vec<usize>) {
    let mut rng = rand::rng();
    let slot = rng.random_range(0..remaining.len());
    let index = remaining.swap_remove(slot);
    let value = board.value(index);
    board.set_value(index, 0);
    if solve_at_most(board, 2).len() > 1 {
        // load-bearing, keep the clue
        board.set_value(index, value);
    } else {
        board.set_fixed(index, false);
    }
}

/// Runs one worker round and applies at most the first discovered removal.
fn parallel_round(board: &mut Board, remaining: &mut Vec<usize>) {
    let workers = worker_count(remaining.len());
    let state = Mutex::new(RoundState {
        pool: mem::take(remaining),
        found: Vec::new(),
    });
    {
        let snapshot: &Board = board;
        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| probe_one_cell(snapshot, &state));
            }
        });
    }

    let RoundState { pool, found } = state.into_inner().unwrap_or_else(PoisonError::into_inner);
    *remaining = pool;
    if let Some(&index) = found.first() {
        board.set_value(index, 0);
        board.set_fixed(index, false);
        remaining.retain(|&other| other != index);
    }
}

/// Worker body: claim one random index, test it on a private copy, report
/// back under the lock.
fn probe_one_cell(board: &Board, state: &Mutex<RoundState>) {
    let mut rng = rand::rng();
    let index = {
        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.pool.is_empty() {
            return;
        }
        let slot = rng.random_range(0..state.pool.len());
        state.pool.swap_remove(slot)
    };

    let mut trial = board.clone();
    trial.set_value(index, 0);
    if solve_at_most(&trial, 2).len() == 1 {
        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
        state.found.push(index);
        // still eligible in later rounds even if this round does not claim it
        state.pool.push(index);
    }
}

fn worker_count(remaining: usize) -> usize {
    if remaining > SINGLE_WORKER_THRESHOLD {
        return 1;
    }
    let hardware = thread::available_parallelism().map_or(1, usize::from);
    hardware.min(MAX_WORKERS).min(remaining)
}
