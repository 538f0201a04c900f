//! Random and sequential pickers.
//!
//! The random picker never returns the same index twice in a row. The
//! rejected-index state is shared across every random draw regardless of
//! which pool was sampled, so consecutive picks are guaranteed distinct
//! in index position only, not in literal text, across pools.

use rand::Rng;

use super::candidates::CandidateSets;

/// Upper bound on reject-and-resample redraws. A pool of size >= 2 has
/// a non-matching index with probability >= 1/2 per draw, so the cap is
/// only ever hit under a degenerate generator.
const MAX_REDRAWS: usize = 100;

/// Mutable picker state, owned by the engine for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorState {
    /// Last index returned by the non-repeat random picker.
    pub last_random_index: Option<usize>,
    /// Monotonically advancing cursor for sequential mode.
    pub sequential_cursor: Option<usize>,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Draw a random index in `0..len`, rejecting the previous draw.
///
/// A pool of size 1 returns index 0 deterministically and leaves the
/// shared state untouched. Returns `None` for an empty pool.
pub fn random_index<R: Rng + ?Sized>(
    len: usize,
    state: &mut SelectorState,
    rng: &mut R,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if len == 1 {
        return Some(0);
    }

    let mut index = rng.gen_range(0..len);
    let mut redraws = 0;
    while Some(index) == state.last_random_index {
        if redraws >= MAX_REDRAWS {
            // Degenerate generator: step off the repeated index instead
            // of looping forever.
            index = (index + 1) % len;
            break;
        }
        index = rng.gen_range(0..len);
        redraws += 1;
    }

    state.last_random_index = Some(index);
    Some(index)
}

/// Advance the sequential cursor, wrapping at the end of the pool.
pub fn sequential_index(len: usize, state: &mut SelectorState) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match state.sequential_cursor {
        Some(cursor) if cursor < len - 1 => cursor + 1,
        Some(_) => 0,
        None => 0,
    };
    state.sequential_cursor = Some(next);
    Some(next)
}

/// Choose one message for this tick.
///
/// Random mode flips an unbiased coin between the date-matched pool
/// (when non-empty) and the timed pool. Sequential mode ignores the
/// date-matched pool entirely. An empty pool yields an empty string.
pub fn pick<R: Rng + ?Sized>(
    random: bool,
    sets: &CandidateSets,
    state: &mut SelectorState,
    rng: &mut R,
) -> String {
    if random {
        let pool = if !sets.dated.is_empty() && rng.gen_range(0..2) == 0 {
            &sets.dated
        } else {
            &sets.timed
        };
        random_index(pool.len(), state, rng)
            .map(|i| pool[i].clone())
            .unwrap_or_default()
    } else {
        sequential_index(sets.timed.len(), state)
            .map(|i| sets.timed[i].clone())
            .unwrap_or_default()
    }
}
