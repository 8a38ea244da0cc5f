//! Monte Carlo estimation of π, the embarrassingly-parallel counterpart to
//! the sort: random points in the square `[-1, 1]^2` are counted against the
//! unit circle and the hit ratio approaches π/4.
//!
//! Unlike the sort there is no shared mutable state at all; the parallel
//! version is a plain reduction over per-worker counts. Seeds are drawn from
//! the OS per worker, runs are not reproducible and don't need to be.

use rand::prelude::*;
use rayon::prelude::*;

/// Estimates π from `tosses` random samples on the calling thread.
///
/// Returns 0.0 for zero tosses.
pub fn estimate(tosses: u64) -> f64 {
    if tosses == 0 {
        return 0.0;
    }

    let hits = count_hits(tosses, StdRng::from_entropy());

    4.0 * hits as f64 / tosses as f64
}

/// Estimates π from `tosses` random samples, split across the workers of the
/// ambient rayon pool and reduced by summation.
///
/// Returns 0.0 for zero tosses.
pub fn estimate_parallel(tosses: u64) -> f64 {
    if tosses == 0 {
        return 0.0;
    }

    let workers = rayon::current_num_threads() as u64;
    let share = tosses / workers;
    let remainder = tosses % workers;

    let hits: u64 = (0..workers)
        .into_par_iter()
        .map(|w| {
            // The first `remainder` workers toss one extra so the total stays
            // exactly `tosses`.
            let budget = share + u64::from(w < remainder);
            count_hits(budget, StdRng::from_entropy())
        })
        .sum();

    4.0 * hits as f64 / tosses as f64
}

fn count_hits(tosses: u64, mut rng: StdRng) -> u64 {
    let mut hits = 0;

    for _ in 0..tosses {
        let x = rng.gen_range(-1.0f64..1.0);
        let y = rng.gen_range(-1.0f64..1.0);

        if x * x + y * y < 1.0 {
            hits += 1;
        }
    }

    hits
}
