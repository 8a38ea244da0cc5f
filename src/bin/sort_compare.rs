//! Times the sequential baseline against the parallel sort on identical
//! pseudo-random input, then runs the two π estimators. Companion binary for
//! eyeballing the speedup; `benches/bench.rs` has the rigorous numbers.

use std::time::Instant;

use rand::prelude::*;
use rayon::prelude::*;

const NUM_TO_SORT: usize = 1_000_000;
const NUM_TOSSES: u64 = 10_000_000;

fn main() {
    // Each worker fills its stripe of the input with its own OS-seeded rng,
    // values differ from run to run.
    let unsorted: Vec<i32> = (0..NUM_TO_SORT)
        .into_par_iter()
        .map_init(StdRng::from_entropy, |rng, _| rng.gen())
        .collect();

    println!("Timing sequential sort of {NUM_TO_SORT} values...");
    let mut arr_seq = unsorted.clone();
    let start = Instant::now();
    parqsort::sort_seq(&mut arr_seq);
    println!("Took {:.6} seconds\n", start.elapsed().as_secs_f64());

    println!(
        "Timing parallel sort, cutoff {}, {} workers...",
        parqsort::DEFAULT_CUTOFF,
        rayon::current_num_threads()
    );
    let mut arr_par = unsorted;
    let start = Instant::now();
    parqsort::sort(&mut arr_par);
    println!("Took {:.6} seconds\n", start.elapsed().as_secs_f64());

    assert!(arr_seq.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(arr_seq, arr_par);

    println!("Timing sequential π estimate, {NUM_TOSSES} tosses...");
    let start = Instant::now();
    let pi_seq = parqsort::pi::estimate(NUM_TOSSES);
    println!("Took {:.6} seconds\n", start.elapsed().as_secs_f64());

    println!("Timing parallel π estimate...");
    let start = Instant::now();
    let pi_par = parqsort::pi::estimate_parallel(NUM_TOSSES);
    println!("Took {:.6} seconds\n", start.elapsed().as_secs_f64());

    println!("π = {pi_seq:.10} (sequential)");
    println!("π = {pi_par:.10} (parallel)");
}
