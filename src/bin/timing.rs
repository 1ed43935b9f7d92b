use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use subspan::{
    max_subarray_bruteforce, max_subarray_divide_and_conquer, subset_sum_bruteforce,
};

const N: usize = 20;
const PRINT_INPUT_LIMIT: usize = 100;
const MAX_SUBARRAY_BRUTEFORCE_LIMIT: usize = 10_000;
const SUBSET_SUM_LIMIT: usize = 28;

fn print_bar() {
    println!("{}", "-".repeat(79));
}

fn print_values(values: &[i64]) {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{{{}}}", rendered.join(", "));
}

fn main() {
    assert!(N > 0);

    // Hardcoded seed so runs are comparable between invocations.
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let subarray_input: Vec<i64> = (0..N).map(|_| rng.gen_range(-100..=100)).collect();
    let subset_sum_input: Vec<i64> = (0..N)
        .map(|_| rng.gen_range(-1_000_000_000..=1_000_000_000))
        .collect();

    print_bar();
    println!("n = {}", N);
    if N > PRINT_INPUT_LIMIT {
        println!("(input too large to print)");
    } else {
        println!("subarray_input:");
        print_values(&subarray_input);
        println!("subset_sum_input:");
        print_values(&subset_sum_input);
    }

    print_bar();
    println!("max_subarray_divide_and_conquer");
    {
        let started = Instant::now();
        let solution = max_subarray_divide_and_conquer(&subarray_input);
        let elapsed = started.elapsed().as_secs_f64();
        println!("solution: {}", solution);
        println!("elapsed time={} seconds", elapsed);
    }

    print_bar();
    println!("max_subarray_bruteforce");
    if N > MAX_SUBARRAY_BRUTEFORCE_LIMIT {
        println!("(skipped because n > {})", MAX_SUBARRAY_BRUTEFORCE_LIMIT);
    } else {
        let started = Instant::now();
        let solution = max_subarray_bruteforce(&subarray_input);
        let elapsed = started.elapsed().as_secs_f64();
        println!("solution: {}", solution);
        println!("elapsed time={} seconds", elapsed);
    }

    print_bar();
    println!("subset_sum_bruteforce");
    if N > SUBSET_SUM_LIMIT {
        println!("(skipped because n > {})", SUBSET_SUM_LIMIT);
    } else {
        let started = Instant::now();
        let solution = subset_sum_bruteforce(&subset_sum_input, 1);
        let elapsed = started.elapsed().as_secs_f64();
        println!("solution:");
        match solution {
            None => println!("(no solution)"),
            Some(subset) => {
                print_values(&subset);
                println!("sum={}", subset.iter().sum::<i64>());
            }
        }
        println!("elapsed time={} seconds", elapsed);
    }

    print_bar();
}
