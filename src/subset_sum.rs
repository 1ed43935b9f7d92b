pub mod bruteforce;

// Re-export the subset sum searches with descriptive names
pub use bruteforce::{subset_sum_bruteforce, subset_sum_bruteforce_parallel};
