//! Classical exhaustive-search algorithms over integer sequences: two
//! maximum subarray solvers (brute force and divide-and-conquer) and a
//! brute-force subset sum search, sharing the [`Span`] result type.
//!
//! Every entry point is a pure function of its input; there is no shared
//! state, so calls are independently safe from any number of call sites.

pub mod span;
pub mod subarray;
pub mod subset_sum;

pub use span::Span;
pub use subarray::{max_subarray_bruteforce, max_subarray_divide_and_conquer};
pub use subset_sum::{subset_sum_bruteforce, subset_sum_bruteforce_parallel};
