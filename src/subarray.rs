pub mod bruteforce;
pub mod divide_and_conquer;

// Re-export the maximum subarray algorithms with descriptive names
pub use bruteforce::max_subarray_bruteforce;
pub use divide_and_conquer::max_subarray_divide_and_conquer;
