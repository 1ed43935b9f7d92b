use crate::span::Span;

/// Finds the non-empty contiguous range of `values` with the maximum sum by
/// checking every candidate range.
///
/// Each start index keeps a running sum while the end index advances, so all
/// O(n^2) ranges are scored in O(n^2) total rather than the O(n^3) that
/// per-range resummation would cost.
///
/// Ties are broken by scan order: among equal-sum ranges the one with the
/// smallest start index wins, then the smallest end index. In particular an
/// all-positive tied input yields the whole sequence, and an all-negative
/// input yields the first maximal single element.
///
/// # Examples
///
/// ```
/// use subspan::max_subarray_bruteforce;
///
/// let values = [1, 2, -9, 2, 2];
/// let best = max_subarray_bruteforce(&values);
/// assert_eq!((best.start(), best.end(), best.sum()), (3, 5, 4));
/// ```
///
/// # Panics
///
/// Panics if `values` is empty.
///
/// # Complexity
///
/// * Time: O(n^2)
/// * Space: O(1)
pub fn max_subarray_bruteforce(values: &[i64]) -> Span {
    assert!(!values.is_empty(), "input must not be empty");

    let mut best_start = 0;
    let mut best_end = 1;
    let mut best_sum = values[0];

    for start in 0..values.len() {
        let mut running = 0i64;
        for (end, &value) in values.iter().enumerate().skip(start) {
            running += value;
            if running > best_sum {
                best_start = start;
                best_end = end + 1;
                best_sum = running;
            }
        }
    }

    Span::from_parts(best_start, best_end, best_sum)
}
