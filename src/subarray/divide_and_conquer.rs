use crate::span::Span;

/// Finds the non-empty contiguous range of `values` with the maximum sum
/// using the divide-and-conquer scheme from CLRS chapter 4.
///
/// The index range is split at its midpoint, both halves are solved
/// recursively, and a third candidate straddling the midpoint is built by
/// two linear scans. The best of the three wins; ties prefer the left
/// half, then the right half, then the crossing candidate, which keeps the
/// result deterministic when several ranges share the maximum.
///
/// The returned span always carries the same sum as
/// [`max_subarray_bruteforce`](crate::max_subarray_bruteforce), though the
/// two may name different ranges when the maximum is not unique.
///
/// # Examples
///
/// ```
/// use subspan::max_subarray_divide_and_conquer;
///
/// let values = [-1, -2, 4, 5, -1, -2];
/// let best = max_subarray_divide_and_conquer(&values);
/// assert_eq!((best.start(), best.end(), best.sum()), (2, 4, 9));
/// ```
///
/// # Panics
///
/// Panics if `values` is empty.
///
/// # Complexity
///
/// * Time: O(n log n)
/// * Space: O(log n) call stack
pub fn max_subarray_divide_and_conquer(values: &[i64]) -> Span {
    assert!(!values.is_empty(), "input must not be empty");
    recurse(values, 0, values.len() - 1)
}

/// Solves the inclusive index range `[low, high]`.
fn recurse(values: &[i64], low: usize, high: usize) -> Span {
    if low == high {
        return Span::from_parts(low, low + 1, values[low]);
    }

    let middle = (low + high) / 2;
    let left = recurse(values, low, middle);
    let right = recurse(values, middle + 1, high);
    let cross = crossing(values, low, middle, high);

    if left.sum() >= right.sum() && left.sum() >= cross.sum() {
        left
    } else if right.sum() >= cross.sum() {
        right
    } else {
        cross
    }
}

/// Best range that straddles `middle`: the best suffix of `[low, middle]`
/// glued to the best prefix of `[middle + 1, high]`.
///
/// Both scans track indices alongside sums, since the span needs the
/// positions back. `i64::MIN` only stands in for "no candidate seen yet"
/// before the first element of each scan is folded in.
fn crossing(values: &[i64], low: usize, middle: usize, high: usize) -> Span {
    let mut left_best = i64::MIN;
    let mut left_start = middle;
    let mut running = 0i64;
    for i in (low..=middle).rev() {
        running += values[i];
        if running > left_best {
            left_best = running;
            left_start = i;
        }
    }

    let mut right_best = i64::MIN;
    let mut right_end = middle + 1;
    running = 0;
    for (i, &value) in values.iter().enumerate().take(high + 1).skip(middle + 1) {
        running += value;
        if running > right_best {
            right_best = running;
            right_end = i;
        }
    }

    Span::from_parts(left_start, right_end + 1, left_best + right_best)
}
