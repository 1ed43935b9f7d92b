use rayon::prelude::*;

/// Finds a non-empty subset of `values` whose elements add up to exactly
/// `target`, by trying every subset.
///
/// Each candidate subset is an n-bit mask: bit `j` selects `values[j]`.
/// Masks are tried in increasing numeric order and the first qualifying one
/// wins, so the answer is deterministic when several subsets work. The
/// empty mask is skipped; the empty subset is never a solution, even when
/// `target` is 0.
///
/// Returns the selected element values in input-position order (duplicates
/// kept if the input has them), or `None` when no non-empty subset reaches
/// `target`. `None` is a normal outcome, not a failure.
///
/// # Examples
///
/// ```
/// use subspan::subset_sum_bruteforce;
///
/// assert_eq!(subset_sum_bruteforce(&[1, 3], 4), Some(vec![1, 3]));
/// assert_eq!(subset_sum_bruteforce(&[1, 2, 3], 0), None);
/// ```
///
/// # Panics
///
/// Panics if `values` is empty or holds 64 or more elements; the mask
/// representation needs every subset to fit in a `u64`.
///
/// # Complexity
///
/// * Time: O(n * 2^n)
/// * Space: O(n) per candidate
pub fn subset_sum_bruteforce(values: &[i64], target: i64) -> Option<Vec<i64>> {
    let masks = mask_range(values);
    masks.into_iter().find_map(|mask| select(values, mask, target))
}

/// Same contract and same answer as [`subset_sum_bruteforce`], with the mask
/// range partitioned across rayon workers.
///
/// Workers share nothing but read access to `values` and `target`;
/// `find_map_first` keeps the lowest qualifying mask winning, so the two
/// entry points are interchangeable.
///
/// # Panics
///
/// Panics if `values` is empty or holds 64 or more elements.
pub fn subset_sum_bruteforce_parallel(values: &[i64], target: i64) -> Option<Vec<i64>> {
    let masks = mask_range(values);
    masks
        .into_par_iter()
        .find_map_first(|mask| select(values, mask, target))
}

/// Non-empty masks for `values`, in increasing order.
fn mask_range(values: &[i64]) -> std::ops::Range<u64> {
    assert!(!values.is_empty(), "input must not be empty");
    assert!(
        values.len() < 64,
        "input must have fewer than 64 elements to fit in a bitmask"
    );
    1..(1u64 << values.len())
}

/// Materializes the subset a mask selects when its sum hits `target`.
fn select(values: &[i64], mask: u64, target: i64) -> Option<Vec<i64>> {
    let mut sum = 0i64;
    for (j, &value) in values.iter().enumerate() {
        if mask & (1 << j) != 0 {
            sum += value;
        }
    }
    if sum != target {
        return None;
    }
    let subset = values
        .iter()
        .enumerate()
        .filter(|(j, _)| mask & (1 << j) != 0)
        .map(|(_, &value)| value)
        .collect();
    Some(subset)
}
