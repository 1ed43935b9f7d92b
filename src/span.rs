use std::fmt;

/// A non-empty contiguous range of indices inside a sequence of `i64`,
/// together with the sum of the elements in that range.
///
/// The range is half-open: it covers `[start, end)`, so `start` is included
/// and `end` is not. A `Span` stores only positions and a cached sum; it
/// never owns or copies the underlying sequence, so it is only meaningful
/// next to the slice it was built against.
///
/// Sums are accumulated in `i64`. The subset-sum inputs this crate is
/// benchmarked with reach magnitudes around 1e9 per element, so a narrower
/// width would overflow on realistic instances.
///
/// # Examples
///
/// ```
/// use subspan::Span;
///
/// let values = [3, -1, 4];
/// let span = Span::new(&values, 0, 2);
/// assert_eq!(span.len(), 2);
/// assert_eq!(span.sum(), 2);
/// assert_eq!(span.slice_of(&values), &[3, -1]);
/// ```
#[derive(Debug, Clone, Copy, Eq)]
pub struct Span {
    start: usize,
    end: usize,
    sum: i64,
}

impl Span {
    /// Builds a span over `values[start..end]`, computing the sum in O(n).
    ///
    /// # Panics
    ///
    /// Panics if `start >= end` or `end > values.len()`.
    pub fn new(values: &[i64], start: usize, end: usize) -> Self {
        assert!(end <= values.len(), "span end is out of bounds");
        let sum = values[start..end].iter().sum();
        Self::from_parts(start, end, sum)
    }

    /// Builds a span from its parts in O(1). The caller is responsible for
    /// `sum` being the exact total of the range it names.
    ///
    /// # Panics
    ///
    /// Panics if `start >= end`.
    pub fn from_parts(start: usize, end: usize, sum: i64) -> Self {
        assert!(start < end, "span must be non-empty");
        Self { start, end, sum }
    }

    /// First index covered by the span.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last index covered by the span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Sum of the elements in the range.
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Number of elements covered. Always at least 1.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; a span covers at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Resolves the span back into the sequence it indexes.
    pub fn slice_of<'a>(&self, values: &'a [i64]) -> &'a [i64] {
        &values[self.start..self.end]
    }
}

/// Two spans are equal when they cover the same range; the sum is derived
/// from the range, so it does not participate.
impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span, size={}, sum={}", self.len(), self.sum)
    }
}
