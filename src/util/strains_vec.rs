use std::slice::Iter;

/// A `Vec<f64>` of section peaks where all entries are non-negative.
///
/// Zero peaks are kept while recording so that the amount of sections stays
/// meaningful but they are dropped before any aggregation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrainsVec {
    inner: Vec<f64>,
}

impl StrainsVec {
    /// Constructs a new, empty [`StrainsVec`] with at least the specified
    /// capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Appends an element to the back.
    pub fn push(&mut self, value: f64) {
        self.inner.push(value);
    }

    /// Sorts the entries in descending order.
    pub fn sort_desc(&mut self) {
        self.inner.sort_by(|a, b| b.total_cmp(a));
    }

    /// Removes all zero entries.
    pub fn retain_non_zero(&mut self) {
        self.inner.retain(|&value| value > 0.0);
    }

    /// Removes all zeros and sorts the remaining entries in descending order.
    pub fn retain_non_zero_and_sort(&mut self) {
        self.retain_non_zero();
        self.sort_desc();
    }

    /// Same as [`StrainsVec::retain_non_zero_and_sort`] followed by
    /// [`StrainsVec::iter`].
    pub fn sorted_non_zero_iter(&mut self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.retain_non_zero_and_sort();

        self.iter()
    }

    /// Iterator over the values.
    pub fn iter(&self) -> std::iter::Copied<Iter<'_, f64>> {
        self.inner.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.inner
    }

    /// Convert into a regular `Vec<f64>`.
    pub fn into_vec(self) -> Vec<f64> {
        self.inner
    }
}

impl From<Vec<f64>> for StrainsVec {
    fn from(inner: Vec<f64>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::StrainsVec;

    #[test]
    fn drops_zeros_and_sorts() {
        let mut peaks = StrainsVec::with_capacity(6);

        for value in [0.0, 3.0, 0.0, 1.5, 4.0, 0.0] {
            peaks.push(value);
        }

        assert_eq!(peaks.len(), 6);
        assert!((peaks.iter().sum::<f64>() - 8.5).abs() < f64::EPSILON);

        let sorted: Vec<_> = peaks.sorted_non_zero_iter().collect();
        assert_eq!(sorted, [4.0, 3.0, 1.5]);
        assert_eq!(peaks.len(), 3);
    }
}
