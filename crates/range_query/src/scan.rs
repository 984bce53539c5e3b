use crate::StaticRangeQuery;
use crate::error::RangeQueryError;
use crate::query::check_range;
use crate::value::RangeValue;

/// Walks the range on every query. O(1) build, O(r - l + 1) query.
#[derive(Clone, Debug)]
pub struct ScanRangeQuery<T> {
    values: Vec<T>,
}

impl<T: RangeValue> StaticRangeQuery<T> for ScanRangeQuery<T> {
    fn new(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn range_sum(&self, l: usize, r: usize) -> Result<T, RangeQueryError> {
        check_range(l, r, self.len())?;
        Ok(self.values[l..=r].iter().fold(T::ZERO, |acc, &v| acc.add(v)))
    }

    fn alternating_sum(&self, l: usize, r: usize) -> Result<T, RangeQueryError> {
        check_range(l, r, self.len())?;
        let mut acc = T::ZERO;
        for (k, &v) in self.values[l..=r].iter().enumerate() {
            acc = if k & 1 == 0 { acc.add(v) } else { acc.sub(v) };
        }
        Ok(acc)
    }
}
