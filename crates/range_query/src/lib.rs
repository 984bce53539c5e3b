pub mod descriptor;
pub mod error;
mod prefix;
mod query;
mod scan;
mod value;

pub use error::{BatchError, RangeQueryError};
pub use prefix::PrefixRangeQuery;
pub use query::{Query, QueryKind};
pub use scan::ScanRangeQuery;
pub use value::RangeValue;

/// Static range query interface over an immutable sequence.
///
/// - Ranges are inclusive and 0-indexed: `[l, r]` with `l <= r < len`.
/// - Anything else, including every query against an empty sequence, is
///   rejected with [`RangeQueryError::InvalidRange`].
pub trait StaticRangeQuery<T: RangeValue>: Sized {
    fn new(values: &[T]) -> Self;
    fn len(&self) -> usize;
    fn range_sum(&self, l: usize, r: usize) -> Result<T, RangeQueryError>;
    fn alternating_sum(&self, l: usize, r: usize) -> Result<T, RangeQueryError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn answer(&self, query: &Query) -> Result<T, RangeQueryError> {
        match query.kind {
            QueryKind::RangeSum => self.range_sum(query.l, query.r),
            QueryKind::AlternatingRangeSum => self.alternating_sum(query.l, query.r),
        }
    }
}

/// Builds `E` once over `values` and answers `queries` in order.
///
/// The batch is atomic: the first invalid query aborts it and no partial
/// output is returned.
pub fn answer_all_with<E, T>(values: &[T], queries: &[Query]) -> Result<Vec<T>, BatchError>
where
    E: StaticRangeQuery<T>,
    T: RangeValue,
{
    let engine = E::new(values);
    let results = queries
        .iter()
        .enumerate()
        .map(|(index, query)| {
            engine
                .answer(query)
                .map_err(|source| BatchError { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(len = values.len(), queries = queries.len(), "answered batch");
    Ok(results)
}

/// [`answer_all_with`] using [`PrefixRangeQuery`]: O(n + q) overall.
pub fn answer_all<T: RangeValue>(values: &[T], queries: &[Query]) -> Result<Vec<T>, BatchError> {
    answer_all_with::<PrefixRangeQuery<T>, T>(values, queries)
}
