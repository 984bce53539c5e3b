use crate::error::RangeQueryError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QueryKind {
    /// `s[l] + s[l+1] + ... + s[r]`.
    RangeSum,
    /// `s[l] - s[l+1] + s[l+2] - ...`, the first element of the range is always positive.
    AlternatingRangeSum,
}

/// An inclusive, 0-indexed range query `[l, r]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Query {
    pub kind: QueryKind,
    pub l: usize,
    pub r: usize,
}

impl Query {
    pub fn new(kind: QueryKind, l: usize, r: usize) -> Self {
        Self { kind, l, r }
    }

    pub fn sum(l: usize, r: usize) -> Self {
        Self::new(QueryKind::RangeSum, l, r)
    }

    pub fn alternating(l: usize, r: usize) -> Self {
        Self::new(QueryKind::AlternatingRangeSum, l, r)
    }
}

#[inline(always)]
pub(crate) fn check_range(l: usize, r: usize, len: usize) -> Result<(), RangeQueryError> {
    if l > r || r >= len {
        return Err(RangeQueryError::InvalidRange { l, r, len });
    }
    Ok(())
}
