use std::fmt::Debug;

/// Element type accepted by the range query engines.
///
/// Integer impls use wrapping arithmetic. Prefix tables may overflow on long
/// sequences, but a difference of two prefixes is still exact whenever the
/// true answer fits in the type.
pub trait RangeValue: Copy + Debug + PartialEq + Send + Sync + 'static {
    const ZERO: Self;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn neg(self) -> Self;
}

macro_rules! impl_wrapping {
    ($($t:ty),*) => {$(
        impl RangeValue for $t {
            const ZERO: Self = 0;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn neg(self) -> Self {
                self.wrapping_neg()
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl RangeValue for $t {
            const ZERO: Self = 0.0;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn neg(self) -> Self {
                -self
            }
        }
    )*};
}

impl_wrapping!(i32, i64, i128);
impl_float!(f32, f64);
