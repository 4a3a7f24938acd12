//! Numeric cost abstraction.
//!
//! Path costs, step costs, heuristic estimates and frontier priorities all
//! share one type per problem. Integer costs give bit-reproducible ordering;
//! floating-point costs are ordered with IEEE 754 `totalOrder`.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

/// A non-negative accumulated cost.
///
/// Non-negativity is a caller precondition: the engine orders and sums costs
/// but does not reject negative values.
pub trait Cost: Copy + Debug + Add<Output = Self> {
    /// The additive identity (cost of the empty path).
    const ZERO: Self;

    /// Total order used for frontier priorities and visited-cost updates.
    fn cost_cmp(&self, other: &Self) -> Ordering;

    /// Whether this value is below [`Cost::ZERO`].
    fn is_negative(&self) -> bool {
        self.cost_cmp(&Self::ZERO) == Ordering::Less
    }
}

macro_rules! impl_integer_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;

                fn cost_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0.0;

                fn cost_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_integer_cost!(u8, u16, u32, u64, usize, i32, i64);
impl_float_cost!(f32, f64);
