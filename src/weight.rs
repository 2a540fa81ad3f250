//! Edge weights
//!
//! Any primitive number can act as a weight. Edges either *are* their weight
//! (primitives) or expose it through [`WeightedEdge::weight`] (user defined edge types).

use std::fmt::{Debug, Display};
use num_traits::Zero;


/// A value that shortest path costs are accumulated in
/// Zero provides both the additive identity and `Add<Output = Self>`
///
/// Accumulated costs never panic on overflow. Integers clamp to their range,
/// floats follow IEEE addition and run off to infinity.
pub trait Weight: Copy + PartialOrd + Zero + Debug + Display {

    /// Sum clamped to the representable range
    fn add_saturating(self, rhs: Self) -> Self;

    /// Sum, or None if it leaves the representable range
    fn add_checked(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn add_saturating(self, rhs: $t) -> $t {
                    <$t>::saturating_add(self, rhs)
                }

                #[inline]
                fn add_checked(self, rhs: $t) -> Option<$t> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn add_saturating(self, rhs: $t) -> $t {
                    self + rhs
                }

                #[inline]
                fn add_checked(self, rhs: $t) -> Option<$t> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);

impl_float_weight!(f32, f64);


/// Edge payload that carries a weight
///
/// ```
/// use graph_paths::weight::WeightedEdge;
///
/// struct Road {
///     length: f64,
/// }
///
/// impl WeightedEdge for Road {
///     type Weight = f64;
///
///     fn weight(&self) -> f64 {
///         self.length
///     }
/// }
///
/// assert_eq!(Road { length: 2.5 }.weight(), 2.5);
/// assert_eq!(7u32.weight(), 7);
/// ```
pub trait WeightedEdge {
    type Weight: Weight;

    fn weight(&self) -> Self::Weight;
}

macro_rules! impl_primitive_edge {
    ($($t:ty),* $(,)?) => {
        $(
            impl WeightedEdge for $t {
                type Weight = $t;

                #[inline]
                fn weight(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_primitive_edge!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);


/// True if the weight is strictly below zero
/// Always false for unsigned types
#[inline]
pub fn is_negative<W: Weight>(weight: W) -> bool {
    weight < W::zero()
}
