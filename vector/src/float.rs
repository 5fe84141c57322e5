/*!
Geometric and rounding functions on vectors of floating-point lanes.
*/

use num_traits::Float;

use crate::{Vec2, Vec3, Vec4};

macro_rules! impl_float {
    ($vec:ident [$($field:ident),*]) => {
        impl<T: Float> $vec<T> {
            /// Returns the dot product of `self` and `rhs`.
            #[inline]
            #[must_use]
            pub fn dot(self, rhs: Self) -> T {
                let products = self * rhs;
                T::zero() $(+ products.$field)*
            }

            /// Returns the squared length of `self`.
            #[inline]
            #[must_use]
            pub fn length_squared(self) -> T {
                self.dot(self)
            }

            /// Returns the length of `self`.
            #[inline]
            #[must_use]
            pub fn length(self) -> T {
                self.length_squared().sqrt()
            }

            /// Returns `self` scaled to length 1.
            ///
            /// The result is not finite if `self` has length zero.
            #[inline]
            #[must_use]
            pub fn normalize(self) -> Self {
                let length = self.length();
                self.map(|lane| lane / length)
            }

            /// Returns the lane-wise minimum of `self` and `rhs`.
            #[inline]
            #[must_use]
            pub fn min(self, rhs: Self) -> Self {
                self.zip_map(rhs, Float::min)
            }

            /// Returns the lane-wise maximum of `self` and `rhs`.
            #[inline]
            #[must_use]
            pub fn max(self, rhs: Self) -> Self {
                self.zip_map(rhs, Float::max)
            }

            /// Restricts each lane to the range between the corresponding lanes of `low` and `high`.
            #[inline]
            #[must_use]
            pub fn clamp(self, low: Self, high: Self) -> Self {
                self.max(low).min(high)
            }

            /// Returns the lane-wise absolute value.
            #[inline]
            #[must_use]
            pub fn abs(self) -> Self {
                self.map(Float::abs)
            }

            /// Rounds each lane toward negative infinity.
            #[inline]
            #[must_use]
            pub fn floor(self) -> Self {
                self.map(Float::floor)
            }

            /// Rounds each lane toward positive infinity.
            #[inline]
            #[must_use]
            pub fn ceil(self) -> Self {
                self.map(Float::ceil)
            }

            /// Returns the lane-wise square root.
            #[inline]
            #[must_use]
            pub fn sqrt(self) -> Self {
                self.map(Float::sqrt)
            }

            /// Linearly interpolates between `self` and `rhs` by `t`, like shader `mix()`.
            #[inline]
            #[must_use]
            pub fn lerp(self, rhs: Self, t: T) -> Self {
                self.zip_map(rhs, |a, b| a + (b - a) * t)
            }
        }
    };
}

impl_float!(Vec2 [x, y]);
impl_float!(Vec3 [x, y, z]);
impl_float!(Vec4 [x, y, z, w]);
