/*!
Lane-wise comparisons, and operations on the resulting `bool` vectors.
*/

use crate::{Vec2, Vec3, Vec4};

macro_rules! impl_cmp {
    ($vec:ident [$first:ident $(, $rest:ident)*]) => {
        impl<T: PartialEq> $vec<T> {
            /// Returns a mask of the lanes where `self == rhs`.
            #[inline]
            #[must_use]
            pub fn cmpeq(self, rhs: Self) -> $vec<bool> {
                $vec { $first: self.$first == rhs.$first, $($rest: self.$rest == rhs.$rest),* }
            }

            /// Returns a mask of the lanes where `self != rhs`.
            #[inline]
            #[must_use]
            pub fn cmpne(self, rhs: Self) -> $vec<bool> {
                $vec { $first: self.$first != rhs.$first, $($rest: self.$rest != rhs.$rest),* }
            }
        }

        impl<T: PartialOrd> $vec<T> {
            /// Returns a mask of the lanes where `self > rhs`.
            #[inline]
            #[must_use]
            pub fn cmpgt(self, rhs: Self) -> $vec<bool> {
                $vec { $first: self.$first > rhs.$first, $($rest: self.$rest > rhs.$rest),* }
            }

            /// Returns a mask of the lanes where `self >= rhs`.
            #[inline]
            #[must_use]
            pub fn cmpge(self, rhs: Self) -> $vec<bool> {
                $vec { $first: self.$first >= rhs.$first, $($rest: self.$rest >= rhs.$rest),* }
            }

            /// Returns a mask of the lanes where `self < rhs`.
            #[inline]
            #[must_use]
            pub fn cmplt(self, rhs: Self) -> $vec<bool> {
                $vec { $first: self.$first < rhs.$first, $($rest: self.$rest < rhs.$rest),* }
            }

            /// Returns a mask of the lanes where `self <= rhs`.
            #[inline]
            #[must_use]
            pub fn cmple(self, rhs: Self) -> $vec<bool> {
                $vec { $first: self.$first <= rhs.$first, $($rest: self.$rest <= rhs.$rest),* }
            }
        }

        impl<T> $vec<T> {
            /// Chooses each lane from `if_true` where `mask` is true, and `if_false` elsewhere.
            ///
            /// This is the shader `select()` function, but with the arguments in
            /// the order of an `if`.
            #[inline]
            #[must_use]
            pub fn select(mask: $vec<bool>, if_true: Self, if_false: Self) -> Self {
                Self {
                    $first: if mask.$first { if_true.$first } else { if_false.$first },
                    $($rest: if mask.$rest { if_true.$rest } else { if_false.$rest }),*
                }
            }
        }

        impl $vec<bool> {
            /// Returns whether every lane is true.
            #[inline]
            #[must_use]
            pub const fn all(self) -> bool {
                self.$first $(&& self.$rest)*
            }

            /// Returns whether any lane is true.
            #[inline]
            #[must_use]
            pub const fn any(self) -> bool {
                self.$first $(|| self.$rest)*
            }
        }
    };
}

impl_cmp!(Vec2 [x, y]);
impl_cmp!(Vec3 [x, y, z]);
impl_cmp!(Vec4 [x, y, z, w]);
