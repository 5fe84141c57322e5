use core::ops::{Index, IndexMut};

use num_traits::{ConstOne, ConstZero};

use crate::Lane;

/// Defines a vector struct and the functionality which is identical at all widths.
macro_rules! vector_type {
    (
        $(#[$meta:meta])*
        $name:ident, $lanes:literal, [$($field:ident: $lane:ident),*]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        #[allow(clippy::exhaustive_structs, reason = "lanes are fixed by the vector width")]
        pub struct $name<T> {
            $(
                #[doc = concat!("Lane `", stringify!($field), "`.")]
                pub $field: T,
            )*
        }

        impl<T> $name<T> {
            /// The number of lanes.
            pub const LANES: usize = $lanes;

            /// Creates a vector from its lanes.
            #[inline]
            #[must_use]
            pub const fn new($($field: T),*) -> Self {
                Self { $($field),* }
            }

            /// Creates a vector with all lanes equal to `value`.
            #[inline]
            #[must_use]
            pub fn splat(value: T) -> Self
            where
                T: Copy,
            {
                Self { $($field: value),* }
            }

            /// Returns the lanes as an array.
            #[inline]
            #[must_use]
            pub fn to_array(self) -> [T; $lanes] {
                [$(self.$field),*]
            }

            /// Borrows the lanes as an array.
            #[inline]
            #[must_use]
            pub const fn as_array(&self) -> &[T; $lanes] {
                // SAFETY: `#[repr(C)]` with `$lanes` fields of type `T` and no other fields
                // has the same size, alignment, and lane offsets as `[T; $lanes]`.
                unsafe { &*core::ptr::from_ref(self).cast::<[T; $lanes]>() }
            }

            /// Mutably borrows the lanes as an array.
            #[inline]
            #[must_use]
            pub const fn as_mut_array(&mut self) -> &mut [T; $lanes] {
                // SAFETY: see `as_array()`.
                unsafe { &mut *core::ptr::from_mut(self).cast::<[T; $lanes]>() }
            }

            /// Applies `f` to each lane.
            #[inline]
            #[must_use]
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name { $($field: f(self.$field)),* }
            }

            /// Applies `f` to each pair of corresponding lanes of `self` and `other`.
            #[inline]
            #[must_use]
            pub fn zip_map<U, V>(self, other: $name<U>, mut f: impl FnMut(T, U) -> V) -> $name<V> {
                $name { $($field: f(self.$field, other.$field)),* }
            }
        }

        impl<T: ConstZero + ConstOne> $name<T> {
            /// All lanes zero.
            pub const ZERO: Self = Self { $($field: T::ZERO),* };
            /// All lanes one.
            pub const ONE: Self = Self { $($field: T::ONE),* };
        }

        impl<T> From<[T; $lanes]> for $name<T> {
            #[inline]
            fn from([$($field),*]: [T; $lanes]) -> Self {
                Self { $($field),* }
            }
        }

        impl<T> From<$name<T>> for [T; $lanes] {
            #[inline]
            fn from(value: $name<T>) -> Self {
                value.to_array()
            }
        }

        /// # Panics
        ///
        /// Panics if `index` is not less than the number of lanes.
        impl<T> Index<usize> for $name<T> {
            type Output = T;
            #[inline]
            fn index(&self, index: usize) -> &T {
                match Lane::from_index(index) {
                    $(Some(Lane::$lane) => &self.$field,)*
                    _ => panic!(
                        "index {index} out of range for {} with {} lanes",
                        stringify!($name),
                        $lanes,
                    ),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match Lane::from_index(index) {
                    $(Some(Lane::$lane) => &mut self.$field,)*
                    _ => panic!(
                        "index {index} out of range for {} with {} lanes",
                        stringify!($name),
                        $lanes,
                    ),
                }
            }
        }

        /// # Panics
        ///
        /// Panics if the vector does not have the lane.
        impl<T> Index<Lane> for $name<T> {
            type Output = T;
            #[inline]
            fn index(&self, lane: Lane) -> &T {
                &self[lane.index()]
            }
        }

        impl<T> IndexMut<Lane> for $name<T> {
            #[inline]
            fn index_mut(&mut self, lane: Lane) -> &mut T {
                &mut self[lane.index()]
            }
        }

        // SAFETY: The struct is `repr(C)` and all of its fields have type `T`,
        // so it has no padding, and all-zero lanes are valid if `T` is `Zeroable`.
        #[cfg(feature = "bytemuck")]
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $name<T> {}

        // SAFETY: The struct is `repr(C)` and all of its fields have type `T`,
        // so it has no padding, and any bit pattern is valid if it is valid for `T`.
        #[cfg(feature = "bytemuck")]
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $name<T> {}
    };
}

vector_type!(
    /// A vector of two lanes, `x` and `y`.
    ///
    /// The lanes may also be called `r` and `g`.
    Vec2, 2, [x: X, y: Y]
);
vector_type!(
    /// A vector of three lanes, `x`, `y`, and `z`.
    ///
    /// The lanes may also be called `r`, `g`, and `b`.
    Vec3, 3, [x: X, y: Y, z: Z]
);
vector_type!(
    /// A vector of four lanes, `x`, `y`, `z`, and `w`.
    ///
    /// The lanes may also be called `r`, `g`, `b`, and `a`.
    Vec4, 4, [x: X, y: Y, z: Z, w: W]
);

shadevec_macros::swizzles!(Vec2, 2);
shadevec_macros::swizzles!(Vec3, 3);
shadevec_macros::swizzles!(Vec4, 4);

// -------------------------------------------------------------------------------------------------
// Width-specific constants and conversions

impl<T: ConstZero + ConstOne> Vec2<T> {
    /// The unit vector along `x`.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);
    /// The unit vector along `y`.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);
}

impl<T: ConstZero + ConstOne> Vec3<T> {
    /// The unit vector along `x`.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    /// The unit vector along `y`.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    /// The unit vector along `z`.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);
}

impl<T: ConstZero + ConstOne> Vec4<T> {
    /// The unit vector along `x`.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// The unit vector along `y`.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// The unit vector along `z`.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    /// The unit vector along `w`.
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
}

impl<T> Vec2<T> {
    /// Creates a 3-lane vector from `self` and `z`.
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T> Vec3<T> {
    /// Creates a 4-lane vector from `self` and `w`.
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Discards the `z` lane.
    #[inline]
    #[must_use]
    pub fn truncate(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }
}

impl<T> Vec4<T> {
    /// Discards the `w` lane.
    #[inline]
    #[must_use]
    pub fn truncate(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}
impl<T> From<(T, T, T)> for Vec3<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}
impl<T> From<(T, T, T, T)> for Vec4<T> {
    #[inline]
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self::new(x, y, z, w)
    }
}

/// Mixed construction, like `vec3f(v.xy, 1.0)` in shader code.
impl<T> From<(Vec2<T>, T)> for Vec3<T> {
    #[inline]
    fn from((xy, z): (Vec2<T>, T)) -> Self {
        xy.extend(z)
    }
}
/// Mixed construction, like `vec4f(v.xyz, 1.0)` in shader code.
impl<T> From<(Vec3<T>, T)> for Vec4<T> {
    #[inline]
    fn from((xyz, w): (Vec3<T>, T)) -> Self {
        xyz.extend(w)
    }
}
/// Mixed construction, like `vec4f(a.xy, b.xy)` in shader code.
impl<T> From<(Vec2<T>, Vec2<T>)> for Vec4<T> {
    #[inline]
    fn from((xy, zw): (Vec2<T>, Vec2<T>)) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }
}

// -------------------------------------------------------------------------------------------------
// Scalar-specific names

macro_rules! aliases {
    ($($scalar:ty: $v2:ident $v3:ident $v4:ident, $desc:literal;)*) => {
        $(
            #[doc = concat!("A vector of two ", $desc, " lanes.")]
            pub type $v2 = Vec2<$scalar>;
            #[doc = concat!("A vector of three ", $desc, " lanes.")]
            pub type $v3 = Vec3<$scalar>;
            #[doc = concat!("A vector of four ", $desc, " lanes.")]
            pub type $v4 = Vec4<$scalar>;
        )*
    };
}

aliases! {
    f64: Vec2d Vec3d Vec4d, "`f64`";
    f32: Vec2f Vec3f Vec4f, "`f32`";
    i32: Vec2i Vec3i Vec4i, "`i32`";
    u32: Vec2u Vec3u Vec4u, "`u32`";
    bool: Vec2b Vec3b Vec4b, "`bool`";
}
