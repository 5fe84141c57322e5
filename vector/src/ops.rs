/*!
Lane-wise operator implementations.
*/

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use crate::{Vec2, Vec3, Vec4};

macro_rules! impl_unary_op {
    ($vec:ident [$($field:ident),*] $trait:ident $method:ident) => {
        impl<T: $trait<Output = T>> $trait for $vec<T> {
            type Output = Self;
            #[inline]
            fn $method(self) -> Self {
                Self { $($field: self.$field.$method()),* }
            }
        }
    };
}

/// Vector-vector operator and its assignment form.
macro_rules! impl_binary_op {
    ($vec:ident [$($field:ident),*] $trait:ident $method:ident) => {
        impl<T: $trait<Output = T>> $trait for $vec<T> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self { $($field: self.$field.$method(rhs.$field)),* }
            }
        }

        paste::paste! {
            impl<T: [<$trait Assign>]> [<$trait Assign>] for $vec<T> {
                #[inline]
                fn [<$method _assign>](&mut self, rhs: Self) {
                    $( self.$field.[<$method _assign>](rhs.$field); )*
                }
            }
        }
    };
}

/// Vector-scalar and scalar-vector operators, for every primitive numeric scalar.
///
/// The orphan rule forbids `impl<T> Add<Vec2<T>> for T`, so these are listed per scalar type.
macro_rules! impl_scalar_ops {
    ($vec:ident $fields:tt $trait:ident $method:ident) => {
        impl_scalar_ops!(@each $vec $fields $trait $method [f32 f64 i8 i16 i32 i64 u8 u16 u32 u64]);
    };
    (@each $vec:ident $fields:tt $trait:ident $method:ident [$($scalar:ident)*]) => {
        $( impl_scalar_op!($vec $fields $trait $method $scalar); )*
    };
}

macro_rules! impl_scalar_op {
    ($vec:ident [$($field:ident),*] $trait:ident $method:ident $scalar:ident) => {
        impl $trait<$scalar> for $vec<$scalar> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: $scalar) -> Self {
                Self { $($field: self.$field.$method(rhs)),* }
            }
        }

        impl $trait<$vec<$scalar>> for $scalar {
            type Output = $vec<$scalar>;
            #[inline]
            fn $method(self, rhs: $vec<$scalar>) -> $vec<$scalar> {
                $vec { $($field: self.$method(rhs.$field)),* }
            }
        }

        paste::paste! {
            impl [<$trait Assign>]<$scalar> for $vec<$scalar> {
                #[inline]
                fn [<$method _assign>](&mut self, rhs: $scalar) {
                    $( self.$field.[<$method _assign>](rhs); )*
                }
            }
        }
    };
}

macro_rules! impl_vector_ops {
    ($vec:ident $fields:tt) => {
        impl_unary_op!($vec $fields Neg neg);
        impl_unary_op!($vec $fields Not not);

        impl_binary_op!($vec $fields Add add);
        impl_binary_op!($vec $fields Sub sub);
        impl_binary_op!($vec $fields Mul mul);
        impl_binary_op!($vec $fields Div div);
        impl_binary_op!($vec $fields Rem rem);
        impl_binary_op!($vec $fields BitAnd bitand);
        impl_binary_op!($vec $fields BitOr bitor);
        impl_binary_op!($vec $fields BitXor bitxor);

        impl_scalar_ops!($vec $fields Add add);
        impl_scalar_ops!($vec $fields Sub sub);
        impl_scalar_ops!($vec $fields Mul mul);
        impl_scalar_ops!($vec $fields Div div);
        impl_scalar_ops!($vec $fields Rem rem);
    };
}

impl_vector_ops!(Vec2 [x, y]);
impl_vector_ops!(Vec3 [x, y, z]);
impl_vector_ops!(Vec4 [x, y, z, w]);
