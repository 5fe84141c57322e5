//! Shader-style vector types for Rust.
//!
//! [`Vec2`], [`Vec3`], and [`Vec4`] hold 2, 3, or 4 lanes of any scalar type, laid out
//! densely in memory in the order `x`, `y`, `z`, `w`. They behave like the vectors of
//! WGSL, GLSL, and HLSL:
//!
//! * Lanes are public fields, and may also be called by their color names `r`, `g`, `b`, `a`.
//! * Every swizzle, such as `.zx()` or `.bgra()`, is a method returning a new vector.
//!   Swizzles which do not repeat a lane may also be written through, with `set_zx()` or
//!   `zx_mut()`.
//! * Arithmetic operators apply to each lane separately, and comparisons produce
//!   vectors of `bool`.
//!
//! Everything here is ordinary, fully defined Rust; nothing requires a GPU.
//!
//! # Example
//!
//! ```
//! use shadevec::{Vec2, Vec4d};
//!
//! let mut v = Vec4d::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(v.wzyx(), Vec4d::new(4.0, 3.0, 2.0, 1.0));
//! assert_eq!(v.b(), 3.0);
//!
//! v.set_zx(Vec2::new(10.0, 20.0));
//! assert_eq!(v, Vec4d::new(20.0, 2.0, 10.0, 4.0));
//!
//! assert_eq!(v.to_string(), "<20, 2, 10, 4>");
//! ```
//!
//! Swizzles that repeat a lane are read-only. There is no `set_xx()`:
//!
//! ```compile_fail
//! let mut v = shadevec::Vec4d::ZERO;
//! v.set_xx(shadevec::Vec2::new(1.0, 2.0));
//! ```
//!
//! ```compile_fail
//! let mut v = shadevec::Vec3f::ZERO;
//! let _ = v.rgr_mut();
//! ```
//!
//! # Features
//!
//! * `std`: use the standard library’s floating-point functions instead of `libm`.
//! * `serde`: implement `Serialize` and `Deserialize` for vectors.
//! * `bytemuck`: implement `Pod` and `Zeroable` for vectors, for uploading to GPU buffers.

#![no_std]

mod cmp;
mod display;
mod float;
mod lanes;
mod ops;
mod vector;

pub use display::{BufferTooSmall, DisplayWith};
pub use lanes::{LanesIterMut, LanesMut};
pub use vector::*;

/// Names of lanes and swizzles, for mapping shader syntax onto the methods of this library.
pub use shadevec_swizzle as swizzle;

pub use shadevec_swizzle::Lane;
