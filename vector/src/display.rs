/*!
Textual formatting of vectors as `<x, y, z, w>`.
*/

use core::fmt::{self, Write as _};

use crate::{Vec2, Vec3, Vec4};

const DEFAULT_SEPARATOR: &str = ", ";

/// Writes `lanes` between angle brackets.
///
/// Each lane is formatted with the options of `f`, so `{:.2}` applies to every lane.
fn write_lanes(
    f: &mut fmt::Formatter<'_>,
    separator: &str,
    lanes: &[&dyn fmt::Display],
) -> fmt::Result {
    f.write_char('<')?;
    for (i, lane) in lanes.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        fmt::Display::fmt(lane, f)?;
    }
    f.write_char('>')
}

/// [`fmt::Display`] wrapper for a vector with a custom lane separator.
///
/// Returned by `display_with()` on each vector type.
pub struct DisplayWith<'a, const N: usize> {
    lanes: [&'a dyn fmt::Display; N],
    separator: &'a str,
}

impl<const N: usize> fmt::Display for DisplayWith<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lanes(f, self.separator, &self.lanes)
    }
}

impl<const N: usize> fmt::Debug for DisplayWith<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayWith")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

/// Error from `try_format()` when the formatted vector does not fit in the buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BufferTooSmall {
    capacity: usize,
}

impl BufferTooSmall {
    /// Returns the length of the buffer that was too small.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl core::error::Error for BufferTooSmall {}
impl fmt::Display for BufferTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer of {} bytes is too small for the formatted vector",
            self.capacity
        )
    }
}

/// [`fmt::Write`] into a fixed byte slice, failing instead of truncating.
struct SliceWriter<'a> {
    buffer: &'a mut [u8],
    written: usize,
}

impl fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.written.checked_add(s.len()).ok_or(fmt::Error)?;
        let destination = self.buffer.get_mut(self.written..end).ok_or(fmt::Error)?;
        destination.copy_from_slice(s.as_bytes());
        self.written = end;
        Ok(())
    }
}

fn try_format_into(value: &dyn fmt::Display, buffer: &mut [u8]) -> Result<usize, BufferTooSmall> {
    let capacity = buffer.len();
    let mut writer = SliceWriter { buffer, written: 0 };
    write!(writer, "{value}").map_err(|fmt::Error| BufferTooSmall { capacity })?;
    Ok(writer.written)
}

macro_rules! impl_display {
    ($vec:ident $lanes:literal [$($field:ident),*]) => {
        /// Formats as `<x, y, …>`, applying the formatter’s options to each lane.
        impl<T: fmt::Display> fmt::Display for $vec<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_lanes(f, DEFAULT_SEPARATOR, &[$(&self.$field),*])
            }
        }

        impl<T: fmt::Display> $vec<T> {
            /// Returns a [`fmt::Display`] wrapper which writes `separator` between lanes
            /// instead of `", "`.
            #[must_use]
            pub fn display_with<'a>(&'a self, separator: &'a str) -> DisplayWith<'a, $lanes> {
                DisplayWith {
                    lanes: [$(&self.$field),*],
                    separator,
                }
            }

            /// Formats `self` as UTF-8 into `buffer` without allocating,
            /// and returns the number of bytes written.
            ///
            /// # Errors
            ///
            /// Returns [`BufferTooSmall`] if the text does not fit.
            /// The contents of `buffer` are then unspecified.
            pub fn try_format(&self, buffer: &mut [u8]) -> Result<usize, BufferTooSmall> {
                try_format_into(self, buffer)
            }
        }
    };
}

impl_display!(Vec2 2 [x, y]);
impl_display!(Vec3 3 [x, y, z]);
impl_display!(Vec4 4 [x, y, z, w]);
