//! Vocabulary of shader vector swizzles, and a generator for the Rust accessors
//! which implement them.
//!
//! A swizzle such as `v.zx` or `v.bgra` selects and reorders the lanes of a vector by name.
//! This library knows which names exist for a vector of a given width, which of them may be
//! written through (those whose lanes are pairwise distinct), and how to write the Rust source
//! of the accessor methods for all of them.
//!
//! The generated code is intended for the `shadevec` library, which runs it through
//! `shadevec-macros`. You may also use [`Swizzle::parse()`] on its own to map shader
//! syntax onto the accessor methods that exist.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

// -------------------------------------------------------------------------------------------------

mod config;
mod lane;
mod swizzle;
mod writer;

pub use config::Config;
pub use lane::{Case, Family, Lane, LaneMask, Spelling};
pub use swizzle::{MAX_ARITY, MAX_WIDTH, ParseError, Swizzle};
pub use writer::Writer;

// -------------------------------------------------------------------------------------------------

/// Errors returned by the accessor generator.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The provided [`fmt::Write`] implementation returned an error.
    FmtError(fmt::Error),

    /// Accessors were requested for a vector width that shader languages do not have.
    UnsupportedWidth(usize),
}

impl From<fmt::Error> for Error {
    fn from(value: fmt::Error) -> Self {
        Self::FmtError(value)
    }
}

impl core::error::Error for Error {}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FmtError(fmt::Error) => write!(f, "formatting cancelled"),
            Error::UnsupportedWidth(width) => write!(
                f,
                "vectors must have between 2 and {MAX_WIDTH} lanes, not {width}"
            ),
        }
    }
}

/// Writes the swizzle accessors of a `width`-lane vector to a string of Rust code.
///
/// # Errors
///
/// Returns an error if `width` is not 2, 3, or 4.
pub fn write_string(width: usize, config: Config) -> Result<String, Error> {
    let mut w = Writer::new(String::new(), config);
    w.write(width)?;
    let output = w.finish();
    Ok(output)
}
