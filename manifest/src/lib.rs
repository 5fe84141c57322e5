//! Lists the swizzle accessors which the `shadevec` vector types have.
//!
//! A tool which translates shader code into Rust needs to know, for each swizzle it
//! encounters, which Rust method reads it and whether any method writes it. This library
//! answers that as a list of [`Entry`] values, and renders the list as text or JSON.
//! The `shadevec-manifest` binary is a command-line front end to it.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;
use shadevec_swizzle::{Config, Family, MAX_ARITY, MAX_WIDTH, Spelling, Swizzle};

// -------------------------------------------------------------------------------------------------

/// Errors returned when listing or rendering swizzles.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Vectors of this many lanes do not exist.
    UnsupportedWidth(usize),

    /// Swizzles of this many lanes do not exist.
    UnsupportedArity(usize),

    /// Generating the Rust source failed.
    Generate(shadevec_swizzle::Error),

    /// Serializing JSON failed.
    Json(serde_json::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::UnsupportedWidth(_) | Error::UnsupportedArity(_) => None,
            Error::Generate(error) => Some(error),
            Error::Json(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedWidth(width) => write!(
                f,
                "vectors must have between 2 and {MAX_WIDTH} lanes, not {width}"
            ),
            Error::UnsupportedArity(arity) => write!(
                f,
                "swizzles must select between 1 and {MAX_ARITY} lanes, not {arity}"
            ),
            Error::Generate(_) => write!(f, "failed to generate accessors"),
            Error::Json(_) => write!(f, "failed to serialize manifest"),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Which swizzles to list.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Query {
    /// Number of lanes of the vector whose swizzles are listed.
    pub width: usize,

    /// If set, only swizzles selecting exactly this many lanes are listed.
    pub arity: Option<usize>,

    /// Spellings to list, in order. Each spelling lists every swizzle once.
    pub spellings: Vec<Spelling>,

    /// Whether to omit swizzles which repeat a lane.
    pub writable_only: bool,
}

impl Query {
    /// Lists every swizzle of a `width`-lane vector, in all four spellings.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            arity: None,
            spellings: Spelling::ALL.to_vec(),
            writable_only: false,
        }
    }

    fn check_width(&self) -> Result<(), Error> {
        if (2..=MAX_WIDTH).contains(&self.width) {
            Ok(())
        } else {
            Err(Error::UnsupportedWidth(self.width))
        }
    }

    fn arities(&self) -> Result<RangeInclusive<usize>, Error> {
        self.check_width()?;
        match self.arity {
            Some(arity) if (1..=MAX_ARITY).contains(&arity) => Ok(arity..=arity),
            Some(arity) => Err(Error::UnsupportedArity(arity)),
            None => Ok(1..=MAX_ARITY),
        }
    }

    fn includes(&self, family: Family) -> bool {
        self.spellings.iter().any(|spelling| spelling.family == family)
    }
}

/// How an [`Entry`] is reached from Rust code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(clippy::exhaustive_enums, reason = "lanes are either fields or methods")]
pub enum Access {
    /// A public struct field, such as `v.x`, which is both readable and assignable.
    Field,
    /// Accessor methods, such as `v.zx()`.
    Method,
}

/// One swizzle and the Rust accessors which implement it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Entry {
    /// The swizzle as written in shader code, e.g. `ZX`.
    pub name: String,

    /// Names of the struct fields the swizzle selects, in order.
    pub lanes: Vec<&'static str>,

    /// Whether the swizzle may be assigned to.
    pub writable: bool,

    #[allow(missing_docs)]
    pub access: Access,

    /// Name of the field or method which reads the swizzle.
    pub read: String,

    /// Name of the method which replaces the selected lanes, if there is one.
    pub set: Option<String>,

    /// Name of the method which borrows the selected lanes, if there is one.
    pub mutable: Option<String>,
}

impl Entry {
    /// Describes the accessors of `swizzle`.
    #[must_use]
    pub fn new(swizzle: &Swizzle) -> Self {
        let name = swizzle.to_string();
        let method = swizzle.method_name().to_string();
        let lanes = swizzle.lanes().iter().map(|lane| lane.field()).collect();
        let writable = swizzle.is_writable();

        if swizzle.arity() == 1 && swizzle.spelling().family == Family::Position {
            Self {
                name,
                lanes,
                writable,
                access: Access::Field,
                read: method,
                set: None,
                mutable: None,
            }
        } else {
            Self {
                name,
                lanes,
                writable,
                access: Access::Method,
                set: writable.then(|| format!("set_{method}")),
                mutable: writable.then(|| format!("{method}_mut")),
                read: method,
            }
        }
    }
}

/// Formats as one line of [`render_text()`] output, without the line ending.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            lanes,
            writable,
            access,
            read,
            set,
            mutable,
        } = self;
        let lanes = lanes.join(",");
        let rw = if *writable { "rw" } else { "ro" };

        write!(f, "{name:<4}  {lanes:<7}  {rw}  ")?;
        match access {
            Access::Field => write!(f, ".{read}"),
            Access::Method => {
                write!(f, "{read}()")?;
                for method in [set, mutable].into_iter().flatten() {
                    write!(f, " {method}()")?;
                }
                Ok(())
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Lists the swizzles selected by `query`, grouped by spelling, then by arity, then in
/// lexicographic order of lanes.
///
/// # Errors
///
/// Returns an error if the width or arity of `query` is out of range.
pub fn entries(query: &Query) -> Result<Vec<Entry>, Error> {
    let arities = query.arities()?;

    let mut entries = Vec::new();
    for &spelling in &query.spellings {
        for arity in arities.clone() {
            entries.extend(
                Swizzle::all(query.width, arity, spelling)
                    .filter(|swizzle| !query.writable_only || swizzle.is_writable())
                    .map(|swizzle| Entry::new(&swizzle)),
            );
        }
    }

    tracing::debug!(
        width = query.width,
        count = entries.len(),
        "listed swizzles"
    );
    Ok(entries)
}

/// Renders `entries` as aligned text, one line per swizzle.
#[must_use]
pub fn render_text(entries: &[Entry]) -> String {
    entries.iter().map(|entry| format!("{entry}\n")).collect()
}

/// Renders `entries` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn render_json(entries: &[Entry]) -> Result<String, Error> {
    let mut json = serde_json::to_string_pretty(entries).map_err(Error::Json)?;
    json.push('\n');
    Ok(json)
}

/// Renders the Rust accessor methods which `shadevec` generates for the vector
/// described by `query`.
///
/// Only the families of `query.spellings` are included. Case, arity, and writability filters
/// do not apply, since the methods of one width are generated together.
///
/// The output is a reference listing. Paths are rooted at `::shadevec` for readability, but an
/// inherent `impl` on a foreign type, calling the crate-private `LanesMut::new()`, does not
/// compile outside `shadevec` itself.
///
/// # Errors
///
/// Returns an error if the width of `query` is out of range.
pub fn render_rust(query: &Query) -> Result<String, Error> {
    query.check_width()?;
    let config = Config::new()
        .runtime_path("::shadevec")
        .family(Family::Position, query.includes(Family::Position))
        .family(Family::Color, query.includes(Family::Color));
    shadevec_swizzle::write_string(query.width, config).map_err(Error::Generate)
}

/// Parses the name of a spelling, such as `rgba` or `XYZW`.
#[must_use]
pub fn parse_spelling(name: &str) -> Option<Spelling> {
    Spelling::ALL
        .into_iter()
        .find(|spelling| spelling.to_string() == name)
}

// -------------------------------------------------------------------------------------------------
