use core::fmt;

use arrayvec::ArrayVec;

use crate::{Case, Lane, LaneMask, Spelling};

/// The largest number of lanes a shader vector may have.
pub const MAX_WIDTH: usize = 4;

/// The largest number of lanes a swizzle may select.
pub const MAX_ARITY: usize = 4;

/// An ordered selection of one to four lanes, possibly repeating, such as `zx` or `rrga`.
///
/// The `Display` form is the swizzle name in its own spelling.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Swizzle {
    lanes: ArrayVec<Lane, MAX_ARITY>,
    spelling: Spelling,
}

impl Swizzle {
    /// Creates a swizzle selecting `lanes` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Empty`] or [`ParseError::TooLong`] if `lanes` does not have
    /// between 1 and [`MAX_ARITY`] elements.
    pub fn from_lanes(lanes: &[Lane], spelling: Spelling) -> Result<Self, ParseError> {
        if lanes.is_empty() {
            return Err(ParseError::Empty);
        }
        let lanes = ArrayVec::try_from(lanes).map_err(|_| ParseError::TooLong { len: lanes.len() })?;
        Ok(Self { lanes, spelling })
    }

    /// Parses a swizzle name as it would be written in shader code, for a vector of `width` lanes.
    ///
    /// All four spellings are accepted (`zx`, `ZX`, `br`, `BR`), but a single name may not
    /// mix them.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a swizzle which a `width`-lane vector has.
    pub fn parse(name: &str, width: usize) -> Result<Self, ParseError> {
        let mut lanes = ArrayVec::new();
        let mut spelling = None;
        for component in name.chars() {
            let (lane, component_spelling) =
                Spelling::identify(component).ok_or(ParseError::UnknownComponent { component })?;
            match spelling {
                None => spelling = Some(component_spelling),
                Some(s) if s != component_spelling => return Err(ParseError::MixedSpelling),
                Some(_) => {}
            }
            if lane.index() >= width {
                return Err(ParseError::LaneOutOfRange { lane, width });
            }
            lanes.try_push(lane).map_err(|_| ParseError::TooLong {
                len: name.chars().count(),
            })?;
        }

        let spelling = spelling.ok_or(ParseError::Empty)?;
        Ok(Self { lanes, spelling })
    }

    /// Returns every swizzle of `arity` lanes on a vector of `width` lanes, written in `spelling`.
    ///
    /// Swizzles are produced in lexicographic order of their lanes: `xx`, `xy`, … `ww`.
    /// If `width` or `arity` is out of range, the iterator is empty.
    pub fn all(width: usize, arity: usize, spelling: Spelling) -> impl Iterator<Item = Swizzle> {
        let width = if width <= MAX_WIDTH { width } else { 0 };
        (0..count(width, arity)).map(move |mut n| {
            let mut lanes: ArrayVec<Lane, MAX_ARITY> = ArrayVec::new();
            for _ in 0..arity {
                lanes.push(Lane::ALL[n % width]);
                n /= width;
            }
            lanes.reverse();
            Swizzle { lanes, spelling }
        })
    }

    /// Returns the selected lanes, in order.
    #[must_use]
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Returns how many lanes are selected, which is the width of the swizzle's result.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.lanes.len()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Returns the set of lanes this swizzle touches.
    #[must_use]
    pub fn mask(&self) -> LaneMask {
        self.lanes
            .iter()
            .fold(LaneMask::empty(), |mask, lane| mask | lane.mask())
    }

    /// Returns whether the swizzle may be assigned to, which is true when no lane is repeated.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.mask().iter().count() == self.arity()
    }

    /// Returns the same lanes under a different spelling.
    #[must_use]
    pub fn respelled(&self, spelling: Spelling) -> Self {
        Self {
            lanes: self.lanes.clone(),
            spelling,
        }
    }

    /// Returns the swizzle as it is spelled in Rust method names (always lower case).
    #[must_use]
    pub fn method_name(&self) -> Self {
        self.respelled(self.spelling.to_lower())
    }
}

impl fmt::Display for Swizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &lane in &self.lanes {
            fmt::Write::write_char(f, self.spelling.letter(lane))?;
        }
        Ok(())
    }
}

/// Returns the number of distinct swizzles of `arity` lanes on a vector of `width` lanes.
///
/// Returns zero if `arity` is not between 1 and [`MAX_ARITY`].
#[must_use]
pub(crate) fn count(width: usize, arity: usize) -> usize {
    if (1..=MAX_ARITY).contains(&arity) {
        (0..arity).fold(1, |n, _| n * width)
    } else {
        0
    }
}

/// Returns the number of those swizzles counted by [`count()`] which do not repeat any lane.
#[must_use]
pub(crate) fn writable_count(width: usize, arity: usize) -> usize {
    if (1..=MAX_ARITY).contains(&arity) && arity <= width {
        (0..arity).map(|i| width - i).product()
    } else {
        0
    }
}

impl Swizzle {
    /// Returns the number of swizzles [`Swizzle::all()`] produces for the same arguments.
    #[must_use]
    pub fn count(width: usize, arity: usize) -> usize {
        if width > MAX_WIDTH {
            0
        } else {
            count(width, arity)
        }
    }

    /// Returns how many of the swizzles counted by [`Swizzle::count()`] are writable.
    #[must_use]
    pub fn writable_count(width: usize, arity: usize) -> usize {
        if width > MAX_WIDTH {
            0
        } else {
            writable_count(width, arity)
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Error from [`Swizzle::parse()`] or [`Swizzle::from_lanes()`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// The name was empty.
    Empty,

    /// The name selected more than [`MAX_ARITY`] lanes.
    TooLong {
        /// Number of lanes in the name.
        len: usize,
    },

    /// A character was not the name of a lane.
    UnknownComponent {
        /// The unrecognized character.
        component: char,
    },

    /// The name used more than one of the alias spellings, e.g. `xg` or `xY`.
    MixedSpelling,

    /// The name referred to a lane the vector does not have, e.g. `z` on a 2-lane vector.
    LaneOutOfRange {
        /// The lane named.
        lane: Lane,
        /// Width of the vector.
        width: usize,
    },
}

impl core::error::Error for ParseError {}
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "swizzle name is empty"),
            ParseError::TooLong { len } => write!(
                f,
                "swizzle selects {len} lanes but at most {MAX_ARITY} are allowed"
            ),
            ParseError::UnknownComponent { component } => {
                write!(f, "“{component}” is not a vector lane name")
            }
            ParseError::MixedSpelling => write!(
                f,
                "swizzle name mixes lane spellings; use only one of xyzw, XYZW, rgba, RGBA"
            ),
            ParseError::LaneOutOfRange { lane, width } => write!(
                f,
                "lane {x}/{r} does not exist in a vector of {width} lanes",
                x = lane.field(),
                r = Spelling::new(crate::Family::Color, Case::Lower).letter(*lane),
            ),
        }
    }
}

// -------------------------------------------------------------------------------------------------
