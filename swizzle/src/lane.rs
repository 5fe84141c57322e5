/*!
Lane names, and the several spellings shader languages accept for them.
*/

use core::fmt;

/// One lane of a shader vector, identified by its position in memory.
///
/// Every vector stores its lanes in this order, whatever [`Spelling`] is used to name them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[allow(clippy::exhaustive_enums, reason = "shader vectors have at most four lanes")]
pub enum Lane {
    /// Lane 0, also called `r`.
    X,
    /// Lane 1, also called `g`.
    Y,
    /// Lane 2, also called `b`.
    Z,
    /// Lane 3, also called `a`.
    W,
}

impl Lane {
    /// All lanes, in memory order.
    pub const ALL: [Lane; 4] = [Lane::X, Lane::Y, Lane::Z, Lane::W];

    /// Returns the position of this lane within a vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lane at position `index`, or [`None`] if there is no such lane.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Lane::X),
            1 => Some(Lane::Y),
            2 => Some(Lane::Z),
            3 => Some(Lane::W),
            _ => None,
        }
    }

    /// Returns the name of the Rust struct field which stores this lane.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Lane::X => "x",
            Lane::Y => "y",
            Lane::Z => "z",
            Lane::W => "w",
        }
    }

    /// Returns the [`LaneMask`] containing only this lane.
    #[must_use]
    pub const fn mask(self) -> LaneMask {
        match self {
            Lane::X => LaneMask::X,
            Lane::Y => LaneMask::Y,
            Lane::Z => LaneMask::Z,
            Lane::W => LaneMask::W,
        }
    }
}

bitflags::bitflags! {
    /// A set of [`Lane`]s.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct LaneMask: u8 {
        /// [`Lane::X`].
        const X = 0b0001;
        /// [`Lane::Y`].
        const Y = 0b0010;
        /// [`Lane::Z`].
        const Z = 0b0100;
        /// [`Lane::W`].
        const W = 0b1000;
    }
}

impl LaneMask {
    /// Returns the lanes which a vector of `width` lanes has.
    #[must_use]
    pub fn of_width(width: usize) -> Self {
        Lane::ALL
            .iter()
            .take(width)
            .fold(Self::empty(), |mask, lane| mask | lane.mask())
    }
}

/// Naming convention for lanes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums, reason = "shader languages have exactly these")]
pub enum Family {
    /// Positional names, `x`, `y`, `z`, `w`.
    Position,
    /// Color channel names, `r`, `g`, `b`, `a`.
    Color,
}

impl Family {
    /// Both families.
    pub const ALL: [Family; 2] = [Family::Position, Family::Color];

    const fn lower_letters(self) -> [u8; 4] {
        match self {
            Family::Position => *b"xyzw",
            Family::Color => *b"rgba",
        }
    }
}

/// Letter case of lane names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_enums, reason = "there are only two")]
pub enum Case {
    /// `xyzw`, `rgba`.
    Lower,
    /// `XYZW`, `RGBA`.
    Upper,
}

/// One of the four alias spellings of lane names, such as `rgba` or `XYZW`.
///
/// All spellings refer to the same lanes.
/// A single swizzle name must use only one spelling.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_structs, reason = "a spelling is exactly these two choices")]
pub struct Spelling {
    /// Positional or color names.
    pub family: Family,
    /// Lower or upper case.
    pub case: Case,
}

impl Spelling {
    /// All four spellings.
    pub const ALL: [Spelling; 4] = [
        Spelling::new(Family::Position, Case::Lower),
        Spelling::new(Family::Position, Case::Upper),
        Spelling::new(Family::Color, Case::Lower),
        Spelling::new(Family::Color, Case::Upper),
    ];

    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(family: Family, case: Case) -> Self {
        Self { family, case }
    }

    /// Returns the same family in lower case.
    ///
    /// Rust method names are always lower case, so this is the spelling of the
    /// accessor methods corresponding to swizzles written in `self`.
    #[must_use]
    pub const fn to_lower(self) -> Self {
        Self::new(self.family, Case::Lower)
    }

    /// Returns the letter which names `lane` in this spelling.
    #[must_use]
    pub const fn letter(self, lane: Lane) -> char {
        let lower = self.family.lower_letters()[lane.index()];
        match self.case {
            Case::Lower => lower as char,
            Case::Upper => lower.to_ascii_uppercase() as char,
        }
    }

    /// Identifies which lane a letter names, and in which spelling.
    ///
    /// Returns [`None`] if `component` is not a lane name in any spelling.
    #[must_use]
    pub fn identify(component: char) -> Option<(Lane, Spelling)> {
        Self::ALL.into_iter().find_map(|spelling| {
            Lane::ALL
                .into_iter()
                .find(|&lane| spelling.letter(lane) == component)
                .map(|lane| (lane, spelling))
        })
    }
}

/// Writes the four lane letters, e.g. `xyzw` or `RGBA`.
impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lane in Lane::ALL {
            fmt::Write::write_char(f, self.letter(lane))?;
        }
        Ok(())
    }
}
