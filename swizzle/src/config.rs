use alloc::borrow::Cow;

use crate::Family;

/// Configuration/builder for options for accessor code generation.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) flags: WriterFlags,
    pub(crate) runtime_path: Cow<'static, str>,
    pub(crate) self_type: Option<Cow<'static, str>>,
    pub(crate) vector_types: [Cow<'static, str>; 3],
    pub(crate) lanes_mut_type: Cow<'static, str>,
}

impl Default for Config {
    #[must_use]
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a [`Config`] with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: WriterFlags::all(),
            runtime_path: Cow::Borrowed("crate"),
            self_type: None,
            vector_types: [
                Cow::Borrowed("Vec2"),
                Cow::Borrowed("Vec3"),
                Cow::Borrowed("Vec4"),
            ],
            lanes_mut_type: Cow::Borrowed("LanesMut"),
        }
    }

    /// Sets whether accessors are generated for the names of `family`.
    ///
    /// The default is `true` for both families.
    #[must_use]
    pub fn family(mut self, family: Family, value: bool) -> Self {
        let flag = match family {
            Family::Position => WriterFlags::POSITION,
            Family::Color => WriterFlags::COLOR,
        };
        self.flags.set(flag, value);
        self
    }

    /// Sets whether `set_*` and `*_mut` accessors are generated for swizzles
    /// that do not repeat a lane.
    ///
    /// The default is `true`.
    #[must_use]
    pub fn mutators(mut self, value: bool) -> Self {
        self.flags.set(WriterFlags::MUTATORS, value);
        self
    }

    /// Sets the Rust module path to the vector library.
    ///
    /// Since the generated code is an inherent `impl`, it can only be used in the crate that
    /// defines the vector types, so the default is `"crate"`.
    ///
    /// # Panics
    ///
    /// May panic if the path is not syntactically valid or not an absolute path.
    #[must_use]
    pub fn runtime_path(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        let value = value.into();
        assert!(
            value.starts_with("::") || value.starts_with("crate"),
            "path should be an absolute path"
        );
        self.runtime_path = value;
        self
    }

    /// Sets the name of the type the accessors are implemented on.
    ///
    /// The default is the vector type name for the requested width,
    /// as set by [`Config::vector_types()`].
    #[must_use]
    pub fn self_type(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.self_type = Some(value.into());
        self
    }

    /// Sets the names of the 2, 3, and 4-lane vector types which swizzles return.
    ///
    /// Each must be generic over one lane type and have a `new()` function taking the lanes.
    /// The default is `Vec2`, `Vec3`, `Vec4`.
    #[must_use]
    pub fn vector_types(
        mut self,
        vec2: impl Into<Cow<'static, str>>,
        vec3: impl Into<Cow<'static, str>>,
        vec4: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.vector_types = [vec2.into(), vec3.into(), vec4.into()];
        self
    }

    /// Sets the name of the type which `*_mut` accessors return.
    ///
    /// It must have the generic parameters `<'_, T, const N: usize>`
    /// and a `new([&mut T; N])` function.
    /// The default is `LanesMut`.
    #[must_use]
    pub fn lanes_mut_type(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.lanes_mut_type = value.into();
        self
    }

    pub(crate) fn includes(&self, family: Family) -> bool {
        self.flags.contains(match family {
            Family::Position => WriterFlags::POSITION,
            Family::Color => WriterFlags::COLOR,
        })
    }

    /// Returns the type name for a vector of `width` lanes, if it is a supported width.
    pub(crate) fn vector_type(&self, width: usize) -> Option<&str> {
        width
            .checked_sub(2)
            .and_then(|i| self.vector_types.get(i))
            .map(|name| &**name)
    }
}

bitflags::bitflags! {
    /// Options for what accessors are generated.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) struct WriterFlags: u32 {
        /// Generate accessors named with `xyzw`.
        const POSITION = 0x1;

        /// Generate accessors named with `rgba`.
        const COLOR = 0x2;

        /// Generate `set_*` and `*_mut` accessors for swizzles without repeated lanes.
        const MUTATORS = 0x4;
    }
}
