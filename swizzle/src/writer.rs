use core::fmt::{self, Write};

use crate::{Case, Config, Error, Family, Lane, MAX_ARITY, MAX_WIDTH, Spelling, Swizzle};

// -------------------------------------------------------------------------------------------------

/// Shorthand result used internally by the generator
type WriteResult = Result<(), Error>;

const INDENT: &str = "    ";

/// Generator of Rust accessor methods for every swizzle of a vector type.
///
/// Writes Rust code to a [`Write`] implementation of type `W`.
/// The output is a single inherent `impl` block.
#[derive(Debug)]
pub struct Writer<W> {
    out: W,
    config: Config,
}

impl<W: Write> Writer<W> {
    /// Creates a new [`Writer`] for writing code to `out`.
    pub fn new(out: W, config: Config) -> Self {
        Writer { out, config }
    }

    /// Writes the accessors of a vector with `width` lanes.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is unsupported
    /// or if the contained [`Write`] implementation returns an error.
    pub fn write(&mut self, width: usize) -> WriteResult {
        let Some(default_self_type) = self.config.vector_type(width) else {
            return Err(Error::UnsupportedWidth(width));
        };
        let self_type = self.config.self_type.as_deref().unwrap_or(default_self_type);

        writeln!(
            self.out,
            "impl<T: Copy> {rt}::{self_type}<T> {{",
            rt = self.config.runtime_path,
        )?;
        for family in Family::ALL {
            if !self.config.includes(family) {
                continue;
            }
            let spelling = Spelling::new(family, Case::Lower);

            // Single positional lanes are plain struct fields, so only the color names
            // need accessors.
            if family == Family::Color {
                for swizzle in Swizzle::all(width, 1, spelling) {
                    self.write_single_lane(&swizzle)?;
                }
            }

            for arity in 2..=MAX_ARITY {
                for swizzle in Swizzle::all(width, arity, spelling) {
                    self.write_getter(&swizzle)?;
                    if self.config.flags.contains(crate::config::WriterFlags::MUTATORS)
                        && swizzle.is_writable()
                    {
                        self.write_setter(&swizzle)?;
                        self.write_borrower(&swizzle)?;
                    }
                }
            }
        }
        writeln!(self.out, "}}")?;

        Ok(())
    }

    /// Returns the output.
    pub fn finish(self) -> W {
        self.out
    }

    fn write_single_lane(&mut self, swizzle: &Swizzle) -> WriteResult {
        let &[lane] = swizzle.lanes() else {
            unreachable!("single-lane accessor for {swizzle}");
        };
        let field = lane.field();
        let alias = upper_case(swizzle);

        writeln!(
            self.out,
            "{INDENT}/// Returns lane `{field}` by its color name.\n\
            {INDENT}#[doc(alias = \"{alias}\")]\n\
            {INDENT}#[inline]\n\
            {INDENT}#[must_use]\n\
            {INDENT}pub fn {swizzle}(self) -> T {{\n\
            {INDENT}{INDENT}self.{field}\n\
            {INDENT}}}"
        )?;
        if self.config.flags.contains(crate::config::WriterFlags::MUTATORS) {
            writeln!(
                self.out,
                "{INDENT}/// Replaces lane `{field}` by its color name.\n\
                {INDENT}#[inline]\n\
                {INDENT}pub fn set_{swizzle}(&mut self, value: T) {{\n\
                {INDENT}{INDENT}self.{field} = value;\n\
                {INDENT}}}\n\
                {INDENT}/// Borrows lane `{field}` by its color name.\n\
                {INDENT}#[inline]\n\
                {INDENT}#[must_use]\n\
                {INDENT}pub fn {swizzle}_mut(&mut self) -> &mut T {{\n\
                {INDENT}{INDENT}&mut self.{field}\n\
                {INDENT}}}"
            )?;
        }
        Ok(())
    }

    fn write_getter(&mut self, swizzle: &Swizzle) -> WriteResult {
        let rt = &self.config.runtime_path;
        let output_type = output_type(&self.config, swizzle);

        writeln!(
            self.out,
            "{INDENT}/// Returns a vector of lanes {letters}.\n\
            {INDENT}#[doc(alias = \"{alias}\")]\n\
            {INDENT}#[inline]\n\
            {INDENT}#[must_use]\n\
            {INDENT}pub fn {swizzle}(self) -> {rt}::{output_type}<T> {{",
            letters = LetterList(swizzle),
            alias = upper_case(swizzle),
        )?;
        write!(self.out, "{INDENT}{INDENT}{rt}::{output_type}::new(")?;
        for (i, lane) in swizzle.lanes().iter().enumerate() {
            if i > 0 {
                write!(self.out, ", ")?;
            }
            write!(self.out, "self.{}", lane.field())?;
        }
        writeln!(self.out, ")\n{INDENT}}}")?;
        Ok(())
    }

    fn write_setter(&mut self, swizzle: &Swizzle) -> WriteResult {
        let rt = &self.config.runtime_path;
        let output_type = output_type(&self.config, swizzle);

        writeln!(
            self.out,
            "{INDENT}/// Replaces lanes {letters} with the lanes of `value`, in order.\n\
            {INDENT}#[inline]\n\
            {INDENT}pub fn set_{swizzle}(&mut self, value: {rt}::{output_type}<T>) {{",
            letters = LetterList(swizzle),
        )?;
        for (i, lane) in swizzle.lanes().iter().enumerate() {
            writeln!(
                self.out,
                "{INDENT}{INDENT}self.{field} = value.{source};",
                field = lane.field(),
                source = result_field(i),
            )?;
        }
        writeln!(self.out, "{INDENT}}}")?;
        Ok(())
    }

    fn write_borrower(&mut self, swizzle: &Swizzle) -> WriteResult {
        let rt = &self.config.runtime_path;
        let lanes_mut = &self.config.lanes_mut_type;
        let arity = swizzle.arity();

        writeln!(
            self.out,
            "{INDENT}/// Borrows lanes {letters} for writing.\n\
            {INDENT}#[inline]\n\
            {INDENT}#[must_use]\n\
            {INDENT}pub fn {swizzle}_mut(&mut self) -> {rt}::{lanes_mut}<'_, T, {arity}> {{",
            letters = LetterList(swizzle),
        )?;

        // The destructuring pattern lists fields in memory order; the array is in swizzle order.
        write!(self.out, "{INDENT}{INDENT}let Self {{ ")?;
        for lane in Lane::ALL {
            if swizzle.mask().contains(lane.mask()) {
                write!(self.out, "{}, ", lane.field())?;
            }
        }
        writeln!(self.out, ".. }} = self;")?;

        write!(self.out, "{INDENT}{INDENT}{rt}::{lanes_mut}::new([")?;
        for (i, lane) in swizzle.lanes().iter().enumerate() {
            if i > 0 {
                write!(self.out, ", ")?;
            }
            write!(self.out, "{}", lane.field())?;
        }
        writeln!(self.out, "])\n{INDENT}}}")?;
        Ok(())
    }
}

fn output_type<'c>(config: &'c Config, swizzle: &Swizzle) -> &'c str {
    // Swizzle arities are always 2..=4 here, which are exactly the configured types.
    config
        .vector_type(swizzle.arity())
        .unwrap_or_else(|| unreachable!("no vector type for swizzle {swizzle}"))
}

/// The swizzle as it is written in the upper-case spelling of its family, e.g. `ZX` for `zx`.
fn upper_case(swizzle: &Swizzle) -> Swizzle {
    swizzle.respelled(Spelling::new(swizzle.spelling().family, Case::Upper))
}

/// Name of the field of a swizzle's result vector which receives its `i`th lane.
fn result_field(i: usize) -> &'static str {
    debug_assert!(i < MAX_WIDTH);
    Lane::from_index(i).map_or("", Lane::field)
}

/// Formats e.g. “`b`, `r`” for the swizzle `br`.
struct LetterList<'a>(&'a Swizzle);

impl fmt::Display for LetterList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let swizzle = self.0;
        for (i, &lane) in swizzle.lanes().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{}`", swizzle.spelling().letter(lane))?;
        }
        Ok(())
    }
}
