//! The canonical text form of a complex number, `<R;I>`.
//!
//! `R` and `I` are the real and imaginary components written as decimal numbers. The default
//! [`NumberFormat::Shortest`] writes the shortest digits that read back to the same `f64`, so
//! `parse(&c.to_string()) == Ok(c)` for every finite `c`. The `;` separator leaves `,` free
//! for locales that use it as the decimal point; see [`DecimalComma`].

use std::fmt::{self, Alignment, Display, Formatter, LowerExp, Write};
use std::num::ParseFloatError;
use std::str::FromStr;

use tracing::trace;

use crate::complex::{Complex, IMAGINARY_UNIT};
use crate::error::ParseComplexError;

/// How each component is written.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum NumberFormat {
    /// Shortest representation that round-trips exactly.
    #[default]
    Shortest,
    /// Fixed number of digits after the decimal point.
    Fixed(u16),
    /// Scientific notation, optionally with a fixed number of fractional digits.
    Exponent(Option<u16>),
}

/// Locale-dependent formatting and parsing of a single component.
pub trait FormatProvider {
    fn format_number(&self, value: f64, format: NumberFormat) -> String;

    fn parse_number(&self, text: &str) -> Result<f64, ParseFloatError> {
        text.trim().parse()
    }
}

/// `.` as the decimal point, no digit grouping.
#[derive(Debug, Copy, Clone, Default)]
pub struct Invariant;

impl FormatProvider for Invariant {
    fn format_number(&self, value: f64, format: NumberFormat) -> String {
        match format {
            NumberFormat::Shortest => value.to_string(),
            NumberFormat::Fixed(precision) => format!("{:.*}", usize::from(precision), value),
            NumberFormat::Exponent(None) => format!("{:e}", value),
            NumberFormat::Exponent(Some(precision)) => {
                format!("{:.*e}", usize::from(precision), value)
            }
        }
    }
}

/// `,` as the decimal point, no digit grouping.
#[derive(Debug, Copy, Clone, Default)]
pub struct DecimalComma;

impl FormatProvider for DecimalComma {
    fn format_number(&self, value: f64, format: NumberFormat) -> String {
        Invariant.format_number(value, format).replace('.', ",")
    }

    fn parse_number(&self, text: &str) -> Result<f64, ParseFloatError> {
        Invariant.parse_number(&text.replace(',', "."))
    }
}

/// Formats `c` as `<R;I>`. Missing arguments fall back to [`NumberFormat::Shortest`] and
/// [`Invariant`].
pub fn format(
    c: Complex,
    format: Option<NumberFormat>,
    provider: Option<&dyn FormatProvider>,
) -> String {
    let format = format.unwrap_or_default();
    let provider = provider.unwrap_or(&Invariant);
    format!(
        "<{};{}>",
        provider.format_number(c.real(), format),
        provider.format_number(c.imaginary(), format),
    )
}

/// Parses the `<R;I>` form written with the [`Invariant`] provider.
pub fn parse(s: &str) -> Result<Complex, ParseComplexError> {
    parse_with(s, &Invariant)
}

/// Parses the `<R;I>` form, reading each component with `provider`.
///
/// The components are split at the first `;`. Surrounding whitespace inside a component is
/// ignored.
pub fn parse_with(s: &str, provider: &dyn FormatProvider) -> Result<Complex, ParseComplexError> {
    if s.is_empty() {
        return Err(ParseComplexError::Empty);
    }
    let inner = s.strip_prefix('<').ok_or(ParseComplexError::MissingOpen)?;
    let inner = inner.strip_suffix('>').ok_or(ParseComplexError::MissingClose)?;
    let (real, imaginary) = inner
        .split_once(';')
        .ok_or(ParseComplexError::MissingSeparator)?;

    let real = provider
        .parse_number(real)
        .map_err(ParseComplexError::InvalidReal)?;
    let imaginary = provider
        .parse_number(imaginary)
        .map_err(ParseComplexError::InvalidImaginary)?;

    Ok(real + IMAGINARY_UNIT * imaginary)
}

/// Like [`parse`], but never fails: unparsable input yields `(Complex::NAN, false)`.
pub fn try_parse(s: &str) -> (Complex, bool) {
    match parse(s) {
        Ok(c) => (c, true),
        Err(err) => {
            trace!(input = s, %err, "could not parse complex number");
            (Complex::NAN, false)
        }
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

// Formatter precision applies to the components, so `Formatter::pad` (which would truncate)
// is not usable here. Width, fill and alignment are applied to the whole `<R;I>` text, right
// aligned by default like `f64`.
fn pad(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    let len = s.chars().count();
    let padding = match f.width() {
        Some(width) if width > len => width - len,
        _ => return f.write_str(s),
    };
    let (before, after) = match f.align() {
        Some(Alignment::Left) => (0, padding),
        Some(Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(Alignment::Right) | None => (padding, 0),
    };
    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(s)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

fn precision(f: &Formatter<'_>) -> Option<u16> {
    f.precision().map(|p| u16::try_from(p).unwrap_or(u16::MAX))
}

/// Writes `<R;I>`. A precision (`{:.3}`) switches to [`NumberFormat::Fixed`].
impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let number_format = match precision(f) {
            Some(precision) => NumberFormat::Fixed(precision),
            None => NumberFormat::Shortest,
        };
        pad(f, &format(*self, Some(number_format), None))
    }
}

/// Writes `<R;I>` with both components in scientific notation.
impl LowerExp for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        pad(f, &format(*self, Some(NumberFormat::Exponent(precision(f))), None))
    }
}
