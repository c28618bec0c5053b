//! Spec interpretation for boolean, integral and floating-point arguments

use std::fmt::{Display, LowerHex, Octal, UpperHex};

use crate::error::SpecError;

use super::binary::to_binary;
use super::output::Output;

/// Precision used when a precision field is negative, and significant
/// digits of the default float rendering
const DEFAULT_PRECISION: usize = 6;

/// Largest precision a `.Nf` spec may request
pub const MAX_PRECISION: usize = 1 << 16;

/// Integer types rendered by [`render_integral`]
pub trait Integral: Copy + Display + LowerHex + UpperHex + Octal {
    /// Value converted for scientific notation
    fn to_f64(self) -> f64;

    /// Bit pattern fed to the binary encoder
    fn binary_magnitude(self) -> u128;
}

/// Floating-point types rendered by [`render_floating`]
pub trait Floating: Copy + Display {
    fn to_f64(self) -> f64;

    /// Fixed notation at the given number of fractional digits
    fn fixed(self, precision: usize) -> String;
}

macro_rules! impl_integral {
    // Signed types up to 64 bits are sign-extended to 64 bits
    (signed: $($t:ty),*) => {$(
        impl Integral for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn binary_magnitude(self) -> u128 {
                self as i64 as u64 as u128
            }
        }
    )*};
    (unsigned: $($t:ty),*) => {$(
        impl Integral for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn binary_magnitude(self) -> u128 {
                self as u128
            }
        }
    )*};
}

impl_integral!(signed: i8, i16, i32, i64, isize);
impl_integral!(unsigned: u8, u16, u32, u64, u128, usize);

impl Integral for i128 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn binary_magnitude(self) -> u128 {
        self as u128
    }
}

macro_rules! impl_floating {
    ($($t:ty),*) => {$(
        impl Floating for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn fixed(self, precision: usize) -> String {
                format!("{:.*}", precision, self)
            }
        }
    )*};
}

impl_floating!(f32, f64);

/// Which scientific rendering a spec asks for, if any
fn scientific_spec(spec: &str) -> Option<bool> {
    match spec {
        "scientific" | "sci" | "e" => Some(false),
        "E" => Some(true),
        _ => None,
    }
}

/// Push the scientific form if the spec asks for it
///
/// Returns whether anything was rendered.
fn render_scientific(value: f64, spec: &str, out: &mut Output) -> bool {
    match scientific_spec(spec) {
        Some(false) => out.push(&scientific(value)),
        Some(true) => out.push(&scientific(value).replace('e', "E")),
        None => return false,
    }
    true
}

/// Scientific notation with six fractional digits and a signed two-digit exponent
///
/// `3.14159` renders as `3.141590e+00`.
pub fn scientific(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    match split_exponent(value, DEFAULT_PRECISION) {
        Some((mantissa, exponent)) => join_exponent(&mantissa, exponent),
        None => format!("{:.6e}", value),
    }
}

/// Default float rendering: six significant digits, trailing zeros removed
///
/// Fixed notation is used for decimal exponents in `-4..6`, scientific
/// notation otherwise, so `0.1 + 0.2` renders as `0.3` and `1e20` as `1e+20`.
pub fn general(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    let Some((mantissa, exponent)) = split_exponent(value, DEFAULT_PRECISION - 1) else {
        return value.to_string();
    };

    let significant = DEFAULT_PRECISION as i32;
    if exponent < -4 || exponent >= significant {
        join_exponent(trim_fraction(&mantissa), exponent)
    } else {
        let decimals = (significant - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        None
    }
}

/// Mantissa with `digits` fractional digits, and the decimal exponent
fn split_exponent(value: f64, digits: usize) -> Option<(String, i32)> {
    let raw = format!("{:.*e}", digits, value);
    let (mantissa, exponent) = raw.split_once('e')?;
    let exponent = exponent.parse::<i32>().ok()?;
    Some((mantissa.to_string(), exponent))
}

fn join_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

/// Drop trailing fractional zeros, and the point if nothing follows it
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Render a boolean
///
/// `boolalpha`/`ba` appends the textual form, and the integral rules then
/// run regardless, so `ba` yields e.g. `true1`.
pub fn render_boolean(value: bool, spec: &str, out: &mut Output) {
    if spec == "boolalpha" || spec == "ba" {
        out.push(if value { "true" } else { "false" });
    }
    render_integral(u8::from(value), spec, out);
}

/// Render an integer
pub fn render_integral<T: Integral>(value: T, spec: &str, out: &mut Output) {
    if render_scientific(value.to_f64(), spec, out) {
        return;
    }

    match spec {
        "x" => out.push(&format!("{:x}", value)),
        "X" => out.push(&format!("{:X}", value)),
        "b" => out.push(&to_binary(value.binary_magnitude())),
        "o" => out.push(&format!("{:o}", value)),
        _ => out.push(&value.to_string()),
    }
}

/// Render a floating-point number
///
/// A spec starting with `.` is a fixed-precision request; a malformed
/// precision field is the one fault that aborts the call. Any other spec
/// falls back to [`general`].
pub fn render_floating<T: Floating>(
    value: T,
    spec: &str,
    out: &mut Output,
) -> Result<(), SpecError> {
    if render_scientific(value.to_f64(), spec, out) {
        return Ok(());
    }

    if spec.starts_with('.') {
        let precision = parse_precision(spec)?;
        out.push(&value.fixed(precision));
    } else {
        out.push(&general(value.to_f64()));
    }
    Ok(())
}

/// Extract the precision from a `.Nf`-style spec
///
/// The field sits between the leading `.` and the final character. It is
/// read like a C integer: leading whitespace, optional sign, then at least
/// one digit; anything after the digits is ignored. Precisions above
/// [`MAX_PRECISION`] are out of range.
pub fn parse_precision(spec: &str) -> Result<usize, SpecError> {
    let field = precision_field(spec);
    let trimmed = field.trim_start_matches(|c: char| c.is_ascii_whitespace());

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return Err(SpecError::NotANumber {
            field: field.to_string(),
        });
    }

    let magnitude: i64 = unsigned[..digit_count]
        .parse()
        .map_err(|_| SpecError::OutOfRange {
            field: field.to_string(),
        })?;
    let precision = if negative { -magnitude } else { magnitude };
    let out_of_range = || SpecError::OutOfRange {
        field: field.to_string(),
    };
    let precision = i32::try_from(precision).map_err(|_| out_of_range())?;

    match usize::try_from(precision) {
        Ok(precision) if precision > MAX_PRECISION => Err(out_of_range()),
        Ok(precision) => Ok(precision),
        Err(_) => Ok(DEFAULT_PRECISION),
    }
}

/// The text between the leading `.` and the final character
fn precision_field(spec: &str) -> &str {
    let rest = spec.get(1..).unwrap_or("");
    match rest.char_indices().last() {
        Some((last, _)) => &rest[..last],
        None => "",
    }
}
