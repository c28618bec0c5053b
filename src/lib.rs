//! nps-format - positional string templates with per-type format specs
//!
//! A template holds literal text and placeholders of the form
//! `{index[,alignment][:spec]}`. Each placeholder is replaced by the argument
//! at `index`, rendered according to the argument's type and `spec`, and
//! padded to `alignment` characters (negative widths left-justify).
//!
//! # Example
//!
//! ```rust
//! use nps_format::nps_format;
//!
//! let text = nps_format!("{0,-6}|{1:x}|{2:.2f}", "id", 255, 3.14159).unwrap();
//! assert_eq!(text, "id    |ff|3.14");
//! ```
//!
//! # Specs by argument type
//!
//! | Type | Spec | Output |
//! |------|------|--------|
//! | `bool` | `boolalpha`, `ba` | `true`/`false` followed by `1`/`0` |
//! | integers, floats, `bool` | `e`, `sci`, `scientific` / `E` | `1.234500e+04` / `1.234500E+04` |
//! | integers, `bool` | `x` / `X` / `o` / `b` | hex / upper hex / octal / binary |
//! | floats | `.Nf` | fixed notation with `N` digits |
//! | text | anything | spec ignored |
//!
//! Unknown specs fall back to the plain rendering. Malformed placeholders are
//! copied verbatim or dropped; the only error is an unreadable precision in a
//! `.Nf` spec.

pub mod args_file;
pub mod error;
pub mod renderer;
pub mod scanner;
pub mod store;
pub mod value;

pub use args_file::{ArgumentFile, ArgumentFileError};
pub use error::{FormatError, SpecError};
pub use renderer::{display, to_binary, Alignment, Argument, Output, Text};
pub use store::ArgumentStore;
pub use value::Value;

/// Format a template against a store of arguments
///
/// With no arguments the template is returned unchanged, `{{` included.
///
/// # Example
///
/// ```rust
/// use nps_format::{args, format};
///
/// assert_eq!(format("{0,5}", args![7]).unwrap(), "    7");
/// assert_eq!(format("{{0}", args![]).unwrap(), "{{0}");
/// ```
pub fn format(template: &str, args: ArgumentStore<'_>) -> Result<String, FormatError> {
    scanner::scan(template, &args)
}
