//! Type-dispatched argument rendering
//!
//! Every argument type belongs to one category (boolean, integral,
//! floating-point or text) fixed by its [`Argument`] impl. The category
//! decides how a placeholder's spec string is interpreted.

pub mod binary;
pub mod numeric;
pub mod output;

use std::borrow::Cow;
use std::fmt::Display;

use crate::error::SpecError;

pub use binary::to_binary;
pub use output::{Alignment, Output};

/// A value that can be substituted into a template
pub trait Argument {
    /// Append this value to `out` as directed by `spec`
    fn render(&self, spec: &str, out: &mut Output) -> Result<(), SpecError>;
}

impl<T: Argument + ?Sized> Argument for &T {
    fn render(&self, spec: &str, out: &mut Output) -> Result<(), SpecError> {
        (**self).render(spec, out)
    }
}

impl<T: Argument + ?Sized> Argument for Box<T> {
    fn render(&self, spec: &str, out: &mut Output) -> Result<(), SpecError> {
        (**self).render(spec, out)
    }
}

impl Argument for bool {
    fn render(&self, spec: &str, out: &mut Output) -> Result<(), SpecError> {
        numeric::render_boolean(*self, spec, out);
        Ok(())
    }
}

macro_rules! integral_argument {
    ($($t:ty),*) => {$(
        impl Argument for $t {
            fn render(&self, spec: &str, out: &mut Output) -> Result<(), SpecError> {
                numeric::render_integral(*self, spec, out);
                Ok(())
            }
        }
    )*};
}

integral_argument!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! floating_argument {
    ($($t:ty),*) => {$(
        impl Argument for $t {
            fn render(&self, spec: &str, out: &mut Output) -> Result<(), SpecError> {
                numeric::render_floating(*self, spec, out)
            }
        }
    )*};
}

floating_argument!(f32, f64);

macro_rules! text_argument {
    ($($t:ty),*) => {$(
        impl Argument for $t {
            fn render(&self, _spec: &str, out: &mut Output) -> Result<(), SpecError> {
                out.push(&self.to_string());
                Ok(())
            }
        }
    )*};
}

text_argument!(char, String);

impl Argument for str {
    fn render(&self, _spec: &str, out: &mut Output) -> Result<(), SpecError> {
        out.push(self);
        Ok(())
    }
}

impl Argument for Cow<'_, str> {
    fn render(&self, _spec: &str, out: &mut Output) -> Result<(), SpecError> {
        out.push(self);
        Ok(())
    }
}

/// Wrapper rendering any [`Display`] value as text, ignoring the spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text<T>(pub T);

/// Capture a [`Display`] value as a text argument
pub fn display<T: Display>(value: T) -> Text<T> {
    Text(value)
}

impl<T: Display> Argument for Text<T> {
    fn render(&self, _spec: &str, out: &mut Output) -> Result<(), SpecError> {
        out.push(&self.0.to_string());
        Ok(())
    }
}
