//! Error types for template formatting
//!
//! Only a handful of faults abort a call. Malformed placeholders are absorbed
//! by the scanner and never show up here.

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// A fault raised by an argument while interpreting its spec string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("precision field '{field}' is not a number")]
    NotANumber { field: String },

    #[error("precision field '{field}' is out of range")]
    OutOfRange { field: String },
}

/// Errors that abort a whole `format` call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A spec string the argument could not interpret
    #[error("invalid format spec '{spec}' at {span:?}: {source}")]
    InvalidSpec {
        span: Span,
        spec: String,
        #[source]
        source: SpecError,
    },
}

impl FormatError {
    /// Byte range of the offending text within the template
    pub fn span(&self) -> Span {
        match self {
            FormatError::InvalidSpec { span, .. } => span.clone(),
        }
    }

    /// Format the error with template context using ariadne
    pub fn report(&self, template: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            FormatError::InvalidSpec { span, source, .. } => {
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message("invalid format spec")
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(source.to_string())
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(template)), &mut buf)
                    .expect("writing a report into memory cannot fail");
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
