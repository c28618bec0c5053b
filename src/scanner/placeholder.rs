//! Placeholder body grammar using chumsky
//!
//! A body reads `index[,alignment][:spec]`. Numbers are read like C's
//! `strtol`: leading whitespace, an optional sign, then digits. Whatever
//! follows the recognised prefix and is neither `,` nor `:` is ignored.

use chumsky::prelude::*;

use crate::error::Span;
use crate::renderer::Alignment;

/// A parsed placeholder body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Argument index, `None` when negative or too large to address anything
    pub index: Option<usize>,
    pub alignment: Alignment,
    pub spec: &'a str,
    /// Byte range of `spec` within the body
    pub spec_span: Span,
}

/// Signed decimal as read from the body: sign flag and digit run
type Number = (bool, String);

struct RawPlaceholder {
    index: Number,
    alignment: Option<Number>,
    spec: Option<Span>,
}

/// Parse a placeholder body, returning `None` when it has no index digits
pub fn parse_placeholder(body: &str) -> Option<Placeholder<'_>> {
    let raw = placeholder_parser().parse(body).into_result().ok()?;

    let spec_span = raw.spec.unwrap_or(body.len()..body.len());
    Some(Placeholder {
        index: to_index(&raw.index),
        alignment: raw
            .alignment
            .map(|n| Alignment::from_width(to_width(&n)))
            .unwrap_or_default(),
        spec: &body[spec_span.clone()],
        spec_span,
    })
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> Span {
    e.start()..e.end()
}

fn number<'a>() -> impl Parser<'a, &'a str, Number> + Clone {
    let whitespace = any().filter(|c: &char| c.is_ascii_whitespace()).repeated();
    let sign = choice((just('-').to(true), just('+').to(false)))
        .or_not()
        .map(|sign| sign.unwrap_or(false));
    let digits = any()
        .filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>();

    whitespace.ignore_then(sign).then(digits)
}

fn placeholder_parser<'a>() -> impl Parser<'a, &'a str, RawPlaceholder> {
    // A `,` with no digits after it leaves the cursor just past the comma
    let alignment = just(',').ignore_then(number().or_not());
    let spec = just(':').ignore_then(
        any()
            .repeated()
            .map_with(|_, e| span_range(&e.span())),
    );

    number()
        .then(alignment.or_not())
        .then(spec.or_not())
        .then_ignore(any().repeated())
        .map(|((index, alignment), spec)| RawPlaceholder {
            index,
            alignment: alignment.flatten(),
            spec,
        })
}

/// Negative zero is still index zero; any other negative index is unusable
fn to_index((negative, digits): &Number) -> Option<usize> {
    let value = digits.parse::<usize>().ok()?;
    if *negative && value != 0 {
        return None;
    }
    Some(value)
}

/// Saturating conversion of an alignment
fn to_width((negative, digits): &Number) -> i64 {
    if *negative {
        format!("-{}", digits).parse().unwrap_or(i64::MIN)
    } else {
        digits.parse().unwrap_or(i64::MAX)
    }
}
