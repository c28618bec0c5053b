//! Template scanning and placeholder resolution
//!
//! The scanner copies literal text, turns `{{` into `{` and hands each
//! `{...}` body to [`resolve`]. Malformed placeholders degrade to literal
//! text or to nothing; only a renderer fault stops the scan.

pub mod lexer;
pub mod placeholder;

use tracing::{debug, trace};

use crate::error::{FormatError, Span};
use crate::renderer::Output;
use crate::store::ArgumentStore;

use lexer::{lex, Token};
pub use placeholder::{parse_placeholder, Placeholder};

/// Substitute every placeholder in `template` with its argument
pub fn scan(template: &str, args: &ArgumentStore<'_>) -> Result<String, FormatError> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut out = Output::with_capacity(template.len());
    let mut tokens = lex(template);

    while let Some((token, span)) = tokens.next() {
        match token {
            Token::Literal | Token::BraceClose => out.push_literal(&template[span]),
            Token::EscapedBrace => out.push_literal("{"),
            Token::BraceOpen => {
                match tokens.find(|(t, _)| *t == Token::BraceClose) {
                    Some((_, close)) => {
                        resolve(template, span.end..close.start, args, &mut out)?;
                    }
                    None => {
                        debug!(offset = span.start, "unterminated placeholder copied verbatim");
                        out.push_literal(&template[span.start..]);
                        break;
                    }
                }
            }
        }
    }

    Ok(out.into_string())
}

/// Render one placeholder body into `out`
///
/// `body` is the byte range between the braces. A body without index
/// digits or with an index past the last argument contributes nothing.
pub fn resolve(
    template: &str,
    body: Span,
    args: &ArgumentStore<'_>,
    out: &mut Output,
) -> Result<(), FormatError> {
    let text = &template[body.clone()];

    let Some(placeholder) = parse_placeholder(text) else {
        trace!(body = text, "placeholder without index dropped");
        return Ok(());
    };
    let Some(arg) = placeholder.index.and_then(|index| args.get(index)) else {
        trace!(body = text, len = args.len(), "placeholder index out of range dropped");
        return Ok(());
    };

    out.pad_next(placeholder.alignment);
    let rendered = arg.render(placeholder.spec, out);
    out.clear_pending();

    rendered.map_err(|source| {
        let span = body.start + placeholder.spec_span.start..body.start + placeholder.spec_span.end;
        debug!(spec = placeholder.spec, ?span, error = %source, "format spec rejected");
        FormatError::InvalidSpec {
            span,
            spec: placeholder.spec.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::error::SpecError;

    #[test]
    fn test_empty_store_skips_scanning() {
        let store = args![];
        assert_eq!(scan("{0} {{ a{b", &store).unwrap(), "{0} {{ a{b");
    }

    #[test]
    fn test_literal_and_placeholders() {
        let store = args!["x", 2];
        assert_eq!(scan("a{0}b{1}c", &store).unwrap(), "axb2c");
    }

    #[test]
    fn test_escaped_brace() {
        let store = args![1];
        assert_eq!(scan("{{", &store).unwrap(), "{");
        assert_eq!(scan("{{0}", &store).unwrap(), "{0}");
        assert_eq!(scan("{{{0}", &store).unwrap(), "{1");
    }

    #[test]
    fn test_closing_brace_is_literal() {
        let store = args![1];
        assert_eq!(scan("}}", &store).unwrap(), "}}");
        assert_eq!(scan("{0}}", &store).unwrap(), "1}");
    }

    #[test]
    fn test_unterminated_placeholder() {
        let store = args![1];
        assert_eq!(scan("a{b", &store).unwrap(), "a{b");
        assert_eq!(scan("{0} and {1", &store).unwrap(), "1 and {1");
        assert_eq!(scan("trailing {", &store).unwrap(), "trailing {");
    }

    #[test]
    fn test_body_runs_to_first_closing_brace() {
        let store = args![7];
        assert_eq!(scan("{0{{}", &store).unwrap(), "7");
        assert_eq!(scan("{0{1}}", &store).unwrap(), "7}");
    }

    #[test]
    fn test_dropped_placeholders() {
        let store = args![1, 2];
        assert_eq!(scan("{5}", &store).unwrap(), "");
        assert_eq!(scan("[{x}]", &store).unwrap(), "[]");
        assert_eq!(scan("[{}]", &store).unwrap(), "[]");
        assert_eq!(scan("[{-1}]", &store).unwrap(), "[]");
    }

    #[test]
    fn test_alignment_only_affects_its_placeholder() {
        let store = args![7, 8];
        assert_eq!(scan("{0,3}|{1}", &store).unwrap(), "  7|8");
    }

    #[test]
    fn test_oversized_alignment_is_ignored() {
        let store = args![7];
        assert_eq!(scan("[{0,99999999999999999999}]", &store).unwrap(), "[7]");
        assert_eq!(scan("[{0,-99999999999999999999}]", &store).unwrap(), "[7]");
        assert_eq!(scan("[{0,2000000000}]", &store).unwrap(), "[7]");
    }

    #[test]
    fn test_oversized_precision_reports_span() {
        let store = args![1.5];
        let err = scan("{0:.2000000000f}", &store).unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidSpec {
                span: 3..15,
                spec: ".2000000000f".to_string(),
                source: SpecError::OutOfRange {
                    field: "2000000000".to_string()
                },
            }
        );
    }

    #[test]
    fn test_fatal_spec_reports_span() {
        let store = args![1.5];
        let err = scan("v = {0,4:.zf}", &store).unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidSpec {
                span: 9..12,
                spec: ".zf".to_string(),
                source: SpecError::NotANumber {
                    field: "z".to_string()
                },
            }
        );
        assert_eq!(&"v = {0,4:.zf}"[err.span()], ".zf");
    }

    #[test]
    fn test_resolve_appends_nothing_for_bad_index() {
        let store = args![1];
        let mut out = Output::new();
        resolve("{9}", 1..2, &store, &mut out).unwrap();
        assert_eq!(out.as_str(), "");
    }
}
