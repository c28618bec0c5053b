//! Output buffer with a one-shot field width

use tracing::debug;

/// Widest field a placeholder may request; wider requests are ignored
pub const MAX_FIELD_WIDTH: usize = 1 << 20;

/// Field width requested by a placeholder's alignment component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No padding
    #[default]
    None,
    /// Pad on the left up to the given width
    Right(usize),
    /// Pad on the right up to the given width
    Left(usize),
}

impl Alignment {
    /// Interpret a signed width: positive right-justifies, negative left-justifies
    pub fn from_width(width: i64) -> Self {
        match width {
            0 => Alignment::None,
            w if w > 0 => Alignment::Right(usize::try_from(w).unwrap_or(usize::MAX)),
            w => Alignment::Left(usize::try_from(w.unsigned_abs()).unwrap_or(usize::MAX)),
        }
    }
}

/// Append-only text accumulator for one `format` call
///
/// A pending alignment applies to the next [`Output::push`] only and is
/// consumed by it. Literal template text bypasses the alignment entirely.
#[derive(Debug, Default)]
pub struct Output {
    buf: String,
    pending: Alignment,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            pending: Alignment::None,
        }
    }

    /// Request a minimum field width for the next insertion
    pub fn pad_next(&mut self, alignment: Alignment) {
        self.pending = alignment;
    }

    /// Drop any width that no insertion consumed
    pub fn clear_pending(&mut self) {
        self.pending = Alignment::None;
    }

    /// Append verbatim template text
    pub fn push_literal(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Append rendered argument text, consuming the pending alignment
    ///
    /// A width above [`MAX_FIELD_WIDTH`], or one whose padding cannot be
    /// allocated, is dropped and the text is appended unpadded.
    pub fn push(&mut self, text: &str) {
        let alignment = std::mem::take(&mut self.pending);
        let len = text.chars().count();
        let padding = match alignment {
            Alignment::Right(width) | Alignment::Left(width) => width.saturating_sub(len),
            Alignment::None => 0,
        };
        if padding == 0 {
            self.buf.push_str(text);
            return;
        }
        if padding > MAX_FIELD_WIDTH || self.buf.try_reserve(padding + text.len()).is_err() {
            debug!(?alignment, "field width too large, ignored");
            self.buf.push_str(text);
            return;
        }

        if let Alignment::Right(_) = alignment {
            self.fill(padding);
            self.buf.push_str(text);
        } else {
            self.buf.push_str(text);
            self.fill(padding);
        }
    }

    fn fill(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
