//! Line cursor over an immutable document buffer

/// A position in an immutable line buffer
///
/// Cursors are `Copy`; parsing steps take a cursor and return the advanced
/// one rather than mutating shared state.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at `pos` (clamped to the buffer length)
    pub fn new(lines: &'a [&'a str], pos: usize) -> Self {
        Self {
            lines,
            pos: pos.min(lines.len()),
        }
    }

    /// Current line, if any
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Cursor one line further on
    pub fn advance(self) -> Self {
        Self::new(self.lines, self.pos + 1)
    }

    /// Cursor past the last line
    pub fn finish(self) -> Self {
        Self::new(self.lines, self.lines.len())
    }

    /// Cursor past any blank lines
    pub fn skip_blank(self) -> Self {
        let mut cursor = self;
        while cursor.peek().is_some_and(|l| l.trim().is_empty()) {
            cursor = cursor.advance();
        }
        cursor
    }

    /// Index of the current line
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether every line has been consumed
    pub fn is_done(&self) -> bool {
        self.pos >= self.lines.len()
    }
}
