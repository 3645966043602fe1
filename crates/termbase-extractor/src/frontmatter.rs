//! Leading frontmatter detection

use crate::cursor::Cursor;
use crate::line::{heading, is_separator};

/// Some exports repeat their metadata block after the title heading.
const MAX_BLOCKS: usize = 2;

/// Index of the first content line after leading frontmatter blocks.
///
/// A block is delimited by solitary `---` lines. After the first block, a run
/// of heading lines followed by another `---` opens a second, embedded block
/// that is skipped as well. An opening `---` without a closing one is not a
/// block. Returns 0 when the document has no frontmatter.
pub fn content_start(lines: &[&str]) -> usize {
    let mut resume = 0;
    let mut cursor = Cursor::new(lines, 0);

    for block in 0..MAX_BLOCKS {
        let mut open = cursor.skip_blank();
        if block > 0 && !open.peek().is_some_and(is_separator) {
            open = past_headings(open).skip_blank();
        }
        if !open.peek().is_some_and(is_separator) {
            break;
        }
        match closing_delimiter(open.advance()) {
            Some(close) => {
                cursor = close.advance();
                resume = cursor.position();
            }
            None => break,
        }
    }

    resume
}

fn past_headings(cursor: Cursor<'_>) -> Cursor<'_> {
    let mut cursor = cursor;
    while cursor.peek().and_then(heading).is_some() {
        cursor = cursor.advance();
    }
    cursor
}

fn closing_delimiter(cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    let mut cursor = cursor;
    while let Some(line) = cursor.peek() {
        if is_separator(line) {
            return Some(cursor);
        }
        cursor = cursor.advance();
    }
    None
}
