//! Character sources for traversing source code.
//!
//! The tokenizer pulls characters through the [`CharSource`] trait. This
//! module also provides [`Cursor`], the in-memory implementation over a
//! borrowed `&str`, which handles UTF-8 correctly and tracks line/column
//! information for error reporting.

use pl0c_util::Pos;

/// Byte order mark skipped at the start of a source
const BOM: char = '\u{FEFF}';

/// A buffered, forward-only stream of characters with position tracking.
///
/// `peek_char` and `next_char` return `'\0'` once the source is exhausted;
/// callers check [`is_eof`](CharSource::is_eof) before relying on them.
pub trait CharSource<'src> {
    /// Makes the whole input available before scanning. Idempotent.
    fn read_all(&mut self);

    /// Returns the next unread character without consuming it.
    fn peek_char(&self) -> char;

    /// Consumes and returns the next character, advancing the cursor.
    fn next_char(&mut self) -> char;

    /// Returns true if no more characters remain.
    fn is_eof(&self) -> bool;

    /// Position of the next unread character.
    fn current_pos(&self) -> Pos;

    /// Position of the character most recently consumed.
    fn previous_pos(&self) -> Pos;

    /// The buffered text in `[start, end)`.
    fn slice(&self, start: Pos, end: Pos) -> &'src str;
}

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use pl0c_lex::char_source::{CharSource, Cursor};
///
/// let mut cursor = Cursor::new("var x;");
/// assert_eq!(cursor.peek_char(), 'v');
/// assert_eq!(cursor.next_char(), 'v');
/// assert_eq!(cursor.peek_char(), 'a');
/// assert_eq!(cursor.current_pos().column, 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// The source text being traversed.
    source: &'src str,

    /// Position of the next unread character.
    pos: Pos,

    /// Position of the last consumed character.
    prev: Pos,

    /// Whether `read_all` has run.
    ready: bool,
}

impl<'src> Cursor<'src> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: Pos::START,
            prev: Pos::START,
            ready: false,
        }
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.pos.offset..]
    }
}

impl<'src> CharSource<'src> for Cursor<'src> {
    fn read_all(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;

        if self.pos.offset == 0 && self.source.starts_with(BOM) {
            self.pos.offset = BOM.len_utf8();
            self.prev = self.pos;
        }
    }

    #[inline]
    fn peek_char(&self) -> char {
        let Some(&b) = self.source.as_bytes().get(self.pos.offset) else {
            return '\0';
        };

        // Fast path for ASCII
        if b < 128 {
            return b as char;
        }

        self.remaining().chars().next().unwrap_or('\0')
    }

    fn next_char(&mut self) -> char {
        let c = self.peek_char();
        if self.is_eof() {
            return c;
        }

        self.prev = self.pos;
        self.pos.offset += c.len_utf8();
        if c == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        c
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    #[inline]
    fn current_pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    fn previous_pos(&self) -> Pos {
        self.prev
    }

    fn slice(&self, start: Pos, end: Pos) -> &'src str {
        self.source.get(start.offset..end.offset).unwrap_or_default()
    }
}
