//! Character classes for the PL/0 lexer.
//!
//! Digits are always the ASCII digits `0-9`, in every charset. Which
//! characters may form an identifier is configurable through
//! [`IdentCharset`]. Whitespace follows [`is_whitespace`].

/// The set of characters identifiers are built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdentCharset {
    /// Any alphabetic character starts an identifier; alphabetic characters
    /// and ASCII digits continue it.
    #[default]
    Unicode,
    /// `[A-Za-z_]` starts an identifier; `[A-Za-z0-9_]` continues it.
    Ascii,
}

impl IdentCharset {
    /// Checks if `c` may start an identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use pl0c_lex::IdentCharset;
    ///
    /// assert!(IdentCharset::Unicode.is_ident_start('α'));
    /// assert!(!IdentCharset::Unicode.is_ident_start('_'));
    /// assert!(IdentCharset::Ascii.is_ident_start('_'));
    /// assert!(!IdentCharset::Ascii.is_ident_start('α'));
    /// ```
    #[inline]
    pub fn is_ident_start(self, c: char) -> bool {
        match self {
            IdentCharset::Unicode => c.is_alphabetic(),
            IdentCharset::Ascii => is_ascii_ident_start(c),
        }
    }

    /// Checks if `c` may continue an identifier.
    #[inline]
    pub fn is_ident_continue(self, c: char) -> bool {
        match self {
            IdentCharset::Unicode => c.is_alphabetic() || is_digit(c),
            IdentCharset::Ascii => is_ascii_ident_continue(c),
        }
    }
}

/// Checks if `c` separates tokens.
///
/// Space, line and paragraph separators count, except the no-break spaces
/// U+00A0, U+2007 and U+202F. So do the ASCII controls `\t`, `\n`, U+000B,
/// `\f`, `\r` and the information separators U+001C to U+001F. NEL
/// (U+0085) does not.
///
/// # Example
///
/// ```
/// use pl0c_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{2003}'));
/// assert!(is_whitespace('\u{001F}'));
/// assert!(!is_whitespace('\u{00A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// Checks if `c` is a decimal digit of an integer literal.
///
/// Only `0-9`; other Unicode decimal digits such as `٣` are not digits.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a valid ASCII identifier start.
#[inline]
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character is a valid ASCII identifier continuation.
#[inline]
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
