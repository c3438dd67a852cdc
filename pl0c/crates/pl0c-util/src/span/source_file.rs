//! Source files and line lookup for diagnostics.

use std::fmt;
use std::sync::Arc;

use super::Span;

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use pl0c_util::span::SourceFile;
///
/// let file = SourceFile::new("main.pl0", "var x;");
/// assert_eq!(file.name(), "main.pl0");
/// assert_eq!(file.content(), "var x;");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use pl0c_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.pl0", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use pl0c_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.pl0", "line1\r\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(3), Some("line3"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        let line_content = self.content.get(start..end)?;
        Some(line_content.trim_end_matches(['\n', '\r']))
    }

    /// Render a span as a location header, the source line and a caret
    /// underline.
    ///
    /// Returns `None` when the span's line is not part of this file.
    ///
    /// # Examples
    ///
    /// ```
    /// use pl0c_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.pl0", "var x = #;");
    /// let rendered = file.format_span(Span::new(8, 9, 1, 9)).unwrap();
    /// assert!(rendered.starts_with("--> main.pl0:1:9\n"));
    /// assert!(rendered.ends_with("        ^"));
    /// ```
    pub fn format_span(&self, span: Span) -> Option<String> {
        let line = self.line_at(span.line as usize)?;
        let width = self.line_count().to_string().len().max(3);

        let underline_start = (span.column as usize).saturating_sub(1);
        let underline_len = self
            .content
            .get(span.start..span.end)
            .map_or(0, |text| text.chars().count())
            .max(1);

        let mut result = format!("--> {}:{}:{}\n", self.name, span.line, span.column);
        result.push_str(&format!("{:>width$} | {}\n", span.line, line));
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        Some(result)
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
