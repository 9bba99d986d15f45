/// Source location information for error reporting
///
/// Describes where in the expression text an error occurred: the line and
/// column a byte offset maps to, the length of the highlighted range, and
/// the source line itself. Line and column numbers are
/// 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    /// Line number where the error occurred (1-indexed)
    line: usize,
    /// Column number where the error occurred (1-indexed)
    column: usize,
    /// Optional length of the error span in characters
    length: Option<usize>,
    /// The source line content where the error occurred
    line_source: String,
}

impl ErrorLocation {
    /// Creates a new error location from source content and position information
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - `offset` is greater than the source length
    /// - `length` is provided and is 0
    /// - `length` is provided and `offset + length` exceeds the source length
    fn new(source: &str, offset: usize, length: Option<usize>) -> Self {
        // the offset may point just past the last character, which is where
        // errors about a missing token at the end of the input are reported
        assert!(
            offset <= source.len(),
            "offset ({}) must be less than or equal to the length of the source ({})",
            offset,
            source.len()
        );

        if let Some(length) = length {
            assert!(length > 0, "length must not be 0");
            assert!(
                offset + length <= source.len(),
                "offset + length ({}) must be less than or equal to the length of the source ({})",
                offset + length,
                source.len()
            );
        }

        let line_start = source[..offset]
            .rfind('\n')
            .map_or(0, |newline_idx| newline_idx + 1);

        // tabs are rendered as 4 spaces, so each one shifts the column by 3
        let num_tabs = source[line_start..offset]
            .chars()
            .filter(|c| *c == '\t')
            .count();

        let column_without_tabs = source[line_start..offset].chars().count() + 1;
        let column = column_without_tabs + num_tabs * 3;

        let line = source[..offset].chars().filter(|c| *c == '\n').count() + 1;

        // an offset at the very end of a source ending in a newline has no
        // line of its own
        let line_source = source
            .lines()
            .nth(line - 1)
            .unwrap_or_default()
            .replace('\t', "    ");

        Self {
            line,
            column,
            length,
            line_source,
        }
    }

    /// Creates a new error location from source content and offset
    ///
    /// # Panics
    ///
    /// Panics if `offset` is greater than the source length.
    #[must_use]
    pub fn from_source_and_offset(source: &str, offset: usize) -> Self {
        Self::new(source, offset, None)
    }

    /// Creates a new error location from source content and a highlighted range
    ///
    /// # Panics
    ///
    /// Panics if `length` is 0 or if `offset + length` exceeds the source
    /// length.
    #[must_use]
    pub fn from_source_and_span(source: &str, offset: usize, length: usize) -> Self {
        Self::new(source, offset, Some(length))
    }

    /// Returns the line number where the error occurred (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number where the error occurred (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the length of the highlighted range
    ///
    /// If no length was specified during creation, defaults to 1 character.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length.unwrap_or(1)
    }

    /// Returns the source line content where the error occurred
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}
