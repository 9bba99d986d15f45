//! Source location spans for mapping tokens and expression nodes to source text

/// A span of source text
///
/// A span is a half-open range of byte offsets `[start, end)` into the
/// expression it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a new span from a start and end offset
    ///
    /// # Panics
    ///
    /// Panics if `start` is after `end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "start offset must be before end offset");

        Self { start, end }
    }

    /// Creates an empty span located at `offset`
    #[must_use]
    pub const fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns the start offset (0-indexed, inclusive)
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the end offset (0-indexed, exclusive)
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of bytes covered by the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no source text
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the smallest span that covers both `self` and `other`
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}
