//! Owned character buffer and borrowed views over it.

use std::fmt;
use std::ops::Range;

use crate::Cursor;

/// Characters of one top-level input, each paired with its original offset.
///
/// Built once per evaluation. Never mutated afterwards; all narrowing goes
/// through [`SourceView::slice`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    chars: Vec<char>,
    /// `offsets[i]` is the original offset of `chars[i]`. Strictly increasing
    /// up to `u32::MAX`.
    offsets: Vec<u32>,
}

impl SourceBuffer {
    /// Build a buffer from raw input. Offsets run `0..n` over the input's
    /// characters.
    ///
    /// Inputs longer than `u32::MAX` characters are not representable; the
    /// offset table saturates rather than wrapping.
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let offsets = (0..chars.len())
            .map(|i| u32::try_from(i).unwrap_or(u32::MAX))
            .collect();
        Self { chars, offsets }
    }

    /// View covering the whole buffer.
    pub fn view(&self) -> SourceView<'_> {
        let end_offset = u32::try_from(self.chars.len()).unwrap_or(u32::MAX);
        SourceView {
            chars: &self.chars,
            offsets: &self.offsets,
            end_offset,
        }
    }

    /// Cursor at the start of the whole buffer.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.view())
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the input had no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Contiguous window into a [`SourceBuffer`].
///
/// Local positions are `0..len()`; original offsets are whatever the
/// characters had in the top-level input. A view also remembers the offset
/// just past its last character, so an empty view still knows where it sits.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SourceView<'a> {
    chars: &'a [char],
    offsets: &'a [u32],
    /// Exclusive end offset: the offset of the first character after this
    /// view in the parent, or the parent's own end.
    end_offset: u32,
}

impl<'a> SourceView<'a> {
    /// Character at local position `pos`, or `None` past the end.
    #[inline]
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// Original offset of the character at local position `pos`, or `None`
    /// past the end.
    #[inline]
    pub fn original_index_at(&self, pos: usize) -> Option<u32> {
        self.offsets.get(pos).copied()
    }

    /// Exclusive end offset, used for end-of-input markers.
    #[inline]
    pub fn original_end(&self) -> u32 {
        self.end_offset
    }

    /// Offset of the first character, or [`original_end`](Self::original_end)
    /// for an empty view.
    #[inline]
    pub fn original_start(&self) -> u32 {
        self.offsets.first().copied().unwrap_or(self.end_offset)
    }

    /// `[original_start, original_end)` of this view.
    pub fn span(&self) -> Range<u32> {
        self.original_start()..self.end_offset
    }

    /// Sub-view over local positions `[start, end)`.
    ///
    /// Bounds are clamped to the view, and an inverted range yields an empty
    /// view at `start`. Offsets are carried over verbatim.
    pub fn slice(&self, start: usize, end: usize) -> SourceView<'a> {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        let end_offset = self.offsets.get(end).copied().unwrap_or(self.end_offset);
        SourceView {
            chars: &self.chars[start..end],
            offsets: &self.offsets[start..end],
            end_offset,
        }
    }

    /// The characters of this view as a `String`.
    pub fn as_text(&self) -> String {
        self.chars.iter().collect()
    }

    /// The raw characters of this view.
    #[inline]
    pub fn chars(&self) -> &'a [char] {
        self.chars
    }

    /// Cursor at the start of this view.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(*self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Debug for SourceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(f, "{:?}@{}..{}", self.as_text(), span.start, span.end)
    }
}

impl fmt::Display for SourceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}
