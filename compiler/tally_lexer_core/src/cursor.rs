//! Forward-only cursor over a [`SourceView`].
//!
//! The scanner reads its input strictly left to right and never backtracks,
//! so the cursor only exposes forward motion plus lookahead by string match.

use crate::SourceView;

/// Forward-only reader over a view.
///
/// The cursor is [`Copy`]: scanning state can be snapshotted for free.
#[derive(Copy, Clone, Debug)]
pub struct Cursor<'a> {
    view: SourceView<'a>,
    /// Local position within `view`.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at local position 0 of `view`.
    pub fn new(view: SourceView<'a>) -> Self {
        Self { view, pos: 0 }
    }

    /// Character under the cursor, `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.view.char_at(self.pos)
    }

    /// Advance by one character. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.view.len() {
            self.pos += 1;
        }
    }

    /// Advance by `n` characters, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.view.len());
    }

    /// Current local position in the view.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Original offset of the current character, or the view's end offset
    /// at EOF.
    #[inline]
    pub fn original_pos(&self) -> u32 {
        self.view
            .original_index_at(self.pos)
            .unwrap_or_else(|| self.view.original_end())
    }

    /// Skip Unicode whitespace.
    pub fn eat_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Advance while `pred` holds for the current character. Returns the
    /// number of characters consumed.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Returns `true` if the remaining input starts with `needle`.
    ///
    /// An empty needle never matches.
    pub fn starts_with(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        let rest = &self.view.chars()[self.pos..];
        let mut rest = rest.iter();
        needle.chars().all(|c| rest.next() == Some(&c))
    }

    /// The view this cursor reads.
    #[inline]
    pub fn view(&self) -> SourceView<'a> {
        self.view
    }
}

#[cfg(test)]
mod tests;
