//! Position-preserving text primitives for Tally.
//!
//! Every character of the input is tagged once with its offset in the
//! original string. Narrowing a view keeps those offsets untouched, so
//! anything produced from a nested slice can still point back at the exact
//! characters the user typed.
//!
//! # Architecture
//!
//! - [`SourceBuffer`]: owns the characters and their offsets
//! - [`SourceView`]: `Copy` window into a buffer; the unit of recursion
//! - [`Cursor`]: forward-only reader over a view, used by the scanner
//!
//! Offsets count Unicode scalar values, not bytes.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::{SourceBuffer, SourceView};
