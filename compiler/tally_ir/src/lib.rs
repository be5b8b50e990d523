//! Core vocabulary shared by every Tally crate.
//!
//! - [`Span`]: half-open range of offsets into the original input
//! - [`BinaryOp`]: the closed set of arithmetic operators
//! - [`OperatorRegistry`]: symbol table driving scanning and reduction
//!
//! Offsets count characters (Unicode scalar values) of the top-level input,
//! never bytes, so they can be handed to callers that index strings by
//! character.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
///
/// ```text
/// static_assert_size!(Span, 8);
/// ```
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod operators;
pub mod registry;
mod span;

pub use operators::{BinaryOp, DivisionMode, OperatorError};
pub use registry::OperatorRegistry;
pub use span::Span;
