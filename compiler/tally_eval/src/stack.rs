//! Stack growth for nested evaluation.
//!
//! Each level of parentheses costs a few native frames. The depth guard
//! bounds the level count; this keeps whatever the guard allows from
//! overflowing a small thread stack.
//!
//! - **Red zone**: 100KB. Below this much remaining stack, grow.
//! - **Growth size**: 1MB per growth.

/// Minimum stack space to keep available.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
