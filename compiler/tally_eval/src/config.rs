//! Evaluator limits.

/// Default maximum parenthesis nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Evaluator limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest parenthesis nesting accepted. The outermost group is depth 1.
    pub max_depth: usize,
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
