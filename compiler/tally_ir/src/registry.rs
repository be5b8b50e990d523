//! Operator registry.
//!
//! Maps symbols to operators and derives the two orderings the pipeline
//! needs: priority tiers (highest first) for reduction, and symbols longest
//! first for greedy matching in the scanner.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::operators::{BinaryOp, DivisionMode};

/// Immutable symbol table of binary operators.
///
/// Read-only after construction, so one registry can be shared across
/// threads and reused for any number of evaluations.
#[derive(Clone, Debug)]
pub struct OperatorRegistry {
    by_symbol: FxHashMap<&'static str, BinaryOp>,
    /// Distinct priorities, highest first.
    priorities: SmallVec<[u8; 4]>,
    /// Registered symbols, longest first; ties in descending lexicographic order.
    symbols: Vec<&'static str>,
}

impl OperatorRegistry {
    /// Build a registry from an operator set.
    ///
    /// When two operators share a symbol, the later one wins.
    pub fn new(operators: impl IntoIterator<Item = BinaryOp>) -> Self {
        let mut by_symbol = FxHashMap::default();
        for op in operators {
            by_symbol.insert(op.symbol(), op);
        }

        let mut priorities: SmallVec<[u8; 4]> =
            by_symbol.values().map(|op| op.priority()).collect();
        priorities.sort_unstable_by(|a, b| b.cmp(a));
        priorities.dedup();

        let mut symbols: Vec<&'static str> = by_symbol.keys().copied().collect();
        symbols.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| b.cmp(a)));

        Self {
            by_symbol,
            priorities,
            symbols,
        }
    }

    /// The fixed arithmetic set: `+ -` at priority 1, `* /` at priority 2,
    /// with `/` bound to the division variant selected by `mode`.
    pub fn standard(mode: DivisionMode) -> Self {
        Self::new([
            BinaryOp::Add,
            BinaryOp::Subtract,
            BinaryOp::Multiply,
            mode.operator(),
        ])
    }

    /// Distinct operator priorities, highest first.
    pub fn priorities_descending(&self) -> &[u8] {
        &self.priorities
    }

    /// Registered symbols in matching order (longest first).
    pub fn symbols_by_descending_length(&self) -> &[&'static str] {
        &self.symbols
    }

    /// Operator registered under `symbol`, if any.
    pub fn lookup(&self, symbol: &str) -> Option<BinaryOp> {
        self.by_symbol.get(symbol).copied()
    }

    /// Registered operators in matching order.
    pub fn iter(&self) -> impl Iterator<Item = BinaryOp> + '_ {
        self.symbols.iter().filter_map(|symbol| self.lookup(symbol))
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::standard(DivisionMode::default())
    }
}
