//! Scanner properties over generated input.

use proptest::prelude::*;
use tally_ir::{DivisionMode, OperatorRegistry};
use tally_lexer::{scan, SourceBuffer};

/// A flat, valid expression: numbers joined by operators with arbitrary
/// spacing.
fn flat_expression() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec(
        (0u32..10_000, prop::sample::select(vec!['+', '-', '*', '/']), " {0,3}", " {0,3}"),
        1..8,
    )
    .prop_map(|parts| {
        let count = parts.len();
        let mut text = String::new();
        for (i, (n, op, before, after)) in parts.into_iter().enumerate() {
            text.push_str(&before);
            text.push_str(&n.to_string());
            text.push_str(&after);
            if i + 1 < count {
                text.push(op);
            }
        }
        (text, count)
    })
}

proptest! {
    #[test]
    fn operands_and_operators_alternate((text, count) in flat_expression()) {
        let registry = OperatorRegistry::standard(DivisionMode::Float);
        let buf = SourceBuffer::new(&text);
        let queues = scan(buf.view(), &registry);
        prop_assert!(queues.is_ok(), "{text:?}: {queues:?}");
        if let Ok(queues) = queues {
            prop_assert_eq!(queues.expression_count(), count);
            prop_assert!(queues.is_well_formed());
        }
    }

    #[test]
    fn token_spans_index_the_input((text, _count) in flat_expression()) {
        let registry = OperatorRegistry::standard(DivisionMode::Float);
        let buf = SourceBuffer::new(&text);
        let chars: Vec<char> = text.chars().collect();
        if let Ok(queues) = scan(buf.view(), &registry) {
            for token in &queues.expressions {
                let range = token.span().to_range();
                let slice: String = chars[range].iter().collect();
                prop_assert_eq!(slice, token.to_string());
            }
            for op in &queues.operators {
                let range = op.span.to_range();
                let slice: String = chars[range].iter().collect();
                prop_assert_eq!(slice, op.op.symbol());
            }
        }
    }

    #[test]
    fn arbitrary_input_never_panics(text in "\\PC{0,40}") {
        let registry = OperatorRegistry::standard(DivisionMode::Integer);
        let buf = SourceBuffer::new(&text);
        let _ = scan(buf.view(), &registry);
    }
}
