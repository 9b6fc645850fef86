//! Property-based tests for the canonical rendering.
//!
//! Programs are generated as source text, parsed, rendered and parsed again.
//! The second parse must match the first and rendering must be a fixed point.

use proptest::prelude::*;
use sprout::{
    lexer::tokens::{lookup_ident, TokenKind},
    parse,
};

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-zA-Z0-9_]{0,6}".prop_filter("keywords are not identifiers", |word| {
        lookup_ident(word) == TokenKind::Identifier
    })
}

fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        (0..=i32::MAX).prop_map(|n| n.to_string()),
        "[a-z ]{0,8}".prop_map(|s| format!("\"{}\"", s)),
        prop_oneof![Just("true".to_string()), Just("false".to_string())],
    ]
}

fn infix_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("=="),
        Just("!="),
        Just("<"),
        Just(">"),
    ]
}

fn expression_strategy() -> impl Strategy<Value = String> {
    leaf_strategy().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (inner.clone(), infix_operator_strategy(), inner.clone())
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            (prop_oneof![Just("!"), Just("-")], inner.clone())
                .prop_map(|(op, right)| format!("{}{}", op, right)),
            inner.clone().prop_map(|e| format!("({})", e)),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            (identifier_strategy(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(callee, args)| format!("{}({})", callee, args.join(", "))),
            (inner.clone(), inner.clone())
                .prop_map(|(left, index)| format!("({})[{}]", left, index)),
            (
                inner.clone(),
                inner.clone(),
                prop::option::of(inner.clone())
            )
                .prop_map(|(condition, consequence, alternative)| match alternative {
                    Some(alternative) => format!(
                        "if ({}) {{ {} }} else {{ {} }}",
                        condition, consequence, alternative
                    ),
                    None => format!("if ({}) {{ {} }}", condition, consequence),
                }),
            (prop::collection::vec(identifier_strategy(), 0..3), inner)
                .prop_map(|(params, body)| format!("fn({}) {{ {}; }}", params.join(", "), body)),
        ]
    })
}

fn statement_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (identifier_strategy(), expression_strategy())
            .prop_map(|(name, value)| format!("let {} = {};", name, value)),
        (identifier_strategy(), expression_strategy())
            .prop_map(|(name, value)| format!("let {}: int = {};", name, value)),
        expression_strategy().prop_map(|value| format!("return {};", value)),
        Just("return;".to_string()),
        expression_strategy().prop_map(|e| format!("{};", e)),
    ]
}

fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_strategy(), 0..5).prop_map(|stmts| stmts.join("\n"))
}

proptest! {
    #[test]
    fn test_generated_programs_parse_cleanly(source in program_strategy()) {
        let (_, errors) = parse(&source);
        prop_assert!(errors.is_empty(), "{:?} for {}", errors, source);
    }

    #[test]
    fn test_rendered_program_reparses_equal(source in program_strategy()) {
        let (program, _) = parse(&source);
        let rendered = program.to_string();

        let (reparsed, errors) = parse(&rendered);
        prop_assert!(errors.is_empty(), "{:?} for {}", errors, rendered);
        prop_assert_eq!(reparsed, program);
    }

    #[test]
    fn test_rendering_is_a_fixed_point(source in program_strategy()) {
        let rendered = parse(&source).0.to_string();
        let rerendered = parse(&rendered).0.to_string();
        prop_assert_eq!(rerendered, rendered);
    }

    #[test]
    fn test_arbitrary_input_terminates(source in "[ -~\n]{0,64}") {
        let (program, errors) = parse(&source);
        if errors.is_empty() {
            let (reparsed, _) = parse(&program.to_string());
            prop_assert_eq!(reparsed, program);
        }
    }
}
