use abacus::{BigDecimal, Decimal, Engine};
use proptest::prelude::*;

fn arb_number() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| n.to_string()),
        (0u32..1_000, 0u32..100).prop_map(|(i, f)| format!("{}.{:02}", i, f)),
    ]
}

fn arb_expression() -> impl Strategy<Value = String> {
    (
        arb_number(),
        prop::collection::vec(
            (prop::sample::select(vec!["+", "-", "*", "/", "^"]), arb_number()),
            0..6,
        ),
    )
        .prop_map(|(first, rest)| {
            let mut expr = first;
            for (op, number) in rest {
                expr.push_str(op);
                expr.push_str(&number);
            }
            expr
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_evaluation_is_pure(expr in arb_expression()) {
        let engine = Engine::new();
        prop_assert_eq!(engine.evaluate(&expr), engine.evaluate(&expr));
    }

    #[test]
    fn prop_canonical_result_round_trips(expr in arb_expression()) {
        let engine = Engine::new();
        if let Ok(value) = engine.evaluate(&expr) {
            let again = engine.evaluate(&value.to_string());
            prop_assert_eq!(again, Ok(value));
        }
    }

    #[test]
    fn prop_subtraction_groups_left(a in 0u32..10_000, b in 0u32..10_000, c in 0u32..10_000) {
        let engine = Engine::new();
        let flat = engine.evaluate(&format!("{}-{}-{}", a, b, c)).unwrap();
        let grouped = engine.evaluate(&format!("({}-{})-{}", a, b, c)).unwrap();
        let expected = Decimal::from(i64::from(a) - i64::from(b) - i64::from(c));
        prop_assert_eq!(flat.clone(), grouped);
        prop_assert_eq!(flat, expected);
    }

    #[test]
    fn prop_percent_scales_last_operand(a in 0u32..10_000, b in 0u32..10_000) {
        let engine = Engine::new();
        let result = engine.evaluate(&format!("{}*{}%", a, b)).unwrap();
        let product = BigDecimal::from(u64::from(a) * u64::from(b));
        let expected = Decimal::from(product / BigDecimal::from(100));
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_addition_commutative(a in arb_number(), b in arb_number()) {
        let engine = Engine::new();
        let left = engine.evaluate(&format!("{}+{}", a, b)).unwrap();
        let right = engine.evaluate(&format!("{}+{}", b, a)).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_results_have_no_trailing_zeros(expr in arb_expression()) {
        if let Ok(value) = Engine::new().evaluate(&expr) {
            let text = value.to_string();
            if text.contains('.') {
                prop_assert!(!text.ends_with('0'), "{} rendered as {}", expr, text);
            }
        }
    }
}
