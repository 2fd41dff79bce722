use calc_eval::{evaluate, evaluate_traced, LogTrace};
use proptest::prelude::*;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logger for tests
fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn operator() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

/// Operands are never zero, so no division can fail
fn flat_expression() -> impl Strategy<Value = (Vec<u32>, Vec<char>)> {
    (0usize..8).prop_flat_map(|len| {
        (
            prop::collection::vec(1u32..1_000, len + 1),
            prop::collection::vec(operator(), len),
        )
    })
}

fn render(numbers: &[u32], ops: &[char]) -> String {
    let mut out = numbers[0].to_string();
    for (op, n) in ops.iter().zip(&numbers[1..]) {
        out.push(*op);
        out.push_str(&n.to_string());
    }
    out
}

/// Textbook evaluation: reduce `*` and `/` terms first, then sum.
fn reference(numbers: &[u32], ops: &[char]) -> f64 {
    let mut terms = vec![f64::from(numbers[0])];
    let mut signs = vec![1.0];
    for (op, n) in ops.iter().zip(&numbers[1..]) {
        let n = f64::from(*n);
        match op {
            '*' => *terms.last_mut().unwrap() *= n,
            '/' => *terms.last_mut().unwrap() /= n,
            '+' => {
                terms.push(n);
                signs.push(1.0);
            }
            _ => {
                terms.push(n);
                signs.push(-1.0);
            }
        }
    }
    terms
        .iter()
        .zip(&signs)
        .fold(0.0, |acc, (term, sign)| acc + sign * term)
}

proptest! {
    #[test]
    fn matches_textbook_precedence((numbers, ops) in flat_expression()) {
        let expected = reference(&numbers, &ops);
        let actual = evaluate(&render(&numbers, &ops)).unwrap();
        prop_assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "{actual} != {expected}");
    }

    #[test]
    fn wrapping_in_parentheses_is_neutral((numbers, ops) in flat_expression()) {
        let flat = render(&numbers, &ops);
        prop_assert_eq!(evaluate(&flat), evaluate(&format!("({flat})")));
    }

    #[test]
    fn evaluation_is_idempotent(input in "[0-9+\\-*/(). ]{0,24}") {
        prop_assert_eq!(evaluate(&input), evaluate(&input));
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,48}") {
        let _ = evaluate(&input);
    }

    #[test]
    fn log_trace_does_not_change_results(input in "[0-9+\\-*/()]{1,16}") {
        init_test_logger();
        prop_assert_eq!(evaluate(&input), evaluate_traced(&input, &mut LogTrace));
    }
}
