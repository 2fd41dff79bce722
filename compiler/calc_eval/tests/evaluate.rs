use calc_eval::{evaluate, ErrorKind, EvalError, LexError};
use pretty_assertions::assert_eq;

fn kind(input: &str) -> ErrorKind {
    evaluate(input)
        .expect_err(&format!("{input:?} should fail"))
        .kind()
}

#[test]
fn precedence_without_parentheses() {
    assert_eq!(evaluate("2+3*4"), Ok(14.0));
    assert_eq!(evaluate("2*3+4*5"), Ok(26.0));
    assert_eq!(evaluate("10-4-3"), Ok(3.0));
    assert_eq!(evaluate("8/2/2"), Ok(2.0));
    assert_eq!(evaluate("1.5*2-0.5"), Ok(2.5));
}

#[test]
fn parenthesised_groups() {
    assert_eq!(evaluate("2*(3+4)"), Ok(14.0));
    assert_eq!(evaluate("(1+2)*(3+4)"), Ok(21.0));
    assert_eq!(evaluate("((2))"), Ok(2.0));
    assert_eq!(evaluate("10/(4-(1+1))"), Ok(5.0));
}

#[test]
fn implicit_multiplication() {
    assert_eq!(evaluate("2(3+4)"), Ok(14.0));
    assert_eq!(evaluate("(2+3)(4)"), Ok(20.0));
    assert_eq!(evaluate("(2+3)4"), Ok(20.0));
    assert_eq!(evaluate("3(2)(2)"), Ok(12.0));
}

#[test]
fn signed_numbers() {
    assert_eq!(evaluate("-5+3"), Ok(-2.0));
    assert_eq!(evaluate("3*-2"), Ok(-6.0));
    assert_eq!(evaluate("3--2"), Ok(5.0));
    assert_eq!(evaluate("2*(-3)"), Ok(-6.0));
    assert_eq!(evaluate("+4"), Ok(4.0));
}

#[test]
fn operator_adjacency_is_asymmetric() {
    // A sign after an operator folds into the number ...
    assert_eq!(evaluate("6/-3"), Ok(-2.0));
    // ... but `*` or `/` after an operator never does
    assert_eq!(kind("6-/3"), ErrorKind::InvalidOperatorSequence);
    assert_eq!(kind("6+*3"), ErrorKind::InvalidOperatorSequence);
}

#[test]
fn division_by_zero_at_any_depth() {
    assert_eq!(evaluate("4/0"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("(4/0)+1"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("1+(2*(3/(1-1)))"), Err(EvalError::DivisionByZero));
}

#[test]
fn structural_rejects() {
    assert_eq!(evaluate(""), Err(EvalError::Lex(LexError::EmptyExpression)));
    assert_eq!(kind("*5"), ErrorKind::InvalidStart);
    assert_eq!(kind("5+"), ErrorKind::InvalidEnd);
    assert_eq!(kind("5*/2"), ErrorKind::InvalidOperatorSequence);
    assert_eq!(kind("(5+3"), ErrorKind::MismatchedParentheses);
    assert_eq!(kind("()"), ErrorKind::EmptyParenGroup);
    assert_eq!(kind("1 2"), ErrorKind::InvalidExpression);
    assert_eq!(kind("1.2.3"), ErrorKind::InvalidExpression);
    assert_eq!(kind("2x"), ErrorKind::InvalidEnd);
    assert_eq!(kind("2x3"), ErrorKind::InvalidExpression);
}

#[test]
fn results_must_be_finite() {
    let big = format!("1{}", "0".repeat(400));
    assert_eq!(evaluate(&big), Err(EvalError::NonFiniteResult));
    assert_eq!(evaluate(&format!("{big}-{big}")), Err(EvalError::NonFiniteResult));
    assert_eq!(evaluate(&format!("1/({big})")), Err(EvalError::NonFiniteResult));
    assert_eq!(kind(&format!("2*{big}")), ErrorKind::InvalidExpression);
}

#[test]
fn error_messages_are_descriptive() {
    for input in ["", "*5", "5+", "5*/2", "(5+3", "()", "4/0", "1 2", "1..1", "1#1"] {
        let err = evaluate(input).unwrap_err();
        assert!(!err.to_string().is_empty(), "{input:?} has an empty message");
    }
}

#[test]
fn blanks_are_insignificant() {
    assert_eq!(evaluate("  2 * ( 3 + 4 )  "), Ok(14.0));
    assert_eq!(evaluate("2 (3)"), Ok(6.0));
}
