#![expect(clippy::unwrap_used, reason = "Tests use unwrap to panic on unexpected state")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{fold, Constant};
use crate::test_helpers::parse;

/// Assert that the first argument of `f(<text>)` folds to `expected`.
fn folds_to(text: &str, expected: Option<Constant<'static>>) {
    let parsed = parse(&format!("f({text});"));
    let arg = parsed.last_args()[0];
    assert_eq!(fold(parsed.arena(), &parsed.interner, arg), expected, "{text}");
}

fn number(text: &str) -> f64 {
    let parsed = parse(&format!("f({text});"));
    let arg = parsed.last_args()[0];
    fold(parsed.arena(), &parsed.interner, arg)
        .and_then(Constant::as_number)
        .unwrap()
}

#[test]
fn literals() {
    folds_to("1.5", Some(Constant::Number(1.5)));
    folds_to("0x10", Some(Constant::Number(16.0)));
    folds_to("'a'", Some(Constant::Str("a")));
    folds_to("true", Some(Constant::Bool(true)));
    folds_to("null", Some(Constant::Null));
    folds_to("undefined", Some(Constant::Undefined));
}

#[test]
fn unary_operators() {
    assert_eq!(number("-2"), -2.0);
    assert_eq!(number("+2"), 2.0);
    assert_eq!(number("- -2"), 2.0);
    folds_to("void 0", Some(Constant::Undefined));
    folds_to("!0", None);
    folds_to("-'a'", None);
}

#[test]
fn arithmetic() {
    assert_eq!(number("1 + 2 * 3"), 7.0);
    assert_eq!(number("(1 + 2) * 3"), 9.0);
    assert_eq!(number("7 % 4"), 3.0);
    assert_eq!(number("1 / 4"), 0.25);
    assert_eq!(number("1 - 1"), 0.0);
}

#[test]
fn negative_zero_equals_zero() {
    assert_eq!(number("-0"), 0.0);
    assert_eq!(number("2 - 2"), number("-0"));
}

#[test]
fn non_finite_results_do_not_fold() {
    folds_to("1 / 0", None);
    folds_to("0 / 0", None);
    folds_to("5 % 0", None);
}

#[test]
fn wrappers_are_transparent() {
    assert_eq!(number("(3 as number)"), 3.0);
    assert_eq!(number("(<number>3)!"), 3.0);
    assert_eq!(number("((1)) + (2 satisfies number)"), 3.0);
}

#[test]
fn non_constants_do_not_fold() {
    for text in ["x", "x + 1", "f()", "'a' + 'b'", "1 < 2", "[0]", "x ? 1 : 2", "1 ** 2"] {
        folds_to(text, None);
    }
}

#[test]
fn deep_nesting_folds() {
    let text = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    assert_eq!(number(&text), 1.0);
    let sum = vec!["1"; 300].join(" + ");
    assert_eq!(number(&sum), 300.0);
}

proptest! {
    #[test]
    fn integer_arithmetic_agrees_with_f64(
        a in -10_000i32..10_000,
        b in -10_000i32..10_000,
        op in 0usize..5,
    ) {
        prop_assume!(op < 3 || b != 0);
        let (symbol, expected) = match op {
            0 => ("+", f64::from(a) + f64::from(b)),
            1 => ("-", f64::from(a) - f64::from(b)),
            2 => ("*", f64::from(a) * f64::from(b)),
            3 => ("/", f64::from(a) / f64::from(b)),
            _ => ("%", f64::from(a) % f64::from(b)),
        };
        let text = format!("({a}) {symbol} ({b})");
        prop_assert_eq!(number(&text), expected);
    }

    #[test]
    fn finite_literals_fold_to_themselves(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        // Display never uses an exponent, and a leading `-` is unary.
        prop_assert_eq!(number(&x.to_string()), x);
    }
}
