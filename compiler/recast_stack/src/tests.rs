use super::*;

/// Depth of a left-leaning chain like `((((a))))` in a hostile input file.
fn nesting_depth(n: u32) -> u32 {
    ensure_sufficient_stack(|| if n == 0 { 0 } else { nesting_depth(n - 1) + 1 })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(nesting_depth(16), 16);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    assert_eq!(nesting_depth(200_000), 200_000);
}

#[test]
fn test_passes_result_through() {
    let folded: Result<f64, &str> = ensure_sufficient_stack(|| Ok(1.5));
    assert_eq!(folded, Ok(1.5));
}
