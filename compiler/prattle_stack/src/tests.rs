use super::ensure_sufficient_stack;

/// Mimics the shape of nested parenthesised groups: each level recurses once.
fn nest(depth: usize) -> usize {
    ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(nest(16), 16);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    assert_eq!(nest(200_000), 200_000);
}

#[test]
fn test_propagates_result() {
    fn checked(depth: u32) -> Result<u32, String> {
        ensure_sufficient_stack(|| {
            if depth == 0 {
                Err("bottom".to_string())
            } else {
                checked(depth - 1).map(|n| n + 1)
            }
        })
    }

    assert_eq!(checked(50), Err("bottom".to_string()));
}
