// Pattern 3: Property-Based Testing with proptest
// Demonstrates custom generators, invariants, and totality checks: hundreds
// of generated inputs instead of a handful of hand-picked ones.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use testing_patterns::ip::is_ipv4;

    // ========================================================================
    // Example: Custom Generators
    // ========================================================================

    // Any in-range octet, rendered as canonical decimal.
    prop_compose! {
        fn octet()(value in 0u32..=255) -> String {
            value.to_string()
        }
    }

    // A well-formed dotted-decimal address.
    prop_compose! {
        fn address()(a in octet(), b in octet(), c in octet(), d in octet()) -> String {
            format!("{}.{}.{}.{}", a, b, c, d)
        }
    }

    proptest! {
        #[test]
        fn generated_addresses_are_valid(addr in address()) {
            prop_assert!(is_ipv4(&addr));
        }

        #[test]
        fn out_of_range_octet_invalidates(
            a in octet(),
            b in octet(),
            c in octet(),
            over in 256u32..100_000,
        ) {
            let addr = format!("{}.{}.{}.{}", a, b, c, over);
            prop_assert!(!is_ipv4(&addr));
        }

        #[test]
        fn extra_segment_invalidates(addr in address(), extra in 0u32..=255) {
            let candidate = format!("{}.{}", addr, extra);
            prop_assert!(!is_ipv4(&candidate));
        }

        #[test]
        fn digit_quads_with_wrong_arity_are_invalid(
            segments in prop::collection::vec(0u32..=255, 1..=3)
        ) {
            let addr = segments
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(".");
            prop_assert!(!is_ipv4(&addr));
        }
    }

    // ========================================================================
    // Example: Totality and Idempotence over Arbitrary Input
    // ========================================================================

    proptest! {
        // The validator is a pure function of the text: no panic on any
        // input, and repeated calls agree.
        #[test]
        fn never_panics_and_is_idempotent(text in ".*") {
            let first = is_ipv4(&text);
            let second = is_ipv4(&text);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn surrounding_whitespace_invalidates(addr in address(), pad in "[ \t]{1,3}") {
            let prefixed = format!("{}{}", pad, addr);
            let suffixed = format!("{}{}", addr, pad);
            prop_assert!(!is_ipv4(&prefixed));
            prop_assert!(!is_ipv4(&suffixed));
        }
    }
}

fn main() {
    println!("Property-based testing with proptest - run with: cargo test --bin p3_proptest");
    println!("proptest generates hundreds of random inputs and shrinks failures.");
}
