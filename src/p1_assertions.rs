// Pattern 1: Plain Assertions
// Demonstrates basic #[test] usage, the assertion macros, custom failure
// messages, and organizing related cases into nested modules.

use testing_patterns::ip::is_ipv4;

// ============================================================================
// Example: The smallest possible subject
// ============================================================================

fn sum(a: i32, b: i32) -> i32 {
    a + b
}

#[cfg(test)]
mod sum_tests {
    use super::*;

    #[test]
    fn adds_two_numbers() {
        assert_eq!(sum(1, 1), 2);
    }

    #[test]
    fn assertion_macros() {
        // Equality and inequality
        assert_eq!(sum(2, 3), 5);
        assert_ne!(sum(2, 3), 6);

        // Boolean assertions, with and without a message
        assert!(sum(-2, 3) > 0);
        assert!(sum(2, 2) == 4, "sum(2, 2) should be 4, got {}", sum(2, 2));
    }
}

// ============================================================================
// Example: One assertion per case, message naming the input
// ============================================================================


// ============================================================================
// Example: Grouping cases into contexts with nested modules
// ============================================================================


fn main() {
    println!("Plain assertion patterns - run with: cargo test --bin p1_assertions");
    println!("Filter by context: cargo test --bin p1_assertions should_be_invalid");
    println!("Example subjects: sum(1, 1) = {}", sum(1, 1));
    println!("                  is_ipv4(\"127.0.0.1\") = {}", is_ipv4("127.0.0.1"));
}
