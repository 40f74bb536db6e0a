// Pattern 3: Property-Based Testing with QuickCheck
// Demonstrates QuickCheck as an alternative to proptest: properties are
// plain functions returning bool, inputs come from Arbitrary.


fn main() {
    println!("QuickCheck property-based testing - run with: cargo test --bin p3_quickcheck");
    println!("QuickCheck's syntax is slightly different from proptest.");
}
