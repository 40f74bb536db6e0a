// Pattern 2: Table-Driven Tests
// Demonstrates driving one assertion over a table of cases, so adding
// coverage means adding a row instead of another test function.

use testing_patterns::ip::is_ipv4;

// ============================================================================
// Example: A case table with per-case failure messages
// ============================================================================


fn main() {
    println!("Table-driven test patterns - run with: cargo test --bin p2_table_driven");
    let samples = ["127.0.0.1", "256.1.1.1", "01.02.03.04"];
    for sample in samples {
        println!("is_ipv4({:?}) = {}", sample, is_ipv4(sample));
    }
}
