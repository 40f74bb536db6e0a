// Pattern 6: HTTP Mocking
// Demonstrates testing an HTTP client against a wiremock server: register
// canned responses, point the client at the server's URI, assert on what
// the client makes of them.


fn main() {
    println!("HTTP mocking patterns - run with: cargo test --bin p6_http_mocking");
    println!("wiremock starts a real listener per test; no network stubbing tricks.");
}
