// Unit Testing Patterns Library
// Small example subjects plus one demonstration file per testing approach.
//
// Subjects (this library):
// - ip: dotted-decimal IPv4 literal validation
// - login: a login HTTP handler on hyper
// - post: posts model, service trait, controller, and SQLite DAO
// - client: reqwest client for a remote posts API
// - response: shared HTTP response helpers
//
// Patterns (bin targets, tests inline):
// - p1_assertions: #[test] basics and assertion macros
// - p2_table_driven: case tables with per-case failure messages
// - p3_proptest / p3_quickcheck: property-based testing
// - p4_handler_testing: in-process request/response handler tests
// - p5_trait_mocking: hand-rolled stubs and mockall mocks
// - p6_http_mocking: wiremock servers for HTTP clients
// - p7_sql_fakes: in-memory SQLite as the database test double

pub mod client;
pub mod ip;
pub mod login;
pub mod post;
pub mod response;
