// Pattern 7: SQL Testing with an In-Memory Database
// Demonstrates testing a DAO against SQLite's :memory: backend instead of
// mocking the driver: real SQL, real constraints, nothing to clean up.

use rusqlite::Connection;

use testing_patterns::post::{PostDao, PostService};

/// Create the posts table on a fresh connection.
fn create_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(
        "CREATE TABLE posts (
            id    INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            body  TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn seeded_dao() -> PostDao {
    let conn = Connection::open_in_memory().expect("in-memory database");
    create_schema(&conn).expect("schema");
    conn.execute_batch(
        "INSERT INTO posts (id, title, body) VALUES (1, 'post 1', 'hello');
         INSERT INTO posts (id, title, body) VALUES (2, 'post 2', 'world');",
    )
    .expect("seed rows");
    PostDao::new(conn)
}


fn main() {
    println!("SQL testing patterns - run with: cargo test --bin p7_sql_fakes");

    let dao = seeded_dao();
    for post in dao.list().expect("list posts") {
        println!("post {}: {} - {}", post.id, post.title, post.body);
    }
}
