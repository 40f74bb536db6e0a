//! Posts service: model, capability trait, HTTP controller, and a
//! SQLite-backed data-access implementation.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use mockall::automock;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::response;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Non-database backend failure, mostly produced by test doubles.
    #[error("{0}")]
    Backend(String),
}

/// Storage capability the controller depends on. Mocked in tests, backed by
/// SQLite in [`PostDao`].
#[automock]
pub trait PostService {
    fn list(&self) -> Result<Vec<PostModel>, ServiceError>;
    fn find(&self, id: i64) -> Result<Option<PostModel>, ServiceError>;
    fn create(&self, post: &PostModel) -> Result<(), ServiceError>;
    fn update(&self, post: &PostModel) -> Result<(), ServiceError>;
    fn destroy(&self, id: i64) -> Result<(), ServiceError>;
}

/// HTTP controller over any [`PostService`] implementation.
pub struct PostController<S: PostService> {
    service: S,
}

impl<S: PostService> PostController<S> {
    pub fn new(service: S) -> Self {
        PostController { service }
    }

    /// GET /posts: the full list as a JSON array, or 500 when the backing
    /// service fails.
    pub fn index(&self) -> Response<Full<Bytes>> {
        match self.service.list() {
            Ok(posts) => response::json(StatusCode::OK, &posts),
            Err(err) => {
                tracing::warn!(error = %err, "listing posts failed");
                response::text(StatusCode::INTERNAL_SERVER_ERROR, "list posts with error")
            }
        }
    }
}

/// SQLite-backed [`PostService`].
pub struct PostDao {
    conn: Connection,
}

impl PostDao {
    pub fn new(conn: Connection) -> Self {
        PostDao { conn }
    }
}

impl PostService for PostDao {
    fn list(&self) -> Result<Vec<PostModel>, ServiceError> {
        let mut stmt = self.conn.prepare("SELECT id, title, body FROM posts")?;
        let rows = stmt.query_map([], |row| {
            Ok(PostModel {
                id: row.get(0)?,
                title: row.get(1)?,
                body: row.get(2)?,
            })
        })?;

        let mut posts = Vec::new();
        for post in rows {
            posts.push(post?);
        }
        Ok(posts)
    }

    fn find(&self, id: i64) -> Result<Option<PostModel>, ServiceError> {
        let post = self
            .conn
            .query_row(
                "SELECT id, title, body FROM posts WHERE id = ?1",
                params![id],
                |row| {
                    Ok(PostModel {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        body: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(post)
    }

    fn create(&self, post: &PostModel) -> Result<(), ServiceError> {
        self.conn.execute(
            "INSERT INTO posts (id, title, body) VALUES (?1, ?2, ?3)",
            params![post.id, post.title, post.body],
        )?;
        Ok(())
    }

    fn update(&self, post: &PostModel) -> Result<(), ServiceError> {
        self.conn.execute(
            "UPDATE posts SET title = ?1, body = ?2 WHERE id = ?3",
            params![post.title, post.body, post.id],
        )?;
        Ok(())
    }

    fn destroy(&self, id: i64) -> Result<(), ServiceError> {
        self.conn
            .execute("DELETE FROM posts WHERE id = ?1", params![id])?;
        Ok(())
    }
}
