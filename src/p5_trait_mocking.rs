// Pattern 5: Trait Mocking
// Demonstrates the two ways to stand in for a dependency behind a trait:
// a hand-rolled fake with real (in-memory) behavior, and a generated
// mockall mock with per-call expectations.

use std::sync::Mutex;

use testing_patterns::post::{PostController, PostModel, PostService, ServiceError};

// ============================================================================
// Example: A hand-rolled fake with working in-memory behavior
// ============================================================================

pub struct InMemoryPosts {
    posts: Mutex<Vec<PostModel>>,
}

impl InMemoryPosts {
    pub fn new() -> Self {
        InMemoryPosts {
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn seeded(posts: Vec<PostModel>) -> Self {
        InMemoryPosts {
            posts: Mutex::new(posts),
        }
    }
}

impl PostService for InMemoryPosts {
    fn list(&self) -> Result<Vec<PostModel>, ServiceError> {
        Ok(self.posts.lock().unwrap().clone())
    }

    fn find(&self, id: i64) -> Result<Option<PostModel>, ServiceError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    fn create(&self, post: &PostModel) -> Result<(), ServiceError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    fn update(&self, post: &PostModel) -> Result<(), ServiceError> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(existing) = posts.iter_mut().find(|p| p.id == post.id) {
            *existing = post.clone();
        }
        Ok(())
    }

    fn destroy(&self, id: i64) -> Result<(), ServiceError> {
        self.posts.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

// A double that only fails, for driving error paths.
pub struct FailingPosts;

impl PostService for FailingPosts {
    fn list(&self) -> Result<Vec<PostModel>, ServiceError> {
        Err(ServiceError::Backend("list post with error".into()))
    }

    fn find(&self, _id: i64) -> Result<Option<PostModel>, ServiceError> {
        Err(ServiceError::Backend("find post with error".into()))
    }

    fn create(&self, _post: &PostModel) -> Result<(), ServiceError> {
        Err(ServiceError::Backend("create post with error".into()))
    }

    fn update(&self, _post: &PostModel) -> Result<(), ServiceError> {
        Err(ServiceError::Backend("update post with error".into()))
    }

    fn destroy(&self, _id: i64) -> Result<(), ServiceError> {
        Err(ServiceError::Backend("destroy post with error".into()))
    }
}

fn sample_posts() -> Vec<PostModel> {
    vec![
        PostModel {
            id: 1,
            title: "title".into(),
            body: "body".into(),
        },
        PostModel {
            id: 2,
            title: "title2".into(),
            body: "body2".into(),
        },
    ]
}


fn main() {
    println!("Trait mocking patterns - run with: cargo test --bin p5_trait_mocking");

    let controller = PostController::new(InMemoryPosts::seeded(sample_posts()));
    println!("index() with a seeded fake: {}", controller.index().status());

    let failing = PostController::new(FailingPosts);
    println!("index() with a failing double: {}", failing.index().status());
}
