use crate::{
    errors::{StoreError, StoreResult},
    models::{Comment, Post, PostId, share_link},
};
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, warn};

// ============================================================================
// POST STORE - Shared data across all callers
// ============================================================================
/// In-memory registry of posts keyed by id.
///
/// `Arc` = Atomic Reference Counter
/// - Cloning the store only bumps a counter
/// - Every clone sees the same posts
///
/// `parking_lot::RwLock` over one `HashMap`
/// - A single lock guards every post, so ids from `len() + 1` never collide
/// - Each call holds the guard for its full duration and drops it on return,
///   including on the not-found path
/// - No poisoning, so a panicking caller can't wedge the store
#[derive(Clone)]
pub struct PostStore {
    posts: Arc<RwLock<HashMap<PostId, Post>>>,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stores a new post with id `len + 1` and returns a copy of it.
    pub fn create_post(&self, content: impl Into<String>) -> Post {
        let mut posts = self.posts.write();

        let post_id = posts.len() as PostId + 1;
        let post = Post::new(post_id, content);
        posts.insert(post_id, post.clone());

        debug!("Post created: {}", post_id);
        post
    }

    pub fn add_comment(&self, post_id: PostId, content: impl Into<String>) -> StoreResult<Comment> {
        let mut posts = self.posts.write();
        let post = posts.get_mut(&post_id).ok_or_else(|| not_found(post_id))?;

        let comment = post.push_comment(content);

        debug!("Comment {} added to post {}", comment.id, post_id);
        Ok(comment)
    }

    pub fn like_post(&self, post_id: PostId) -> StoreResult<()> {
        let mut posts = self.posts.write();
        let post = posts.get_mut(&post_id).ok_or_else(|| not_found(post_id))?;

        post.like_dislike.likes = post.like_dislike.likes.saturating_add(1);
        debug!("Post {} liked ({})", post_id, post.like_dislike.likes);
        Ok(())
    }

    pub fn dislike_post(&self, post_id: PostId) -> StoreResult<()> {
        let mut posts = self.posts.write();
        let post = posts.get_mut(&post_id).ok_or_else(|| not_found(post_id))?;

        post.like_dislike.dislikes = post.like_dislike.dislikes.saturating_add(1);
        debug!("Post {} disliked ({})", post_id, post.like_dislike.dislikes);
        Ok(())
    }

    /// Records and returns the post's share link. Repeated shares yield the same link.
    pub fn share_post(&self, post_id: PostId) -> StoreResult<String> {
        let mut posts = self.posts.write();
        let post = posts.get_mut(&post_id).ok_or_else(|| not_found(post_id))?;

        let link = share_link(post.id);
        post.share.shared_link = Some(link.clone());

        debug!("Post {} shared at {}", post_id, link);
        Ok(link)
    }

    pub fn get_post(&self, post_id: PostId) -> StoreResult<Post> {
        self.posts
            .read()
            .get(&post_id)
            .cloned()
            .ok_or_else(|| not_found(post_id))
    }

    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }
}

fn not_found(post_id: PostId) -> StoreError {
    warn!("Post not found: {}", post_id);
    StoreError::PostNotFound(post_id)
}
