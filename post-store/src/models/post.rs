use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type PostId = u64;
pub type CommentId = u64;

/// Host every share link points at.
pub const SHARE_BASE_URL: &str = "https://socialmedia.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostContent {
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A reply attached to exactly one post.
///
/// `id` is only unique within the owning post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeDislike {
    pub likes: u64,
    pub dislikes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub shared_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: PostContent,
    pub comments: Vec<Comment>,
    pub like_dislike: LikeDislike,
    pub share: Share,
}

impl Post {
    pub fn new(id: PostId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: PostContent {
                content: content.into(),
                created_at: Utc::now(),
            },
            comments: Vec::new(),
            like_dislike: LikeDislike::default(),
            share: Share::default(),
        }
    }

    /// Appends a comment numbered after the ones already on this post.
    ///
    /// Comment ids are scoped to the post:
    /// - The first comment on every post is `1`
    /// - Ids only ever grow because comments are never removed
    /// - Callers must hold the store's write lock so two comments can't read
    ///   the same `len()`
    pub fn push_comment(&mut self, content: impl Into<String>) -> Comment {
        let comment = Comment {
            id: self.comments.len() as CommentId + 1,
            post_id: self.id,
            content: content.into(),
            created_at: Utc::now(),
        };
        self.comments.push(comment.clone());
        comment
    }
}

/// Builds the shareable link for a post: `https://socialmedia.com/post/{id}`.
pub fn share_link(post_id: PostId) -> String {
    format!("{}/post/{}", SHARE_BASE_URL, post_id)
}
