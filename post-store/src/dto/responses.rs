use crate::models::{Post, PostId};
use serde::Serialize;
use std::fmt;

/// Flattened view of a post: counters instead of the full comment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: PostId,
    pub content: String,
    pub likes: u64,
    pub dislikes: u64,
    pub comments: usize,
    pub shared_link: Option<String>,
    pub created_at: i64,
}

impl From<Post> for PostSummary {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            content: post.content.content,
            likes: post.like_dislike.likes,
            dislikes: post.like_dislike.dislikes,
            comments: post.comments.len(),
            shared_link: post.share.shared_link,
            created_at: post.content.created_at.timestamp(),
        }
    }
}

impl fmt::Display for PostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Post ID: {}", self.id)?;
        writeln!(f, "Content: {}", self.content)?;
        writeln!(f, "Likes: {}", self.likes)?;
        writeln!(f, "Dislikes: {}", self.dislikes)?;
        writeln!(f, "Comments: {}", self.comments)?;
        write!(f, "Shared Link: {}", self.shared_link.as_deref().unwrap_or(""))
    }
}
