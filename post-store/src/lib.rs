//! In-memory post store: posts, per-post comments, like/dislike counters
//! and share links, all behind one lock.

pub mod dto;
pub mod errors;
pub mod models;
pub mod states;

pub use dto::PostSummary;
pub use errors::{StoreError, StoreResult};
pub use models::{Comment, CommentId, LikeDislike, Post, PostContent, PostId, Share};
pub use states::PostStore;
