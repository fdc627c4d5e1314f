pub mod post;

pub use post::{
    Comment, CommentId, LikeDislike, Post, PostContent, PostId, SHARE_BASE_URL, Share,
    share_link,
};
