use crate::models::PostId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The referenced post does not exist in the store.
    #[error("Post not found: {0}")]
    PostNotFound(PostId),
}

pub type StoreResult<T> = Result<T, StoreError>;
