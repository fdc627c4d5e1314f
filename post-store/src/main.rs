// ============================================================================
// IN-MEMORY POST STORE - DEMO
// ============================================================================

// - Create a post
// - Comment on it
// - Like it
// - Share it and print a summary

use post_store::{PostStore, PostSummary, StoreError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    // `.env` may carry RUST_LOG for the filter below
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let store = PostStore::new();

    let post = store.create_post("Hello, this is my first post!");
    store.add_comment(post.id, "Nice one!")?;
    store.like_post(post.id)?;

    let shared_link = store.share_post(post.id)?;
    println!("Post shared at: {}", shared_link);

    let summary = PostSummary::from(store.get_post(post.id)?);
    println!("{}", summary);

    match serde_json::to_string(&summary) {
        Ok(json) => info!("Summary: {}", json),
        Err(e) => warn!("Failed to serialize summary: {}", e),
    }

    Ok(())
}
