use post_store::PostStore;

#[test]
fn share_link_ignores_environment_overrides() {
    // SAFETY: this test binary runs a single test, so no other thread reads the environment.
    unsafe {
        std::env::set_var("SHARE_BASE_URL", "https://posts.example/");
    }

    let store = PostStore::new();
    let id = store.create_post("Hello").id;

    assert_eq!(store.share_post(id).unwrap(), "https://socialmedia.com/post/1");
    assert_eq!(
        store.get_post(id).unwrap().share.shared_link.as_deref(),
        Some("https://socialmedia.com/post/1")
    );
}
