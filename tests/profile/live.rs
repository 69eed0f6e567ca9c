#[tokio::test]
#[ignore = "exercise live Apify scraping task"]
async fn live_profile_lookup() {
    if !(std::env::var("IG_LIVE").ok().as_deref() == Some("1")
        || std::env::var("IG_RECORD").ok().as_deref() == Some("1"))
    {
        return;
    }
    let client = igprofile_rs::IgClientBuilder::from_env()
        .unwrap()
        .build()
        .unwrap();
    let p = igprofile_rs::get_profile(&client, "@natgeo").await;
    assert!(p.exists);
    assert_eq!(p.username, "natgeo");
    assert!(!p.avatar_url.is_empty());
}
