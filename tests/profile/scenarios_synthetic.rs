use crate::common::{self, client_for, mock_configuration};
use igprofile_rs::{Profile, configurations, get_profile};

const PLACEHOLDER_BASE: &str = "https://ui-avatars.com/api/?name=";

#[tokio::test]
async fn direct_fields_on_first_configuration_stop_early() {
    let server = common::setup_server();
    let cfgs = configurations("alice");

    let first = mock_configuration(
        &server,
        &cfgs[0],
        200,
        r#"{ "username": "alice", "profilePicUrlHD": "https://img/a.jpg" }"#,
    );
    let second = mock_configuration(&server, &cfgs[1], 200, "{}");
    let third = mock_configuration(&server, &cfgs[2], 200, "{}");

    let client = client_for(&server);
    let p = get_profile(&client, "alice").await;

    first.assert_hits(1);
    second.assert_hits(0);
    third.assert_hits(0);
    assert_eq!(
        p,
        Profile {
            username: "alice".into(),
            display_name: Some("alice".into()),
            avatar_url: "https://img/a.jpg".into(),
            exists: true,
        }
    );
}

#[tokio::test]
async fn empty_answers_everywhere_yield_placeholder() {
    let server = common::setup_server();
    let mocks: Vec<_> = configurations("dave")
        .iter()
        .map(|c| mock_configuration(&server, c, 200, "{}"))
        .collect();

    let client = client_for(&server);
    let p = get_profile(&client, "@dave").await;

    for m in &mocks {
        m.assert_hits(1);
    }
    assert!(p.exists);
    assert_eq!(p.username, "dave");
    assert_eq!(p.display_name.as_deref(), Some("dave"));
    assert!(p.avatar_url.starts_with(&format!("{PLACEHOLDER_BASE}dave&")));
    assert!(client.is_placeholder_avatar(&p.avatar_url));
}

#[tokio::test]
async fn nested_owner_inside_array() {
    let server = common::setup_server();
    let cfgs = configurations("bob");
    let first = mock_configuration(
        &server,
        &cfgs[0],
        200,
        r#"[{"owner": {"username":"bob","full_name":"Bob B","profile_pic_url_hd":"https://img/b.jpg"}}]"#,
    );

    let client = client_for(&server);
    let p = get_profile(&client, "bob").await;

    first.assert_hits(1);
    assert_eq!(p.username, "bob");
    assert_eq!(p.display_name.as_deref(), Some("Bob B"));
    assert_eq!(p.avatar_url, "https://img/b.jpg");
    assert!(p.exists);
}

#[tokio::test]
async fn search_urls_only_confirm_existence() {
    let server = common::setup_server();
    let mocks: Vec<_> = configurations("carol")
        .iter()
        .map(|c| {
            mock_configuration(
                &server,
                c,
                200,
                r#"{ "urlsFromSearch": ["https://instagram.com/carol"] }"#,
            )
        })
        .collect();

    let client = client_for(&server);
    let p = get_profile(&client, "carol").await;

    for m in &mocks {
        m.assert_hits(1);
    }
    assert_eq!(
        p,
        Profile {
            username: "carol".into(),
            display_name: Some("carol".into()),
            avatar_url: String::new(),
            exists: true,
        }
    );
}

#[tokio::test]
async fn recorded_details_fixture_resolves_on_first_attempt() {
    let server = common::setup_server();
    let cfgs = configurations("natgeo");
    let first = mock_configuration(
        &server,
        &cfgs[0],
        200,
        &common::fixture("scraper_direct_url", "natgeo", "json"),
    );
    let second = mock_configuration(&server, &cfgs[1], 200, "[]");

    let client = client_for(&server);
    let p = igprofile_rs::Profile::load(&client, "natgeo").await;

    first.assert_hits(1);
    second.assert_hits(0);
    assert_eq!(p.display_name.as_deref(), Some("National Geographic"));
    assert_eq!(
        p.avatar_url,
        "https://scontent.cdninstagram.com/v/t51.2885-19/natgeo_320.jpg"
    );
}

#[tokio::test]
async fn post_owner_fallback_after_empty_details() {
    let server = common::setup_server();
    let cfgs = configurations("natgeo");
    let first = mock_configuration(&server, &cfgs[0], 200, "[]");
    let second = mock_configuration(&server, &cfgs[1], 200, r#"[{"error":"not_found"}]"#);
    let third = mock_configuration(
        &server,
        &cfgs[2],
        200,
        &common::fixture("scraper_post_owner", "natgeo", "json"),
    );

    let client = client_for(&server);
    let p = get_profile(&client, "natgeo").await;

    first.assert_hits(1);
    second.assert_hits(1);
    third.assert_hits(1);
    assert_eq!(p.username, "natgeo");
    assert_eq!(p.display_name.as_deref(), Some("National Geographic"));
    assert_eq!(
        p.avatar_url,
        "https://scontent.cdninstagram.com/v/t51.2885-19/natgeo_150.jpg"
    );
}

#[tokio::test]
async fn same_upstream_gives_identical_profiles() {
    let server = common::setup_server();
    let cfgs = configurations("erin");
    mock_configuration(&server, &cfgs[0], 200, "{}");
    mock_configuration(
        &server,
        &cfgs[1],
        200,
        r#"{"data": {"user": {"username": "erin", "full_name": "Erin E"}}}"#,
    );
    mock_configuration(&server, &cfgs[2], 200, "{}");

    let client = client_for(&server);
    let a = get_profile(&client, "erin").await;
    let b = get_profile(&client, "@erin").await;
    assert_eq!(a, b);
    assert_eq!(a.display_name.as_deref(), Some("Erin E"));
}
