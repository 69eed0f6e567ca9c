use crate::common::{self, client_for, mock_configuration};
use httpmock::Method::POST;
use igprofile_rs::{Profile, configurations, get_profile};

#[tokio::test]
async fn every_configuration_failing_yields_sentinel() {
    let server = common::setup_server();
    let mocks: Vec<_> = configurations("frank")
        .iter()
        .map(|c| mock_configuration(&server, c, 500, r#"{"error":"actor crashed"}"#))
        .collect();

    let client = client_for(&server);
    let p = get_profile(&client, "@frank").await;

    for m in &mocks {
        m.assert_hits(1);
    }
    assert_eq!(p, Profile::failed("frank"));
    assert_eq!(p.display_name, None);
    assert_eq!(p.avatar_url, "");
    assert!(!p.exists);
}

#[tokio::test]
async fn unreachable_scraper_yields_sentinel() {
    let client = igprofile_rs::IgClient::builder()
        .endpoint(url::Url::parse("http://127.0.0.1:9/run-sync").unwrap())
        .build()
        .unwrap();

    let p = get_profile(&client, "@gina").await;
    assert_eq!(p, Profile::failed("gina"));
}

#[tokio::test]
async fn undecodable_body_counts_as_failure() {
    let server = common::setup_server();
    let mocks: Vec<_> = configurations("hank")
        .iter()
        .map(|c| mock_configuration(&server, c, 200, "<html>rate limited</html>"))
        .collect();

    let client = client_for(&server);
    let p = get_profile(&client, "hank").await;

    for m in &mocks {
        m.assert_hits(1);
    }
    assert_eq!(p, Profile::failed("hank"));
}

#[tokio::test]
async fn failed_attempt_is_skipped_not_fatal() {
    let server = common::setup_server();
    let cfgs = configurations("ivy");
    let first = mock_configuration(&server, &cfgs[0], 429, "{}");
    let second = mock_configuration(
        &server,
        &cfgs[1],
        200,
        r#"{"items": [{"username": "ivy", "profilePicUrl": "https://img/i.jpg"}]}"#,
    );
    let third = mock_configuration(&server, &cfgs[2], 200, "{}");

    let client = client_for(&server);
    let p = get_profile(&client, "ivy").await;

    first.assert_hits(1);
    second.assert_hits(1);
    third.assert_hits(0);
    assert_eq!(p.avatar_url, "https://img/i.jpg");
    assert!(p.exists);
}

#[tokio::test]
async fn posts_json_with_token_to_run_endpoint() {
    let server = common::setup_server();
    let any_run = server.mock(|when, then| {
        when.method(POST)
            .path(common::run_path())
            .query_param("token", common::TOKEN)
            .header("content-type", "application/json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"username":"jo","avatar":"https://img/j.jpg"}"#);
    });

    let client = client_for(&server);
    assert!(!client.endpoint_redacted().contains(common::TOKEN));

    let p = get_profile(&client, "jo").await;
    any_run.assert_hits(1);
    assert_eq!(p.avatar_url, "https://img/j.jpg");
}
