use httpmock::prelude::*;

use pubgate_core::config::Credentials;
use pubgate_core::manifest::OnNetworkError;
use pubgate_core::publication::Coordinates;
use pubgate_maven::gate::{check_published, PublishGate};
use pubgate_maven::http::build_client;
use pubgate_maven::repository::MavenRepository;
use pubgate_util::secret::Secret;

const POM_PATH: &str = "/clebrain/apollo-kotlin/com/apollographql/apollo-api/4.0.0/apollo-api-4.0.0.pom";

fn coords() -> Coordinates {
    Coordinates::new("com.apollographql", "apollo-api", "4.0.0").unwrap()
}

fn repo(base: &str, token: Option<&str>) -> MavenRepository {
    MavenRepository::new(
        "GitHub",
        base,
        Credentials {
            username: Some("octocat".to_string()),
            password: token.map(Secret::from),
        },
    )
}

#[tokio::test]
async fn test_gate_skips_when_pom_exists() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(POM_PATH)
                .header("Authorization", "Bearer ghp_token");
            then.status(200).body("<project/>");
        })
        .await;

    let client = build_client().unwrap();
    let repo = repo(&server.url("/clebrain/apollo-kotlin"), Some("ghp_token"));
    let skip = PublishGate::default()
        .should_skip_publish(&client, &coords(), &repo)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(skip);
}

#[tokio::test]
async fn test_gate_status_classification() {
    let cases = [
        (200, true),
        (204, true),
        (299, true),
        (301, false),
        (302, false),
        (304, false),
        (307, false),
        (401, false),
        (403, false),
        (404, false),
        (500, false),
        (503, false),
    ];
    let client = build_client().unwrap();

    for (status, expected) in cases {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(POM_PATH);
                then.status(status);
            })
            .await;

        let repo = repo(&server.url("/clebrain/apollo-kotlin"), Some("t"));
        let published = check_published(&client, &coords(), &repo).await.unwrap();
        assert_eq!(published, expected, "status {status}");
    }
}

#[tokio::test]
async fn test_gate_does_not_follow_redirects() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(POM_PATH);
            then.status(302).header("Location", "/login");
        })
        .await;
    let login = server
        .mock_async(|when, then| {
            when.method(GET).path("/login");
            then.status(200).body("<html>sign in</html>");
        })
        .await;

    let client = build_client().unwrap();
    let repo = repo(&server.url("/clebrain/apollo-kotlin"), Some("ghp_token"));
    let skip = PublishGate::default()
        .should_skip_publish(&client, &coords(), &repo)
        .await
        .unwrap();

    assert!(!skip);
    assert_eq!(login.hits_async().await, 0);
}

#[tokio::test]
async fn test_gate_without_token_sends_no_authorization() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(POM_PATH).header_missing("Authorization");
            then.status(404);
        })
        .await;

    let client = build_client().unwrap();
    let repo = repo(&server.url("/clebrain/apollo-kotlin"), None);
    let skip = PublishGate::default()
        .should_skip_publish(&client, &coords(), &repo)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!skip);
}

#[tokio::test]
async fn test_gate_network_failure_propagates_by_default() {
    let client = build_client().unwrap();
    let repo = repo("http://127.0.0.1:1/maven", Some("ghp_token"));

    let err = PublishGate::new(OnNetworkError::Fail)
        .should_skip_publish(&client, &coords(), &repo)
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("Network error"), "got: {msg}");
    assert!(msg.contains("com.apollographql:apollo-api:4.0.0"), "got: {msg}");
    assert!(!msg.contains("ghp_token"), "token leaked: {msg}");
}

#[tokio::test]
async fn test_gate_network_failure_can_fall_through_to_publish() {
    let client = build_client().unwrap();
    let repo = repo("http://127.0.0.1:1/maven", Some("ghp_token"));

    let skip = PublishGate::new(OnNetworkError::Publish)
        .should_skip_publish(&client, &coords(), &repo)
        .await
        .unwrap();
    assert!(!skip);
}
