use serde_json::json;
use url::Url;
use userboard::api::{ApiClient, DatasetSource, JsonEndpoint, UserDirectory};
use userboard::error::FetchError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
}

#[tokio::test]
async fn test_get_json_returns_array_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }, { "id": 2 }])))
        .expect(1)
        .mount(&server)
        .await;

    let value = ApiClient::new().get_json(&url(&server, "/posts")).await.unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!([{ "id": 1 }])))
        .mount(&server)
        .await;

    let endpoint = JsonEndpoint::new(ApiClient::new(), url(&server, "/comments"));
    let error = endpoint.fetch().await.unwrap_err();

    assert!(matches!(error, FetchError::Status { status: 500, .. }));
    assert!(error.url().is_some_and(|url| url.ends_with("/comments")));
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let error = ApiClient::new().get_json(&url(&server, "/todos")).await.unwrap_err();
    assert!(matches!(error, FetchError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let unreachable = Url::parse("http://127.0.0.1:1/posts").unwrap();
    let error = ApiClient::new().get_json(&unreachable).await.unwrap_err();
    assert!(matches!(error, FetchError::Transport { .. }));
}

#[tokio::test]
async fn test_user_directory_extracts_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "login": { "uuid": "abc" },
                "name": { "first": "Jane", "last": "Smith" },
                "dob": { "age": 28 },
                "location": { "city": "Los Angeles", "country": "USA" },
                "picture": { "thumbnail": "https://example.com/jane.jpg" }
            }],
            "info": { "seed": "assessment" }
        })))
        .mount(&server)
        .await;

    let directory = UserDirectory::new(ApiClient::new(), url(&server, "/api"));
    let value = directory.fetch().await.unwrap();

    let users = userboard::api::users_from_value("Users", value).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].full_name(), "Jane Smith");
    assert_eq!(users[0].location(), "Los Angeles, USA");
}

#[tokio::test]
async fn test_user_directory_without_results_array_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": "nope" })))
        .mount(&server)
        .await;

    let directory = UserDirectory::new(ApiClient::new(), url(&server, "/api"));
    let value = directory.fetch().await.unwrap();

    assert_eq!(value, json!([]));
}
