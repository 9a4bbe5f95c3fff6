//! End-to-end probe behavior against a mocked shim.

use bitnet_probe::config::{AccessCredentials, ProbeConfig, Route};
use bitnet_probe::{Error, ProbeClient};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn test_config(server: &ServerGuard, route: Route) -> ProbeConfig {
    ProbeConfig {
        base_url: server.url().trim_end_matches('/').to_string(),
        route,
        model: "bitnet-b1.58".to_string(),
        prompt: "Say hello in one short sentence.".to_string(),
        max_tokens: 64,
        temperature: 0.7,
        top_p: 0.95,
        stop: Vec::new(),
        credentials: AccessCredentials {
            client_id: "test-id".to_string(),
            client_secret: "test-secret".to_string(),
        },
    }
}

async fn mock_healthy(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/health")
        .match_header("CF-Access-Client-Id", "test-id")
        .match_header("CF-Access-Client-Secret", "test-secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await
}

#[tokio::test]
async fn chat_route_extracts_first_choice_text() {
    let mut server = Server::new_async().await;
    let health = mock_healthy(&mut server).await;
    let chat = server
        .mock("POST", "/v1/chat/completions")
        .match_header("CF-Access-Client-Id", "test-id")
        .match_header("CF-Access-Client-Secret", "test-secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"choices": [{"message": {"role": "assistant", "content": " hi \n"}}]})
                .to_string(),
        )
        .create_async()
        .await;

    let config = test_config(&server, Route::Chat);
    let client = ProbeClient::new(&config).unwrap();

    client.health().await.unwrap();
    let outcome = client.generate(&config).await.unwrap();
    assert_eq!(outcome.response.first_text(Route::Chat).unwrap().trim(), "hi");

    health.assert_async().await;
    chat.assert_async().await;
}

#[tokio::test]
async fn completions_route_extracts_text_field() {
    let mut server = Server::new_async().await;
    let _health = mock_healthy(&mut server).await;
    let completions = server
        .mock("POST", "/v1/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"text": "hi "}]}).to_string())
        .create_async()
        .await;

    let config = test_config(&server, Route::Completions);
    let client = ProbeClient::new(&config).unwrap();

    client.health().await.unwrap();
    let outcome = client.generate(&config).await.unwrap();
    assert_eq!(
        outcome.response.first_text(Route::Completions).unwrap().trim(),
        "hi"
    );

    completions.assert_async().await;
}

#[tokio::test]
async fn failed_health_check_gates_generation() {
    let mut server = Server::new_async().await;
    let health = server
        .mock("GET", "/health")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;
    // The run must abort before any generation request is issued.
    let generation = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let config = test_config(&server, Route::Chat);
    let client = ProbeClient::new(&config).unwrap();

    let err = client.health().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    health.assert_async().await;
    generation.assert_async().await;
}

#[tokio::test]
async fn generation_error_body_is_preserved() {
    let mut server = Server::new_async().await;
    let _health = mock_healthy(&mut server).await;
    let _chat = server
        .mock("POST", "/v1/chat/completions")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": {"message": "unknown model"}}).to_string())
        .create_async()
        .await;

    let config = test_config(&server, Route::Chat);
    let client = ProbeClient::new(&config).unwrap();

    client.health().await.unwrap();
    match client.generate(&config).await {
        Err(Error::Remote { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body["error"]["message"], "unknown model");
        }
        other => panic!("expected a remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let mut server = Server::new_async().await;
    let _health = mock_healthy(&mut server).await;
    let _chat = server
        .mock("POST", "/v1/chat/completions")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let config = test_config(&server, Route::Chat);
    let client = ProbeClient::new(&config).unwrap();

    client.health().await.unwrap();
    match client.generate(&config).await {
        Err(Error::Remote { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, serde_json::Value::String("bad gateway".to_string()));
        }
        other => panic!("expected a remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn stop_strings_reach_the_wire_in_order() {
    let mut server = Server::new_async().await;
    let _health = mock_healthy(&mut server).await;
    let chat = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(json!({"stop": ["a", "b"]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"content": "ok"}}]}).to_string())
        .create_async()
        .await;

    let mut config = test_config(&server, Route::Chat);
    config.stop = vec!["a".to_string(), "b".to_string()];
    let client = ProbeClient::new(&config).unwrap();

    client.health().await.unwrap();
    client.generate(&config).await.unwrap();

    chat.assert_async().await;
}

#[tokio::test]
async fn empty_stop_list_is_sent_as_null() {
    let mut server = Server::new_async().await;
    let _health = mock_healthy(&mut server).await;
    let chat = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Regex(r#""stop":null"#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"content": "ok"}}]}).to_string())
        .create_async()
        .await;

    let config = test_config(&server, Route::Chat);
    let client = ProbeClient::new(&config).unwrap();

    client.health().await.unwrap();
    client.generate(&config).await.unwrap();

    chat.assert_async().await;
}
