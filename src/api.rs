use crate::{
    config::get_config,
    constants::{CHAT_PATH, HEALTH_PATH},
    errors::{EmpathError, EmpathResult},
    logging::log_api_call,
    models::{ApiCallLog, ChatReply, ChatRequest, HealthState},
};
use chrono::Utc;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Builds the shared HTTP client. The timeout bounds how long the compose
/// surface can stay refused on a hung request, since there is no cancellation.
pub fn build_client() -> EmpathResult<Client> {
    let config = get_config();
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| EmpathError::api_error(format!("Failed to build HTTP client: {}", e)))
}

/// One-shot reachability probe. 2xx means online; any other status or a
/// transport error means offline. Never retried, never fatal.
pub async fn check_health(client: &Client, base_url: &str) -> HealthState {
    let url = format!("{}{}", base_url, HEALTH_PATH);
    let started = Instant::now();

    match client.get(&url).send().await {
        Ok(response) => {
            let status = response.status();
            log_api_call(&ApiCallLog {
                timestamp: Utc::now(),
                endpoint: HEALTH_PATH.to_string(),
                request_summary: "health probe".to_string(),
                response_status: status.as_u16(),
                response_time_ms: started.elapsed().as_millis(),
            });
            if status.is_success() {
                HealthState::Online
            } else {
                log::warn!("Health check returned {}", status);
                HealthState::Offline
            }
        }
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            HealthState::Offline
        }
    }
}

/// Posts one user message and returns the backend's reply. Non-2xx statuses,
/// transport errors, and malformed bodies all surface as `EmpathError::Api`;
/// the caller renders them identically.
pub async fn send_chat(client: &Client, base_url: &str, message: &str) -> EmpathResult<ChatReply> {
    let url = format!("{}{}", base_url, CHAT_PATH);
    let payload = ChatRequest {
        message: message.to_string(),
    };
    let started = Instant::now();

    let response = client
        .post(&url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| EmpathError::api_error(format!("Request failed: {}", e)))?;

    let status = response.status();
    log_api_call(&ApiCallLog {
        timestamp: Utc::now(),
        endpoint: CHAT_PATH.to_string(),
        request_summary: format!("chat message ({} chars)", message.len()),
        response_status: status.as_u16(),
        response_time_ms: started.elapsed().as_millis(),
    });

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(EmpathError::api_error(format!(
            "API returned error: {} - {}",
            status, error_text
        )));
    }

    let reply: ChatReply = response
        .json()
        .await
        .map_err(|e| EmpathError::api_error(format!("Failed to parse API response: {}", e)))?;

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_client() -> Client {
        Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn health_maps_2xx_to_online() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&mock_server)
            .await;

        let state = check_health(&test_client(), &mock_server.uri()).await;
        assert_eq!(state, HealthState::Online);
    }

    #[tokio::test]
    async fn health_maps_non_2xx_to_offline() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let state = check_health(&test_client(), &mock_server.uri()).await;
        assert_eq!(state, HealthState::Offline);
    }

    #[tokio::test]
    async fn health_maps_transport_error_to_offline() {
        // Nothing listens on port 1
        let state = check_health(&test_client(), "http://127.0.0.1:1").await;
        assert_eq!(state, HealthState::Offline);
    }

    #[tokio::test]
    async fn chat_posts_json_body_and_parses_reply() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"message": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "Hi there!",
                "emotion": "joy"
            })))
            .mount(&mock_server)
            .await;

        let reply = send_chat(&test_client(), &mock_server.uri(), "hello")
            .await
            .unwrap();
        assert_eq!(reply.response, "Hi there!");
        assert_eq!(reply.emotion.as_deref(), Some("joy"));
    }

    #[tokio::test]
    async fn chat_reply_without_emotion_parses() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hi!"})))
            .mount(&mock_server)
            .await;

        let reply = send_chat(&test_client(), &mock_server.uri(), "hello")
            .await
            .unwrap();
        assert_eq!(reply.response, "Hi!");
        assert!(reply.notable_emotion().is_none());
    }

    #[tokio::test]
    async fn chat_non_2xx_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let result = send_chat(&test_client(), &mock_server.uri(), "hello").await;
        assert!(matches!(result, Err(EmpathError::Api(_))));
    }

    #[tokio::test]
    async fn chat_malformed_body_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = send_chat(&test_client(), &mock_server.uri(), "hello").await;
        assert!(matches!(result, Err(EmpathError::Api(_))));
    }

    #[tokio::test]
    async fn chat_transport_error_is_an_error() {
        let result = send_chat(&test_client(), "http://127.0.0.1:1", "hello").await;
        assert!(matches!(result, Err(EmpathError::Api(_))));
    }
}
