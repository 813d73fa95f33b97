use crate::errors::AppError;
use crate::models::ChatCompletion;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, warn};

pub const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Fixed persona framing sent with every advisory request.
const SYSTEM_CONTEXT: &str = "You are MoneyMate, a knowledgeable financial advisor assistant. \
     Provide helpful, accurate, and concise financial advice.";

const EXHAUSTED_MESSAGE: &str = "Unable to get an advisor response after multiple attempts. \
     Please check your connection and try again.";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("advisory request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("advisory endpoint returned status {0}")]
    Status(u16),
    #[error("advisory response was malformed or empty")]
    Malformed,
    // The terminal error deliberately collapses all causes into one
    // user-facing message.
    #[error("{EXHAUSTED_MESSAGE}")]
    Exhausted,
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        AppError::bad_gateway(err.to_string())
    }
}

#[derive(Debug, Serialize)]
struct AdvisoryRequest<'a> {
    message: &'a str,
    context: &'a str,
}

/// Retrying client for the upstream advisory endpoint.
#[derive(Clone)]
pub struct AdvisorClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AdvisorClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Ask the advisory endpoint for a reply to `message`.
    ///
    /// Makes up to `MAX_ATTEMPTS` requests with linear backoff between
    /// failures (1s, then 2s). Transport errors, non-2xx statuses and
    /// malformed bodies all count as failed attempts; only the terminal
    /// `Exhausted` error reaches the caller.
    pub async fn get_response(&self, message: &str) -> Result<String, GatewayError> {
        for attempt in 1..=MAX_ATTEMPTS {
            match self.request_once(message).await {
                Ok(text) => {
                    info!("advisory reply received on attempt {attempt}/{MAX_ATTEMPTS}");
                    return Ok(text);
                }
                Err(err) => {
                    warn!("advisory attempt {attempt}/{MAX_ATTEMPTS} failed: {err}");
                    if attempt < MAX_ATTEMPTS {
                        sleep(RETRY_DELAY * attempt).await;
                    }
                }
            }
        }
        Err(GatewayError::Exhausted)
    }

    async fn request_once(&self, message: &str) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&AdvisoryRequest {
                message,
                context: SYSTEM_CONTEXT,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let body: ChatCompletion = response.json().await.map_err(|_| GatewayError::Malformed)?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(GatewayError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    #[derive(Clone)]
    struct MockState {
        hits: Arc<AtomicUsize>,
        fail_first: usize,
        body: Value,
    }

    async fn mock_chat(State(state): State<MockState>) -> (StatusCode, Json<Value>) {
        let hit = state.hits.fetch_add(1, Ordering::SeqCst) + 1;
        if hit <= state.fail_first {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "upstream down" })),
            )
        } else {
            (StatusCode::OK, Json(state.body.clone()))
        }
    }

    async fn spawn_mock(fail_first: usize, body: Value) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            hits: Arc::clone(&hits),
            fail_first,
            body,
        };
        let app = Router::new()
            .route("/api/chat", post(mock_chat))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/api/chat"), hits)
    }

    fn good_body() -> Value {
        json!({ "choices": [ { "message": { "content": " Keep three months of expenses in cash. " } } ] })
    }

    #[tokio::test]
    async fn succeeds_first_try_without_waiting() {
        let (endpoint, hits) = spawn_mock(0, good_body()).await;
        let client = AdvisorClient::new(endpoint);

        let started = Instant::now();
        let reply = client.get_response("how much should I save?").await.unwrap();

        assert_eq!(reply, "Keep three months of expenses in cash.");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(started.elapsed() < Duration::from_millis(900));
    }

    #[tokio::test]
    async fn retries_twice_then_succeeds_with_linear_backoff() {
        let (endpoint, hits) = spawn_mock(2, good_body()).await;
        let client = AdvisorClient::new(endpoint);

        let started = Instant::now();
        let reply = client.get_response("is my budget healthy?").await.unwrap();

        assert_eq!(reply, "Keep three months of expenses in cash.");
        assert_eq!(hits.load(Ordering::SeqCst), 3);
        // 1s after the first failure, 2s after the second.
        assert!(started.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test]
    async fn exhausts_after_three_failed_attempts() {
        let (endpoint, hits) = spawn_mock(usize::MAX, good_body()).await;
        let client = AdvisorClient::new(endpoint);

        let err = client.get_response("hello").await.unwrap_err();

        assert!(matches!(err, GatewayError::Exhausted));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert_eq!(err.to_string(), EXHAUSTED_MESSAGE);
    }

    #[tokio::test]
    async fn malformed_body_counts_as_failure() {
        let (endpoint, hits) = spawn_mock(0, json!({ "choices": [] })).await;
        let client = AdvisorClient::new(endpoint);

        let err = client.get_response("hello").await.unwrap_err();

        assert!(matches!(err, GatewayError::Exhausted));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn empty_content_counts_as_failure() {
        let body = json!({ "choices": [ { "message": { "content": "   " } } ] });
        let (endpoint, hits) = spawn_mock(0, body).await;
        let client = AdvisorClient::new(endpoint);

        let err = client.get_response("hello").await.unwrap_err();

        assert!(matches!(err, GatewayError::Exhausted));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }
}
