use crate::domain::post::dispatcher::{
    ActionDispatcher, DispatchError, DispatchReceipt, DispatchRequest,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Forwards intents to the owning store as `POST {base_url}/intents`.
///
/// `409` and `422` answers mean the store refused the intent on its own
/// authoritative state; the `error` field of the body becomes the reason.
pub struct HttpDispatcher {
    client: Client,
    endpoint: String,
}

impl HttpDispatcher {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/intents", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

async fn rejection_reason(response: reqwest::Response) -> String {
    let status = response.status();
    response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("rejected")
                .to_string()
        })
}

#[async_trait]
impl ActionDispatcher for HttpDispatcher {
    async fn dispatch(&self, request: DispatchRequest) -> Result<DispatchReceipt, DispatchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DispatchError::Unavailable("store timed out".to_string())
                } else {
                    DispatchError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(DispatchReceipt {
                dispatch_id: request.dispatch_id,
                intent: request.intent,
            });
        }

        match status {
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(DispatchError::Rejected {
                    reason: rejection_reason(response).await,
                })
            }
            _ => Err(DispatchError::Unavailable(format!(
                "store answered {}",
                status
            ))),
        }
    }
}
