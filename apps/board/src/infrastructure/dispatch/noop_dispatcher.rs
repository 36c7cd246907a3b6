use crate::domain::post::dispatcher::{
    ActionDispatcher, DispatchError, DispatchReceipt, DispatchRequest,
};
use async_trait::async_trait;

/// Fallback bound when no store is configured: accepts and drops every intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDispatcher;

#[async_trait]
impl ActionDispatcher for NoopDispatcher {
    async fn dispatch(&self, request: DispatchRequest) -> Result<DispatchReceipt, DispatchError> {
        tracing::debug!(
            dispatch_id = %request.dispatch_id,
            post_id = %request.intent.post_id(),
            "no store bound, dropping intent"
        );
        Ok(DispatchReceipt {
            dispatch_id: request.dispatch_id,
            intent: request.intent,
        })
    }
}
