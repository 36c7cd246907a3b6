use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use super::entity::UserId;
use super::gate::ActionIntent;

/// An intent that passed its gate, addressed to the owning store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DispatchRequest {
    pub dispatch_id: Uuid,
    pub viewer: UserId,
    pub intent: ActionIntent,
    pub issued_at: DateTime<Utc>,
}

impl DispatchRequest {
    pub fn new(viewer: UserId, intent: ActionIntent) -> Self {
        Self {
            dispatch_id: Uuid::now_v7(),
            viewer,
            intent,
            issued_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DispatchReceipt {
    pub dispatch_id: Uuid,
    pub intent: ActionIntent,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The store refused the intent, typically because the snapshot was stale.
    #[error("rejected by store: {reason}")]
    Rejected { reason: String },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Forwards permitted intents to the store that owns posts.
///
/// Dispatch is fire-and-forget from the engine's point of view: a fresh
/// snapshot reflecting the change arrives later through the caller.
#[async_trait]
pub trait ActionDispatcher: Send + Sync {
    async fn dispatch(&self, request: DispatchRequest) -> Result<DispatchReceipt, DispatchError>;
}
