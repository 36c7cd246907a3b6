use crate::application::post_card::dto::PostCardStrings;
use crate::domain::post::{dispatcher::DispatchReceipt, entity::Post, gate::ActionIntent};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenderCardRequest {
    pub post: Post,
    #[serde(default)]
    pub strings: Option<PostCardStrings>,
}

/// Body of like, unlike and delete: the snapshot the viewer acted on.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PostSnapshotRequest {
    pub post: Post,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct EditPostRequest {
    pub post: Post,
    #[validate(length(max = 5000, message = "Post content must be 5000 characters or less"))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionResponse {
    pub dispatched: bool,
    pub dispatch_id: Uuid,
    pub intent: ActionIntent,
}

impl From<DispatchReceipt> for ActionResponse {
    fn from(receipt: DispatchReceipt) -> Self {
        Self {
            dispatched: true,
            dispatch_id: receipt.dispatch_id,
            intent: receipt.intent,
        }
    }
}
