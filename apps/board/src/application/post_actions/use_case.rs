use crate::domain::post::{
    dispatcher::{ActionDispatcher, DispatchError, DispatchReceipt, DispatchRequest},
    entity::{Post, UserId},
    errors::DomainError,
    gate::{PostAction, gate},
};
use std::sync::Arc;

pub struct PostActionsUseCase {
    dispatcher: Arc<dyn ActionDispatcher>,
}

impl PostActionsUseCase {
    pub fn new(dispatcher: Arc<dyn ActionDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Gates `action` against the snapshot and forwards it once if permitted.
    ///
    /// A permitted action can still be refused by the store when the snapshot
    /// was stale; that surfaces as [`DomainError::ActionRejected`].
    pub async fn submit(
        &self,
        post: &Post,
        viewer: Option<&UserId>,
        action: PostAction,
    ) -> Result<DispatchReceipt, DomainError> {
        let action_name = action.name();
        let decision = gate(post, viewer, action);

        let viewer = match (decision.denial, viewer) {
            (None, Some(viewer)) => viewer.clone(),
            (denial, _) => {
                tracing::info!(
                    post_id = %post.id,
                    action = action_name,
                    denial = ?denial,
                    "action refused at gate"
                );
                return Err(denial.map_or(DomainError::Unauthorized, DomainError::from));
            }
        };

        let request = DispatchRequest::new(viewer, decision.intent);
        let dispatch_id = request.dispatch_id;

        match self.dispatcher.dispatch(request).await {
            Ok(receipt) => {
                tracing::info!(
                    post_id = %post.id,
                    action = action_name,
                    %dispatch_id,
                    "action dispatched"
                );
                Ok(receipt)
            }
            Err(DispatchError::Rejected { reason }) => {
                tracing::warn!(
                    post_id = %post.id,
                    action = action_name,
                    %dispatch_id,
                    %reason,
                    "store rejected action"
                );
                Err(DomainError::ActionRejected(reason))
            }
            Err(DispatchError::Unavailable(msg)) => {
                tracing::error!(
                    post_id = %post.id,
                    action = action_name,
                    %dispatch_id,
                    error = %msg,
                    "dispatch failed"
                );
                Err(DomainError::DispatchUnavailable(msg))
            }
        }
    }
}
