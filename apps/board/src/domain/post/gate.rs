//! Action gates evaluated before an intent is forwarded to the store.
//!
//! A gate never dispatches. It returns the intended payload together with the
//! reason it was refused, if any, and leaves binding a handler to the caller.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entity::{Post, PostId, UserId, present};
use super::permission::{can_delete, can_edit};
use super::vote_ledger::{VoterCount, VoterOrder};

/// User gesture on a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostAction {
    Edit { content: String },
    Like,
    Unlike,
    Delete,
}

impl PostAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edit { .. } => "edit",
            Self::Like => "like",
            Self::Unlike => "unlike",
            Self::Delete => "delete",
        }
    }
}

/// Payload handed to the dispatcher once a gate permits the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "action", rename_all = "snake_case")]
#[ts(export)]
pub enum ActionIntent {
    Edit { post_id: PostId, content: String },
    Like { post_id: PostId },
    Unlike { post_id: PostId },
    Delete { post_id: PostId },
}

impl ActionIntent {
    pub fn post_id(&self) -> &PostId {
        match self {
            Self::Edit { post_id, .. }
            | Self::Like { post_id }
            | Self::Unlike { post_id }
            | Self::Delete { post_id } => post_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GateDenial {
    AnonymousViewer,
    NotOwner,
    VoteCapReached,
    NoVoteToRetract,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionGate {
    pub intent: ActionIntent,
    pub denial: Option<GateDenial>,
}

impl ActionGate {
    pub fn is_permitted(&self) -> bool {
        self.denial.is_none()
    }
}

pub fn gate(post: &Post, viewer: Option<&UserId>, action: PostAction) -> ActionGate {
    let post_id = post.id.clone();
    let ledger = post.ledger();

    let (intent, allowed, refusal) = match action {
        PostAction::Edit { content } => (
            ActionIntent::Edit { post_id, content },
            can_edit(post, viewer),
            GateDenial::NotOwner,
        ),
        PostAction::Delete => (
            ActionIntent::Delete { post_id },
            can_delete(post, viewer),
            GateDenial::NotOwner,
        ),
        PostAction::Like => (
            ActionIntent::Like { post_id },
            ledger.can_cast_vote(viewer),
            GateDenial::VoteCapReached,
        ),
        PostAction::Unlike => (
            ActionIntent::Unlike { post_id },
            ledger.can_retract_vote(viewer),
            GateDenial::NoVoteToRetract,
        ),
    };

    let denial = if present(viewer).is_none() {
        Some(GateDenial::AnonymousViewer)
    } else if allowed {
        None
    } else {
        Some(refusal)
    };

    ActionGate { intent, denial }
}

/// Every right and vote value a caller needs to present one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PostInteraction {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_cast_vote: bool,
    pub can_retract_vote: bool,
    pub vote_count: usize,
    pub viewer_vote_count: usize,
    pub voters: Vec<VoterCount>,
}

impl PostInteraction {
    pub fn evaluate(post: &Post, viewer: Option<&UserId>, order: VoterOrder) -> Self {
        let ledger = post.ledger();
        Self {
            can_edit: can_edit(post, viewer),
            can_delete: can_delete(post, viewer),
            can_cast_vote: ledger.can_cast_vote(viewer),
            can_retract_vote: ledger.can_retract_vote(viewer),
            vote_count: ledger.vote_count(),
            viewer_vote_count: ledger.viewer_vote_count(viewer),
            voters: ledger.describe_voters(order),
        }
    }
}
