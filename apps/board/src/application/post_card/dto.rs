use crate::domain::post::{
    entity::{PostId, PostType, UserId},
    gate::PostInteraction,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Localized labels for the post card, keyed the way the translation
/// bundle ships them. Keys missing from a supplied bundle keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct PostCardStrings {
    pub delete_button: String,
    pub liked_by: String,
    pub no_content: String,
    pub not_liked: String,
}

impl Default for PostCardStrings {
    fn default() -> Self {
        Self {
            delete_button: "Delete".to_string(),
            liked_by: "Liked by:".to_string(),
            no_content: "(This post has no content)".to_string(),
            not_liked: "Not liked".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoterLine {
    pub voter: UserId,
    pub count: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum VoterTooltip {
    NotLiked { message: String },
    LikedBy { heading: String, voters: Vec<VoterLine> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LikeButton {
    pub label: String,
    pub enabled: bool,
    pub raised: bool,
    pub tooltip_id: String,
    pub tooltip: VoterTooltip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DislikeButton {
    pub raised: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeleteButton {
    pub label: String,
    pub raised: bool,
}

/// Render-ready state of one post card for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PostCard {
    pub post_id: PostId,
    pub post_type: PostType,
    pub content: String,
    pub placeholder: String,
    pub read_only: bool,
    pub like: LikeButton,
    pub dislike: Option<DislikeButton>,
    pub delete: Option<DeleteButton>,
    pub interaction: PostInteraction,
}
