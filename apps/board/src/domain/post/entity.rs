use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::vote_ledger::VoteLedger;

/// Opaque, stable identifier of a post on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PostId(pub String);

impl PostId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of an author, voter or viewer. Compared by equality only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty identity never matches anyone. Any other value, whitespace
    /// included, is compared as-is.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Narrows an optional viewer to one that can hold rights on a post.
pub(crate) fn present(viewer: Option<&UserId>) -> Option<&UserId> {
    viewer.filter(|v| !v.is_empty())
}

/// Board column a post belongs to. Used for presentation grouping only.
///
/// A snapshot without `postType` is filed under `Well`, the board's first
/// column. No right or vote value depends on the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum PostType {
    #[default]
    Well,
    NotWell,
    Ideas,
}

/// Snapshot of a post as supplied by the owning store.
///
/// The engine only reads it. `likes` is the ordered vote record: every
/// occurrence of a voter is one vote, so duplicates are expected. A snapshot
/// without a `likes` field is read as having no votes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Post {
    pub id: PostId,

    /// Author and owner. Never changes for the lifetime of the post.
    pub user: UserId,

    #[serde(default)]
    pub content: String,

    /// Defaults to [`PostType::Well`] when the snapshot omits it.
    #[serde(default)]
    pub post_type: PostType,

    #[serde(default)]
    pub likes: Vec<UserId>,
}

impl Post {
    pub fn new(id: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            id: PostId::new(id),
            user: UserId::new(user),
            content: String::new(),
            post_type: PostType::default(),
            likes: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_post_type(mut self, post_type: PostType) -> Self {
        self.post_type = post_type;
        self
    }

    pub fn with_likes<I, S>(mut self, likes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.likes = likes.into_iter().map(UserId::new).collect();
        self
    }

    pub fn ledger(&self) -> VoteLedger<'_> {
        VoteLedger::new(&self.likes)
    }
}
