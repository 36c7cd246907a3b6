//! Ownership-based rights on a post.
//!
//! Editing and deleting share one rule today. They stay separate predicates
//! so that a diverging rule for either only touches its own function.

use super::entity::{Post, UserId, present};

fn is_owner(post: &Post, viewer: Option<&UserId>) -> bool {
    present(viewer).is_some_and(|viewer| *viewer == post.user)
}

/// True iff the viewer authored the post.
pub fn can_edit(post: &Post, viewer: Option<&UserId>) -> bool {
    is_owner(post, viewer)
}

/// True iff the viewer authored the post.
pub fn can_delete(post: &Post, viewer: Option<&UserId>) -> bool {
    is_owner(post, viewer)
}
