use super::dto::{
    DeleteButton, DislikeButton, LikeButton, PostCard, PostCardStrings, VoterLine, VoterTooltip,
};
use crate::domain::post::{
    entity::{Post, UserId},
    gate::PostInteraction,
    vote_ledger::{VoterCount, VoterOrder},
};

/// Score label shown while a post has no votes.
pub const NO_VOTES_PLACEHOLDER: &str = "-";

pub fn score_label(vote_count: usize) -> String {
    if vote_count == 0 {
        NO_VOTES_PLACEHOLDER.to_string()
    } else {
        vote_count.to_string()
    }
}

fn voter_line(row: &VoterCount) -> VoterLine {
    VoterLine {
        voter: row.voter.clone(),
        count: row.count,
        text: format!("{} ({})", row.voter, row.count),
    }
}

pub struct PostCardUseCase {
    voter_order: VoterOrder,
}

impl PostCardUseCase {
    pub fn new(voter_order: VoterOrder) -> Self {
        Self { voter_order }
    }

    pub fn render(
        &self,
        post: &Post,
        viewer: Option<&UserId>,
        strings: &PostCardStrings,
    ) -> PostCard {
        let interaction = PostInteraction::evaluate(post, viewer, self.voter_order);

        let tooltip = if post.ledger().has_no_votes() {
            VoterTooltip::NotLiked {
                message: strings.not_liked.clone(),
            }
        } else {
            VoterTooltip::LikedBy {
                heading: strings.liked_by.clone(),
                voters: interaction.voters.iter().map(voter_line).collect(),
            }
        };

        let like = LikeButton {
            label: score_label(interaction.vote_count),
            enabled: interaction.can_cast_vote,
            raised: interaction.can_cast_vote,
            tooltip_id: format!("{}_likedByTooltip", post.id),
            tooltip,
        };

        tracing::debug!(
            post_id = %post.id,
            vote_count = interaction.vote_count,
            viewer_votes = interaction.viewer_vote_count,
            "rendered post card"
        );

        PostCard {
            post_id: post.id.clone(),
            post_type: post.post_type,
            content: post.content.clone(),
            placeholder: strings.no_content.clone(),
            read_only: !interaction.can_edit,
            like,
            dislike: interaction
                .can_retract_vote
                .then_some(DislikeButton { raised: true }),
            delete: interaction.can_delete.then(|| DeleteButton {
                label: strings.delete_button.clone(),
                raised: true,
            }),
            interaction,
        }
    }
}
