//! Vote derivations over a post's ordered vote record.
//!
//! Every value here is recomputed from the `likes` slice on each call. The
//! gating predicates are advisory: the snapshot may already be stale by the
//! time an action reaches the owning store, which stays authoritative for the
//! cap.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;
use ts_rs::TS;

use super::entity::{UserId, present};

/// Maximum number of votes a single voter may hold on one post.
pub const VOTE_CAP: usize = 3;

/// Per-voter vote counts for one post.
///
/// Keys are the distinct voters that appear in the record. Equality ignores
/// the order in which votes were cast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoteTally(BTreeMap<UserId, usize>);

impl VoteTally {
    pub fn get(&self, voter: &UserId) -> usize {
        self.0.get(voter).copied().unwrap_or(0)
    }

    /// Sum of all counts; always equals the length of the source record.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn distinct_voters(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One row of the per-voter breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoterCount {
    pub voter: UserId,
    pub count: usize,
}

/// Order in which the per-voter breakdown is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VoterOrder {
    /// Voters appear in the order of their first vote.
    #[default]
    FirstVote,
    /// Highest count first; equal counts keep first-vote order.
    MostVotes,
}

impl FromStr for VoterOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first_vote" => Ok(Self::FirstVote),
            "most_votes" => Ok(Self::MostVotes),
            other => Err(format!(
                "unknown voter order '{}', expected first_vote or most_votes",
                other
            )),
        }
    }
}

/// Where a single viewer stands on a single post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteState {
    NoVotes,
    SomeVotes { count: usize },
}

impl VoteState {
    fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::NoVotes
        } else {
            Self::SomeVotes { count }
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::NoVotes => 0,
            Self::SomeVotes { count } => *count,
        }
    }

    pub fn has_cast_any(&self) -> bool {
        matches!(self, Self::SomeVotes { .. })
    }

    pub fn can_cast_another(&self) -> bool {
        self.count() < VOTE_CAP
    }
}

/// Read-only view over a post's vote record.
#[derive(Debug, Clone, Copy)]
pub struct VoteLedger<'a> {
    likes: &'a [UserId],
}

impl<'a> VoteLedger<'a> {
    pub fn new(likes: &'a [UserId]) -> Self {
        Self { likes }
    }

    pub fn tally(&self) -> VoteTally {
        let mut counts = BTreeMap::new();
        for voter in self.likes {
            *counts.entry(voter.clone()).or_insert(0) += 1;
        }
        VoteTally(counts)
    }

    /// Visible score of the post.
    pub fn vote_count(&self) -> usize {
        self.likes.len()
    }

    /// True when the score label should show the placeholder glyph.
    pub fn has_no_votes(&self) -> bool {
        self.vote_count() == 0
    }

    pub fn viewer_vote_count(&self, viewer: Option<&UserId>) -> usize {
        match present(viewer) {
            Some(viewer) => self.likes.iter().filter(|v| *v == viewer).count(),
            None => 0,
        }
    }

    pub fn vote_state(&self, viewer: Option<&UserId>) -> Option<VoteState> {
        present(viewer).map(|v| VoteState::from_count(self.viewer_vote_count(Some(v))))
    }

    /// Whether a "like" gesture is enabled for the viewer.
    pub fn can_cast_vote(&self, viewer: Option<&UserId>) -> bool {
        self.vote_state(viewer)
            .is_some_and(|state| state.can_cast_another())
    }

    /// Whether "unlike" is offered at all. Ownership plays no part.
    pub fn can_retract_vote(&self, viewer: Option<&UserId>) -> bool {
        self.vote_state(viewer)
            .is_some_and(|state| state.has_cast_any())
    }

    pub fn describe_voters(&self, order: VoterOrder) -> Vec<VoterCount> {
        let tally = self.tally();
        let mut seen = HashSet::with_capacity(tally.distinct_voters());
        let mut voters: Vec<VoterCount> = self
            .likes
            .iter()
            .filter(|voter| seen.insert(*voter))
            .map(|voter| VoterCount {
                voter: voter.clone(),
                count: tally.get(voter),
            })
            .collect();

        if order == VoterOrder::MostVotes {
            // stable sort keeps first-vote order among equal counts
            voters.sort_by(|a, b| b.count.cmp(&a.count));
        }
        voters
    }
}
