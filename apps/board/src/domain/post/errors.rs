use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use super::gate::GateDenial;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DomainError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Vote cap already reached")]
    VoteCapReached,
    #[error("No vote to retract")]
    NoVoteToRetract,
    #[error("Action rejected: {0}")]
    ActionRejected(String),
    #[error("Dispatch unavailable: {0}")]
    DispatchUnavailable(String),
}

impl From<GateDenial> for DomainError {
    fn from(denial: GateDenial) -> Self {
        match denial {
            GateDenial::AnonymousViewer | GateDenial::NotOwner => DomainError::Unauthorized,
            GateDenial::VoteCapReached => DomainError::VoteCapReached,
            GateDenial::NoVoteToRetract => DomainError::NoVoteToRetract,
        }
    }
}
