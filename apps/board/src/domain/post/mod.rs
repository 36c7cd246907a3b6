pub mod dispatcher;
pub mod entity;
pub mod errors;
pub mod gate;
pub mod permission;
pub mod vote_ledger;
