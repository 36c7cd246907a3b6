//! Permission and vote engine behind the board's post card.
//!
//! `domain::post` holds the pure derivations over a post snapshot and a
//! viewer. The application layer turns them into a card view model and gated
//! action dispatch; `presentation::http` exposes both over axum.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
