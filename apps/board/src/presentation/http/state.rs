use crate::{
    application::{
        post_actions::use_case::PostActionsUseCase, post_card::use_case::PostCardUseCase,
    },
    config::Config,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub post_cards: Arc<PostCardUseCase>,
    pub post_actions: Arc<PostActionsUseCase>,
    /// Name of the bound dispatcher, reported by the health check
    pub dispatcher: &'static str,
}
