pub mod post_actions;
pub mod post_card;
