pub mod http_dispatcher;
pub mod noop_dispatcher;

use crate::{config::Config, domain::post::dispatcher::ActionDispatcher};
use http_dispatcher::HttpDispatcher;
use noop_dispatcher::NoopDispatcher;
use std::{sync::Arc, time::Duration};

/// Bind the dispatcher for this process: the store when `DISPATCH_URL` is
/// set, otherwise the no-op fallback. Returns it with its name.
pub fn from_config(config: &Config) -> anyhow::Result<(Arc<dyn ActionDispatcher>, &'static str)> {
    match &config.dispatch_url {
        Some(url) => {
            let dispatcher =
                HttpDispatcher::new(url, Duration::from_secs(config.dispatch_timeout_seconds))?;
            tracing::info!(endpoint = dispatcher.endpoint(), "forwarding intents to store");
            Ok((Arc::new(dispatcher), "http"))
        }
        None => {
            tracing::warn!("DISPATCH_URL not set, post actions will be gated but not stored");
            Ok((Arc::new(NoopDispatcher), "noop"))
        }
    }
}
