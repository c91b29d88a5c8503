use std::net::SocketAddr;

use tracing::warn;

pub(crate) const METRICS_ADDR_VAR: &str = "MIDAS_METRICS_ADDR";

/// Server settings that don't belong in the leptos config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ServerConfig {
    /// Where the prometheus endpoint listens, `None` disables it.
    pub(crate) metrics_addr: Option<SocketAddr>,
}

impl ServerConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let metrics_addr = var(METRICS_ADDR_VAR).and_then(|value| match value.parse() {
            Ok(addr) => Some(addr),
            Err(e) => {
                warn!("Ignoring {METRICS_ADDR_VAR}={value}: {e}");
                None
            }
        });
        Self { metrics_addr }
    }
}
