use std::sync::Arc;
use std::time::Duration;

use ledgerdesk_core::{DataProvider, Record};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// What a page sees of its record source while it loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadState<T> {
    pub data: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> LoadState<T> {
    pub fn pending() -> Self {
        Self {
            data: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn ready(data: Vec<T>) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: Some(error.into()),
        }
    }
}

/// Fills a [`LoadState`] from a provider after a simulated delay. One timer per
/// call; there is no cancellation and no retry.
pub struct Loader<T: Record> {
    provider: Arc<dyn DataProvider<T>>,
    latency: Duration,
    state: RwLock<LoadState<T>>,
}

impl<T: Record> Loader<T> {
    pub fn new(provider: Arc<dyn DataProvider<T>>, latency: Duration) -> Self {
        Self {
            provider,
            latency,
            state: RwLock::new(LoadState::pending()),
        }
    }

    pub async fn state(&self) -> LoadState<T> {
        self.state.read().await.clone()
    }

    pub async fn load(&self) -> LoadState<T> {
        self.state.write().await.loading = true;

        tokio::time::sleep(self.latency).await;

        let next = match self.provider.list().await {
            Ok(data) => {
                info!(kind = T::KIND, count = data.len(), "records loaded");
                LoadState::ready(data)
            }
            Err(err) => {
                warn!(kind = T::KIND, "failed to load records: {err}");
                LoadState::failed(err.to_string())
            }
        };

        let mut state = self.state.write().await;
        *state = next.clone();
        next
    }
}
