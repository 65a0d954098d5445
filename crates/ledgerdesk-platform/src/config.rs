use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_MOCK_LATENCY_MS: u64 = 500;
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeskConfig {
    pub mock_latency: Duration,
    pub page_size: usize,
    pub base_currency: String,
    pub public_asset_path: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            mock_latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
            page_size: DEFAULT_PAGE_SIZE,
            base_currency: "TRY".to_string(),
            public_asset_path: "/".to_string(),
        }
    }
}

impl DeskConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mock_latency = match lookup("LEDGERDESK_MOCK_LATENCY_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .with_context(|| format!("LEDGERDESK_MOCK_LATENCY_MS is not a number: {raw}"))?,
            ),
            None => defaults.mock_latency,
        };

        let page_size = match lookup("LEDGERDESK_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("LEDGERDESK_PAGE_SIZE is not a number: {raw}"))?,
            None => defaults.page_size,
        };
        if page_size == 0 {
            anyhow::bail!("LEDGERDESK_PAGE_SIZE must be at least 1");
        }

        let base_currency = lookup("LEDGERDESK_BASE_CURRENCY")
            .map(|code| code.trim().to_ascii_uppercase())
            .filter(|code| !code.is_empty())
            .unwrap_or(defaults.base_currency);

        let public_asset_path =
            lookup("PUBLIC_ASSET_PATH").unwrap_or(defaults.public_asset_path);

        Ok(Self {
            mock_latency,
            page_size,
            base_currency,
            public_asset_path,
        })
    }
}
