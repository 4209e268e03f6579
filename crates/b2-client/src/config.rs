//! Client configuration.

use std::time::Duration;

use b2_core::session::MINIMUM_PART_SIZE;
use b2_core::types::ApiUrl;
use b2_core::{Error, Result};

use crate::endpoints::AUTHORIZE_ACCOUNT;

/// Production authorization endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://api.backblazeb2.com";

/// Largest page the listing endpoints accept.
pub const MAX_PAGE_SIZE: u32 = 10_000;

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Where account authorization is requested.
    pub auth_url: String,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Items requested per listing page.
    pub page_size: u32,
    /// Large-file part size; falls back to the server's recommendation.
    pub part_size: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            user_agent: format!("b2-client/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
            page_size: 100,
            part_size: None,
        }
    }
}

impl ClientConfig {
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_part_size(mut self, part_size: u64) -> Self {
        self.part_size = Some(part_size);
        self
    }

    /// Check the configuration before it is used.
    pub fn validate(&self) -> Result<()> {
        ApiUrl::new(&self.auth_url)?;

        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(Error::invalid_argument(format!(
                "page size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        if let Some(part_size) = self.part_size.filter(|size| *size < MINIMUM_PART_SIZE) {
            return Err(Error::invalid_argument(format!(
                "part size must be at least {} bytes, got {}",
                MINIMUM_PART_SIZE, part_size
            )));
        }

        Ok(())
    }

    /// Full URL of the account authorization call.
    pub fn authorize_url(&self) -> Result<String> {
        let base = ApiUrl::new(&self.auth_url)?;
        Ok(base.endpoint_url(AUTHORIZE_ACCOUNT))
    }
}
