//! # sf-identity
//!
//! Best-effort lookup of the device's public network address.
//!
//! Providers are tried strictly in order, one attempt each, each bounded by
//! a timeout. The first provider that answers with a usable address wins;
//! when every provider fails the result is [`NetworkIdentity::Unavailable`].
//! There is no retry loop beyond the provider list.
//!
//! [`IdentityTracker`] runs a lookup in the background so the checklist
//! stays usable while it is in flight.

mod error;
mod http;
mod tracker;

pub use error::IdentityError;
pub use tracker::{IdentityTracker, IdentityUpdates};

use std::time::Duration;

use sf_config::IdentityConfig;
use sf_core::NetworkIdentity;

use crate::http::{check_response, parse_address};

/// HTTP client over an ordered list of public-IP providers.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    http: reqwest::Client,
    providers: Vec<String>,
    attempt_timeout: Duration,
}

impl IdentityResolver {
    /// # Errors
    ///
    /// Returns [`IdentityError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        providers: Vec<String>,
        attempt_timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(attempt_timeout)
            .build()?;
        Ok(Self {
            http,
            providers,
            attempt_timeout,
        })
    }

    /// # Errors
    ///
    /// Same as [`IdentityResolver::new`].
    pub fn from_config(config: &IdentityConfig) -> Result<Self, IdentityError> {
        Self::new(
            config.providers.clone(),
            Duration::from_secs(config.attempt_timeout_secs),
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    /// Try each provider once, in order. Never fails: total failure yields
    /// [`NetworkIdentity::Unavailable`].
    pub async fn resolve(&self) -> NetworkIdentity {
        for provider in &self.providers {
            match self.lookup(provider).await {
                Ok(address) => {
                    tracing::debug!(provider = %provider, %address, "resolved network identity");
                    return NetworkIdentity::Resolved(address);
                }
                Err(error) => {
                    tracing::warn!(provider = %provider, %error, "identity provider failed");
                }
            }
        }
        tracing::warn!(
            providers = self.providers.len(),
            "all identity providers failed"
        );
        NetworkIdentity::Unavailable
    }

    /// A single bounded attempt against one provider.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] describing why this provider did not yield
    /// an address.
    pub async fn lookup(&self, provider: &str) -> Result<String, IdentityError> {
        let attempt = async {
            let resp = check_response(self.http.get(provider).send().await?)?;
            let body = resp.bytes().await?;
            parse_address(&body)
        };

        tokio::time::timeout(self.attempt_timeout, attempt)
            .await
            .map_err(|_| IdentityError::Timeout {
                millis: self.attempt_timeout.as_millis(),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let resolver = IdentityResolver::from_config(&IdentityConfig::default()).unwrap();
        assert_eq!(resolver.providers().len(), 3);
        assert_eq!(resolver.attempt_timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn empty_provider_list_is_unavailable() {
        let resolver =
            IdentityResolver::new(Vec::new(), Duration::from_millis(100), "test").unwrap();
        assert_eq!(resolver.resolve().await, NetworkIdentity::Unavailable);
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_resolve_default_providers() {
        let resolver = IdentityResolver::from_config(&IdentityConfig::default()).unwrap();
        let identity = resolver.resolve().await;
        println!("resolved: {identity}");
        assert!(!identity.is_pending());
    }
}
