//! Configuration types for the Twilio API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Twilio.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TwilioConfig`]: The main configuration struct holding all SDK settings
//! - [`TwilioConfigBuilder`]: A builder for constructing [`TwilioConfig`] instances
//! - [`AccountSid`]: A validated Account SID newtype
//! - [`AuthToken`]: A validated auth token newtype with masked debug output
//! - [`ApiHost`]: A validated base-URI override for proxies and tests
//! - [`ApiVersion`]: The Twilio API version to use
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{TwilioConfig, AccountSid, AuthToken, ApiVersion};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
//!     .auth_token(AuthToken::new("my-auth-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccountSid, ApiHost, AuthToken};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Twilio API SDK.
///
/// This struct holds all configuration needed for SDK operations: account
/// credentials, the API version, and optional transport overrides.
///
/// # Thread Safety
///
/// `TwilioConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use twilio_api::{TwilioConfig, AccountSid, AuthToken};
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert!(config.api_host().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct TwilioConfig {
    account_sid: AccountSid,
    auth_token: AuthToken,
    api_host: Option<ApiHost>,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

// Verify TwilioConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwilioConfig>();
};

impl TwilioConfig {
    /// Creates a new builder for constructing a `TwilioConfig`.
    #[must_use]
    pub fn builder() -> TwilioConfigBuilder {
        TwilioConfigBuilder::new()
    }

    /// Returns the Account SID.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&ApiHost> {
        self.api_host.as_ref()
    }

    /// Returns the configured API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for [`TwilioConfig`].
///
/// `account_sid` and `auth_token` are required; everything else has a
/// sensible default.
#[derive(Debug, Default)]
pub struct TwilioConfigBuilder {
    account_sid: Option<AccountSid>,
    auth_token: Option<AuthToken>,
    api_host: Option<ApiHost>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl TwilioConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the Account SID (required).
    #[must_use]
    pub fn account_sid(mut self, account_sid: AccountSid) -> Self {
        self.account_sid = Some(account_sid);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, auth_token: AuthToken) -> Self {
        self.auth_token = Some(auth_token);
        self
    }

    /// Overrides the base API host (regional edge, proxy, or test server).
    #[must_use]
    pub fn api_host(mut self, api_host: ApiHost) -> Self {
        self.api_host = Some(api_host);
        self
    }

    /// Sets the API version. Defaults to [`ApiVersion::latest`].
    #[must_use]
    pub fn api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = Some(api_version);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_sid` or
    /// `auth_token` was not provided.
    pub fn build(self) -> Result<TwilioConfig, ConfigError> {
        let account_sid = self.account_sid.ok_or(ConfigError::MissingRequiredField {
            field: "account_sid",
        })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        Ok(TwilioConfig {
            account_sid,
            auth_token,
            api_host: self.api_host,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
