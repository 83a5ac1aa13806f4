//! Error types for the Twilio API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AccountSid, ConfigError};
//!
//! let result = AccountSid::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccountSid)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account SID cannot be empty.
    #[error("Account SID cannot be empty. Please provide a valid Twilio Account SID.")]
    EmptyAccountSid,

    /// Account SID has the wrong shape.
    #[error("Invalid Account SID '{sid}'. Expected a 34-character identifier starting with 'AC'.")]
    InvalidAccountSid {
        /// The invalid SID that was provided.
        sid: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Twilio auth token.")]
    EmptyAuthToken,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2010-04-01').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.twilio.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },
}
