//! # Twilio API Rust SDK
//!
//! A Rust SDK for the Twilio REST API, providing type-safe configuration,
//! authenticated HTTP transport, and generated-style resource wrappers.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`TwilioConfig`] and [`TwilioConfigBuilder`]
//! - Validated newtypes for account credentials and host values
//! - An async HTTP client with HTTP Basic auth and retry logic
//! - A shared per-API-version transport ([`rest::Version`])
//! - Context/instance resource wrappers with CRUD operations
//!   (see [`rest::resources`])
//!
//! ## Quick Start
//!
//! ```rust
//! use twilio_api::{TwilioConfig, AccountSid, AuthToken, ApiVersion};
//!
//! // Create configuration using the builder pattern
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
//!     .auth_token(AuthToken::new("your-auth-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working with Resources
//!
//! Each resource is addressed through a context (built purely from
//! identifiers) and snapshotted as an immutable instance:
//!
//! ```rust,ignore
//! use twilio_api::rest::{InstanceContext, InstanceResource, Version};
//! use twilio_api::rest::resources::v2010::account::{
//!     ApplicationContext, ApplicationUpdateParams,
//! };
//!
//! let version = Version::new(&config);
//!
//! // Fetch an application
//! let context = ApplicationContext::new(version, "AC123...", "AP456...");
//! let app = context.fetch().await?;
//! println!("Application: {:?}", app.friendly_name());
//!
//! // Update it through the snapshot; only provided fields are sent
//! let renamed = app
//!     .update(ApplicationUpdateParams {
//!         friendly_name: Some("Main IVR".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Delete returns a boolean; `false` means it was already gone
//! let deleted = renamed.delete().await?;
//! ```
//!
//! ## Making Raw Requests
//!
//! The lower-level HTTP client is available for endpoints without a
//! generated wrapper:
//!
//! ```rust,ignore
//! use twilio_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new("/2010-04-01", &config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "Accounts/AC123.json")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable snapshots**: Resource instances never mutate; operations
//!   return new instances

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccountSid, ApiHost, ApiVersion, AuthToken, TwilioConfig, TwilioConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

// Re-export REST infrastructure for convenience
pub use rest::{InstanceContext, InstanceResource, ResourceError, Version};
