//! Resource-specific error types for REST API operations.
//!
//! Resource wrappers deliberately add almost nothing to the transport's
//! error story: a failed `fetch` or `update` surfaces the underlying
//! [`HttpError`] unchanged, with no retry, reinterpretation, or recovery at
//! this layer. The one thing a wrapper can add is [`MalformedPayload`], for
//! response bodies that cannot structurally deserialize at all. A payload
//! that merely omits fields is not malformed; missing properties resolve
//! to `None`.
//!
//! [`MalformedPayload`]: ResourceError::MalformedPayload
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::ResourceError;
//!
//! match context.fetch().await {
//!     Ok(app) => println!("Found: {:?}", app.friendly_name()),
//!     Err(ResourceError::Transport(e)) => println!("API error: {e}"),
//!     Err(ResourceError::MalformedPayload { resource, .. }) => {
//!         println!("{resource} returned an unreadable payload");
//!     }
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A transport-level failure (network, auth, server-side error).
    ///
    /// Propagated unchanged from the shared transport.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response payload could not be deserialized into the resource's
    /// property set (e.g., an array where an object was expected).
    #[error("unexpected payload for {resource}: {source}")]
    MalformedPayload {
        /// The type name of the resource (e.g., "Application").
        resource: &'static str,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },

    /// Update parameters could not be serialized into form fields.
    #[error("invalid parameters for {resource}: {source}")]
    InvalidParams {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serialization error.
        source: serde_json::Error,
    },
}

impl ResourceError {
    /// Returns the request ID if the underlying transport error carried one.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Transport(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Transport(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
