//! HTTP client types for Twilio API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the Twilio API. It handles request/response
//! processing, retry logic, and Twilio-specific header parsing. The
//! higher-level resource transport lives in [`crate::rest::Version`] and
//! delegates to [`HttpClient`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`DataType`]: Content types for request bodies
//!
//! # Example
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
//! # Retry Behavior
//!
//! The client implements automatic retry logic for transient failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`HttpRequest::builder`] with `.tries(n)` to enable retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, DEFAULT_API_HOST, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
