//! The shared resource transport ("Version").
//!
//! A [`Version`] pins one Twilio API date version (e.g., `2010-04-01`) and
//! carries the HTTP client every resource context and instance calls into.
//! It exposes exactly the three operations the generated resource wrappers
//! need: [`fetch`](Version::fetch), [`update`](Version::update), and
//! [`delete`](Version::delete).
//!
//! `Version` is cheap to clone (the underlying `reqwest` client is
//! internally pooled), so each context and instance owns its own handle.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::Version;
//!
//! let version = Version::new(&config);
//! let payload = version.fetch("Accounts/AC123/Applications/AP456.json", None).await?;
//! println!("{}", payload["friendly_name"]);
//! ```

use std::collections::HashMap;

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError,
};
use crate::config::{ApiVersion, TwilioConfig};

/// Shared transport for one API date version.
///
/// Resource contexts hold a `Version` handle and pass it relative URIs
/// (already rendered from their templates). The `Version` normalizes the
/// URI, prepends the version base path, and performs the authenticated
/// round trip.
///
/// # Thread Safety
///
/// `Version` is `Send + Sync` and may be shared freely between concurrent
/// resource instances.
#[derive(Clone, Debug)]
pub struct Version {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify Version is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Version>();
};

impl Version {
    /// Creates a transport for the configuration's API version.
    #[must_use]
    pub fn new(config: &TwilioConfig) -> Self {
        Self::with_version(config, config.api_version().clone())
    }

    /// Creates a transport with a specific API version override.
    #[must_use]
    pub fn with_version(config: &TwilioConfig, version: ApiVersion) -> Self {
        let config_version = config.api_version();
        if &version != config_version {
            tracing::debug!(
                "Version transport overriding default API version {} with {}",
                config_version,
                version
            );
        }

        let base_path = format!("/{version}");
        let http_client = HttpClient::new(base_path, config);

        Self {
            http_client,
            api_version: version,
        }
    }

    /// Returns the API version served by this transport.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Fetches a resource payload with a GET request.
    ///
    /// # Arguments
    ///
    /// * `uri` - The resource URI relative to the version base path
    /// * `params` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for any non-success response or network fault;
    /// the error is surfaced unchanged to the caller.
    pub async fn fetch(
        &self,
        uri: &str,
        params: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, HttpError> {
        let uri = normalize_uri(uri)?;
        tracing::debug!(uri = %uri, "fetching resource");

        let mut builder = HttpRequest::builder(HttpMethod::Get, uri);
        if let Some(query) = params.filter(|q| !q.is_empty()) {
            builder = builder.query(query);
        }
        let request = builder.build().map_err(HttpError::from)?;

        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }

    /// Updates a resource with a POST request carrying url-encoded form data.
    ///
    /// Only the entries present in `data` are sent; the server leaves every
    /// other field unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for any non-success response or network fault.
    pub async fn update(
        &self,
        uri: &str,
        data: HashMap<String, String>,
    ) -> Result<serde_json::Value, HttpError> {
        let uri = normalize_uri(uri)?;
        tracing::debug!(uri = %uri, fields = data.len(), "updating resource");

        let body: serde_json::Map<String, serde_json::Value> = data
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();

        let request = HttpRequest::builder(HttpMethod::Post, uri)
            .body(serde_json::Value::Object(body))
            .body_type(DataType::UrlEncoded)
            .build()
            .map_err(HttpError::from)?;

        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }

    /// Deletes a resource, reporting the outcome as a boolean.
    ///
    /// A non-success status is a normal, expected outcome for deletes
    /// (the resource may already be gone), so 4xx responses yield
    /// `Ok(false)` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only for transport-level faults: network
    /// errors and 5xx responses.
    pub async fn delete(&self, uri: &str) -> Result<bool, HttpError> {
        let uri = normalize_uri(uri)?;
        tracing::debug!(uri = %uri, "deleting resource");

        let request = HttpRequest::builder(HttpMethod::Delete, uri)
            .build()
            .map_err(HttpError::from)?;

        match self.http_client.request(request).await {
            Ok(_) => Ok(true),
            Err(HttpError::Response(e)) if (400..500).contains(&e.code) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Normalizes a resource URI.
///
/// This function:
/// 1. Strips leading `/` characters
/// 2. Strips any trailing `.json` suffix
/// 3. Appends exactly one `.json` suffix
/// 4. Returns an error for empty URIs
fn normalize_uri(uri: &str) -> Result<String, InvalidHttpRequestError> {
    let uri = uri.trim_start_matches('/');
    let uri = uri.strip_suffix(".json").unwrap_or(uri);

    if uri.is_empty() {
        return Err(InvalidHttpRequestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(format!("{uri}.json"))
}
