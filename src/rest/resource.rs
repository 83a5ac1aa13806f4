//! The generic resource context/instance engine.
//!
//! Every generated resource wrapper in this crate is an instantiation of the
//! same two-role pattern:
//!
//! - an **instance context** addresses exactly one remote resource: it owns
//!   the path solution (the identifiers that locate the resource), renders
//!   the resource URI once at construction, and performs CRUD round trips
//!   through the shared [`Version`] transport;
//! - an **instance resource** is an immutable snapshot of a fetched
//!   resource's properties that lazily builds its own context ("proxy") the
//!   first time an operation is invoked on it.
//!
//! The [`InstanceContext`] and [`InstanceResource`] traits capture the
//! pattern; implementors supply the template, the property marshaling, and
//! the proxy storage, and inherit the operations.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use twilio_api::rest::{InstanceContext, ResourceError, Version};
//!
//! impl InstanceContext for RecordingContext {
//!     type Instance = RecordingInstance;
//!     type UpdateParams = RecordingUpdateParams;
//!
//!     const TEMPLATE: &'static str = "Accounts/{account_sid}/Recordings/{sid}.json";
//!     const NAME: &'static str = "Recording";
//!
//!     fn version(&self) -> &Version { &self.version }
//!     fn uri(&self) -> &str { &self.uri }
//!
//!     fn instance_from_payload(
//!         &self,
//!         payload: serde_json::Value,
//!     ) -> Result<Self::Instance, ResourceError> {
//!         RecordingInstance::from_payload(self.version().clone(), payload, /* solution */)
//!     }
//! }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::rest::{ResourceError, Version};

/// A context addressing exactly one remote resource.
///
/// The context is constructed purely from identifiers; no prior fetch is
/// needed to operate on a resource ("blind" operation). Its path solution
/// and URI are immutable for its lifetime; operations never change *which*
/// resource the context addresses, only return fresh snapshots of it.
///
/// # Associated Types
///
/// - `Instance`: the snapshot type produced by `fetch` and `update`
/// - `UpdateParams`: the sparse optional-field update parameter struct
///   (fields left as `None` are not sent; the server leaves them unchanged)
///
/// # Associated Constants
///
/// - `TEMPLATE`: the URI template with `{name}` placeholders
/// - `NAME`: the resource type name used in error messages
#[allow(async_fn_in_trait)]
pub trait InstanceContext: Sized {
    /// The snapshot type produced by `fetch` and `update`.
    type Instance;

    /// Sparse update parameters; serialized with wire-format field names.
    type UpdateParams: Serialize + Default + Send + Sync;

    /// The URI template this resource type is addressed through.
    const TEMPLATE: &'static str;

    /// The resource type name (e.g., "Application").
    const NAME: &'static str;

    /// Returns the shared transport handle.
    fn version(&self) -> &Version;

    /// Returns the URI rendered from [`TEMPLATE`](Self::TEMPLATE) and the
    /// context's path solution.
    fn uri(&self) -> &str;

    /// Builds an instance from a response payload, reusing the context's
    /// own path solution rather than re-deriving identifiers from the
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedPayload`] if the payload cannot
    /// structurally deserialize.
    fn instance_from_payload(
        &self,
        payload: serde_json::Value,
    ) -> Result<Self::Instance, ResourceError>;

    /// Fetches the resource and returns a fresh instance snapshot.
    ///
    /// # Errors
    ///
    /// Transport failures propagate unchanged as
    /// [`ResourceError::Transport`].
    async fn fetch(&self) -> Result<Self::Instance, ResourceError> {
        let payload = self.version().fetch(self.uri(), None).await?;
        self.instance_from_payload(payload)
    }

    /// Updates the resource with the fields present in `params` and returns
    /// the updated snapshot.
    ///
    /// Fields left as `None` are omitted from the request body entirely; an
    /// all-`None` params value sends no writable fields at all.
    ///
    /// # Errors
    ///
    /// Transport failures propagate unchanged as
    /// [`ResourceError::Transport`].
    async fn update(&self, params: Self::UpdateParams) -> Result<Self::Instance, ResourceError> {
        let data = serialize_form(&params).map_err(|source| ResourceError::InvalidParams {
            resource: Self::NAME,
            source,
        })?;
        let payload = self.version().update(self.uri(), data).await?;
        self.instance_from_payload(payload)
    }

    /// Deletes the resource.
    ///
    /// Returns `Ok(true)` when the API reports success and `Ok(false)` for
    /// a recoverable non-success (e.g., already deleted).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] only for transport-level
    /// faults.
    async fn delete(&self) -> Result<bool, ResourceError> {
        Ok(self.version().delete(self.uri()).await?)
    }
}

/// An immutable snapshot of a remote resource with self-scoped operations.
///
/// Implementors store a lazily-created context (the "proxy") and return it
/// from [`proxy`](Self::proxy); the first access constructs the context
/// from the snapshot's transport handle and path solution, and every later
/// access returns the identical context. The provided operations delegate
/// verbatim to it.
///
/// Instances are terminal values: operations return wholly new instances
/// and never mutate the snapshot they were invoked on.
#[allow(async_fn_in_trait)]
pub trait InstanceResource {
    /// The context type operations are delegated to.
    type Context: InstanceContext;

    /// Returns the lazily-created, identity-stable context for this
    /// instance.
    fn proxy(&self) -> &Self::Context;

    /// Re-fetches the resource, returning a fresh snapshot.
    ///
    /// # Errors
    ///
    /// See [`InstanceContext::fetch`].
    async fn fetch(
        &self,
    ) -> Result<<Self::Context as InstanceContext>::Instance, ResourceError> {
        self.proxy().fetch().await
    }

    /// Updates the resource, returning the updated snapshot.
    ///
    /// # Errors
    ///
    /// See [`InstanceContext::update`].
    async fn update(
        &self,
        params: <Self::Context as InstanceContext>::UpdateParams,
    ) -> Result<<Self::Context as InstanceContext>::Instance, ResourceError> {
        self.proxy().update(params).await
    }

    /// Deletes the resource.
    ///
    /// # Errors
    ///
    /// See [`InstanceContext::delete`].
    async fn delete(&self) -> Result<bool, ResourceError> {
        self.proxy().delete().await
    }
}

/// Serializes an update-params struct to sparse form data.
///
/// Only fields that serialize to a non-null value appear in the result, so
/// `None` fields never reach the wire. Strings are kept verbatim; numbers
/// and booleans are stringified.
///
/// # Errors
///
/// Returns the underlying error if `params` cannot be converted to a JSON
/// value.
pub fn serialize_form<T: Serialize>(params: &T) -> Result<HashMap<String, String>, serde_json::Error> {
    let value = serde_json::to_value(params)?;

    let mut data = HashMap::new();

    if let serde_json::Value::Object(map) = value {
        for (key, val) in map {
            match val {
                serde_json::Value::Null => {} // Skip absent fields
                serde_json::Value::String(s) => {
                    data.insert(key, s);
                }
                serde_json::Value::Number(n) => {
                    data.insert(key, n.to_string());
                }
                serde_json::Value::Bool(b) => {
                    data.insert(key, b.to_string());
                }
                other => {
                    data.insert(key, other.to_string());
                }
            }
        }
    }

    Ok(data)
}

/// Tolerant deserializer for Twilio's RFC 2822 date fields.
///
/// Absent, null, or unparseable values all resolve to `None` so a partial
/// payload never fails to marshal. Use with
/// `#[serde(default, deserialize_with = "optional_rfc2822")]`.
///
/// # Errors
///
/// Fails only if the field is present with a non-string, non-null value.
pub fn optional_rfc2822<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        DateTime::parse_from_rfc2822(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_serialize_form_handles_basic_types() {
        #[derive(Serialize)]
        struct Params {
            #[serde(rename = "Friendlyname")]
            friendly_name: String,
            #[serde(rename = "Voicecalleridlookup")]
            lookup: bool,
            #[serde(rename = "Pagesize")]
            page_size: u32,
        }

        let params = Params {
            friendly_name: "Test".to_string(),
            lookup: true,
            page_size: 50,
        };

        let data = serialize_form(&params).unwrap();
        assert_eq!(data.get("Friendlyname"), Some(&"Test".to_string()));
        assert_eq!(data.get("Voicecalleridlookup"), Some(&"true".to_string()));
        assert_eq!(data.get("Pagesize"), Some(&"50".to_string()));
    }

    #[test]
    fn test_serialize_form_skips_none_fields() {
        #[derive(Serialize, Default)]
        struct Params {
            #[serde(rename = "Friendlyname", skip_serializing_if = "Option::is_none")]
            friendly_name: Option<String>,
            #[serde(rename = "Voiceurl", skip_serializing_if = "Option::is_none")]
            voice_url: Option<String>,
        }

        let params = Params {
            friendly_name: Some("New Name".to_string()),
            voice_url: None,
        };

        let data = serialize_form(&params).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("Friendlyname"), Some(&"New Name".to_string()));
        assert!(!data.contains_key("Voiceurl"));
    }

    #[test]
    fn test_serialize_form_empty_params_sends_nothing() {
        #[derive(Serialize, Default)]
        struct Params {
            #[serde(rename = "Friendlyname", skip_serializing_if = "Option::is_none")]
            friendly_name: Option<String>,
        }

        let data = serialize_form(&Params::default()).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_optional_rfc2822_parses_twilio_dates() {
        #[derive(Deserialize)]
        struct Doc {
            #[serde(default, deserialize_with = "optional_rfc2822")]
            date_created: Option<DateTime<Utc>>,
        }

        let doc: Doc = serde_json::from_value(serde_json::json!({
            "date_created": "Mon, 22 Aug 2011 20:58:45 +0000"
        }))
        .unwrap();

        let date = doc.date_created.unwrap();
        assert_eq!(date.to_rfc2822(), "Mon, 22 Aug 2011 20:58:45 +0000");
    }

    #[test]
    fn test_optional_rfc2822_tolerates_absent_null_and_garbage() {
        #[derive(Deserialize)]
        struct Doc {
            #[serde(default, deserialize_with = "optional_rfc2822")]
            date_created: Option<DateTime<Utc>>,
        }

        for payload in [
            serde_json::json!({}),
            serde_json::json!({ "date_created": null }),
            serde_json::json!({ "date_created": "not a date" }),
        ] {
            let doc: Doc = serde_json::from_value(payload).unwrap();
            assert!(doc.date_created.is_none());
        }
    }
}
