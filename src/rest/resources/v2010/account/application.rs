//! Application resource implementation.
//!
//! An application is a set of URLs and settings that tells Twilio how to
//! handle the voice calls and SMS messages routed through it. This module
//! provides the context/instance pair for one application:
//!
//! - [`ApplicationContext`]: addresses one application by account SID and
//!   application SID, with `fetch`, `update`, and `delete` operations
//! - [`ApplicationInstance`]: an immutable snapshot of an application's
//!   properties, with the same operations self-scoped through a lazily
//!   created context
//!
//! # API Endpoints
//!
//! - `GET /2010-04-01/Accounts/{AccountSid}/Applications/{Sid}.json`
//! - `POST /2010-04-01/Accounts/{AccountSid}/Applications/{Sid}.json`
//! - `DELETE /2010-04-01/Accounts/{AccountSid}/Applications/{Sid}.json`
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::{InstanceContext, InstanceResource, Version};
//! use twilio_api::rest::resources::v2010::account::{
//!     ApplicationContext, ApplicationUpdateParams,
//! };
//!
//! let version = Version::new(&config);
//! let context = ApplicationContext::new(version, "AC123", "AP456");
//!
//! // Fetch the application
//! let app = context.fetch().await?;
//! println!("{:?} handles voice at {:?}", app.friendly_name(), app.voice_url());
//!
//! // Rename it; only the provided field is sent
//! let renamed = app
//!     .update(ApplicationUpdateParams {
//!         friendly_name: Some("Main IVR".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Delete it; `false` means it was already gone
//! let deleted = renamed.delete().await?;
//! ```

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::rest::{optional_rfc2822, render_template, InstanceContext, InstanceResource};
use crate::rest::{ResourceError, Version};

/// The path solution locating one application.
///
/// Immutable once constructed; an application's identity is stable across
/// every fetch/update performed through the same context or instance chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationSolution {
    /// The SID of the account owning the application.
    pub account_sid: String,
    /// The unique application SID.
    pub sid: String,
}

/// Context addressing exactly one application.
///
/// Constructed purely from identifiers; no prior fetch is needed. The URI
/// is rendered once at construction.
#[derive(Clone, Debug)]
pub struct ApplicationContext {
    version: Version,
    solution: ApplicationSolution,
    uri: String,
}

impl ApplicationContext {
    /// Creates a context for the application `sid` under `account_sid`.
    ///
    /// Supplying valid identifiers is the caller's contract; they are not
    /// validated here.
    #[must_use]
    pub fn new(
        version: Version,
        account_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        let solution = ApplicationSolution {
            account_sid: account_sid.into(),
            sid: sid.into(),
        };
        let uri = render_template(
            Self::TEMPLATE,
            &[
                ("account_sid", solution.account_sid.as_str()),
                ("sid", solution.sid.as_str()),
            ],
        );

        Self {
            version,
            solution,
            uri,
        }
    }

    /// Returns the path solution for this context.
    #[must_use]
    pub const fn solution(&self) -> &ApplicationSolution {
        &self.solution
    }
}

impl InstanceContext for ApplicationContext {
    type Instance = ApplicationInstance;
    type UpdateParams = ApplicationUpdateParams;

    const TEMPLATE: &'static str = "Accounts/{account_sid}/Applications/{sid}.json";
    const NAME: &'static str = "Application";

    fn version(&self) -> &Version {
        &self.version
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    fn instance_from_payload(
        &self,
        payload: serde_json::Value,
    ) -> Result<Self::Instance, ResourceError> {
        // The instance reuses this context's solution; identifiers are not
        // re-derived from the payload.
        ApplicationInstance::from_payload(
            self.version.clone(),
            payload,
            self.solution.account_sid.clone(),
            Some(self.solution.sid.clone()),
        )
    }
}

/// Marshaled properties of an application snapshot.
///
/// Every field is optional: a payload that omits a field yields `None`
/// rather than an error. Field names follow the wire payload's snake_case
/// naming.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApplicationProperties {
    /// The SID of the account that owns this application.
    pub account_sid: Option<String>,
    /// The API version used to start a new TwiML session.
    pub api_version: Option<String>,
    /// When the application was created.
    #[serde(deserialize_with = "optional_rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    /// When the application was last updated.
    #[serde(deserialize_with = "optional_rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
    /// Human readable description of this application.
    pub friendly_name: Option<String>,
    /// URL Twilio requests with message status updates.
    pub message_status_callback: Option<String>,
    /// The unique application SID.
    pub sid: Option<String>,
    pub sms_fallback_method: Option<String>,
    /// Fallback URL if there's an error parsing TwiML.
    pub sms_fallback_url: Option<String>,
    pub sms_method: Option<String>,
    pub sms_status_callback: Option<String>,
    /// URL Twilio requests when receiving an SMS.
    pub sms_url: Option<String>,
    /// URL to hit with status updates.
    pub status_callback: Option<String>,
    pub status_callback_method: Option<String>,
    /// The URI of this resource, relative to the API base.
    pub uri: Option<String>,
    /// Whether to look up the caller's name from the CNAM database.
    pub voice_caller_id_lookup: Option<bool>,
    pub voice_fallback_method: Option<String>,
    /// Fallback URL if there's an error fetching the voice URL.
    pub voice_fallback_url: Option<String>,
    pub voice_method: Option<String>,
    /// URL Twilio requests when receiving a call.
    pub voice_url: Option<String>,
}

/// An immutable snapshot of a fetched application.
///
/// Operations (`fetch`, `update`, `delete`) are self-scoped: the instance
/// lazily builds its own [`ApplicationContext`] on first use and reuses it
/// for its lifetime. Properties never change after construction; operations
/// return wholly new instances.
#[derive(Clone, Debug)]
pub struct ApplicationInstance {
    version: Version,
    properties: ApplicationProperties,
    solution: ApplicationSolution,
    context: OnceCell<ApplicationContext>,
}

impl ApplicationInstance {
    /// Builds an instance from a raw response payload.
    ///
    /// An explicitly supplied `sid` takes precedence over the payload's own
    /// `sid` field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedPayload`] if the payload cannot
    /// structurally deserialize (e.g., it is not a JSON object). Payloads
    /// that merely omit fields marshal fine; absent properties read as
    /// `None`.
    pub fn from_payload(
        version: Version,
        payload: serde_json::Value,
        account_sid: impl Into<String>,
        sid: Option<String>,
    ) -> Result<Self, ResourceError> {
        let properties: ApplicationProperties =
            serde_json::from_value(payload).map_err(|source| ResourceError::MalformedPayload {
                resource: "Application",
                source,
            })?;

        let sid = sid
            .or_else(|| properties.sid.clone())
            .unwrap_or_default();
        let solution = ApplicationSolution {
            account_sid: account_sid.into(),
            sid,
        };

        Ok(Self {
            version,
            properties,
            solution,
            context: OnceCell::new(),
        })
    }

    /// Returns the full property snapshot.
    #[must_use]
    pub const fn properties(&self) -> &ApplicationProperties {
        &self.properties
    }

    /// Returns the path solution for this instance.
    #[must_use]
    pub const fn solution(&self) -> &ApplicationSolution {
        &self.solution
    }

    /// The SID of the account that owns this application.
    #[must_use]
    pub fn account_sid(&self) -> Option<&str> {
        self.properties.account_sid.as_deref()
    }

    /// The API version used to start a new TwiML session.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.properties.api_version.as_deref()
    }

    /// When the application was created.
    #[must_use]
    pub const fn date_created(&self) -> Option<DateTime<Utc>> {
        self.properties.date_created
    }

    /// When the application was last updated.
    #[must_use]
    pub const fn date_updated(&self) -> Option<DateTime<Utc>> {
        self.properties.date_updated
    }

    /// Human readable description of this application.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.properties.friendly_name.as_deref()
    }

    /// URL Twilio requests with message status updates.
    #[must_use]
    pub fn message_status_callback(&self) -> Option<&str> {
        self.properties.message_status_callback.as_deref()
    }

    /// The unique application SID.
    #[must_use]
    pub fn sid(&self) -> Option<&str> {
        self.properties.sid.as_deref()
    }

    /// HTTP method used with the SMS fallback URL.
    #[must_use]
    pub fn sms_fallback_method(&self) -> Option<&str> {
        self.properties.sms_fallback_method.as_deref()
    }

    /// Fallback URL if there's an error parsing TwiML.
    #[must_use]
    pub fn sms_fallback_url(&self) -> Option<&str> {
        self.properties.sms_fallback_url.as_deref()
    }

    /// HTTP method used with the SMS URL.
    #[must_use]
    pub fn sms_method(&self) -> Option<&str> {
        self.properties.sms_method.as_deref()
    }

    /// URL Twilio requests with SMS status updates.
    #[must_use]
    pub fn sms_status_callback(&self) -> Option<&str> {
        self.properties.sms_status_callback.as_deref()
    }

    /// URL Twilio requests when receiving an SMS.
    #[must_use]
    pub fn sms_url(&self) -> Option<&str> {
        self.properties.sms_url.as_deref()
    }

    /// URL to hit with status updates.
    #[must_use]
    pub fn status_callback(&self) -> Option<&str> {
        self.properties.status_callback.as_deref()
    }

    /// HTTP method used with the status callback.
    #[must_use]
    pub fn status_callback_method(&self) -> Option<&str> {
        self.properties.status_callback_method.as_deref()
    }

    /// The URI of this resource, relative to the API base.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.properties.uri.as_deref()
    }

    /// Whether to look up the caller's name from the CNAM database.
    #[must_use]
    pub const fn voice_caller_id_lookup(&self) -> Option<bool> {
        self.properties.voice_caller_id_lookup
    }

    /// HTTP method used with the voice fallback URL.
    #[must_use]
    pub fn voice_fallback_method(&self) -> Option<&str> {
        self.properties.voice_fallback_method.as_deref()
    }

    /// Fallback URL if there's an error fetching the voice URL.
    #[must_use]
    pub fn voice_fallback_url(&self) -> Option<&str> {
        self.properties.voice_fallback_url.as_deref()
    }

    /// HTTP method used with the voice URL.
    #[must_use]
    pub fn voice_method(&self) -> Option<&str> {
        self.properties.voice_method.as_deref()
    }

    /// URL Twilio requests when receiving a call.
    #[must_use]
    pub fn voice_url(&self) -> Option<&str> {
        self.properties.voice_url.as_deref()
    }
}

impl InstanceResource for ApplicationInstance {
    type Context = ApplicationContext;

    fn proxy(&self) -> &ApplicationContext {
        self.context.get_or_init(|| {
            ApplicationContext::new(
                self.version.clone(),
                self.solution.account_sid.clone(),
                self.solution.sid.clone(),
            )
        })
    }
}

/// Sparse update parameters for an application.
///
/// Every field is optional; fields left as `None` are omitted from the
/// request body and the server leaves them unchanged. Serde renames map
/// each field to the wire form-field name the API expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationUpdateParams {
    /// Human readable description of this application.
    #[serde(rename = "Friendlyname", skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    /// The API version to use.
    #[serde(rename = "Apiversion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// URL Twilio will request when receiving a call.
    #[serde(rename = "Voiceurl", skip_serializing_if = "Option::is_none")]
    pub voice_url: Option<String>,
    /// HTTP method to use with the voice URL.
    #[serde(rename = "Voicemethod", skip_serializing_if = "Option::is_none")]
    pub voice_method: Option<String>,
    /// Fallback URL if there's an error fetching the voice URL.
    #[serde(rename = "Voicefallbackurl", skip_serializing_if = "Option::is_none")]
    pub voice_fallback_url: Option<String>,
    /// HTTP method to use with the fallback URL.
    #[serde(rename = "Voicefallbackmethod", skip_serializing_if = "Option::is_none")]
    pub voice_fallback_method: Option<String>,
    /// URL to hit with status updates.
    #[serde(rename = "Statuscallback", skip_serializing_if = "Option::is_none")]
    pub status_callback: Option<String>,
    /// HTTP method to use with the status callback.
    #[serde(rename = "Statuscallbackmethod", skip_serializing_if = "Option::is_none")]
    pub status_callback_method: Option<String>,
    /// Whether to look up the caller's name from the CNAM database.
    #[serde(rename = "Voicecalleridlookup", skip_serializing_if = "Option::is_none")]
    pub voice_caller_id_lookup: Option<bool>,
    /// URL Twilio will request when receiving an SMS.
    #[serde(rename = "Smsurl", skip_serializing_if = "Option::is_none")]
    pub sms_url: Option<String>,
    /// HTTP method to use with the SMS URL.
    #[serde(rename = "Smsmethod", skip_serializing_if = "Option::is_none")]
    pub sms_method: Option<String>,
    /// Fallback URL if there's an error parsing TwiML.
    #[serde(rename = "Smsfallbackurl", skip_serializing_if = "Option::is_none")]
    pub sms_fallback_url: Option<String>,
    /// HTTP method to use with the SMS fallback URL.
    #[serde(rename = "Smsfallbackmethod", skip_serializing_if = "Option::is_none")]
    pub sms_fallback_method: Option<String>,
    /// URL Twilio will request with SMS status updates.
    #[serde(rename = "Smsstatuscallback", skip_serializing_if = "Option::is_none")]
    pub sms_status_callback: Option<String>,
    /// URL to make requests to with message status updates.
    #[serde(rename = "Messagestatuscallback", skip_serializing_if = "Option::is_none")]
    pub message_status_callback: Option<String>,
}
