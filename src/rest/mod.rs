//! REST resource infrastructure for the Twilio API.
//!
//! This module provides the foundational infrastructure that every generated
//! resource wrapper delegates to:
//!
//! - **[`Version`]**: the shared transport pinning one API date version
//! - **[`InstanceContext`] / [`InstanceResource`] traits**: the generic
//!   context/instance engine (URI templating, sparse form marshaling,
//!   lazy self-scoped operations)
//! - **URI templating**: [`render_template`] and
//!   [`has_unresolved_placeholders`]
//! - **[`ResourceError`]**: error types for resource operations
//! - **[`resources`]**: version-specific resource implementations
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use twilio_api::rest::{InstanceContext, InstanceResource, Version};
//! use twilio_api::rest::resources::v2010::account::{
//!     ApplicationContext, ApplicationUpdateParams,
//! };
//!
//! let version = Version::new(&config);
//!
//! // Address a resource "blind"; no prior fetch needed
//! let context = ApplicationContext::new(version, "AC123", "AP456");
//! let app = context.fetch().await?;
//! println!("name: {:?}", app.friendly_name());
//!
//! // Operate on the snapshot itself; it builds its own context lazily
//! let renamed = app
//!     .update(ApplicationUpdateParams {
//!         friendly_name: Some("New Name".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let gone = renamed.delete().await?;
//! assert!(gone);
//! ```

mod errors;
mod path;
mod resource;
mod version;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{has_unresolved_placeholders, render_template};
pub use resource::{optional_rfc2822, serialize_form, InstanceContext, InstanceResource};
pub use version::Version;
