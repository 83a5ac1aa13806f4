//! Version-specific REST resource implementations.
//!
//! Resources are grouped by the API date version that serves them. The
//! current stable version is [`v2010`].

pub mod v2010;
