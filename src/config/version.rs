//! Twilio API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Twilio REST API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Twilio REST API version.
///
/// Twilio versions its core REST API by date. `2010-04-01` has been the
/// stable version for the whole lifetime of the API; the earlier
/// `2008-08-01` version is retained for legacy accounts. A `Custom` variant
/// covers any future version string.
///
/// # Example
///
/// ```rust
/// use twilio_api::ApiVersion;
///
/// // Use the latest stable version
/// let version = ApiVersion::latest();
/// assert_eq!(version, ApiVersion::V2010_04_01);
///
/// // Parse from string
/// let version: ApiVersion = "2010-04-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2010_04_01);
///
/// // Display as string
/// assert_eq!(format!("{}", ApiVersion::V2010_04_01), "2010-04-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2008-08-01 (legacy).
    V2008_08_01,
    /// API version 2010-04-01 (current stable).
    V2010_04_01,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2010_04_01
    }

    /// Returns `true` if this is a known stable API version.
    ///
    /// Returns `false` for `Custom` variants.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the version as its wire/path representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2008_08_01 => "2008-08-01",
            Self::V2010_04_01 => "2010-04-01",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2008-08-01" => Ok(Self::V2008_08_01),
            "2010-04-01" => Ok(Self::V2010_04_01),
            other => {
                // Accept anything date-shaped as a custom version
                let looks_like_date = other.len() == 10
                    && other.chars().enumerate().all(|(i, c)| match i {
                        4 | 7 => c == '-',
                        _ => c.is_ascii_digit(),
                    });
                if looks_like_date {
                    Ok(Self::Custom(other.to_string()))
                } else {
                    Err(ConfigError::InvalidApiVersion {
                        version: other.to_string(),
                    })
                }
            }
        }
    }
}
