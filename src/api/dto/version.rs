//! DTO for the version endpoint.

use serde::Serialize;

use crate::domain::entities::VersionInfo;

/// Version in the shape the client asked for.
///
/// Uses untagged enum so `Dotted` serializes as a bare JSON string.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VersionResponse {
    /// `"1.0"`, served to `Version: 1` clients.
    Dotted(String),
    /// `{"major_version": "1", "minor_version": "0"}`, the latest format.
    Structured {
        major_version: String,
        minor_version: String,
    },
}

impl VersionResponse {
    pub fn dotted(version: &VersionInfo) -> Self {
        Self::Dotted(version.dotted())
    }

    pub fn structured(version: &VersionInfo) -> Self {
        Self::Structured {
            major_version: version.major.clone(),
            minor_version: version.minor.clone(),
        }
    }
}
