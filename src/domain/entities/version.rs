//! API version descriptor.

/// Version the service reports, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: String,
    pub minor: String,
}

impl VersionInfo {
    pub fn new(major: impl Into<String>, minor: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
        }
    }

    /// `major.minor`, e.g. `1.0`.
    pub fn dotted(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_joins_parts() {
        let version = VersionInfo::new("1", "0");
        assert_eq!(version.dotted(), "1.0");
        assert_eq!(version.dotted().split('.').count(), 2);
    }
}
