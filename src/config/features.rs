//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Require a matching `player_id` query parameter on profile reads.
    ///
    /// Off: any holder of a profile URL may view it (public sharing).
    /// On: reads are gated by the owner identifier check.
    #[serde(default)]
    pub owner_check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(!flags.owner_check);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{ "owner_check": true }"#;
        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(flags.owner_check);
    }
}
