use serde::{Deserialize, Serialize};

use crate::session::CefrLevel;

fn default_session_type() -> String {
    "lesson".to_string()
}

/// Global configuration for the authoring console, loaded from
/// `{data_dir}/config.toml` by coursesmith-infra.
///
/// Every field has a default so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Session type preselected when authoring a new session.
    pub default_session_type: String,
    /// CEFR level preselected when authoring a new session.
    pub default_cefr_level: CefrLevel,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_session_type: default_session_type(),
            default_cefr_level: CefrLevel::A1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.default_session_type, "lesson");
        assert_eq!(config.default_cefr_level, CefrLevel::A1);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: GlobalConfig = toml::from_str(r#"default_cefr_level = "B1""#).unwrap();
        assert_eq!(config.default_cefr_level, CefrLevel::B1);
        assert_eq!(config.default_session_type, "lesson");
    }
}
