use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

/// Head-section configuration of the document shell.
///
/// Deployment variants of the shell differ only in these fields; the body
/// (mount point and init snippet) is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub title: String,
    /// Emit the viewport meta tag
    pub viewport: bool,
    /// Base64-encoded PNG, served as an inline `data:` favicon
    pub icon: Option<String>,
    /// URL of an external stylesheet
    pub stylesheet: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Main".to_string(),
            viewport: true,
            icon: None,
            stylesheet: None,
        }
    }
}

impl ShellConfig {
    /// Parse the JSON carried in the `SHELL_CONFIG` worker variable.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("SHELL_CONFIG is not valid JSON")?;
        if let Some(icon) = &config.icon {
            BASE64
                .decode(icon)
                .context("SHELL_CONFIG icon is not valid base64")?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_plain_template() {
        let config = ShellConfig::default();
        assert_eq!(config.title, "Main");
        assert!(config.viewport);
        assert_eq!(config.icon, None);
        assert_eq!(config.stylesheet, None);
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let config = ShellConfig::from_json(r#"{ "title": "404" }"#).unwrap();
        assert_eq!(config.title, "404");
        assert!(config.viewport);
        assert_eq!(config.icon, None);
    }

    #[test]
    fn test_from_json_full() {
        let config = ShellConfig::from_json(
            r#"{
                "title": "Main",
                "viewport": false,
                "icon": "aWNvbg==",
                "stylesheet": "/static/main.css"
            }"#,
        )
        .unwrap();
        assert!(!config.viewport);
        assert_eq!(config.icon.as_deref(), Some("aWNvbg=="));
        assert_eq!(config.stylesheet.as_deref(), Some("/static/main.css"));
    }

    #[test]
    fn test_from_json_rejects_invalid_icon() {
        assert!(ShellConfig::from_json(r#"{ "icon": "not base64!" }"#).is_err());
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        assert!(ShellConfig::from_json("title=Main").is_err());
    }
}
