//! Settings file: chat endpoint, keyword list and request timeout.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::error::ChatError;
use crate::render::{KeywordSet, MessageRenderer, DEFAULT_KEYWORDS};
use crate::validation;

// Default configuration
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5005/api/chat";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// URL the chat messages are posted to
    pub endpoint: String,
    /// Highlighted terms, in the order they are applied
    pub keywords: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Renderer using the configured keyword set. Invalid terms are dropped.
    pub fn renderer(&self) -> Result<MessageRenderer, ChatError> {
        let terms = self.keywords.iter().filter(|term| {
            match validation::validate_keyword(term) {
                Ok(()) => true,
                Err(e) => {
                    warn!(term = %term, "ignoring keyword: {}", e);
                    false
                }
            }
        });
        Ok(MessageRenderer::new(KeywordSet::new(terms)?))
    }

    pub fn validate(&self) -> Result<(), ChatError> {
        validation::validate_endpoint(&self.endpoint).map_err(ChatError::Endpoint)
    }
}

pub fn settings_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "buddy", "buddy-chat")?;
    Some(proj.config_dir().join("settings.json"))
}

/// Load settings from `path`; a missing file yields the defaults
pub fn load_settings_from(path: &Path) -> Result<Settings, ChatError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load settings from the platform config directory
pub fn load_settings() -> Result<Settings, ChatError> {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ChatError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.keywords.len(), DEFAULT_KEYWORDS.len());
        assert!(settings.validate().is_ok());
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            endpoint: "https://buddy.example/api/chat".into(),
            keywords: vec!["TikTok".into(), "reels".into()],
            request_timeout_secs: 5,
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"keywords":["growth"]}"#).unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.keywords, vec!["growth".to_string()]);

        let renderer = settings.renderer().unwrap();
        assert_eq!(
            renderer.render("Growth and Instagram").as_str(),
            r#"<span class="highlight">growth</span> and Instagram"#
        );
    }

    #[test]
    fn test_keywords_named_like_markup_keep_output_valid() {
        let settings = Settings {
            keywords: vec!["amp".into(), "br".into(), "quot".into()],
            ..Settings::default()
        };
        let renderer = settings.renderer().unwrap();
        assert_eq!(
            renderer.render("Q&A\nsay \"hi\"").as_str(),
            "Q&amp;A<br>say &quot;hi&quot;"
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(ChatError::Json(_))));
    }

    #[test]
    fn test_invalid_endpoint() {
        let settings = Settings {
            endpoint: "ftp://nope".into(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(ChatError::Endpoint(_))));
    }
}
