//! Session info shown next to the chat: current platform and focus area.
//!
//! The server decides both values from the conversation and reports them in
//! each reply; the client only keeps the latest ones.

use chrono::{DateTime, Local};

/// Platforms the quick-prompt command knows about.
pub const PLATFORMS: &[&str] = &["instagram", "youtube", "facebook"];

#[derive(Debug, Clone, Default)]
pub struct SessionInfo {
    pub platform: Option<String>,
    pub focus_area: Option<String>,
    pub last_interaction: Option<DateTime<Local>>,
}

impl SessionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the values from a reply. `None` keeps the current value.
    pub fn update(&mut self, platform: Option<&str>, focus_area: Option<&str>) {
        if let Some(platform) = platform.filter(|p| !p.is_empty()) {
            self.platform = Some(platform.to_string());
        }
        if let Some(focus_area) = focus_area.filter(|f| !f.is_empty()) {
            self.focus_area = Some(focus_area.to_string());
        }
        self.last_interaction = Some(Local::now());
    }

    pub fn platform_label(&self) -> Option<String> {
        self.platform.as_deref().map(capitalize)
    }

    pub fn focus_area_label(&self) -> Option<String> {
        self.focus_area.as_deref().map(capitalize)
    }

    /// Whether `name` is the platform currently in focus
    pub fn is_active_platform(&self, name: &str) -> bool {
        self.platform.as_deref() == Some(name)
    }
}

/// Upper-case the first character, leave the rest alone
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
