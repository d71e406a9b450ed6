use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use tracing::warn;

use crate::error::SettingsError;

const SETTINGS_JSON: &str = include_str!("../assets/settings.json");

/// Player and shell settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub app_title: String,
    pub tagline: String,
    /// `chrono` strftime pattern for the header date.
    pub date_format: String,
    pub empty_message: String,
    pub now_playing_label: String,
    pub start_looping: bool,
    pub start_shuffling: bool,
    /// Value of the `preload` attribute on the audio element.
    pub preload: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            app_title: "Podplayer".to_string(),
            tagline: "The best for you to listen, always".to_string(),
            date_format: "%a, %-d %B".to_string(),
            empty_message: "Select a podcast to listen to".to_string(),
            now_playing_label: "Now playing".to_string(),
            start_looping: false,
            start_shuffling: false,
            preload: "metadata".to_string(),
        }
    }
}

impl PlayerSettings {
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Embedded settings, or the defaults if they do not parse.
    pub fn load() -> Self {
        Self::from_json(SETTINGS_JSON).unwrap_or_else(|err| {
            warn!(%err, "falling back to default player settings");
            Self::default()
        })
    }

    /// Formats the header date, falling back to the default pattern when the
    /// configured one cannot render a plain date.
    pub fn format_header_date(&self, date: NaiveDate) -> String {
        render_date(date, &self.date_format)
            .or_else(|| render_date(date, &Self::default().date_format))
            .unwrap_or_default()
    }
}

fn render_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = PlayerSettings::from_json(r#"{ "start_looping": true }"#).unwrap();
        assert!(settings.start_looping);
        assert_eq!(settings.preload, "metadata");
        assert_eq!(settings.app_title, PlayerSettings::default().app_title);
    }

    #[test]
    fn malformed_settings_are_an_error() {
        assert!(PlayerSettings::from_json("[1, 2]").is_err());
    }

    #[test]
    fn header_date_uses_pattern() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 22).unwrap();
        let settings = PlayerSettings::default();
        assert_eq!(settings.format_header_date(date), "Fri, 22 January");

        let custom = PlayerSettings {
            date_format: "%Y-%m-%d".to_string(),
            ..PlayerSettings::default()
        };
        assert_eq!(custom.format_header_date(date), "2021-01-22");

        let broken = PlayerSettings {
            date_format: "%Q %-d".to_string(),
            ..PlayerSettings::default()
        };
        assert_eq!(broken.format_header_date(date), "Fri, 22 January");

        let timed = PlayerSettings {
            date_format: "%H:%M".to_string(),
            ..PlayerSettings::default()
        };
        assert_eq!(timed.format_header_date(date), "Fri, 22 January");
    }

    #[test]
    fn embedded_settings_load() {
        let settings = PlayerSettings::from_json(SETTINGS_JSON).unwrap();
        assert!(!settings.app_title.is_empty());
    }
}
