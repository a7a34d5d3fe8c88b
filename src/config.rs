//! Configuration file support for the demo host.
//!
//! Configuration is loaded from `~/.config/pickerdialog/config.toml`. Missing
//! file or unparseable contents fall back to the built-in demo values.
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/pickerdialog/config.toml
//! title = "Pick a colour"
//! done_label = "Done"
//! cancel_label = "Cancel"
//! selected = "B"
//! tick_ms = 33
//!
//! [[options]]
//! display = "Red"
//! value = "R"
//!
//! [[options]]
//! display = "Blue"
//! value = "B"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::dialog::ShowRequest;
use crate::options::PickerOption;

/// Demo host configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dialog title
    pub title: String,

    /// Label on the confirm button
    pub done_label: String,

    /// Label on the dismiss button
    pub cancel_label: String,

    /// Wheel rows, in display order
    pub options: Vec<PickerOption>,

    /// Value to pre-select; no match falls back to the first row
    pub selected: Option<String>,

    /// Render tick interval in milliseconds
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Pick a colour".to_string(),
            done_label: "Done".to_string(),
            cancel_label: "Cancel".to_string(),
            options: vec![
                PickerOption::new("Red", "R"),
                PickerOption::new("Green", "G"),
                PickerOption::new("Blue", "B"),
                PickerOption::new("Yellow", "Y"),
                PickerOption::new("Purple", "P"),
            ],
            selected: None,
            tick_ms: 33,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pickerdialog")
            .join("config.toml")
    }

    /// Build the `show` request this config describes.
    pub fn to_request(&self) -> ShowRequest {
        let mut request = ShowRequest::new(self.title.clone(), self.options.clone())
            .done_label(self.done_label.clone())
            .cancel_label(self.cancel_label.clone());
        if let Some(selected) = &self.selected {
            request = request.selected(selected.clone());
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.done_label, "Done");
        assert_eq!(config.cancel_label, "Cancel");
        assert!(!config.options.is_empty());
        assert_eq!(config.tick_ms, 33);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            title = "Size"
            done_label = "OK"
            selected = "m"
            tick_ms = 16

            [[options]]
            display = "Small"
            value = "s"

            [[options]]
            display = "Medium"
            value = "m"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.title, "Size");
        assert_eq!(config.done_label, "OK");
        // Omitted fields keep their defaults
        assert_eq!(config.cancel_label, "Cancel");
        assert_eq!(config.options.len(), 2);
        assert_eq!(config.options[1].value, "m");
        assert_eq!(config.selected.as_deref(), Some("m"));
        assert_eq!(config.tick_ms, 16);
    }

    #[test]
    fn test_to_request_carries_selection() {
        let config = Config {
            selected: Some("G".to_string()),
            ..Config::default()
        };
        let request = config.to_request();
        assert_eq!(request.selected.as_deref(), Some("G"));
        assert_eq!(request.title, config.title);
        assert_eq!(request.options.len(), config.options.len());
    }
}
