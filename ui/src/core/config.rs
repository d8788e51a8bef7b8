//! Site configuration: endpoints, storage keys, thresholds and the delays
//! that must match the stylesheet's transition durations.

use dioxus::prelude::*;
use serde::Deserialize;
use tracing::warn;

use crate::core::storage::{COOKIE_PREFERENCES_KEY, LANGUAGE_KEY};

const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.json"));

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub storage: StorageKeys,
    pub header: HeaderConfig,
    pub slider: SliderConfig,
    pub reveal: RevealConfig,
    pub faq_collapse_ms: u64,
    pub cookie_message_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub language: String,
    pub cookie_preferences: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub scrolled_threshold_px: f64,
    pub section_margin_px: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub swipe_threshold_px: f64,
    pub gallery_transition_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub start_delay_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: "https://formspree.io/f/contact".to_string(),
            storage: StorageKeys::default(),
            header: HeaderConfig::default(),
            slider: SliderConfig::default(),
            reveal: RevealConfig::default(),
            faq_collapse_ms: 400,
            cookie_message_ms: 5000,
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            language: LANGUAGE_KEY.to_string(),
            cookie_preferences: COOKIE_PREFERENCES_KEY.to_string(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
            section_margin_px: 50.0,
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50.0,
            gallery_transition_ms: 500,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            start_delay_ms: 500,
        }
    }
}

impl SiteConfig {
    /// Parse `raw`, falling back to defaults (and logging) on malformed input.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|err| {
            warn!("invalid site config ({err}); using defaults");
            Self::default()
        })
    }

    /// Configuration embedded from `assets/site.json`.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_CONFIG)
    }
}

/// Configuration provided by the platform shell, or the embedded one.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_else(SiteConfig::embedded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_to_documented_values() {
        let config: SiteConfig = serde_json::from_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.storage.language, "preferredLanguage");
        assert_eq!(config.storage.cookie_preferences, "cookiePreferences");
        assert_eq!(config.faq_collapse_ms, 400);
        assert_eq!(config.slider.gallery_transition_ms, 500);
        assert_eq!(config.reveal.threshold, 0.4);
        assert!(!config.form_endpoint.is_empty());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "faq_collapse_ms": 250 }"#);
        assert_eq!(config.faq_collapse_ms, 250);
        assert_eq!(config.header, HeaderConfig::default());
    }

    #[test]
    fn malformed_config_falls_back() {
        assert_eq!(SiteConfig::from_json("{ not json"), SiteConfig::default());
    }
}
