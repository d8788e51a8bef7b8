//! Site language and locale negotiation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Short code used in storage and in `data-*` attribute names.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parse a stored code. Only the bare codes are accepted; anything else
    /// is treated as "nothing stored".
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// Default for a browser locale such as `es-MX` or `en-US`.
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_ascii_lowercase().starts_with("es") {
            Language::Es
        } else {
            Language::En
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Label shown on the toggle button: the language a click switches *to*.
    pub fn toggle_label(self) -> String {
        self.toggled().code().to_ascii_uppercase()
    }

    /// Fluent locale folder backing this language.
    pub fn fluent_tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Es => "es-ES",
        }
    }

    pub fn data_attribute(self) -> &'static str {
        match self {
            Language::En => "data-en",
            Language::Es => "data-es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
