//! Startup configuration.
//!
//! Read once from environment variables:
//!
//! | variable                          | values        | default                   |
//! |-----------------------------------|---------------|---------------------------|
//! | `MACRO_TRACKER_DATA`              | path          | `cleaned_growth_data.csv` |
//! | `MACRO_TRACKER_LANG`              | `en` / `fr`   | `en`                      |
//! | `MACRO_TRACKER_DEFAULT_SELECTION` | `first`/`all` | `first`                   |

use std::path::PathBuf;

use crate::data::selection::DefaultSelection;
use crate::i18n::Language;

pub const DATA_ENV: &str = "MACRO_TRACKER_DATA";
pub const LANG_ENV: &str = "MACRO_TRACKER_LANG";
pub const DEFAULT_SELECTION_ENV: &str = "MACRO_TRACKER_DEFAULT_SELECTION";

pub const DEFAULT_DATA_FILE: &str = "cleaned_growth_data.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// CSV file loaded at startup.
    pub data_path: PathBuf,
    /// Initial UI language.
    pub language: Language,
    /// Indicators selected right after a load.
    pub default_selection: DefaultSelection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            language: Language::default(),
            default_selection: DefaultSelection::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key → value source. Unset or blank keys keep
    /// their default; unrecognised values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(DATA_ENV) {
            config.data_path = PathBuf::from(path.trim());
        }

        if let Some(tag) = get(LANG_ENV) {
            match Language::from_tag(&tag) {
                Some(lang) => config.language = lang,
                None => log::warn!("Ignoring unknown {LANG_ENV}={tag:?}, using English"),
            }
        }

        if let Some(value) = get(DEFAULT_SELECTION_ENV) {
            match value.trim().to_lowercase().as_str() {
                "first" => config.default_selection = DefaultSelection::First,
                "all" => config.default_selection = DefaultSelection::All,
                _ => log::warn!(
                    "Ignoring unknown {DEFAULT_SELECTION_ENV}={value:?}, expected 'first' or 'all'"
                ),
            }
        }

        config
    }
}
