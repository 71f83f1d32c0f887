use serde::{Deserialize, Serialize};

/// Default number of fields a record card shows before collapsing.
pub const DEFAULT_CARD_VISIBLE_FIELDS: usize = 3;

/// Feature flags controlling which optional integrations are active.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}

/// Presentation settings handed to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    /// Fields shown on a collapsed record card.
    pub card_visible_fields: usize,
    /// Rows per page on listing pages.
    pub page_size: i64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            card_visible_fields: DEFAULT_CARD_VISIBLE_FIELDS,
            page_size: crate::common::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub ui: UiSettings,
}
