use dioxus::prelude::*;
use shared_types::UiSettings;

/// Display settings for the client. No auth required; nothing here is sensitive.
#[server]
pub async fn get_ui_settings() -> Result<UiSettings, ServerFnError> {
    Ok(crate::config::ui_settings())
}
