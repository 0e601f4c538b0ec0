//! Dashboard settings: embedded defaults plus an optional TOML override
//! stored in `localStorage`.

use contracts::shared::config::{load_config, DashboardConfig};

/// localStorage key holding a TOML override of the embedded config
pub const CONFIG_STORAGE_KEY: &str = "school_dashboard_config";

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

pub fn load_dashboard_config() -> DashboardConfig {
    load_config(read_override().as_deref())
}

/// Config provided by `App`; defaults when rendered outside it
pub fn use_dashboard_config() -> DashboardConfig {
    leptos::prelude::use_context::<DashboardConfig>().unwrap_or_default()
}
