//! Page Configuration
//!
//! Reads screen tunables from a JSON `<script>` element in index.html.
//! Missing or invalid config falls back to the defaults.

use timed_selection::ScreenConfig;

/// id of the `<script type="application/json">` element
pub const CONFIG_ELEMENT_ID: &str = "feedlogic-config";

/// Load config from the page
pub fn load_screen_config() -> ScreenConfig {
    parse_screen_config(read_config_json().as_deref())
}

fn read_config_json() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content()
}

pub fn parse_screen_config(json: Option<&str>) -> ScreenConfig {
    let json = match json.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => {
            log::debug!("[CONFIG] no #{} element, using defaults", CONFIG_ELEMENT_ID);
            return ScreenConfig::default();
        }
    };

    match ScreenConfig::from_json(json) {
        Ok(config) => {
            log::info!("[CONFIG] loaded {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("[CONFIG] {}, using defaults", e);
            ScreenConfig::default()
        }
    }
}
