use web_sys::UrlSearchParams;

use bento_core::config::layer_from_pairs;
use bento_core::{BentoConfig, ConfigLayer, GridVariant};

const CONFIG_ELEMENT_ID: &str = "bento-config";
const QUERY_KEYS: [&str; 2] = ["variant", "adaptive"];

pub(crate) fn load_config() -> BentoConfig {
    let mut config = BentoConfig::default();
    if let Some(raw) = option_env!("BENTO_VARIANT") {
        match raw.parse::<GridVariant>() {
            Ok(variant) => config.variant = variant,
            Err(err) => gloo::console::warn!("ignoring BENTO_VARIANT", err.to_string()),
        }
    }
    if let Some(raw) = embedded_config() {
        match ConfigLayer::from_json(&raw) {
            Ok(layer) => config = config.with_layer(layer),
            Err(err) => gloo::console::warn!("ignoring embedded config", err.to_string()),
        }
    }
    let query = query_pairs();
    let (layer, errors) = layer_from_pairs(
        query
            .iter()
            .map(|(key, value)| (*key, value.as_str())),
    );
    for err in errors {
        gloo::console::warn!("ignoring query parameter", err.to_string());
    }
    config = config.with_layer(layer);
    match serde_json::to_string(&config) {
        Ok(json) => gloo::console::log!("bento config", json),
        Err(err) => gloo::console::warn!("config not serializable", err.to_string()),
    }
    config
}

fn embedded_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content()
}

fn query_pairs() -> Vec<(&'static str, String)> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let search = window.location().search().unwrap_or_default();
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return Vec::new();
    };
    QUERY_KEYS
        .iter()
        .filter_map(|key| params.get(key).map(|value| (*key, value)))
        .collect()
}
