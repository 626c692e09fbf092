use serde::{Deserialize, Serialize};

use crate::catalog::GridVariant;
use crate::error::BentoError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BentoConfig {
    pub variant: GridVariant,
    pub adaptive: bool,
}

impl Default for BentoConfig {
    fn default() -> Self {
        Self {
            variant: GridVariant::Wide,
            adaptive: true,
        }
    }
}

/// One configuration layer; unset fields keep the value underneath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub variant: Option<GridVariant>,
    pub adaptive: Option<bool>,
}

impl ConfigLayer {
    pub fn from_json(raw: &str) -> Result<Self, BentoError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|err| BentoError::InvalidConfig(err.to_string()))
    }
}

impl BentoConfig {
    pub fn with_layer(mut self, layer: ConfigLayer) -> Self {
        if let Some(variant) = layer.variant {
            self.variant = variant;
        }
        if let Some(adaptive) = layer.adaptive {
            self.adaptive = adaptive;
        }
        self
    }
}

pub fn parse_toggle(value: &str) -> Result<bool, BentoError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Ok(true),
        "0" | "off" | "false" | "no" => Ok(false),
        _ => Err(BentoError::InvalidToggle(value.trim().to_string())),
    }
}

/// Builds a layer from `key=value` pairs, collecting errors for bad values
/// instead of failing the whole layer.
pub fn layer_from_pairs<'a, I>(pairs: I) -> (ConfigLayer, Vec<BentoError>)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut layer = ConfigLayer::default();
    let mut errors = Vec::new();
    for (key, value) in pairs {
        match key {
            "variant" => match value.parse::<GridVariant>() {
                Ok(variant) => layer.variant = Some(variant),
                Err(err) => errors.push(err),
            },
            "adaptive" => match parse_toggle(value) {
                Ok(adaptive) => layer.adaptive = Some(adaptive),
                Err(err) => errors.push(err),
            },
            _ => {}
        }
    }
    (layer, errors)
}
