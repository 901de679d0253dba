//! Application Configuration
//!
//! Two layers: values baked in at compile time through environment
//! variables, then an optional `window.__MEMORIAL_CONFIG__` object set by
//! the hosting page. Later layers win field by field.

use std::fmt;

use serde::Deserialize;

const RUNTIME_CONFIG_KEY: &str = "__MEMORIAL_CONFIG__";

/// Connection settings for the comment store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub project_id: String,
    pub api_key: String,
    pub database: String,
    pub collection: String,
}

/// What the page shows around the comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorialConfig {
    pub name: String,
    pub years: String,
    pub photo_src: String,
    pub photo_alt: String,
    pub footer: String,
}

impl Default for MemorialConfig {
    fn default() -> Self {
        Self {
            name: "Partha Kabi".to_string(),
            years: "1981-2025".to_string(),
            photo_src: "assets/portrait.svg".to_string(),
            photo_alt: "Partha Kabi".to_string(),
            footer: "Forever in our hearts – Partha, Years of 1981–2025".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required store setting is absent or blank
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(field) => write!(f, "Missing configuration value: {}", field),
        }
    }
}

impl std::error::Error for ConfigError {}

/// One configuration layer; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigLayer {
    pub project_id: Option<String>,
    pub api_key: Option<String>,
    pub database: Option<String>,
    pub collection: Option<String>,
    pub name: Option<String>,
    pub years: Option<String>,
    pub photo_src: Option<String>,
    pub photo_alt: Option<String>,
    pub footer: Option<String>,
}

impl ConfigLayer {
    /// Values compiled into the binary
    pub fn from_build_env() -> Self {
        Self {
            project_id: option_env!("MEMORIAL_FIRESTORE_PROJECT").map(str::to_string),
            api_key: option_env!("MEMORIAL_FIRESTORE_API_KEY").map(str::to_string),
            database: option_env!("MEMORIAL_FIRESTORE_DATABASE").map(str::to_string),
            collection: option_env!("MEMORIAL_FIRESTORE_COLLECTION").map(str::to_string),
            ..Default::default()
        }
    }

    /// Values from `window.__MEMORIAL_CONFIG__`, if the page defines it
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &RUNTIME_CONFIG_KEY.into()).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        match serde_wasm_bindgen::from_value(value) {
            Ok(layer) => Some(layer),
            Err(e) => {
                log::warn!("ignoring malformed {}: {}", RUNTIME_CONFIG_KEY, e);
                None
            }
        }
    }

    /// Overlay `other` on top of `self`; blank strings do not override
    pub fn merge(self, other: ConfigLayer) -> ConfigLayer {
        fn pick(base: Option<String>, over: Option<String>) -> Option<String> {
            match over {
                Some(v) if !v.trim().is_empty() => Some(v),
                _ => base,
            }
        }
        ConfigLayer {
            project_id: pick(self.project_id, other.project_id),
            api_key: pick(self.api_key, other.api_key),
            database: pick(self.database, other.database),
            collection: pick(self.collection, other.collection),
            name: pick(self.name, other.name),
            years: pick(self.years, other.years),
            photo_src: pick(self.photo_src, other.photo_src),
            photo_alt: pick(self.photo_alt, other.photo_alt),
            footer: pick(self.footer, other.footer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `Err` when the store cannot be reached with what was provided
    pub store: Result<StoreConfig, ConfigError>,
    pub memorial: MemorialConfig,
}

impl AppConfig {
    /// Load the layered configuration for this page
    pub fn load() -> Self {
        let mut layer = ConfigLayer::from_build_env();
        if let Some(runtime) = ConfigLayer::from_window() {
            layer = layer.merge(runtime);
        }
        Self::from_layer(layer)
    }

    pub fn from_layer(layer: ConfigLayer) -> Self {
        let defaults = MemorialConfig::default();
        let memorial = MemorialConfig {
            name: layer.name.clone().unwrap_or(defaults.name),
            years: layer.years.clone().unwrap_or(defaults.years),
            photo_src: layer.photo_src.clone().unwrap_or(defaults.photo_src),
            photo_alt: layer.photo_alt.clone().unwrap_or(defaults.photo_alt),
            footer: layer.footer.clone().unwrap_or(defaults.footer),
        };
        Self {
            store: store_config(layer),
            memorial,
        }
    }
}

fn store_config(layer: ConfigLayer) -> Result<StoreConfig, ConfigError> {
    let required = |value: Option<String>, field: &'static str| {
        value
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(field))
    };
    Ok(StoreConfig {
        project_id: required(layer.project_id, "projectId")?,
        api_key: required(layer.api_key, "apiKey")?,
        database: layer.database.unwrap_or_else(|| "(default)".to_string()),
        collection: layer.collection.unwrap_or_else(|| "comments".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(project_id: Option<&str>, api_key: Option<&str>) -> ConfigLayer {
        ConfigLayer {
            project_id: project_id.map(str::to_string),
            api_key: api_key.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_store_defaults() {
        let config = AppConfig::from_layer(layer(Some("memorial"), Some("key")));
        assert_eq!(
            config.store,
            Ok(StoreConfig {
                project_id: "memorial".to_string(),
                api_key: "key".to_string(),
                database: "(default)".to_string(),
                collection: "comments".to_string(),
            })
        );
        assert_eq!(config.memorial, MemorialConfig::default());
    }

    #[test]
    fn test_missing_store_values() {
        assert_eq!(
            AppConfig::from_layer(layer(None, Some("key"))).store,
            Err(ConfigError::Missing("projectId"))
        );
        assert_eq!(
            AppConfig::from_layer(layer(Some("memorial"), Some("  "))).store,
            Err(ConfigError::Missing("apiKey"))
        );
    }

    #[test]
    fn test_runtime_layer_overrides_build_layer() {
        let build = ConfigLayer {
            collection: Some("comments".to_string()),
            ..layer(Some("build-project"), Some("build-key"))
        };
        let runtime = ConfigLayer {
            name: Some("A. Person".to_string()),
            api_key: Some(String::new()),
            ..layer(Some("runtime-project"), None)
        };
        let merged = build.merge(runtime);
        assert_eq!(merged.project_id.as_deref(), Some("runtime-project"));
        assert_eq!(merged.api_key.as_deref(), Some("build-key"));
        assert_eq!(merged.collection.as_deref(), Some("comments"));
        assert_eq!(merged.name.as_deref(), Some("A. Person"));
    }

    #[test]
    fn test_runtime_layer_deserializes_camel_case() {
        let parsed: ConfigLayer =
            serde_json::from_str(r#"{"projectId":"p","apiKey":"k","photoSrc":"me.jpg"}"#).unwrap();
        assert_eq!(parsed.project_id.as_deref(), Some("p"));
        assert_eq!(parsed.photo_src.as_deref(), Some("me.jpg"));
        assert!(parsed.footer.is_none());
    }

    #[test]
    fn test_default_photo_is_shipped() {
        let photo = MemorialConfig::default().photo_src;
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(&photo);
        assert!(path.is_file(), "{} missing", path.display());
    }
}
