use serde::{Deserialize, Serialize};

use crate::utils::constants::API_BASE_URL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub enable_logging: bool,
    pub fetch_config: FetchConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            enable_logging: true,
            fetch_config: FetchConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Ventana de debounce antes de pedir el detalle (ms)
    pub debounce_ms: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { debounce_ms: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIConfig {
    /// Ancho (px) a partir del cual el viewport se considera ancho
    pub narrow_viewport_width: u32,
    /// Caracteres de la descripción antes de truncar
    pub description_max_chars: usize,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            narrow_viewport_width: 768,
            description_max_chars: 100,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_vars(|key| match key {
            "API_BASE_URL" => option_env!("API_BASE_URL"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "FETCH_DEBOUNCE_MS" => option_env!("FETCH_DEBOUNCE_MS"),
            "NARROW_VIEWPORT_WIDTH" => option_env!("NARROW_VIEWPORT_WIDTH"),
            "DESCRIPTION_MAX_CHARS" => option_env!("DESCRIPTION_MAX_CHARS"),
            _ => None,
        })
    }

    fn from_vars<'a>(var: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: var("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            enable_logging: var("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            fetch_config: FetchConfig {
                debounce_ms: var("FETCH_DEBOUNCE_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.fetch_config.debounce_ms),
            },
            ui_config: UIConfig {
                narrow_viewport_width: var("NARROW_VIEWPORT_WIDTH")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ui_config.narrow_viewport_width),
                description_max_chars: var("DESCRIPTION_MAX_CHARS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ui_config.description_max_chars),
            },
        }
    }

    /// URL base de la API (sin barra final)
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.is_logging_enabled() {
            log::Level::Info
        } else {
            log::Level::Error
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_vars() {
        let config = AppConfig::from_vars(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fetch_config.debounce_ms, 100);
        assert_eq!(config.ui_config.narrow_viewport_width, 768);
        assert_eq!(config.ui_config.description_max_chars, 100);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_vars_override_and_invalid_values_fall_back() {
        let config = AppConfig::from_vars(|key| match key {
            "API_BASE_URL" => Some("http://localhost:4000/"),
            "FETCH_DEBOUNCE_MS" => Some("250"),
            "NARROW_VIEWPORT_WIDTH" => Some("not-a-number"),
            "ENABLE_LOGGING" => Some("false"),
            _ => None,
        });
        assert_eq!(config.api_base_url(), "http://localhost:4000");
        assert_eq!(config.fetch_config.debounce_ms, 250);
        assert_eq!(config.ui_config.narrow_viewport_width, 768);
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
