//! Configuración del servicio leída de variables de entorno (y `.env` si existe).
//!
//! - `PROMATH_BIND`: dirección de escucha (por defecto `127.0.0.1:8080`)
//! - `PROMATH_CURRICULUM`: ruta a un JSON de curriculum; si falta se usa el incluido
//! - `PROMATH_DEFAULT_LOCALE`: locale cuando la petición no trae uno (`da`, `en`, `de`)
//! - `RUST_LOG`: filtro de logs, lo lee `logging::init`

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Locales que sirve el sitio; el primero es el de por defecto.
pub const LOCALES: [&str; 3] = ["da", "en", "de"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub curriculum_path: Option<PathBuf>,
    pub default_locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: DEFAULT_BIND.to_string(),
            curriculum_path: None,
            default_locale: LOCALES[0].to_string(),
        }
    }
}

// carga .env si está presente
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Config {
    pub fn from_env() -> Result<Config> {
        load_dotenv();
        Config::from_vars(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de un lector de variables
    /// (inyectable para tests, sin tocar el entorno del proceso).
    pub fn from_vars<F>(get: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = Config::default();

        if let Some(bind) = non_empty("PROMATH_BIND") {
            if !bind.contains(':') {
                return Err(Error::Config(format!("PROMATH_BIND debe ser host:puerto, recibido '{}'", bind)));
            }
            cfg.bind_addr = bind;
        }

        cfg.curriculum_path = non_empty("PROMATH_CURRICULUM").map(PathBuf::from);

        if let Some(locale) = non_empty("PROMATH_DEFAULT_LOCALE") {
            if !LOCALES.contains(&locale.as_str()) {
                return Err(Error::Config(format!(
                    "PROMATH_DEFAULT_LOCALE '{}' no es uno de {:?}",
                    locale, LOCALES
                )));
            }
            cfg.default_locale = locale;
        }

        Ok(cfg)
    }
}
