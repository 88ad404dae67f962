use std::path::PathBuf;

/// Errores del entorno (carga del documento, configuración).
///
/// El núcleo de grados no produce errores: el texto que no se entiende
/// simplemente no aporta grados.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no se pudo leer {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("documento de curriculum inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuración inválida: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
