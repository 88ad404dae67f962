// Biblioteca raíz del crate `promath`.
// Grados escolares de cuatro sistemas (DK, DE, UK, US), el curriculum y los
// índices por grado, más la API HTTP que los expone.
pub mod api_json;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod grades;
pub mod index;
pub mod logging;
pub mod models;
pub mod preferences;
pub mod server;
pub mod server_handlers;

pub use config::Config;
pub use curriculum::Curriculum;
pub use error::{Error, Result};
pub use index::CurriculumIndex;
pub use models::{EdSystemCode, GradeId};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

/// Carga el curriculum indicado en la configuración, o el incluido en el binario.
pub fn load_curriculum(config: &Config) -> Result<Curriculum> {
    match &config.curriculum_path {
        Some(path) => Curriculum::from_path(path),
        None => Curriculum::bundled(),
    }
}
