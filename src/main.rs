// --- Promath: grados y curriculum - Archivo principal ---

use anyhow::Context;
use promath::{load_curriculum, logging, run_server, Config, CurriculumIndex};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("configuración inválida")?;
    logging::init();
    info!("=== Promath curriculum (API) ===");

    let curriculum = load_curriculum(&config).with_context(|| match &config.curriculum_path {
        Some(p) => format!("no se pudo cargar el curriculum desde {}", p.display()),
        None => "no se pudo cargar el curriculum incluido".to_string(),
    })?;
    let index = CurriculumIndex::build(curriculum);

    run_server(&config, index).await.context("el servidor terminó con error")?;
    Ok(())
}
