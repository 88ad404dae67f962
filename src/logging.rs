use tracing_subscriber::{EnvFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Inicializa los logs. `RUST_LOG` manda; si no está se usa `info`.
///
/// Los registros del crate `log` (p. ej. el middleware `Logger` de actix)
/// también pasan por aquí.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(layer().with_target(false))
        .try_init();
}
