use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::config::Config;
use crate::index::CurriculumIndex;
use crate::server_handlers::*;

/// Estado compartido por todos los handlers. Se construye una vez y solo se lee.
pub struct AppState {
    pub index: CurriculumIndex,
    pub default_locale: String,
}

impl AppState {
    pub fn new(index: CurriculumIndex, default_locale: impl Into<String>) -> Self {
        AppState { index, default_locale: default_locale.into() }
    }
}

/// Rutas de la API; separado de `run_server` para poder montarlo en tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/help", web::get().to(help_handler))
        .route("/systems", web::get().to(systems_handler))
        .route("/systems/{code}", web::get().to(system_handler))
        .route("/categories", web::get().to(categories_handler))
        .route("/categories/{id}", web::get().to(category_handler))
        .route("/topics/{id}", web::get().to(topic_handler))
        .route("/lessons/{slug}", web::get().to(lesson_handler))
        .route("/grades", web::get().to(grades_handler))
        .route("/grades/{grade}", web::get().to(grade_handler))
        .route("/pensum", web::get().to(pensum_handler))
        .route("/preferences/ed-system", web::post().to(set_ed_system_handler))
        .route("/preferences/grades", web::post().to(set_grades_handler));
}

pub async fn run_server(config: &Config, index: CurriculumIndex) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(index, config.default_locale.clone()));
    info!(bind = %config.bind_addr, locale = %config.default_locale, "iniciando servidor en http://{}", config.bind_addr);

    HttpServer::new(move || {
        // el front solo lee desde otro origen; las preferencias van por el mismo origen
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
