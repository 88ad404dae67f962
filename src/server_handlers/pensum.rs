use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::active_system;
use crate::grades::{all_grade_ids, grade_label_short_key};
use crate::server::AppState;

/// GET /pensum
/// Columnas: todos los grados del sistema. Filas: una por categoría.
pub async fn pensum_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let system = active_system(&req, &state);
    let columns: Vec<serde_json::Value> = all_grade_ids(system)
        .map(|g| json!({"id": g, "label": grade_label_short_key(system, &g)}))
        .collect();
    let rows = state.index.pensum(system);

    HttpResponse::Ok().json(json!({"system": system, "grades": columns, "rows": rows}))
}
