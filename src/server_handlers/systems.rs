use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::{active_system, not_found};
use crate::grades::{ed_system, ED_SYSTEMS};
use crate::models::EdSystemCode;
use crate::server::AppState;

/// GET /systems
pub async fn systems_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let active = active_system(&req, &state);
    HttpResponse::Ok().json(json!({"active": active, "systems": ED_SYSTEMS}))
}

/// GET /systems/{code}
/// Acepta el código en cualquier capitalización ("uk" o "UK").
pub async fn system_handler(path: web::Path<String>) -> impl Responder {
    let code = path.into_inner();
    match EdSystemCode::from_code(&code.to_uppercase()) {
        Some(system) => HttpResponse::Ok().json(ed_system(system)),
        None => not_found("ed-system", &code),
    }
}
