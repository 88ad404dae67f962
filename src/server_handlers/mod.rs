pub mod catalog;
pub mod docs;
pub mod grades;
pub mod pensum;
pub mod preferences;
pub mod systems;

pub use catalog::*;
pub use docs::*;
pub use grades::*;
pub use pensum::*;
pub use preferences::*;
pub use systems::*;

use std::collections::HashMap;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::config::LOCALES;
use crate::models::{EdSystemCode, GradeId};
use crate::preferences::{grades_from_cookie, resolve_ed_system, ED_SYSTEM_COOKIE, GRADE_COOKIE};
use crate::server::AppState;

/// Locale de la petición: `?locale=` si es uno de los soportados, si no el configurado.
fn request_locale(req: &HttpRequest, state: &AppState) -> String {
    web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .ok()
        .and_then(|q| q.get("locale").cloned())
        .filter(|l| LOCALES.contains(&l.as_str()))
        .unwrap_or_else(|| state.default_locale.clone())
}

/// Sistema activo para esta petición (cookie `ed-system`, luego locale).
pub fn active_system(req: &HttpRequest, state: &AppState) -> EdSystemCode {
    let cookie = req.cookie(ED_SYSTEM_COOKIE);
    resolve_ed_system(cookie.as_ref().map(|c| c.value()), &request_locale(req, state))
}

/// Grados preferidos (cookie `grade`) válidos en `system`.
pub fn preferred_grades(req: &HttpRequest, system: EdSystemCode) -> Vec<GradeId> {
    req.cookie(GRADE_COOKIE)
        .map(|c| grades_from_cookie(c.value(), system))
        .unwrap_or_default()
}

pub(crate) fn not_found(what: &str, id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": format!("{} '{}' not found", what, id)}))
}
