use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use tracing::info;

use super::{active_system, not_found};
use crate::api_json::{grade_dto, grade_groups};
use crate::models::{EdSystemCode, GradeId};
use crate::preferences::{resolve_grade_slug, GradeResolution};
use crate::server::AppState;

/// GET /grades
pub async fn grades_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let system = active_system(&req, &state);
    HttpResponse::Ok().json(json!({"system": system, "groups": grade_groups(&state.index, system)}))
}

/// GET /grades/{grade}
///
/// - grado válido en el sistema activo: categorías y temas del grado con las
///   lecciones cuyo grado primario es ese
/// - grado de otro sistema (p. ej. `Y7` con DK activo): 307 al más cercano
/// - cualquier otra cosa: 404
pub async fn grade_handler(req: HttpRequest, state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();
    let system = active_system(&req, &state);

    match resolve_grade_slug(system, &slug) {
        GradeResolution::Valid(grade) => grade_content(&state, system, &grade),
        GradeResolution::Redirect(closest) => {
            info!(%system, from = %slug, to = %closest, "redirigiendo grado de otro sistema");
            let mut location = format!("/grades/{}", closest);
            if !req.query_string().is_empty() {
                location.push('?');
                location.push_str(req.query_string());
            }
            HttpResponse::TemporaryRedirect()
                .insert_header((header::LOCATION, location))
                .finish()
        }
        GradeResolution::NotFound => not_found("grade", &slug),
    }
}

fn grade_content(state: &AppState, system: EdSystemCode, grade: &GradeId) -> HttpResponse {
    let index = &state.index;
    let categories: Vec<serde_json::Value> = index
        .categories_for_grade(system, grade)
        .into_iter()
        .map(|cat| {
            let topics: Vec<serde_json::Value> = cat
                .topics
                .iter()
                .map(|t| {
                    let lessons: Vec<serde_json::Value> = index
                        .lessons_for_grade_and_topic(system, grade, &t.id)
                        .into_iter()
                        .map(|l| json!({"id": l.id, "name": l.name}))
                        .collect();
                    json!({
                        "id": t.id,
                        "name": t.name,
                        "lessonCount": lessons.len(),
                        "lessons": lessons
                    })
                })
                .collect();
            json!({"id": cat.id, "name": cat.name, "symbol": cat.symbol, "topics": topics})
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "system": system,
        "grade": grade_dto(index, system, grade),
        "categories": categories
    }))
}
