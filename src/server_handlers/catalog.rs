use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use tracing::debug;

use super::{active_system, not_found, preferred_grades};
use crate::api_json::{lesson_dto, topic_dto, topic_summary_dto};
use crate::server::AppState;

/// GET /categories
/// Con cookie `grade` se devuelven solo las categorías y temas de esos grados.
pub async fn categories_handler(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let system = active_system(&req, &state);
    let grades = preferred_grades(&req, system);
    let index = &state.index;
    debug!(%system, grades = grades.len(), "listando categorías");

    let categories: Vec<serde_json::Value> = index
        .categories_for_grades(system, &grades)
        .into_iter()
        .map(|cat| {
            let topics: Vec<_> = cat.topics.iter().map(|t| topic_summary_dto(index, system, t)).collect();
            json!({
                "id": cat.id,
                "name": cat.name,
                "symbol": cat.symbol,
                "description": cat.description,
                "topics": topics
            })
        })
        .collect();

    HttpResponse::Ok().json(json!({"system": system, "grades": grades, "categories": categories}))
}

/// GET /categories/{id}
pub async fn category_handler(req: HttpRequest, state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let system = active_system(&req, &state);
    let index = &state.index;
    let Some(cat) = index.category_by_id(&id) else {
        return not_found("category", &id);
    };

    let topics: Vec<_> = index
        .topics_by_category(&cat.id)
        .iter()
        .map(|t| topic_summary_dto(index, system, t))
        .collect();

    HttpResponse::Ok().json(json!({
        "system": system,
        "id": cat.id,
        "name": cat.name,
        "symbol": cat.symbol,
        "description": cat.description,
        "topics": topics
    }))
}

/// GET /topics/{id}
pub async fn topic_handler(req: HttpRequest, state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let system = active_system(&req, &state);
    match state.index.topic_by_id(&id) {
        Some(topic) => HttpResponse::Ok().json(json!({"system": system, "topic": topic_dto(&state.index, system, topic)})),
        None => not_found("topic", &id),
    }
}

/// GET /lessons/{slug}
pub async fn lesson_handler(req: HttpRequest, state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();
    let system = active_system(&req, &state);
    match state.index.lesson_by_slug(&slug) {
        Some(lesson) => HttpResponse::Ok().json(json!({
            "system": system,
            "lesson": lesson_dto(&state.index, system, lesson),
            "countries": lesson.countries
        })),
        None => not_found("lesson", &slug),
    }
}
