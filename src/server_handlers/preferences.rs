use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::active_system;
use crate::api_json::{parse_ed_system_request, parse_grades_request};
use crate::models::{EdSystemCode, GradeId};
use crate::preferences::{format_grade_cookie, COOKIE_MAX_AGE_SECS, ED_SYSTEM_COOKIE, GRADE_COOKIE};
use crate::server::AppState;

fn preference_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .max_age(Duration::seconds(COOKIE_MAX_AGE_SECS))
        .same_site(SameSite::Lax)
        .finish()
}

/// POST /preferences/ed-system
/// Body: `{ "code": "UK" }`
pub async fn set_ed_system_handler(body: String) -> impl Responder {
    let request = match parse_ed_system_request(&body) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };

    let Some(system) = EdSystemCode::from_code(&request.code) else {
        return HttpResponse::BadRequest().json(json!({"error": format!("unknown ed-system '{}'", request.code)}));
    };

    HttpResponse::Ok()
        .cookie(preference_cookie(ED_SYSTEM_COOKIE, system.as_str().to_string()))
        .json(json!({"status": "ok", "system": system}))
}

/// POST /preferences/grades
/// Body: `{ "grades": ["7kl", "8kl"] }`. Los grados se validan contra el
/// sistema activo; una lista vacía borra la cookie.
pub async fn set_grades_handler(req: HttpRequest, state: web::Data<AppState>, body: String) -> impl Responder {
    let request = match parse_grades_request(&body) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };

    let system = active_system(&req, &state);
    let mut grades: Vec<GradeId> = Vec::new();
    let mut invalid: Vec<String> = Vec::new();
    for slug in request.grades.iter().filter(|s| !s.is_empty()) {
        match GradeId::parse(system, slug) {
            Some(g) if !grades.contains(&g) => grades.push(g),
            Some(_) => {}
            None => invalid.push(slug.clone()),
        }
    }
    if !invalid.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": format!("invalid grades for {}", system),
            "invalid": invalid
        }));
    }

    match format_grade_cookie(&grades) {
        Some(value) => HttpResponse::Ok()
            .cookie(preference_cookie(GRADE_COOKIE, value))
            .json(json!({"status": "ok", "system": system, "grades": grades})),
        None => {
            let mut removal = preference_cookie(GRADE_COOKIE, String::new());
            removal.make_removal();
            HttpResponse::Ok()
                .cookie(removal)
                .json(json!({"status": "ok", "system": system, "grades": grades}))
        }
    }
}
