use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use pretty_assertions::assert_eq;
use serde_json::Value;

use promath::server::{configure, AppState};
use promath::{Curriculum, CurriculumIndex};

fn state() -> web::Data<AppState> {
    let index = CurriculumIndex::build(Curriculum::bundled().expect("el curriculum incluido debe cargar"));
    web::Data::new(AppState::new(index, "da"))
}

macro_rules! app {
    () => {
        test::init_service(App::new().app_data(state()).configure(configure)).await
    };
}

fn ids(items: &Value) -> Vec<String> {
    items
        .as_array()
        .map(|a| a.iter().filter_map(|v| v["id"].as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}

#[actix_web::test]
async fn test_help_lists_endpoints() {
    let app = app!();
    let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/help").to_request()).await;
    assert!(body["endpoints"]["GET /grades/{grade}"].is_string());
    assert_eq!(body["ed_system_example"]["code"], "UK");
}

#[actix_web::test]
async fn test_systems_follow_locale_and_cookie() {
    let app = app!();
    let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/systems").to_request()).await;
    assert_eq!(body["active"], "DK");
    assert_eq!(body["systems"].as_array().map(Vec::len), Some(4));

    let req = test::TestRequest::get().uri("/systems?locale=de").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["active"], "DE");

    // la cookie manda sobre el locale
    let req = test::TestRequest::get()
        .uri("/systems?locale=de")
        .cookie(Cookie::new("ed-system", "US"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["active"], "US");

    // locale no soportado -> el configurado
    let req = test::TestRequest::get().uri("/systems?locale=fr").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["active"], "DK");
}

#[actix_web::test]
async fn test_single_system() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/systems/uk").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "UK");
    assert_eq!(body["grades"][0]["id"], "Y1");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/systems/FR").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_categories_filtered_by_grade_cookie() {
    let app = app!();
    let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/categories").to_request()).await;
    assert_eq!(ids(&body["categories"]).len(), 4);

    let req = test::TestRequest::get()
        .uri("/categories")
        .cookie(Cookie::new("grade", "1g,,Y7"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["grades"], serde_json::json!(["1g"]));
    assert_eq!(ids(&body["categories"]), vec!["tal-og-algebra", "geometri"]);
    assert_eq!(ids(&body["categories"][0]["topics"]), vec!["ligninger"]);
}

#[actix_web::test]
async fn test_category_topic_and_lesson_detail() {
    let app = app!();
    let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/categories/geometri").to_request()).await;
    assert_eq!(ids(&body["topics"]), vec!["figurer", "trekanter"]);

    let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/topics/trekanter").to_request()).await;
    assert_eq!(body["topic"]["grades"], serde_json::json!(["8kl", "9kl", "1g", "2g"]));
    assert_eq!(body["topic"]["lessons"][2]["id"], "enhedscirklen");
    assert_eq!(body["topic"]["lessons"][2]["primaryGrade"], Value::Null);

    let req = test::TestRequest::get().uri("/lessons/pythagoras?locale=en").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["system"], "UK");
    assert_eq!(body["lesson"]["grades"], serde_json::json!(["Y9", "Y10"]));
    assert_eq!(body["lesson"]["primaryGrade"], "Y9");

    for uri in ["/categories/nope", "/topics/nope", "/lessons/nope"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[actix_web::test]
async fn test_grade_groups() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/grades")
        .cookie(Cookie::new("ed-system", "US"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let groups = body["groups"].as_array().expect("lista de grupos");
    assert_eq!(groups.len(), 3);
    let kindergarten = &groups[0]["grades"][0];
    assert_eq!(kindergarten["id"], "K");
    assert_eq!(kindergarten["topicCount"], 1);
    assert_eq!(kindergarten["lessonCount"], 1);
}

#[actix_web::test]
async fn test_grade_detail() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/grades/8kl").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["grade"]["id"], "8kl");
    assert_eq!(ids(&body["categories"]), vec!["tal-og-algebra", "geometri"]);
    // pythagoras (8.-9. kl) cuenta solo en 8kl
    let trekanter = &body["categories"][1]["topics"][0];
    assert_eq!(trekanter["id"], "trekanter");
    assert_eq!(trekanter["lessonCount"], 1);
}

#[actix_web::test]
async fn test_grade_from_other_system_redirects() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/grades/Y7").to_request()).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()), Some("/grades/6kl"));

    let req = test::TestRequest::get()
        .uri("/grades/1g?locale=da")
        .cookie(Cookie::new("ed-system", "US"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/grades/G10?locale=da")
    );

    let resp = test::call_service(&app, test::TestRequest::get().uri("/grades/banana").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_pensum() {
    let app = app!();
    let req = test::TestRequest::get().uri("/pensum?locale=de").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["system"], "DE");
    assert_eq!(body["grades"].as_array().map(Vec::len), Some(13));
    let rows = body["rows"].as_array().expect("filas");
    let total: u64 = rows.iter().filter_map(|r| r["total"].as_u64()).sum();
    assert_eq!(total, 17);
    assert_eq!(rows[0]["categoryId"], "tal-og-algebra");
}

#[actix_web::test]
async fn test_set_ed_system_preference() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/preferences/ed-system")
        .set_payload(r#"{ "code": "UK" }"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "ed-system")
        .expect("cookie ed-system");
    assert_eq!(cookie.value(), "UK");
    assert_eq!(cookie.max_age().map(|d| d.whole_days()), Some(365));

    for payload in [r#"{ "code": "FR" }"#, r#"{ "code": "uk" }"#, "no es json"] {
        let req = test::TestRequest::post().uri("/preferences/ed-system").set_payload(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", payload);
    }
}

#[actix_web::test]
async fn test_set_grades_preference() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/preferences/grades")
        .set_payload(r#"{ "grades": ["7kl", "8kl", "7kl"] }"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp.response().cookies().find(|c| c.name() == "grade").expect("cookie grade");
    assert_eq!(cookie.value(), "7kl,8kl");

    // vacía -> se borra
    let req = test::TestRequest::post()
        .uri("/preferences/grades")
        .set_payload(r#"{ "grades": [] }"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = resp.response().cookies().find(|c| c.name() == "grade").expect("cookie de borrado");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age().map(|d| d.whole_seconds()), Some(0));

    // grados de otro sistema no se aceptan
    let req = test::TestRequest::post()
        .uri("/preferences/grades")
        .set_payload(r#"{ "grades": ["Y7"] }"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["invalid"], serde_json::json!(["Y7"]));
}
