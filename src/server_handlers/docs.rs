use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::{EdSystemRequest, GradesRequest};

pub async fn help_handler() -> impl Responder {
    let ed_system_example = EdSystemRequest { code: "UK".to_string() };
    let grades_example = GradesRequest { grades: vec!["7kl".to_string(), "8kl".to_string()] };

    let help = json!({
        "description": "API de solo lectura sobre el curriculum de Promath. El sistema escolar activo sale de la cookie 'ed-system' o, si no hay, del parámetro 'locale' (da, en, de).",
        "endpoints": {
            "GET /systems": "los cuatro sistemas escolares (DK, DE, UK, US) con grados y grupos",
            "GET /systems/{code}": "un sistema",
            "GET /categories": "categorías; si hay cookie 'grade' solo las que tienen temas en esos grados",
            "GET /categories/{id}": "una categoría con los grados de cada tema",
            "GET /topics/{id}": "un tema con sus lecciones y grados",
            "GET /lessons/{slug}": "una lección con sus grados y grado primario",
            "GET /grades": "grupos de grados del sistema activo con conteos",
            "GET /grades/{grade}": "contenido de un grado; redirige (307) si el grado es de otro sistema",
            "GET /pensum": "lecciones por categoría y grado",
            "POST /preferences/ed-system": "guarda el sistema escolar en la cookie 'ed-system'",
            "POST /preferences/grades": "guarda los grados en la cookie 'grade' (lista vacía la borra)"
        },
        "ed_system_example": ed_system_example,
        "grades_example": grades_example,
        "get_example_query": "/grades/7kl?locale=da",
        "note": "Los ids de grado dependen del sistema: '7kl' y '1g' (DK), '7' (DE), 'Y7' (UK), 'K' y 'G7' (US)."
    });

    HttpResponse::Ok().json(help)
}
