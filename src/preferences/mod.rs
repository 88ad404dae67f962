//! Preferencias del usuario: sistema escolar y grados elegidos.
//!
//! El front guarda ambas en cookies (`ed-system` y `grade`). Aquí solo se
//! interpretan los valores; leer y escribir la cookie es cosa del handler.

use crate::grades::{default_ed_system_for_locale, find_closest_grade};
use crate::models::{EdSystemCode, GradeId};

pub const ED_SYSTEM_COOKIE: &str = "ed-system";
pub const GRADE_COOKIE: &str = "grade";

/// Vigencia de las cookies de preferencias (1 año).
pub const COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

/// Sistema activo: la cookie si tiene un código válido, si no el del locale.
pub fn resolve_ed_system(cookie: Option<&str>, locale: &str) -> EdSystemCode {
    cookie
        .and_then(EdSystemCode::from_code)
        .unwrap_or_else(|| default_ed_system_for_locale(locale))
}

/// Separa el valor de la cookie `grade` ("7kl,8kl"), descartando entradas vacías.
pub fn parse_grade_cookie(raw: &str) -> Vec<String> {
    raw.split(',').filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Grados de la cookie que son válidos en `system`; el resto se ignora.
pub fn grades_from_cookie(raw: &str, system: EdSystemCode) -> Vec<GradeId> {
    parse_grade_cookie(raw)
        .iter()
        .filter_map(|slug| GradeId::parse(system, slug))
        .collect()
}

/// Valor a guardar en la cookie `grade`. `None` significa borrar la cookie.
pub fn format_grade_cookie(grades: &[GradeId]) -> Option<String> {
    if grades.is_empty() {
        return None;
    }
    Some(grades.iter().map(|g| g.to_string()).collect::<Vec<_>>().join(","))
}

/// Resultado de interpretar un slug de grado que llega por URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeResolution {
    /// El slug es un grado del sistema activo
    Valid(GradeId),
    /// El slug es de otro sistema (el usuario cambió de sistema): redirigir
    Redirect(GradeId),
    NotFound,
}

/// Valida `slug` en `system`; si no vale, busca el sistema al que pertenece
/// y devuelve el grado más cercano en `system`.
pub fn resolve_grade_slug(system: EdSystemCode, slug: &str) -> GradeResolution {
    if let Some(grade) = GradeId::parse(system, slug) {
        return GradeResolution::Valid(grade);
    }

    for source in EdSystemCode::ALL.into_iter().filter(|s| *s != system) {
        if let Some(foreign) = GradeId::parse(source, slug) {
            if let Some(closest) = find_closest_grade(system, &foreign, source) {
                return GradeResolution::Redirect(closest);
            }
        }
    }
    GradeResolution::NotFound
}
