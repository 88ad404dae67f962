//! Claves de traducción para mostrar un grado.
//!
//! Solo se decide qué clave y qué parámetros usar; el texto final lo arma
//! la capa de presentación.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::grades::systems::grade_definition;
use crate::models::{DkGrade, EdSystemCode, GradeId, UsGrade};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeLabel {
    pub key: &'static str,
    pub params: BTreeMap<&'static str, String>,
}

impl GradeLabel {
    fn with_number(key: &'static str, n: String) -> Self {
        GradeLabel { key, params: BTreeMap::from([("n", n)]) }
    }

    fn bare(key: &'static str) -> Self {
        GradeLabel { key, params: BTreeMap::new() }
    }
}

fn display_number(system: EdSystemCode, grade: &GradeId) -> String {
    grade_definition(system, grade)
        .map(|d| d.display_number.to_string())
        .unwrap_or_else(|| grade.to_string())
}

fn is_gymnasium(grade: &GradeId) -> bool {
    matches!(grade, GradeId::Dk(DkGrade::Gymnasium(_)))
}

fn is_kindergarten(grade: &GradeId) -> bool {
    matches!(grade, GradeId::Us(UsGrade::Kindergarten))
}

/// Etiqueta larga ("7. klasse", "Year 7", "Kindergarten").
///
/// La clave sale de `system`; un grado de otro sistema recibe la clave del
/// sistema pedido con su slug como número.
pub fn grade_label_key(system: EdSystemCode, grade: &GradeId) -> GradeLabel {
    let n = display_number(system, grade);
    match system {
        EdSystemCode::Dk if is_gymnasium(grade) => GradeLabel::with_number("grades.label_DK_gym", n),
        EdSystemCode::Dk => GradeLabel::with_number("grades.label_DK", n),
        EdSystemCode::De => GradeLabel::with_number("grades.label_DE", n),
        EdSystemCode::Uk => GradeLabel::with_number("grades.label_UK", n),
        EdSystemCode::Us if is_kindergarten(grade) => GradeLabel::bare("grades.label_US_K"),
        EdSystemCode::Us => GradeLabel::with_number("grades.label_US", n),
    }
}

/// Etiqueta corta para badges y cabeceras de tabla.
pub fn grade_label_short_key(system: EdSystemCode, grade: &GradeId) -> GradeLabel {
    let n = display_number(system, grade);
    match system {
        EdSystemCode::Dk if is_gymnasium(grade) => GradeLabel::with_number("grades.label_short_DK_gym", n),
        EdSystemCode::Dk => GradeLabel::with_number("grades.label_short_DK", n),
        EdSystemCode::De => GradeLabel::with_number("grades.label_short_DE", n),
        EdSystemCode::Uk => GradeLabel::with_number("grades.label_short_UK", n),
        EdSystemCode::Us if is_kindergarten(grade) => GradeLabel::bare("grades.label_short_US_K"),
        EdSystemCode::Us => GradeLabel::with_number("grades.label_short_US", n),
    }
}
