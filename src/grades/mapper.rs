//! Traducción de grados entre sistemas por posición (`order`).

use std::collections::BTreeSet;

use crate::grades::systems::{ed_system, grade_at_order, grade_order};
use crate::models::{EdSystemCode, GradeId};

/// Traduce un conjunto de grados de `source` a `target`.
///
/// Cada grado se empareja con el grado de `target` que tiene el mismo
/// `order`. Los grados desconocidos en `source` se ignoran y no hay
/// interpolación: si el orden no existe en `target`, ese grado se pierde.
pub fn map_grades(grades: &BTreeSet<GradeId>, source: EdSystemCode, target: EdSystemCode) -> BTreeSet<GradeId> {
    if source == target {
        return grades.clone();
    }

    grades
        .iter()
        .filter_map(|g| grade_order(source, g))
        .filter_map(|order| grade_at_order(target, order))
        .collect()
}

/// Busca el grado de `target` equivalente a `grade` (válido en `source`).
///
/// Si no hay un orden exacto se recorta al primer o último grado de
/// `target`. Devuelve `None` solo si `grade` no existe en `source`.
pub fn find_closest_grade(target: EdSystemCode, grade: &GradeId, source: EdSystemCode) -> Option<GradeId> {
    let source_order = grade_order(source, grade)?;
    if let Some(exact) = grade_at_order(target, source_order) {
        return Some(exact);
    }

    let grades = ed_system(target).grades;
    let first = grades.first()?;
    let last = grades.last()?;
    if source_order > last.order { Some(last.id) } else { Some(first.id) }
}
