// Consultas de solo lectura sobre el documento y los índices por sistema.
// Nada aquí modifica estado: todas las funciones son seguras desde cualquier hilo.

use std::collections::BTreeMap;

use serde::Serialize;

use super::CurriculumIndex;
use crate::grades::all_grade_ids;
use crate::models::{Category, EdSystemCode, GradeId, Lesson, Topic};

/// Categoría con sus temas filtrados por grado.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub symbol: &'a str,
    pub description: &'a str,
    pub topics: Vec<&'a Topic>,
}

impl<'a> CategoryView<'a> {
    fn new(category: &'a Category, topics: Vec<&'a Topic>) -> Self {
        CategoryView {
            id: &category.id,
            name: &category.name,
            symbol: &category.symbol,
            description: &category.description,
            topics,
        }
    }
}

/// Fila de la tabla de pensum: lecciones por grado en una categoría.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeLessonCounts<'a> {
    pub category_id: &'a str,
    /// Solo grados con al menos una lección
    pub by_grade: BTreeMap<GradeId, usize>,
    pub total: usize,
}

impl CurriculumIndex {
    pub fn all_categories(&self) -> &[Category] {
        self.curriculum().categories()
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.curriculum().category(id)
    }

    pub fn topic_by_id(&self, id: &str) -> Option<&Topic> {
        self.curriculum().topic(id)
    }

    pub fn topics_by_category(&self, category_id: &str) -> &[Topic] {
        self.category_by_id(category_id).map(|c| c.topics.as_slice()).unwrap_or(&[])
    }

    pub fn lessons_for_topic(&self, topic_id: &str) -> &[Lesson] {
        self.topic_by_id(topic_id).map(|t| t.lessons.as_slice()).unwrap_or(&[])
    }

    pub fn lesson_by_id(&self, topic_id: &str, lesson_id: &str) -> Option<&Lesson> {
        self.curriculum().lesson(topic_id, lesson_id)
    }

    pub fn lesson_by_slug(&self, lesson_id: &str) -> Option<&Lesson> {
        self.curriculum().lesson_by_slug(lesson_id)
    }

    /// Temas con al menos una lección en `grade`, en orden de documento.
    pub fn topics_for_grade(&self, system: EdSystemCode, grade: &GradeId) -> Vec<&Topic> {
        self.system(system)
            .topics_for_grade(grade)
            .iter()
            .filter_map(|id| self.topic_by_id(id))
            .collect()
    }

    pub fn topic_grades(&self, system: EdSystemCode, topic_id: &str) -> &[GradeId] {
        self.system(system).topic_grades(topic_id)
    }

    pub fn lesson_grades(&self, system: EdSystemCode, lesson_id: &str) -> &[GradeId] {
        self.system(system).lesson_grades(lesson_id)
    }

    pub fn lesson_primary_grade(&self, system: EdSystemCode, lesson_id: &str) -> Option<GradeId> {
        self.system(system).lesson_primary_grade(lesson_id)
    }

    /// Lecciones del tema cuyo grado *primario* es `grade`.
    ///
    /// Una lección que cubre varios grados solo se cuenta en el primero.
    pub fn lessons_for_grade_and_topic(&self, system: EdSystemCode, grade: &GradeId, topic_id: &str) -> Vec<&Lesson> {
        let idx = self.system(system);
        self.lessons_for_topic(topic_id)
            .iter()
            .filter(|l| idx.lesson_primary_grade(&l.id).as_ref() == Some(grade))
            .collect()
    }

    pub fn lesson_count_for_grade_and_topic(&self, system: EdSystemCode, grade: &GradeId, topic_id: &str) -> usize {
        self.lessons_for_grade_and_topic(system, grade, topic_id).len()
    }

    /// Total de lecciones colocadas en `grade` (sumando todos sus temas).
    pub fn lesson_count_for_grade(&self, system: EdSystemCode, grade: &GradeId) -> usize {
        self.topics_for_grade(system, grade)
            .iter()
            .map(|t| self.lesson_count_for_grade_and_topic(system, grade, &t.id))
            .sum()
    }

    /// Categorías con sus temas limitados a los que tienen lecciones en `grade`.
    /// Las categorías que quedan sin temas no aparecen.
    pub fn categories_for_grade(&self, system: EdSystemCode, grade: &GradeId) -> Vec<CategoryView<'_>> {
        self.categories_for_grades(system, std::slice::from_ref(grade))
    }

    /// Igual que `categories_for_grade` pero para varios grados a la vez: un
    /// tema entra si cubre cualquiera de ellos. Sin grados se devuelve todo.
    pub fn categories_for_grades(&self, system: EdSystemCode, grades: &[GradeId]) -> Vec<CategoryView<'_>> {
        let idx = self.system(system);
        self.all_categories()
            .iter()
            .filter_map(|cat| {
                let topics: Vec<&Topic> = cat
                    .topics
                    .iter()
                    .filter(|t| grades.is_empty() || idx.topic_grades(&t.id).iter().any(|g| grades.contains(g)))
                    .collect();
                if topics.is_empty() && !grades.is_empty() {
                    None
                } else {
                    Some(CategoryView::new(cat, topics))
                }
            })
            .collect()
    }

    /// Tabla de pensum: para cada categoría, lecciones por grado del sistema.
    pub fn pensum(&self, system: EdSystemCode) -> Vec<GradeLessonCounts<'_>> {
        self.all_categories()
            .iter()
            .map(|cat| {
                let mut by_grade = BTreeMap::new();
                for grade in all_grade_ids(system) {
                    let count: usize = cat
                        .topics
                        .iter()
                        .map(|t| self.lesson_count_for_grade_and_topic(system, &grade, &t.id))
                        .sum();
                    if count > 0 {
                        by_grade.insert(grade, count);
                    }
                }
                let total = by_grade.values().sum();
                GradeLessonCounts { category_id: &cat.id, by_grade, total }
            })
            .collect()
    }
}
