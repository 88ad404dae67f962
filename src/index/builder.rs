use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::curriculum::Curriculum;
use crate::grades::{grade_order, map_grades, parse_dk_grades};
use crate::models::{EdSystemCode, GradeId};

/// Índices derivados del curriculum para un sistema.
///
/// Las lecciones se colocan siempre a partir del texto danés, que es la
/// fuente de verdad, traducido al sistema del índice.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemIndex {
    pub system: EdSystemCode,
    /// grado -> ids de tema, en orden de documento
    pub topics_by_grade: BTreeMap<GradeId, Vec<String>>,
    /// id de lección -> grados ordenados (puede estar vacío)
    pub lesson_grades: HashMap<String, Vec<GradeId>>,
    /// id de lección -> grado de menor orden; ausente si la lección no tiene grados
    pub lesson_primary_grade: HashMap<String, GradeId>,
    /// id de tema -> unión ordenada de los grados de sus lecciones
    pub topic_grades: HashMap<String, Vec<GradeId>>,
}

/// Ordena por la posición del grado en `system`.
fn sorted_by_order(grades: BTreeSet<GradeId>, system: EdSystemCode) -> Vec<GradeId> {
    let mut v: Vec<GradeId> = grades.into_iter().collect();
    v.sort_by_key(|g| grade_order(system, g));
    v
}

impl SystemIndex {
    pub fn build(curriculum: &Curriculum, system: EdSystemCode) -> SystemIndex {
        let mut index = SystemIndex {
            system,
            topics_by_grade: BTreeMap::new(),
            lesson_grades: HashMap::new(),
            lesson_primary_grade: HashMap::new(),
            topic_grades: HashMap::new(),
        };
        let mut without_grades = 0usize;

        // Primera pasada: grados por lección. Con ids repetidos gana la última.
        for lesson in curriculum.topics().flat_map(|t| t.lessons.iter()) {
            let dk = parse_dk_grades(lesson.grade_text(EdSystemCode::Dk));
            let grades = sorted_by_order(map_grades(&dk, EdSystemCode::Dk, system), system);
            match grades.first() {
                Some(primary) => {
                    index.lesson_primary_grade.insert(lesson.id.clone(), *primary);
                }
                None => {
                    // una lección repetida no debe heredar el primario de la anterior
                    index.lesson_primary_grade.remove(&lesson.id);
                    without_grades += 1;
                }
            }
            index.lesson_grades.insert(lesson.id.clone(), grades);
        }

        // Segunda pasada: los grados de un tema son la unión de las entradas
        // finales de sus lecciones.
        for topic in curriculum.topics() {
            let topic_set: BTreeSet<GradeId> = topic
                .lessons
                .iter()
                .flat_map(|l| index.lesson_grades(&l.id).iter().copied())
                .collect();

            let sorted = sorted_by_order(topic_set, system);
            for g in &sorted {
                index.topics_by_grade.entry(*g).or_default().push(topic.id.clone());
            }
            index.topic_grades.insert(topic.id.clone(), sorted);
        }

        debug!(
            system = %system,
            grades = index.topics_by_grade.len(),
            lessons = index.lesson_grades.len(),
            without_grades,
            "índice construido"
        );
        index
    }

    pub fn topics_for_grade(&self, grade: &GradeId) -> &[String] {
        self.topics_by_grade.get(grade).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn topic_grades(&self, topic_id: &str) -> &[GradeId] {
        self.topic_grades.get(topic_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lesson_grades(&self, lesson_id: &str) -> &[GradeId] {
        self.lesson_grades.get(lesson_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn lesson_primary_grade(&self, lesson_id: &str) -> Option<GradeId> {
        self.lesson_primary_grade.get(lesson_id).copied()
    }
}
