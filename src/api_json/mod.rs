use serde::{Deserialize, Serialize};

use crate::grades::{ed_system, grade_label_key, grade_label_short_key, GradeLabel};
use crate::index::CurriculumIndex;
use crate::models::{EdSystemCode, GradeId, Lesson, Topic};

/// Cuerpo de `POST /preferences/ed-system`
///
/// ```json
/// { "code": "UK" }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct EdSystemRequest {
    pub code: String,
}

/// Cuerpo de `POST /preferences/grades`
///
/// ```json
/// { "grades": ["7kl", "8kl"] }
/// ```
///
/// Una lista vacía borra la preferencia.
#[derive(Debug, Serialize, Deserialize)]
pub struct GradesRequest {
    #[serde(default)]
    pub grades: Vec<String>,
}

pub fn parse_ed_system_request(json_str: &str) -> Result<EdSystemRequest, serde_json::Error> {
    serde_json::from_str::<EdSystemRequest>(json_str)
}

pub fn parse_grades_request(json_str: &str) -> Result<GradesRequest, serde_json::Error> {
    serde_json::from_str::<GradesRequest>(json_str)
}

/// Grado con su etiqueta y conteos dentro del sistema activo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDto {
    pub id: GradeId,
    pub order: usize,
    pub label: GradeLabel,
    pub short_label: GradeLabel,
    pub topic_count: usize,
    pub lesson_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeGroupDto {
    pub key: &'static str,
    pub grades: Vec<GradeDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDto<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub topic_id: &'a str,
    pub category_id: &'a str,
    pub grades: &'a [GradeId],
    pub primary_grade: Option<GradeId>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDto<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub category_id: &'a str,
    pub grades: &'a [GradeId],
    pub lessons: Vec<LessonDto<'a>>,
}

/// Tema resumido (sin lecciones) para listados de categoría.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummaryDto<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub grades: &'a [GradeId],
    pub lesson_count: usize,
}

pub fn lesson_dto<'a>(index: &'a CurriculumIndex, system: EdSystemCode, lesson: &'a Lesson) -> LessonDto<'a> {
    LessonDto {
        id: &lesson.id,
        name: &lesson.name,
        topic_id: &lesson.topic_id,
        category_id: &lesson.category_id,
        grades: index.lesson_grades(system, &lesson.id),
        primary_grade: index.lesson_primary_grade(system, &lesson.id),
    }
}

pub fn topic_dto<'a>(index: &'a CurriculumIndex, system: EdSystemCode, topic: &'a Topic) -> TopicDto<'a> {
    TopicDto {
        id: &topic.id,
        name: &topic.name,
        description: &topic.description,
        category_id: &topic.category_id,
        grades: index.topic_grades(system, &topic.id),
        lessons: topic.lessons.iter().map(|l| lesson_dto(index, system, l)).collect(),
    }
}

pub fn topic_summary_dto<'a>(index: &'a CurriculumIndex, system: EdSystemCode, topic: &'a Topic) -> TopicSummaryDto<'a> {
    TopicSummaryDto {
        id: &topic.id,
        name: &topic.name,
        grades: index.topic_grades(system, &topic.id),
        lesson_count: topic.lessons.len(),
    }
}

/// Grupos del sistema con, para cada grado, cuántos temas y lecciones tiene.
pub fn grade_groups(index: &CurriculumIndex, system: EdSystemCode) -> Vec<GradeGroupDto> {
    let def = ed_system(system);
    def.groups
        .iter()
        .map(|group| GradeGroupDto {
            key: group.key,
            grades: group
                .grades
                .iter()
                .filter_map(|g| grade_dto(index, system, g))
                .collect(),
        })
        .collect()
}

pub fn grade_dto(index: &CurriculumIndex, system: EdSystemCode, grade: &GradeId) -> Option<GradeDto> {
    let def = crate::grades::grade_definition(system, grade)?;
    Some(GradeDto {
        id: def.id,
        order: def.order,
        label: grade_label_key(system, grade),
        short_label: grade_label_short_key(system, grade),
        topic_count: index.topics_for_grade(system, grade).len(),
        lesson_count: index.lesson_count_for_grade(system, grade),
    })
}
