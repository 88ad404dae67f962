use std::collections::HashSet;

use pretty_assertions::assert_eq;
use promath::grades::{all_grade_ids, grade_order};
use promath::index::SystemIndex;
use promath::models::{DkGrade, EdSystemCode, GradeId, UsGrade};
use promath::{Curriculum, CurriculumIndex};

fn bundled_index() -> CurriculumIndex {
    CurriculumIndex::build(Curriculum::bundled().expect("el curriculum incluido debe cargar"))
}

fn is_strictly_sorted(system: EdSystemCode, grades: &[GradeId]) -> bool {
    grades
        .windows(2)
        .all(|w| grade_order(system, &w[0]) < grade_order(system, &w[1]))
}

#[test]
fn test_topic_and_lesson_grades_are_sorted_and_unique() {
    let index = bundled_index();
    for system in EdSystemCode::ALL {
        for topic in index.curriculum().topics() {
            let grades = index.topic_grades(system, &topic.id);
            assert!(is_strictly_sorted(system, grades), "{} / {}: {:?}", system, topic.id, grades);
            for lesson in &topic.lessons {
                let lg = index.lesson_grades(system, &lesson.id);
                assert!(is_strictly_sorted(system, lg));
                assert_eq!(index.lesson_primary_grade(system, &lesson.id), lg.first().copied());
                // cada grado de lección está en el tema
                assert!(lg.iter().all(|g| grades.contains(g)));
            }
        }
    }
}

#[test]
fn test_topics_for_grade_agrees_with_topic_grades() {
    let index = bundled_index();
    for system in EdSystemCode::ALL {
        for grade in all_grade_ids(system) {
            let listed: HashSet<&str> = index.topics_for_grade(system, &grade).iter().map(|t| t.id.as_str()).collect();
            for topic in index.curriculum().topics() {
                let covers = index.topic_grades(system, &topic.id).contains(&grade);
                assert_eq!(listed.contains(topic.id.as_str()), covers, "{} {} {}", system, grade, topic.id);
            }
        }
    }
}

#[test]
fn test_primary_grade_counts_never_exceed_topic_size() {
    let index = bundled_index();
    for system in EdSystemCode::ALL {
        for topic in index.curriculum().topics() {
            let total: usize = all_grade_ids(system)
                .map(|g| index.lesson_count_for_grade_and_topic(system, &g, &topic.id))
                .sum();
            let with_grades = topic
                .lessons
                .iter()
                .filter(|l| !index.lesson_grades(system, &l.id).is_empty())
                .count();
            assert!(total <= topic.lessons.len());
            assert_eq!(total, with_grades, "{} / {}", system, topic.id);
        }
    }
}

#[test]
fn test_lessons_without_danish_grades_are_unplaced() {
    let index = bundled_index();
    for system in EdSystemCode::ALL {
        for id in ["enhedscirklen", "kombinatorik"] {
            assert!(index.lesson_grades(system, id).is_empty());
            assert_eq!(index.lesson_primary_grade(system, id), None);
        }
    }
    // enhedscirklen tiene texto UK pero el índice sale solo del texto danés
    let lesson = index.lesson_by_slug("enhedscirklen").expect("lección presente");
    assert_eq!(lesson.grade_text(EdSystemCode::Uk), "Y12-Y13");
}

#[test]
fn test_pythagoras_in_every_system() {
    let index = bundled_index();
    assert_eq!(
        index.lesson_grades(EdSystemCode::Dk, "pythagoras"),
        [GradeId::Dk(DkGrade::Klasse(8)), GradeId::Dk(DkGrade::Klasse(9))]
    );
    assert_eq!(index.lesson_grades(EdSystemCode::Uk, "pythagoras"), [GradeId::Uk(9), GradeId::Uk(10)]);
    assert_eq!(index.lesson_grades(EdSystemCode::De, "pythagoras"), [GradeId::De(9), GradeId::De(10)]);
    assert_eq!(
        index.lesson_primary_grade(EdSystemCode::Us, "pythagoras"),
        Some(GradeId::Us(UsGrade::Grade(8)))
    );
}

#[test]
fn test_kindergarten_topics() {
    let index = bundled_index();
    let topics: Vec<&str> = index
        .topics_for_grade(EdSystemCode::Us, &GradeId::Us(UsGrade::Kindergarten))
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(topics, vec!["figurer"]);
}

#[test]
fn test_categories_for_grades_has_no_duplicates() {
    let index = bundled_index();
    let grades: Vec<GradeId> = all_grade_ids(EdSystemCode::Dk).collect();
    let cats = index.categories_for_grades(EdSystemCode::Dk, &grades);
    let ids: Vec<&str> = cats.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["tal-og-algebra", "geometri", "statistik", "funktioner"]);
    for cat in &cats {
        let unique: HashSet<&str> = cat.topics.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(unique.len(), cat.topics.len());
    }
}

#[test]
fn test_categories_for_first_gymnasium_year() {
    let index = bundled_index();
    let cats = index.categories_for_grade(EdSystemCode::Dk, &GradeId::Dk(DkGrade::Gymnasium(1)));
    let summary: Vec<(&str, Vec<&str>)> = cats
        .iter()
        .map(|c| (c.id, c.topics.iter().map(|t| t.id.as_str()).collect()))
        .collect();
    assert_eq!(summary, vec![("tal-og-algebra", vec!["ligninger"]), ("geometri", vec!["trekanter"])]);
}

#[test]
fn test_pensum_totals_match_placed_lessons() {
    let index = bundled_index();
    let placed = index
        .curriculum()
        .topics()
        .flat_map(|t| t.lessons.iter())
        .filter(|l| index.lesson_primary_grade(EdSystemCode::Dk, &l.id).is_some())
        .count();
    assert_eq!(placed, 17);

    for system in EdSystemCode::ALL {
        let pensum = index.pensum(system);
        assert_eq!(pensum.len(), index.all_categories().len());
        let total: usize = pensum.iter().map(|row| row.total).sum();
        assert_eq!(total, placed, "{}", system);

        let by_grade: usize = all_grade_ids(system).map(|g| index.lesson_count_for_grade(system, &g)).sum();
        assert_eq!(by_grade, placed);
    }
}

#[test]
fn test_build_is_deterministic() {
    let curriculum = Curriculum::bundled().expect("el curriculum incluido debe cargar");
    for system in EdSystemCode::ALL {
        let a = SystemIndex::build(&curriculum, system);
        let b = SystemIndex::build(&curriculum, system);
        assert_eq!(a, b);
    }
    let index = CurriculumIndex::build(curriculum.clone());
    assert_eq!(index.system(EdSystemCode::Uk), &SystemIndex::build(&curriculum, EdSystemCode::Uk));
}

#[test]
fn test_lookups_by_id() {
    let index = bundled_index();
    assert_eq!(index.category_by_id("geometri").map(|c| c.topics.len()), Some(2));
    assert_eq!(index.topics_by_category("statistik").len(), 2);
    assert_eq!(index.lessons_for_topic("trekanter").len(), 3);
    let lesson = index.lesson_by_id("trekanter", "pythagoras").expect("lección presente");
    assert_eq!(lesson.category_id, "geometri");
    assert!(index.lesson_by_id("figurer", "pythagoras").is_none());
    assert!(index.category_by_id("nope").is_none());
}
