//! Módulo `grades`: todo lo que sabe de grados escolares.
//!
//! Submódulos:
//! - `parsers`: texto libre -> conjunto de grados
//! - `systems`: registro estático de los 4 sistemas
//! - `mapper`: traducción entre sistemas
//! - `labels`: claves de traducción para mostrar un grado

pub mod labels;
pub mod mapper;
pub mod parsers;
pub mod systems;

pub use labels::{grade_label_key, grade_label_short_key, GradeLabel};
pub use mapper::{find_closest_grade, map_grades};
pub use parsers::{parse_de_grades, parse_dk_grades, parse_grades, parse_uk_grades, parse_us_grades};
pub use systems::{
    all_grade_ids, default_ed_system_for_locale, ed_system, grade_at_order, grade_definition, grade_order,
    is_valid_grade_id, EdSystemDefinition, GradeDefinition, GradeGroupDefinition, ED_SYSTEMS,
};
