//! Módulo `index`: índices por sistema y consultas sobre ellos.
//!
//! `CurriculumIndex` es la raíz: se construye una vez al arrancar con el
//! documento y los cuatro `SystemIndex`, y después solo se lee.

mod builder;
mod queries;

pub use builder::SystemIndex;
pub use queries::{CategoryView, GradeLessonCounts};

use tracing::info;

use crate::curriculum::Curriculum;
use crate::models::EdSystemCode;

#[derive(Debug, Clone)]
pub struct CurriculumIndex {
    curriculum: Curriculum,
    systems: [SystemIndex; 4],
}

impl CurriculumIndex {
    pub fn build(curriculum: Curriculum) -> CurriculumIndex {
        let systems = EdSystemCode::ALL.map(|system| SystemIndex::build(&curriculum, system));
        info!(
            categories = curriculum.categories().len(),
            lessons = curriculum.lesson_count(),
            "índices de curriculum construidos para DK, DE, UK y US"
        );
        CurriculumIndex { curriculum, systems }
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn system(&self, code: EdSystemCode) -> &SystemIndex {
        &self.systems[code.index()]
    }
}
