//! Registro estático de los cuatro sistemas escolares.
//!
//! Cada sistema tiene 13 grados con `order` denso 0..=12; el mapper depende
//! de esa densidad para emparejar grados entre sistemas por posición.

use serde::Serialize;

use crate::models::{DkGrade, EdSystemCode, GradeId, UsGrade};

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDefinition {
    pub id: GradeId,
    pub order: usize,
    pub display_number: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct GradeGroupDefinition {
    /// Clave de traducción, p. ej. `dk_indskoling`
    pub key: &'static str,
    pub grades: &'static [GradeId],
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdSystemDefinition {
    pub code: EdSystemCode,
    pub name_key: &'static str,
    pub grades: &'static [GradeDefinition],
    pub groups: &'static [GradeGroupDefinition],
    pub default_for_locales: &'static [&'static str],
}

const fn grade(id: GradeId, order: usize, display_number: &'static str) -> GradeDefinition {
    GradeDefinition { id, order, display_number }
}

const fn kl(n: u8) -> GradeId {
    GradeId::Dk(DkGrade::Klasse(n))
}

const fn gym(n: u8) -> GradeId {
    GradeId::Dk(DkGrade::Gymnasium(n))
}

const fn us(n: u8) -> GradeId {
    GradeId::Us(UsGrade::Grade(n))
}

const KINDERGARTEN: GradeId = GradeId::Us(UsGrade::Kindergarten);

// Dinamarca: 0. kl - 9. kl + 1.g - 3.g
static DK_GRADES: [GradeDefinition; 13] = [
    grade(kl(0), 0, "0"),
    grade(kl(1), 1, "1"),
    grade(kl(2), 2, "2"),
    grade(kl(3), 3, "3"),
    grade(kl(4), 4, "4"),
    grade(kl(5), 5, "5"),
    grade(kl(6), 6, "6"),
    grade(kl(7), 7, "7"),
    grade(kl(8), 8, "8"),
    grade(kl(9), 9, "9"),
    grade(gym(1), 10, "1.g"),
    grade(gym(2), 11, "2.g"),
    grade(gym(3), 12, "3.g"),
];

static DK_GROUPS: [GradeGroupDefinition; 4] = [
    GradeGroupDefinition { key: "dk_indskoling", grades: &[kl(0), kl(1), kl(2), kl(3)] },
    GradeGroupDefinition { key: "dk_mellemtrin", grades: &[kl(4), kl(5), kl(6)] },
    GradeGroupDefinition { key: "dk_udskoling", grades: &[kl(7), kl(8), kl(9)] },
    GradeGroupDefinition { key: "dk_gymnasium", grades: &[gym(1), gym(2), gym(3)] },
];

static DK: EdSystemDefinition = EdSystemDefinition {
    code: EdSystemCode::Dk,
    name_key: "edSystem.dk",
    grades: &DK_GRADES,
    groups: &DK_GROUPS,
    default_for_locales: &["da"],
};

// Alemania G9: Klasse 1-13
static DE_GRADES: [GradeDefinition; 13] = [
    grade(GradeId::De(1), 0, "1"),
    grade(GradeId::De(2), 1, "2"),
    grade(GradeId::De(3), 2, "3"),
    grade(GradeId::De(4), 3, "4"),
    grade(GradeId::De(5), 4, "5"),
    grade(GradeId::De(6), 5, "6"),
    grade(GradeId::De(7), 6, "7"),
    grade(GradeId::De(8), 7, "8"),
    grade(GradeId::De(9), 8, "9"),
    grade(GradeId::De(10), 9, "10"),
    grade(GradeId::De(11), 10, "11"),
    grade(GradeId::De(12), 11, "12"),
    grade(GradeId::De(13), 12, "13"),
];

static DE_GROUPS: [GradeGroupDefinition; 4] = [
    GradeGroupDefinition { key: "de_grundschule", grades: &[GradeId::De(1), GradeId::De(2), GradeId::De(3), GradeId::De(4)] },
    GradeGroupDefinition { key: "de_unterstufe", grades: &[GradeId::De(5), GradeId::De(6)] },
    GradeGroupDefinition { key: "de_mittelstufe", grades: &[GradeId::De(7), GradeId::De(8), GradeId::De(9), GradeId::De(10)] },
    GradeGroupDefinition { key: "de_oberstufe", grades: &[GradeId::De(11), GradeId::De(12), GradeId::De(13)] },
];

static DE: EdSystemDefinition = EdSystemDefinition {
    code: EdSystemCode::De,
    name_key: "edSystem.de",
    grades: &DE_GRADES,
    groups: &DE_GROUPS,
    default_for_locales: &["de"],
};

// Reino Unido: Year 1-13
static UK_GRADES: [GradeDefinition; 13] = [
    grade(GradeId::Uk(1), 0, "1"),
    grade(GradeId::Uk(2), 1, "2"),
    grade(GradeId::Uk(3), 2, "3"),
    grade(GradeId::Uk(4), 3, "4"),
    grade(GradeId::Uk(5), 4, "5"),
    grade(GradeId::Uk(6), 5, "6"),
    grade(GradeId::Uk(7), 6, "7"),
    grade(GradeId::Uk(8), 7, "8"),
    grade(GradeId::Uk(9), 8, "9"),
    grade(GradeId::Uk(10), 9, "10"),
    grade(GradeId::Uk(11), 10, "11"),
    grade(GradeId::Uk(12), 11, "12"),
    grade(GradeId::Uk(13), 12, "13"),
];

static UK_GROUPS: [GradeGroupDefinition; 5] = [
    GradeGroupDefinition { key: "uk_ks1", grades: &[GradeId::Uk(1), GradeId::Uk(2)] },
    GradeGroupDefinition { key: "uk_ks2", grades: &[GradeId::Uk(3), GradeId::Uk(4), GradeId::Uk(5), GradeId::Uk(6)] },
    GradeGroupDefinition { key: "uk_ks3", grades: &[GradeId::Uk(7), GradeId::Uk(8), GradeId::Uk(9)] },
    GradeGroupDefinition { key: "uk_ks4", grades: &[GradeId::Uk(10), GradeId::Uk(11)] },
    GradeGroupDefinition { key: "uk_ks5", grades: &[GradeId::Uk(12), GradeId::Uk(13)] },
];

static UK: EdSystemDefinition = EdSystemDefinition {
    code: EdSystemCode::Uk,
    name_key: "edSystem.uk",
    grades: &UK_GRADES,
    groups: &UK_GROUPS,
    default_for_locales: &["en"],
};

// Estados Unidos: K - Grade 12
static US_GRADES: [GradeDefinition; 13] = [
    grade(KINDERGARTEN, 0, "K"),
    grade(us(1), 1, "1"),
    grade(us(2), 2, "2"),
    grade(us(3), 3, "3"),
    grade(us(4), 4, "4"),
    grade(us(5), 5, "5"),
    grade(us(6), 6, "6"),
    grade(us(7), 7, "7"),
    grade(us(8), 8, "8"),
    grade(us(9), 9, "9"),
    grade(us(10), 10, "10"),
    grade(us(11), 11, "11"),
    grade(us(12), 12, "12"),
];

static US_GROUPS: [GradeGroupDefinition; 3] = [
    GradeGroupDefinition { key: "us_elementary", grades: &[KINDERGARTEN, us(1), us(2), us(3), us(4), us(5)] },
    GradeGroupDefinition { key: "us_middle", grades: &[us(6), us(7), us(8)] },
    GradeGroupDefinition { key: "us_high", grades: &[us(9), us(10), us(11), us(12)] },
];

static US: EdSystemDefinition = EdSystemDefinition {
    code: EdSystemCode::Us,
    name_key: "edSystem.us",
    grades: &US_GRADES,
    groups: &US_GROUPS,
    default_for_locales: &[],
};

/// Los cuatro sistemas, en el orden de `EdSystemCode::ALL`.
pub static ED_SYSTEMS: [&EdSystemDefinition; 4] = [&DK, &DE, &UK, &US];

pub fn ed_system(code: EdSystemCode) -> &'static EdSystemDefinition {
    ED_SYSTEMS[code.index()]
}

pub fn grade_definition(code: EdSystemCode, id: &GradeId) -> Option<&'static GradeDefinition> {
    ed_system(code).grades.iter().find(|g| g.id == *id)
}

/// Posición del grado dentro del sistema. `None` cuando el grado no
/// pertenece a `code` (incluye cualquier grado de otro sistema).
pub fn grade_order(code: EdSystemCode, id: &GradeId) -> Option<usize> {
    grade_definition(code, id).map(|g| g.order)
}

pub fn grade_at_order(code: EdSystemCode, order: usize) -> Option<GradeId> {
    ed_system(code).grades.iter().find(|g| g.order == order).map(|g| g.id)
}

/// Valida un slug en bruto (p. ej. el segmento de URL `/grades/7kl`).
pub fn is_valid_grade_id(code: EdSystemCode, slug: &str) -> bool {
    GradeId::parse(code, slug).is_some()
}

pub fn all_grade_ids(code: EdSystemCode) -> impl Iterator<Item = GradeId> {
    ed_system(code).grades.iter().map(|g| g.id)
}

/// Sistema por defecto de un locale ("da" -> DK, "de" -> DE, "en" -> UK); DK si no hay ninguno.
pub fn default_ed_system_for_locale(locale: &str) -> EdSystemCode {
    ED_SYSTEMS
        .iter()
        .find(|s| s.default_for_locales.iter().any(|l| *l == locale))
        .map(|s| s.code)
        .unwrap_or(EdSystemCode::Dk)
}
