// Estructuras de datos principales

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Los cuatro sistemas escolares soportados. Se serializan como "DK", "DE", "UK", "US".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EdSystemCode {
    Dk,
    De,
    Uk,
    Us,
}

/// Los países del documento de curriculum usan los mismos códigos que los sistemas.
pub type CountryCode = EdSystemCode;

impl EdSystemCode {
    pub const ALL: [EdSystemCode; 4] = [EdSystemCode::Dk, EdSystemCode::De, EdSystemCode::Uk, EdSystemCode::Us];

    pub fn as_str(&self) -> &'static str {
        match self {
            EdSystemCode::Dk => "DK",
            EdSystemCode::De => "DE",
            EdSystemCode::Uk => "UK",
            EdSystemCode::Us => "US",
        }
    }

    /// Código exacto ("DK", "DE", ...). Cualquier otra cosa devuelve `None`.
    pub fn from_code(code: &str) -> Option<EdSystemCode> {
        EdSystemCode::ALL.into_iter().find(|c| c.as_str() == code)
    }

    /// Posición estable dentro de `ALL` (usada para indexar arrays por sistema).
    pub fn index(&self) -> usize {
        match self {
            EdSystemCode::Dk => 0,
            EdSystemCode::De => 1,
            EdSystemCode::Uk => 2,
            EdSystemCode::Us => 3,
        }
    }
}

impl fmt::Display for EdSystemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trin danés: 0.-9. klasse y 1.-3. g (gymnasium).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DkGrade {
    Klasse(u8),
    Gymnasium(u8),
}

/// Grado estadounidense: Kindergarten o Grade 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UsGrade {
    Kindergarten,
    Grade(u8),
}

/// Identificador de grado con el sistema incluido en el tipo.
///
/// Dos grados de sistemas distintos nunca son iguales; para compararlos hay
/// que pasar por `grades::mapper`. El orden derivado coincide con el `order`
/// del registro dentro de cada sistema.
///
/// El slug (Display / Serialize) es el mismo que usan las URLs:
/// `"7kl"`, `"1g"`, `"5"`, `"Y7"`, `"K"`, `"G7"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GradeId {
    Dk(DkGrade),
    De(u8),
    Uk(u8),
    Us(UsGrade),
}

impl GradeId {
    pub fn system(&self) -> EdSystemCode {
        match self {
            GradeId::Dk(_) => EdSystemCode::Dk,
            GradeId::De(_) => EdSystemCode::De,
            GradeId::Uk(_) => EdSystemCode::Uk,
            GradeId::Us(_) => EdSystemCode::Us,
        }
    }

    /// Resuelve un slug dentro de un sistema. Solo acepta los slugs exactos
    /// del registro (`"07kl"` o `"y7"` no son válidos).
    pub fn parse(system: EdSystemCode, slug: &str) -> Option<GradeId> {
        crate::grades::systems::ed_system(system)
            .grades
            .iter()
            .map(|g| g.id)
            .find(|id| id.to_string() == slug)
    }
}

impl fmt::Display for GradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeId::Dk(DkGrade::Klasse(n)) => write!(f, "{}kl", n),
            GradeId::Dk(DkGrade::Gymnasium(n)) => write!(f, "{}g", n),
            GradeId::De(n) => write!(f, "{}", n),
            GradeId::Uk(n) => write!(f, "Y{}", n),
            GradeId::Us(UsGrade::Kindergarten) => f.write_str("K"),
            GradeId::Us(UsGrade::Grade(n)) => write!(f, "G{}", n),
        }
    }
}

impl Serialize for GradeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Texto libre de grados de un país, tal como viene del documento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryGradeInfo {
    pub grades: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub name: String,
    pub topic_id: String,
    pub category_id: String,
    pub countries: BTreeMap<CountryCode, CountryGradeInfo>,
}

impl Lesson {
    /// Texto de grados para un país; vacío si el país no está en el documento.
    pub fn grade_text(&self, country: CountryCode) -> &str {
        self.countries.get(&country).map(|c| c.grades.as_str()).unwrap_or("")
    }
}
