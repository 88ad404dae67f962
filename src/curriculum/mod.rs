//! Módulo `curriculum`: carga del documento estático categorías/temas/lecciones.
//!
//! Submódulos:
//! - `io`: formas crudas del JSON y lectura desde disco

pub mod io;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{Category, EdSystemCode, Lesson, Topic};
use io::RawDocument;

/// Documento que viaja dentro del binario.
const BUNDLED_CURRICULUM: &str = include_str!("../datafiles/curriculum.json");

/// Posición de una lección: (categoría, tema, lección).
type LessonPos = (usize, usize, usize);

/// Documento de curriculum ya resuelto, con índices por id.
///
/// Inmutable después de construirse; el orden de `categories` (y de sus
/// temas y lecciones) es el del documento.
#[derive(Debug, Clone)]
pub struct Curriculum {
    categories: Vec<Category>,
    category_index: HashMap<String, usize>,
    topic_index: HashMap<String, (usize, usize)>,
    // clave "tema/leccion"
    lesson_index: HashMap<String, LessonPos>,
    lesson_slug_index: HashMap<String, LessonPos>,
}

impl Curriculum {
    pub fn bundled() -> Result<Curriculum> {
        Curriculum::from_json_str(BUNDLED_CURRICULUM)
    }

    pub fn from_json_str(json: &str) -> Result<Curriculum> {
        Ok(Curriculum::from_raw(io::parse_document(json)?))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Curriculum> {
        Ok(Curriculum::from_raw(io::read_document(path)?))
    }

    pub fn from_raw(raw: RawDocument) -> Curriculum {
        let mut curriculum = Curriculum {
            categories: Vec::with_capacity(raw.categories.len()),
            category_index: HashMap::new(),
            topic_index: HashMap::new(),
            lesson_index: HashMap::new(),
            lesson_slug_index: HashMap::new(),
        };

        for (ci, rc) in raw.categories.into_iter().enumerate() {
            let mut topics = Vec::with_capacity(rc.topics.len());

            for (ti, rt) in rc.topics.into_iter().enumerate() {
                let mut lessons = Vec::with_capacity(rt.lessons.len());

                for (li, rl) in rt.lessons.into_iter().enumerate() {
                    let mut countries = BTreeMap::new();
                    for (code, info) in rl.countries {
                        match EdSystemCode::from_code(&code) {
                            Some(country) => {
                                countries.insert(country, info);
                            }
                            None => warn!(lesson = %rl.id, country = %code, "país desconocido en el curriculum, se ignora"),
                        }
                    }

                    curriculum.lesson_index.insert(format!("{}/{}", rt.id, rl.id), (ci, ti, li));
                    if curriculum.lesson_slug_index.insert(rl.id.clone(), (ci, ti, li)).is_some() {
                        warn!(lesson = %rl.id, topic = %rt.id, "id de lección repetido; el slug apunta a la última");
                    }

                    lessons.push(Lesson {
                        id: rl.id,
                        name: rl.name,
                        topic_id: rt.id.clone(),
                        category_id: rc.id.clone(),
                        countries,
                    });
                }

                if curriculum.topic_index.insert(rt.id.clone(), (ci, ti)).is_some() {
                    warn!(topic = %rt.id, "id de tema repetido; se usa el último");
                }

                topics.push(Topic {
                    id: rt.id,
                    name: rt.name,
                    description: rt.description,
                    category_id: rc.id.clone(),
                    lessons,
                });
            }

            curriculum.category_index.insert(rc.id.clone(), ci);
            curriculum.categories.push(Category {
                id: rc.id,
                name: rc.name,
                symbol: rc.symbol,
                description: rc.description,
                topics,
            });
        }

        debug!(
            categories = curriculum.categories.len(),
            topics = curriculum.topic_index.len(),
            lessons = curriculum.lesson_index.len(),
            "curriculum cargado"
        );
        curriculum
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Todos los temas en orden de documento.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.categories.iter().flat_map(|c| c.topics.iter())
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&ci| &self.categories[ci])
    }

    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topic_index.get(id).map(|&(ci, ti)| &self.categories[ci].topics[ti])
    }

    pub fn lesson(&self, topic_id: &str, lesson_id: &str) -> Option<&Lesson> {
        self.lesson_index
            .get(&format!("{}/{}", topic_id, lesson_id))
            .map(|&pos| self.lesson_at(pos))
    }

    pub fn lesson_by_slug(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lesson_slug_index.get(lesson_id).map(|&pos| self.lesson_at(pos))
    }

    pub fn lesson_count(&self) -> usize {
        self.lesson_index.len()
    }

    fn lesson_at(&self, (ci, ti, li): LessonPos) -> &Lesson {
        &self.categories[ci].topics[ti].lessons[li]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
    {
        "categories": [
            {
                "id": "geometri",
                "name": "Geometri",
                "symbol": "△",
                "description": "Former og figurer",
                "topics": [
                    {
                        "id": "trekanter",
                        "name": "Trekanter",
                        "description": "",
                        "lessons": [
                            {
                                "id": "pythagoras",
                                "name": "Pythagoras",
                                "countries": {
                                    "DK": { "grades": "8.-9. kl" },
                                    "UK": { "grades": "Y9", "notes": "KS3" },
                                    "FR": { "grades": "4e" }
                                }
                            },
                            { "id": "cosinusrelation", "name": "Cosinusrelationen" }
                        ]
                    }
                ]
            }
        ]
    }
    "#;

    #[test]
    fn builds_lookups() {
        let c = Curriculum::from_json_str(DOC).unwrap();
        assert_eq!(c.categories().len(), 1);
        assert_eq!(c.topic("trekanter").map(|t| t.category_id.as_str()), Some("geometri"));
        assert_eq!(c.lesson("trekanter", "pythagoras").map(|l| l.name.as_str()), Some("Pythagoras"));
        assert!(c.lesson("geometri", "pythagoras").is_none());
        assert_eq!(c.lesson_by_slug("cosinusrelation").map(|l| l.topic_id.as_str()), Some("trekanter"));
        assert_eq!(c.lesson_count(), 2);
    }

    #[test]
    fn unknown_countries_are_dropped() {
        let c = Curriculum::from_json_str(DOC).unwrap();
        let lesson = c.lesson_by_slug("pythagoras").unwrap();
        assert_eq!(lesson.countries.len(), 2);
        assert_eq!(lesson.grade_text(EdSystemCode::Dk), "8.-9. kl");
        assert_eq!(lesson.countries[&EdSystemCode::Uk].notes.as_deref(), Some("KS3"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Curriculum::from_json_str("{ \"categories\": 3 }").is_err());
    }

    #[test]
    fn bundled_document_loads() {
        let c = Curriculum::bundled().expect("el documento incluido debe ser válido");
        assert!(!c.categories().is_empty());
    }
}
