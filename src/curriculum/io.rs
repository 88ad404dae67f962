use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::CountryGradeInfo;

// Formas crudas del JSON: categorías -> temas -> lecciones.
// Los países se leen como mapa libre para no rechazar códigos desconocidos.

#[derive(Debug, Deserialize)]
pub struct RawDocument {
    pub categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
pub struct RawCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<RawTopic>,
}

#[derive(Debug, Deserialize)]
pub struct RawTopic {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<RawLesson>,
}

#[derive(Debug, Deserialize)]
pub struct RawLesson {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub countries: HashMap<String, CountryGradeInfo>,
}

pub fn parse_document(json: &str) -> Result<RawDocument> {
    Ok(serde_json::from_str::<RawDocument>(json)?)
}

pub fn read_document<P: AsRef<Path>>(path: P) -> Result<RawDocument> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    parse_document(&text)
}
