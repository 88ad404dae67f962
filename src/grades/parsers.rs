//! Parsers de texto libre de grados, uno por sistema.
//!
//! El texto viene del documento de curriculum y puede estar mal escrito o
//! vacío: ningún parser falla, lo que no se reconoce da un conjunto vacío.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{DkGrade, EdSystemCode, GradeId, UsGrade};

/// Compila la expresión una sola vez. Los patrones son literales del módulo.
fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("patrón de grados inválido"))
}

/// Los números demasiado largos saturan y luego quedan fuera del rango válido.
fn parse_number(digits: &str) -> u32 {
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Expande `start..=end` recortado a `min..=max`.
fn clamped_range(start: u32, end: u32, min: u32, max: u32) -> impl Iterator<Item = u8> {
    (start.max(min)..=end.min(max)).map(|n| n as u8)
}

fn range_captures(re: &Regex, text: &str) -> Option<(u32, u32)> {
    let caps = re.captures(text)?;
    Some((parse_number(&caps[1]), parse_number(&caps[2])))
}

fn single_capture(re: &Regex, text: &str) -> Option<u32> {
    let caps = re.captures(text)?;
    Some(parse_number(&caps[1]))
}

const GYMNASIUM_KEYWORDS: [&str; 3] = ["gymnasium", "gymnasie", "gym"];

/// Texto danés: "5.-6. kl", "7. klasse", "1.g", "gymnasium"...
pub fn parse_dk_grades(text: &str) -> BTreeSet<GradeId> {
    static GYM_TOKEN: OnceLock<Regex> = OnceLock::new();
    static RANGE: OnceLock<Regex> = OnceLock::new();
    static SINGLE: OnceLock<Regex> = OnceLock::new();

    let mut out = BTreeSet::new();
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return out;
    }

    if GYMNASIUM_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
        let mut matched = false;
        for m in cached(&GYM_TOKEN, r"([0-9])\.?\s*g").captures_iter(&normalized) {
            matched = true;
            let n = parse_number(&m[1]);
            if (1..=3).contains(&n) {
                out.insert(GradeId::Dk(DkGrade::Gymnasium(n as u8)));
            }
        }
        if !matched {
            out.extend((1..=3).map(|n| GradeId::Dk(DkGrade::Gymnasium(n))));
        }
        return out;
    }

    if let Some((start, end)) = range_captures(cached(&RANGE, r"([0-9]+)\.\s*-\s*([0-9]+)\."), &normalized) {
        out.extend(clamped_range(start, end, 0, 9).map(|n| GradeId::Dk(DkGrade::Klasse(n))));
        return out;
    }

    if let Some(n) = single_capture(cached(&SINGLE, r"([0-9]+)\.\s*(kl|klasse)"), &normalized) {
        if n <= 9 {
            out.insert(GradeId::Dk(DkGrade::Klasse(n as u8)));
        }
    }
    out
}

/// Texto británico: "Y7", "Year 3-Year 4", "y10-y11".
pub fn parse_uk_grades(text: &str) -> BTreeSet<GradeId> {
    static RANGE: OnceLock<Regex> = OnceLock::new();
    static SINGLE: OnceLock<Regex> = OnceLock::new();

    let mut out = BTreeSet::new();
    let normalized = text.trim();
    if normalized.is_empty() {
        return out;
    }

    if let Some((start, end)) = range_captures(
        cached(&RANGE, r"(?i)(?:Y|Year\s*)([0-9]+)\s*-\s*(?:Y|Year\s*)([0-9]+)"),
        normalized,
    ) {
        out.extend(clamped_range(start, end, 1, 13).map(GradeId::Uk));
        return out;
    }

    if let Some(n) = single_capture(cached(&SINGLE, r"(?i)(?:Y|Year\s*)([0-9]+)"), normalized) {
        if (1..=13).contains(&n) {
            out.insert(GradeId::Uk(n as u8));
        }
    }
    out
}

/// Texto estadounidense: "K", "K-4", "Kindergarten", "Grade 3-8", "5".
pub fn parse_us_grades(text: &str) -> BTreeSet<GradeId> {
    static KINDERGARTEN_WORD: OnceLock<Regex> = OnceLock::new();
    static K_WORD: OnceLock<Regex> = OnceLock::new();
    static K_RANGE: OnceLock<Regex> = OnceLock::new();
    static RANGE: OnceLock<Regex> = OnceLock::new();
    static SINGLE: OnceLock<Regex> = OnceLock::new();

    let mut out = BTreeSet::new();
    let normalized = text.trim();
    if normalized.is_empty() {
        return out;
    }

    // "K" solo cuenta en mayúscula; "kindergarten" en cualquier caso.
    // Límites de palabra ASCII: una letra no ASCII pegada no impide la coincidencia.
    let mentions_kindergarten = cached(&KINDERGARTEN_WORD, r"(?i)(?-u:\b)kindergarten(?-u:\b)").is_match(normalized)
        || cached(&K_WORD, r"(?-u:\b)K(?-u:\b)").is_match(normalized);
    if mentions_kindergarten {
        out.insert(GradeId::Us(UsGrade::Kindergarten));
        if let Some(end) = single_capture(cached(&K_RANGE, r"K\s*-\s*([0-9]+)"), normalized) {
            out.extend(clamped_range(1, end, 1, 12).map(|n| GradeId::Us(UsGrade::Grade(n))));
        }
        return out;
    }

    if let Some((start, end)) = range_captures(
        cached(&RANGE, r"(?i)(?:Grade\s*)?([0-9]+)\s*-\s*(?:Grade\s*)?([0-9]+)"),
        normalized,
    ) {
        out.extend(clamped_range(start, end, 1, 12).map(|n| GradeId::Us(UsGrade::Grade(n))));
        return out;
    }

    if let Some(n) = single_capture(cached(&SINGLE, r"(?i)(?:Grade\s*)?([0-9]+)"), normalized) {
        if (1..=12).contains(&n) {
            out.insert(GradeId::Us(UsGrade::Grade(n as u8)));
        }
    }
    out
}

/// Texto alemán: "Klasse 5-6", "7", "11-13".
pub fn parse_de_grades(text: &str) -> BTreeSet<GradeId> {
    static RANGE: OnceLock<Regex> = OnceLock::new();
    static SINGLE: OnceLock<Regex> = OnceLock::new();

    let mut out = BTreeSet::new();
    let normalized = text.trim();
    if normalized.is_empty() {
        return out;
    }

    if let Some((start, end)) = range_captures(
        cached(&RANGE, r"(?i)(?:Klasse\s*)?([0-9]+)\s*-\s*(?:Klasse\s*)?([0-9]+)"),
        normalized,
    ) {
        out.extend(clamped_range(start, end, 1, 13).map(GradeId::De));
        return out;
    }

    if let Some(n) = single_capture(cached(&SINGLE, r"(?i)(?:Klasse\s*)?([0-9]+)"), normalized) {
        if (1..=13).contains(&n) {
            out.insert(GradeId::De(n as u8));
        }
    }
    out
}

/// Despacha al parser del sistema indicado.
pub fn parse_grades(system: EdSystemCode, text: &str) -> BTreeSet<GradeId> {
    match system {
        EdSystemCode::Dk => parse_dk_grades(text),
        EdSystemCode::De => parse_de_grades(text),
        EdSystemCode::Uk => parse_uk_grades(text),
        EdSystemCode::Us => parse_us_grades(text),
    }
}
