//! Strict schema validation of parsed course metadata
//!
//! The counterpart of the lenient parser: every declared field is checked
//! against its type and constraints, coercions are applied where declared
//! (numeric strings to integers, date-like strings to timestamps), and
//! failure is atomic with the complete set of field-level violations so
//! callers never need a second round-trip to discover them all.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::model::{MetadadosCurso, Natureza};

/// Canonical field set of the metadata schema, in form order
pub const KNOWN_FIELDS: [&str; 19] = [
    "codigo_nome",
    "natureza",
    "carga_horaria_semestral",
    "carga_horaria_semanal",
    "perfil_docente",
    "area_tematica",
    "linha_eixo_extensao_pesquisa",
    "competencias",
    "ementa",
    "objetivos",
    "objetivos_sociocomunitarios",
    "descricao_publico",
    "justificativa",
    "procedimentos_ensino",
    "temas_aprendizagem",
    "procedimentos_avaliacao",
    "bibliografia_basica",
    "bibliografia_complementar",
    "data_inicio",
];

/// What went wrong with one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    MissingField,
    WrongType { expected: &'static str },
    BelowMinimum { minimum: i64 },
    NotAllowed { allowed: &'static [&'static str] },
    UnparseableDate,
}

/// One field-level violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
}

impl Violation {
    fn missing(field: impl Into<String>) -> Self {
        Self { field: field.into(), kind: ViolationKind::MissingField }
    }

    fn wrong_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self { field: field.into(), kind: ViolationKind::WrongType { expected } }
    }

    fn below_minimum(field: impl Into<String>, minimum: i64) -> Self {
        Self { field: field.into(), kind: ViolationKind::BelowMinimum { minimum } }
    }

    fn not_allowed(field: impl Into<String>, allowed: &'static [&'static str]) -> Self {
        Self { field: field.into(), kind: ViolationKind::NotAllowed { allowed } }
    }

    fn unparseable_date(field: impl Into<String>) -> Self {
        Self { field: field.into(), kind: ViolationKind::UnparseableDate }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::MissingField => write!(f, "{}: required field is missing", self.field),
            ViolationKind::WrongType { expected } => {
                write!(f, "{}: expected {}", self.field, expected)
            }
            ViolationKind::BelowMinimum { minimum } => {
                write!(f, "{}: must be at least {}", self.field, minimum)
            }
            ViolationKind::NotAllowed { allowed } => {
                write!(f, "{}: value not allowed, expected one of [{}]", self.field, allowed.join(", "))
            }
            ViolationKind::UnparseableDate => {
                write!(f, "{}: value is not a recognizable date", self.field)
            }
        }
    }
}

/// Validation failure carrying every field-level violation found
#[derive(Debug, Error)]
#[error("Metadados do curso inválidos: {}", format_violations(.violations))]
pub struct MetadataValidationError {
    pub violations: Vec<Violation>,
}

impl MetadataValidationError {
    /// Whether any violation references the given field
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; ")
}

/// Validate a raw parsed mapping against the metadata schema.
///
/// On success returns the fully typed metadata with coercions applied; on
/// any violation fails with the complete violation set.
pub fn validate_course_metadata(
    raw: &BTreeMap<String, Value>,
) -> Result<MetadadosCurso, MetadataValidationError> {
    let mut checker = Checker { raw, violations: Vec::new() };

    let metadata = MetadadosCurso {
        codigo_nome: checker.text("codigo_nome"),
        natureza: checker.natureza("natureza"),
        carga_horaria_semestral: checker.positive_int("carga_horaria_semestral"),
        carga_horaria_semanal: checker.positive_int("carga_horaria_semanal"),
        perfil_docente: checker.text("perfil_docente"),
        area_tematica: checker.text("area_tematica"),
        linha_eixo_extensao_pesquisa: checker.text("linha_eixo_extensao_pesquisa"),
        competencias: checker.text_list("competencias"),
        ementa: checker.text_list("ementa"),
        objetivos: checker.text_list("objetivos"),
        objetivos_sociocomunitarios: checker.text_list("objetivos_sociocomunitarios"),
        descricao_publico: checker.text("descricao_publico"),
        justificativa: checker.text("justificativa"),
        procedimentos_ensino: checker.text_list("procedimentos_ensino"),
        temas_aprendizagem: checker.text_list("temas_aprendizagem"),
        procedimentos_avaliacao: checker.text_list("procedimentos_avaliacao"),
        bibliografia_basica: checker.text_list("bibliografia_basica"),
        bibliografia_complementar: checker.text_list("bibliografia_complementar"),
        data_inicio: checker.datetime("data_inicio"),
    };

    if checker.violations.is_empty() {
        Ok(metadata)
    } else {
        Err(MetadataValidationError { violations: checker.violations })
    }
}

/// Walks the raw mapping field by field, accumulating violations. Getter
/// return values are placeholders whenever a violation was recorded; the
/// assembled struct is discarded in that case.
struct Checker<'a> {
    raw: &'a BTreeMap<String, Value>,
    violations: Vec<Violation>,
}

impl Checker<'_> {
    fn text(&mut self, key: &'static str) -> String {
        match self.raw.get(key) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(_) => {
                self.violations.push(Violation::wrong_type(key, "string"));
                String::new()
            }
            None => {
                self.violations.push(Violation::missing(key));
                String::new()
            }
        }
    }

    fn text_list(&mut self, key: &'static str) -> Vec<String> {
        match self.raw.get(key) {
            Some(Value::Array(items)) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => list.push(s.trim().to_string()),
                        _ => {
                            self.violations.push(Violation::wrong_type(key, "list of strings"));
                            return Vec::new();
                        }
                    }
                }
                list
            }
            Some(_) => {
                self.violations.push(Violation::wrong_type(key, "list of strings"));
                Vec::new()
            }
            None => {
                self.violations.push(Violation::missing(key));
                Vec::new()
            }
        }
    }

    /// Integer with a minimum of 1; numeric strings are coerced
    fn positive_int(&mut self, key: &'static str) -> u32 {
        let number = match self.raw.get(key) {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(n) => n,
                None => {
                    self.violations.push(Violation::wrong_type(key, "integer"));
                    return 0;
                }
            },
            Some(Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    self.violations.push(Violation::wrong_type(key, "integer"));
                    return 0;
                }
            },
            Some(_) => {
                self.violations.push(Violation::wrong_type(key, "integer"));
                return 0;
            }
            None => {
                self.violations.push(Violation::missing(key));
                return 0;
            }
        };

        if number < 1 {
            self.violations.push(Violation::below_minimum(key, 1));
            return 0;
        }
        match u32::try_from(number) {
            Ok(n) => n,
            Err(_) => {
                self.violations.push(Violation::wrong_type(key, "integer"));
                0
            }
        }
    }

    fn natureza(&mut self, key: &'static str) -> Natureza {
        match self.raw.get(key) {
            Some(Value::String(s)) => match Natureza::parse(s) {
                Some(natureza) => natureza,
                None => {
                    self.violations.push(Violation::not_allowed(key, &Natureza::ALLOWED));
                    Natureza::Outro
                }
            },
            Some(_) => {
                self.violations.push(Violation::wrong_type(key, "string"));
                Natureza::Outro
            }
            None => {
                self.violations.push(Violation::missing(key));
                Natureza::Outro
            }
        }
    }

    fn datetime(&mut self, key: &'static str) -> DateTime<Utc> {
        match self.raw.get(key) {
            Some(Value::String(s)) => match parse_datetime(s) {
                Some(dt) => dt,
                None => {
                    self.violations.push(Violation::unparseable_date(key));
                    DateTime::<Utc>::MIN_UTC
                }
            },
            Some(_) => {
                self.violations.push(Violation::wrong_type(key, "datetime"));
                DateTime::<Utc>::MIN_UTC
            }
            None => {
                self.violations.push(Violation::missing(key));
                DateTime::<Utc>::MIN_UTC
            }
        }
    }
}

/// Accepts RFC 3339 plus the date layouts seen in source documents.
/// Naive values are taken as UTC.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    for format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}
