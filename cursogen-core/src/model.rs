//! Domain model for course documents and their generated content

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nature of the course offering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Natureza {
    #[serde(rename = "Extensão")]
    Extensao,
    #[serde(rename = "Aperfeiçoamento")]
    Aperfeicoamento,
    Outro,
}

impl Natureza {
    /// Accepted values, exactly as they appear in source documents
    pub const ALLOWED: [&'static str; 3] = ["Extensão", "Aperfeiçoamento", "Outro"];

    /// Parse a document value; membership is exact apart from surrounding
    /// whitespace
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Extensão" => Some(Self::Extensao),
            "Aperfeiçoamento" => Some(Self::Aperfeicoamento),
            "Outro" => Some(Self::Outro),
            _ => None,
        }
    }
}

impl fmt::Display for Natureza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extensao => write!(f, "Extensão"),
            Self::Aperfeicoamento => write!(f, "Aperfeiçoamento"),
            Self::Outro => write!(f, "Outro"),
        }
    }
}

/// Validated course metadata from the registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadadosCurso {
    /// Course code and name
    pub codigo_nome: String,

    /// Nature of the course
    pub natureza: Natureza,

    /// Semester workload in hours, at least 1
    pub carga_horaria_semestral: u32,

    /// Weekly workload in hours, at least 1
    pub carga_horaria_semanal: u32,

    /// Instructor profile
    pub perfil_docente: String,

    /// Thematic area of the course
    pub area_tematica: String,

    /// Research/extension track
    pub linha_eixo_extensao_pesquisa: String,

    /// Competencies to be developed
    pub competencias: Vec<String>,

    /// Syllabus key terms
    pub ementa: Vec<String>,

    /// Learning objectives
    pub objetivos: Vec<String>,

    /// Socio-community objectives
    pub objetivos_sociocomunitarios: Vec<String>,

    /// Description of the target audience
    pub descricao_publico: String,

    /// Rationale for the course
    pub justificativa: String,

    /// Teaching and learning procedures
    pub procedimentos_ensino: Vec<String>,

    /// Learning themes
    pub temas_aprendizagem: Vec<String>,

    /// Evaluation procedures
    pub procedimentos_avaliacao: Vec<String>,

    /// Basic bibliography
    pub bibliografia_basica: Vec<String>,

    /// Complementary bibliography
    pub bibliografia_complementar: Vec<String>,

    /// Course start date
    pub data_inicio: DateTime<Utc>,
}

/// A conceptual nucleus: the smallest content unit of a teaching plan,
/// target of all content generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NucleoConceitual {
    /// Topic title from the plan
    pub titulo: String,

    /// Generated educational content
    pub conteudo: Option<String>,

    /// Generated video script
    pub video_script: Option<String>,

    /// Generated teleprompter text
    pub teleprompter_text: Option<String>,
}

impl NucleoConceitual {
    /// Create a topic with empty generated fields
    pub fn new(titulo: String) -> Self {
        Self { titulo, conteudo: None, video_script: None, teleprompter_text: None }
    }
}

/// A top-level grouping of topics within a course plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modulo {
    /// Module title from the plan heading
    pub titulo: String,

    /// Topics in document order
    pub nucleos_conceituais: Vec<NucleoConceitual>,
}

impl Modulo {
    /// Create a module with no topics yet
    pub fn new(titulo: String) -> Self {
        Self { titulo, nucleos_conceituais: Vec::new() }
    }
}

/// Feedback recorded against a generated course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    /// Rating from 1 to 5
    pub rating: u8,

    /// Free-form comments
    pub comments: String,

    /// When the feedback was recorded
    pub submitted_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(rating: u8, comments: String) -> Self {
        Self { rating, comments, submitted_at: Utc::now() }
    }
}

/// The aggregate course document: metadata plus all modules and topics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursoData {
    /// Validated course metadata
    pub metadata: MetadadosCurso,

    /// Modules in plan order
    pub modulos: Vec<Modulo>,

    /// Feedback, once recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl CursoData {
    pub fn new(metadata: MetadadosCurso, modulos: Vec<Modulo>) -> Self {
        Self { metadata, modulos, feedback: None }
    }

    /// Total number of topics across all modules
    pub fn topic_count(&self) -> usize {
        self.modulos.iter().map(|m| m.nucleos_conceituais.len()).sum()
    }
}

/// Lifecycle of a background generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed { reason: String },
}

impl JobStatus {
    /// Whether the run has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed { .. })
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Running => write!(f, "running"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

/// Persistence envelope for one submitted course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course identifier, also the storage key
    pub id: Uuid,

    /// When the course was submitted
    pub submitted_at: DateTime<Utc>,

    /// State of the generation run
    pub status: JobStatus,

    /// The course document itself
    pub curso: CursoData,
}

impl CourseRecord {
    /// Create a pending record for a freshly validated course
    pub fn new(curso: CursoData) -> Self {
        Self { id: Uuid::new_v4(), submitted_at: Utc::now(), status: JobStatus::Pending, curso }
    }
}

/// Builders shared by test modules across the crate
#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::TimeZone;

    use super::*;

    pub(crate) fn metadados() -> MetadadosCurso {
        MetadadosCurso {
            codigo_nome: "MAT101 Matemática Básica".to_string(),
            natureza: Natureza::Extensao,
            carga_horaria_semestral: 40,
            carga_horaria_semanal: 4,
            perfil_docente: "Licenciado em Matemática".to_string(),
            area_tematica: "Ciências Exatas".to_string(),
            linha_eixo_extensao_pesquisa: "Educação e cidadania".to_string(),
            competencias: vec!["Raciocínio lógico".to_string()],
            ementa: vec!["Aritmética".to_string(), "Álgebra elementar".to_string()],
            objetivos: vec![
                "Dominar operações básicas".to_string(),
                "Resolver equações".to_string(),
            ],
            objetivos_sociocomunitarios: vec!["Apoiar a comunidade escolar".to_string()],
            descricao_publico: "Estudantes do primeiro período".to_string(),
            justificativa: "Nivelamento dos ingressantes".to_string(),
            procedimentos_ensino: vec!["Aulas expositivas".to_string()],
            temas_aprendizagem: vec!["Números reais".to_string()],
            procedimentos_avaliacao: vec!["Provas".to_string(), "Listas".to_string()],
            bibliografia_basica: vec!["IEZZI, G. Fundamentos de Matemática".to_string()],
            bibliografia_complementar: vec!["LIMA, E. Matemática para o Ensino".to_string()],
            data_inicio: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    /// Two modules, three topics, nothing generated yet
    pub(crate) fn curso() -> CursoData {
        let mut fundamentos = Modulo::new("Fundamentos".to_string());
        fundamentos.nucleos_conceituais.push(NucleoConceitual::new("Operações básicas".to_string()));
        fundamentos.nucleos_conceituais.push(NucleoConceitual::new("Frações".to_string()));
        let mut equacoes = Modulo::new("Equações".to_string());
        equacoes
            .nucleos_conceituais
            .push(NucleoConceitual::new("Equações de primeiro grau".to_string()));
        CursoData::new(metadados(), vec![fundamentos, equacoes])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natureza_parse_allowed_values() {
        assert_eq!(Natureza::parse("Extensão"), Some(Natureza::Extensao));
        assert_eq!(Natureza::parse("  Aperfeiçoamento "), Some(Natureza::Aperfeicoamento));
        assert_eq!(Natureza::parse("Outro"), Some(Natureza::Outro));
        assert_eq!(Natureza::parse("Graduação"), None);
    }

    #[test]
    fn test_natureza_display_round_trips_through_parse() {
        for value in Natureza::ALLOWED {
            let parsed = Natureza::parse(value).unwrap();
            assert_eq!(parsed.to_string(), value);
        }
    }

    #[test]
    fn test_new_topic_has_no_generated_content() {
        let nucleo = NucleoConceitual::new("Topic A".to_string());
        assert!(nucleo.conteudo.is_none());
        assert!(nucleo.video_script.is_none());
        assert!(nucleo.teleprompter_text.is_none());
    }

    #[test]
    fn test_job_status_terminality() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Failed { reason: "x".into() }.is_terminal());
    }
}
