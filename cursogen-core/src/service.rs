//! Submission boundary for the course pipeline
//!
//! `submit` does the synchronous part of a submission: extract text from
//! both uploads, parse, validate and persist the pending course. Artifact
//! generation then runs in a background task against the store, so callers
//! get the course id back immediately and poll its status.

use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::content::ContentGenerator;
use crate::extract::{self, ExtractError};
use crate::feedback::{record_feedback, FeedbackError};
use crate::llm::OllamaGenerator;
use crate::model::{CourseRecord, CursoData, JobStatus};
use crate::parser;
use crate::pipeline;
use crate::store::CourseStore;
use crate::validate::{self, MetadataValidationError};

/// One uploaded file, as received from the caller
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { filename: filename.into(), bytes }
    }
}

/// Why a submission was turned away
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    UnsupportedUpload(#[from] ExtractError),

    #[error(transparent)]
    InvalidMetadata(#[from] MetadataValidationError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubmitError {
    /// True when the uploads themselves were the problem, as opposed to a
    /// failure on our side
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnsupportedUpload(_) | Self::InvalidMetadata(_))
    }
}

/// An accepted submission: the stored course id plus a handle on its
/// background generation run
#[derive(Debug)]
pub struct Submission {
    pub id: Uuid,
    /// Await this to block until generation finishes; dropping it lets the
    /// run continue detached
    pub task: JoinHandle<()>,
}

pub struct CourseService {
    store: Arc<CourseStore>,
    generator: Arc<ContentGenerator>,
}

impl CourseService {
    pub fn new(store: CourseStore, generator: ContentGenerator) -> Self {
        Self { store: Arc::new(store), generator: Arc::new(generator) }
    }

    /// Wire up the production service: file-backed store plus an Ollama
    /// backend, both per the given configuration
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let store = CourseStore::open(config.data_dir.clone()).await?;
        let backend = OllamaGenerator::new(config.ollama.clone());
        let generator =
            ContentGenerator::with_config(Arc::new(backend), config.generation.clone());
        Ok(Self::new(store, generator))
    }

    /// Accept a course-registration form and a teaching plan, persist the
    /// parsed course and kick off artifact generation in the background.
    pub async fn submit(&self, form: Upload, plan: Upload) -> Result<Submission, SubmitError> {
        let form_text = extract::extract_text_from_upload(&form.filename, &form.bytes)?;
        let plan_text = extract::extract_text_from_upload(&plan.filename, &plan.bytes)?;

        let raw = parser::extract_course_metadata(&form_text);
        let metadata = validate::validate_course_metadata(&raw)?;
        let modulos = parser::extract_modulos(&plan_text);

        let record = CourseRecord::new(CursoData::new(metadata, modulos));
        let id = record.id;
        self.store.save(&record).await.map_err(SubmitError::Internal)?;
        info!(
            "Course {} submitted ({} modules, {} topics)",
            id,
            record.curso.modulos.len(),
            record.curso.topic_count()
        );

        let store = Arc::clone(&self.store);
        let generator = Arc::clone(&self.generator);
        let task = tokio::spawn(async move {
            // Failures are already persisted on the record and logged by
            // the pipeline itself.
            if let Err(err) = pipeline::process_course(&store, &generator, id).await {
                debug!("Generation run for course {} ended with error: {:#}", id, err);
            }
        });

        Ok(Submission { id, task })
    }

    /// Current state of a course's generation run
    pub async fn status(&self, id: Uuid) -> Result<JobStatus> {
        Ok(self.store.load(id).await?.status)
    }

    /// Full stored record for one course
    pub async fn course(&self, id: Uuid) -> Result<CourseRecord> {
        self.store.load(id).await
    }

    /// All stored courses, oldest first
    pub async fn list(&self) -> Result<Vec<CourseRecord>> {
        self.store.list().await
    }

    /// Attach a rating and comments to a stored course
    pub async fn feedback(
        &self,
        id: Uuid,
        rating: u8,
        comments: impl Into<String>,
    ) -> Result<CourseRecord, FeedbackError> {
        record_feedback(&self.store, id, rating, comments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::minimal_docx;
    use crate::llm::MockGenerator;
    use crate::model::Natureza;

    fn form_upload() -> Upload {
        let lines = [
            "### 1 Código e nome da disciplina",
            "MAT101 Matemática Básica",
            "### 2 Natureza",
            "Extensão",
            "### 3 Carga horária semestral",
            "40",
            "### 4 Carga horária semanal",
            "4",
            "### 5 Perfil docente",
            "Licenciado em Matemática",
            "### 6 Área temática",
            "Ciências Exatas",
            "### 7 Linha eixo de extensão e pesquisa",
            "Educação e cidadania",
            "### 8 Competências",
            "Raciocínio lógico, Abstração",
            "### 9 Ementa",
            "Aritmética, Álgebra elementar",
            "### 10 Objetivos",
            "Dominar operações básicas, Resolver equações",
            "### 11 Objetivos sociocomunitários",
            "Apoiar a comunidade escolar",
            "### 12 Descrição do público",
            "Estudantes do primeiro período",
            "### 13 Justificativa",
            "Nivelamento dos ingressantes",
            "### 14 Procedimentos de ensino-aprendizagem",
            "Aulas expositivas, Listas de exercícios",
            "### 15 Temas de aprendizagem",
            "Números reais, Equações",
            "### 16 Procedimentos de avaliação",
            "Provas, Listas",
            "### 17 Bibliografia básica",
            "IEZZI G. Fundamentos de Matemática",
            "### 18 Bibliografia complementar",
            "LIMA E. Matemática para o Ensino",
            "### 19 Data de início",
            "2026-03-01",
        ];
        Upload::new("formulario.docx", minimal_docx(&lines))
    }

    fn plan_upload() -> Upload {
        let lines = [
            "### 1 Fundamentos",
            "1.1 Operações básicas",
            "1.2 Frações",
            "### 2 Equações",
            "2.1 Equações de primeiro grau",
        ];
        Upload::new("plano.docx", minimal_docx(&lines))
    }

    #[tokio::test]
    async fn test_submit_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let store = CourseStore::open(dir.path()).await.unwrap();
        let generator = ContentGenerator::new(Arc::new(MockGenerator::echoing()));
        let service = CourseService::new(store, generator);

        let submission = service.submit(form_upload(), plan_upload()).await.unwrap();
        submission.task.await.unwrap();

        let record = service.course(submission.id).await.unwrap();
        assert_eq!(record.status, JobStatus::Succeeded);

        let metadata = &record.curso.metadata;
        assert_eq!(metadata.codigo_nome, "MAT101 Matemática Básica");
        assert_eq!(metadata.natureza, Natureza::Extensao);
        assert_eq!(metadata.carga_horaria_semestral, 40);
        assert_eq!(metadata.carga_horaria_semanal, 4);
        assert_eq!(metadata.objetivos, vec!["Dominar operações básicas", "Resolver equações"]);

        let titles: Vec<_> = record.curso.modulos.iter().map(|m| m.titulo.as_str()).collect();
        assert_eq!(titles, vec!["Fundamentos", "Equações"]);
        assert_eq!(record.curso.topic_count(), 3);
        for modulo in &record.curso.modulos {
            for nucleo in &modulo.nucleos_conceituais {
                assert!(nucleo.conteudo.is_some());
                assert!(nucleo.video_script.is_some());
                assert!(nucleo.teleprompter_text.is_some());
            }
        }
    }

    #[tokio::test]
    async fn test_submit_rejects_unsupported_file_type() {
        let dir = tempfile::tempdir().unwrap();
        let store = CourseStore::open(dir.path()).await.unwrap();
        let generator = ContentGenerator::new(Arc::new(MockGenerator::new()));
        let service = CourseService::new(store, generator);

        let err = service
            .submit(Upload::new("notas.txt", b"texto solto".to_vec()), plan_upload())
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("Tipo de arquivo não suportado"));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_metadata_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let store = CourseStore::open(dir.path()).await.unwrap();
        let generator = ContentGenerator::new(Arc::new(MockGenerator::new()));
        let service = CourseService::new(store, generator);

        let sparse_form = Upload::new(
            "formulario.docx",
            minimal_docx(&["### 1 Código e nome da disciplina", "MAT101"]),
        );
        let err = service.submit(sparse_form, plan_upload()).await.unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().starts_with("Metadados do curso inválidos"));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_and_feedback_after_generation() {
        let dir = tempfile::tempdir().unwrap();
        let store = CourseStore::open(dir.path()).await.unwrap();
        let generator = ContentGenerator::new(Arc::new(MockGenerator::echoing()));
        let service = CourseService::new(store, generator);

        let submission = service.submit(form_upload(), plan_upload()).await.unwrap();
        submission.task.await.unwrap();

        assert_eq!(service.status(submission.id).await.unwrap(), JobStatus::Succeeded);

        service.feedback(submission.id, 5, "Material excelente").await.unwrap();
        let record = service.course(submission.id).await.unwrap();
        let feedback = record.curso.feedback.unwrap();
        assert_eq!(feedback.rating, 5);
        assert_eq!(feedback.comments, "Material excelente");
    }

    #[tokio::test]
    async fn test_generation_failure_is_visible_in_status() {
        let dir = tempfile::tempdir().unwrap();
        let store = CourseStore::open(dir.path()).await.unwrap();
        let mock = MockGenerator::new();
        mock.add_error(crate::llm::LlmError::backend("ollama", "connection refused"));
        let generator = ContentGenerator::new(Arc::new(mock));
        let service = CourseService::new(store, generator);

        let submission = service.submit(form_upload(), plan_upload()).await.unwrap();
        submission.task.await.unwrap();

        match service.status(submission.id).await.unwrap() {
            JobStatus::Failed { reason } => {
                assert!(reason.contains("connection refused"));
            }
            other => panic!("expected failed status, got {:?}", other),
        }
    }
}
