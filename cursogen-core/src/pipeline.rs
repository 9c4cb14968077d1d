//! Background generation run for one submitted course
//!
//! Walks every module and topic in document order and fills in the three
//! artifacts per topic. The run is fail-fast: the first backend failure
//! aborts it, the record is marked failed and no partial artifact reaches
//! the store.

use anyhow::Result;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::content::{ContentGenerator, GenerationError};
use crate::model::{CursoData, JobStatus, Modulo};
use crate::store::CourseStore;

/// Run generation for a stored course and persist the outcome.
///
/// The record moves Pending -> Running -> Succeeded or Failed, with each
/// transition written to the store so observers always see current state.
pub async fn process_course(
    store: &CourseStore,
    generator: &ContentGenerator,
    id: Uuid,
) -> Result<()> {
    let mut record = store.load(id).await?;
    record.status = JobStatus::Running;
    store.save(&record).await?;
    info!("Generating artifacts for course {} ({} topics)", id, record.curso.topic_count());

    match generate_artifacts(generator, &record.curso).await {
        Ok(curso) => {
            record.curso = curso;
            record.status = JobStatus::Succeeded;
            store.save(&record).await?;
            info!("Course {} generation succeeded", id);
            Ok(())
        }
        Err(err) => {
            record.status = JobStatus::Failed { reason: err.to_string() };
            store.save(&record).await?;
            error!("Course {} generation failed: {}", id, err);
            Err(err.into())
        }
    }
}

/// Produce a copy of the course with all artifacts filled in.
///
/// Within one topic the order is content, then video script, then
/// teleprompter text, and the teleprompter prompt reuses the content
/// generated moments before instead of requesting it again.
async fn generate_artifacts(
    generator: &ContentGenerator,
    curso: &CursoData,
) -> Result<CursoData, GenerationError> {
    let metadata = &curso.metadata;
    let mut modulos = Vec::with_capacity(curso.modulos.len());

    for modulo in &curso.modulos {
        let mut nucleos = Vec::with_capacity(modulo.nucleos_conceituais.len());
        for nucleo in &modulo.nucleos_conceituais {
            let conteudo = generator.generate_conteudo(metadata, modulo, nucleo).await?;
            let video_script = generator.generate_video_script(metadata, modulo, nucleo).await?;
            let teleprompter = generator
                .generate_teleprompter(metadata, modulo, nucleo, &conteudo)
                .await?;
            debug!("Generated all artifacts for topic '{}'", nucleo.titulo);

            let mut generated = nucleo.clone();
            generated.conteudo = Some(conteudo);
            generated.video_script = Some(video_script);
            generated.teleprompter_text = Some(teleprompter);
            nucleos.push(generated);
        }
        modulos.push(Modulo { titulo: modulo.titulo.clone(), nucleos_conceituais: nucleos });
    }

    Ok(CursoData { metadata: curso.metadata.clone(), modulos, feedback: curso.feedback.clone() })
}
