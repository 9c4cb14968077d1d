//! Course submission command handler

use std::path::Path;

use anyhow::{bail, Context, Result};
use cursogen_core::config::AppConfig;
use cursogen_core::model::JobStatus;
use cursogen_core::service::{CourseService, Upload};
use tracing::info;

use crate::cli::app::ProcessArgs;

/// Handle the process command
pub async fn execute(args: ProcessArgs, config: AppConfig) -> Result<()> {
    let service = CourseService::from_config(&config).await?;

    let form = read_upload(&args.form).await?;
    let plan = read_upload(&args.plan).await?;

    info!("Submitting {} and {}", args.form.display(), args.plan.display());
    let submission = match service.submit(form, plan).await {
        Ok(submission) => submission,
        Err(err) if err.is_client_error() => {
            println!("❌ Submission rejected: {}", err);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let id = submission.id;
    println!("📄 Course accepted: {}", id);
    println!("   Generating content for every topic, this can take a while...");
    submission.task.await.context("Background generation task failed")?;

    match service.status(id).await? {
        JobStatus::Succeeded => {
            let record = service.course(id).await?;
            println!(
                "✅ Generation finished: {} modules, {} topics",
                record.curso.modulos.len(),
                record.curso.topic_count()
            );
            println!("   Inspect with: cursogen show {}", id);
            Ok(())
        }
        JobStatus::Failed { reason } => bail!("Generation failed: {}", reason),
        other => bail!("Generation ended in unexpected state: {}", other),
    }
}

async fn read_upload(path: &Path) -> Result<Upload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let filename =
        path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    Ok(Upload::new(filename, bytes))
}
