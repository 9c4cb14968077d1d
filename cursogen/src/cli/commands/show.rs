//! Stored course display command handler

use anyhow::{Context, Result};
use cursogen_core::config::AppConfig;
use cursogen_core::model::NucleoConceitual;
use cursogen_core::service::CourseService;

use crate::cli::app::ShowArgs;

/// Handle the show command
pub async fn execute(args: ShowArgs, config: AppConfig) -> Result<()> {
    let service = CourseService::from_config(&config).await?;
    let record = service.course(args.id).await?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&record).context("Failed to render course as JSON")?;
        println!("{}", json);
        return Ok(());
    }

    let metadata = &record.curso.metadata;
    println!("Course: {}", metadata.codigo_nome);
    println!("Id: {}", record.id);
    println!("Submitted: {}", record.submitted_at.format("%Y-%m-%d %H:%M"));
    println!("Status: {}", record.status);
    println!("Natureza: {}", metadata.natureza);
    println!(
        "Carga horária: {}h semestral, {}h semanal",
        metadata.carga_horaria_semestral, metadata.carga_horaria_semanal
    );
    println!("Público: {}", metadata.descricao_publico);
    println!("Início: {}", metadata.data_inicio.format("%Y-%m-%d"));

    for (module_index, modulo) in record.curso.modulos.iter().enumerate() {
        println!();
        println!("Módulo {}: {}", module_index + 1, modulo.titulo);
        for (topic_index, nucleo) in modulo.nucleos_conceituais.iter().enumerate() {
            println!(
                "  {}.{} {}  [{}]",
                module_index + 1,
                topic_index + 1,
                nucleo.titulo,
                artifact_summary(nucleo)
            );
        }
    }

    if let Some(feedback) = &record.curso.feedback {
        println!();
        if feedback.comments.is_empty() {
            println!("Feedback: {}/5", feedback.rating);
        } else {
            println!("Feedback: {}/5 ({})", feedback.rating, feedback.comments);
        }
    }

    Ok(())
}

/// Which artifacts a topic already has
fn artifact_summary(nucleo: &NucleoConceitual) -> String {
    let mut present = Vec::new();
    if nucleo.conteudo.is_some() {
        present.push("conteúdo");
    }
    if nucleo.video_script.is_some() {
        present.push("roteiro");
    }
    if nucleo.teleprompter_text.is_some() {
        present.push("teleprompter");
    }
    if present.is_empty() {
        "sem artefatos".to_string()
    } else {
        present.join(", ")
    }
}
