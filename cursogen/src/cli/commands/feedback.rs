//! Course feedback command handler

use anyhow::Result;
use cursogen_core::config::AppConfig;
use cursogen_core::service::CourseService;

use crate::cli::app::FeedbackArgs;

/// Handle the feedback command
pub async fn execute(args: FeedbackArgs, config: AppConfig) -> Result<()> {
    let service = CourseService::from_config(&config).await?;

    match service.feedback(args.id, args.rating, args.comments).await {
        Ok(record) => {
            println!(
                "✅ Feedback recorded for {} ({}/5)",
                record.curso.metadata.codigo_nome, args.rating
            );
            Ok(())
        }
        Err(err) if err.is_client_error() => {
            println!("❌ {}", err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
