//! Generation status command handler

use anyhow::Result;
use cursogen_core::config::AppConfig;
use cursogen_core::model::CourseRecord;
use cursogen_core::service::CourseService;

use crate::cli::app::StatusArgs;

/// Handle the status command
pub async fn execute(args: StatusArgs, config: AppConfig) -> Result<()> {
    let service = CourseService::from_config(&config).await?;

    match args.id {
        Some(id) => {
            let record = service.course(id).await?;
            print_line(&record);
        }
        None => {
            let records = service.list().await?;
            if records.is_empty() {
                println!("No courses stored yet");
                return Ok(());
            }
            for record in records {
                print_line(&record);
            }
        }
    }

    Ok(())
}

fn print_line(record: &CourseRecord) {
    println!(
        "{}  {}  {}  {}",
        record.id,
        record.submitted_at.format("%Y-%m-%d %H:%M"),
        record.status,
        record.curso.metadata.codigo_nome
    );
}
