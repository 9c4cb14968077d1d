use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "cursogen",
    version,
    about = "Cursogen - Generate university course content from registration documents",
    long_about = "Cursogen takes a course registration form and a teaching plan, extracts and \
                  validates the course structure, and generates educational content, video \
                  scripts and teleprompter texts for every topic through a local LLM."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit course documents and generate all content
    #[command(about = "Submit a registration form and teaching plan, then generate all content")]
    Process(ProcessArgs),

    /// Check generation status
    #[command(about = "Show the generation status of one course, or of all stored courses")]
    Status(StatusArgs),

    /// Show a stored course
    #[command(about = "Print a stored course with its generated content")]
    Show(ShowArgs),

    /// Rate a generated course
    #[command(about = "Record a rating and comments for a generated course")]
    Feedback(FeedbackArgs),
}

#[derive(Parser, Debug)]
pub struct ProcessArgs {
    /// Course registration form (PDF or DOCX)
    #[arg(help = "Path to the course registration form")]
    pub form: PathBuf,

    /// Teaching plan (PDF or DOCX)
    #[arg(help = "Path to the teaching plan")]
    pub plan: PathBuf,
}

#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Course id; omit to list every stored course
    #[arg(help = "Course id to check; omit to list all")]
    pub id: Option<Uuid>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Course id
    pub id: Uuid,

    /// Print the raw stored record as JSON
    #[arg(long, help = "Emit the full record as JSON instead of a summary")]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct FeedbackArgs {
    /// Course id
    pub id: Uuid,

    /// Rating from 1 to 5
    #[arg(help = "Rating from 1 (poor) to 5 (excellent)")]
    pub rating: u8,

    /// Free-form comments
    #[arg(long, default_value = "", help = "Free-form comments about the generated course")]
    pub comments: String,
}
