pub mod cli;

use crate::domain::model::ContactGroup;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lotstat")]
#[command(about = "Frequency reports over historical lottery draw sheets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a draw sheet and write a frequency report
    Analyze(AnalyzeConfig),
    /// Register contact details for report updates
    Register(RegisterConfig),
    /// Post a message to the shared chat log
    Chat(ChatConfig),
}

#[derive(Debug, Clone, Args)]
pub struct AnalyzeConfig {
    #[arg(long, help = "Path to the draw sheet CSV")]
    pub input: String,

    #[arg(long, help = "Analyze draws strictly before this date (ISO-8601)")]
    pub cutoff: NaiveDate,

    #[arg(long, default_value = "date", help = "Name of the date column")]
    pub date_column: String,

    #[arg(long, default_value = "./report", help = "Directory for the report files")]
    pub output: String,

    #[arg(long, help = "Log per-phase resource usage")]
    pub monitor: bool,
}

impl ConfigProvider for AnalyzeConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn date_column(&self) -> &str {
        &self.date_column
    }

    fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }
}

impl Validate for AnalyzeConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &["csv"])?;
        validate_path("output", &self.output)?;
        validate_non_empty_string("date_column", &self.date_column)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct RegisterConfig {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long, default_value = "none", help = "Group to join: telegram, zalo, facebook or none")]
    pub group: ContactGroup,

    #[arg(long, default_value = "./logbook", help = "Directory holding the shared logs")]
    pub log_dir: String,
}

#[derive(Debug, Clone, Args)]
pub struct ChatConfig {
    #[arg(long)]
    pub author: String,

    #[arg(long)]
    pub message: String,

    #[arg(long, default_value = "./logbook", help = "Directory holding the shared logs")]
    pub log_dir: String,
}
