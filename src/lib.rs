pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, AnalyzeConfig, ChatConfig, Cli, Command, RegisterConfig};
pub use core::{
    analyzer, engine::ReportEngine, logbook::Logbook, pipeline::CsvReportPipeline,
};
pub use domain::model::{
    AnalysisResult, ChatMessage, ContactGroup, ContactSubmission, DrawRecord, RankedEntry,
    RawTable, ReportBundle, Token,
};
pub use utils::error::{ReportError, Result};
