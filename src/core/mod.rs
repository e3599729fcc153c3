pub mod analyzer;
pub mod engine;
pub mod logbook;
pub mod pipeline;

pub use crate::domain::model::{AnalysisResult, RankedEntry, RawTable, ReportBundle, Token};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
