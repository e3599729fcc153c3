use crate::core::analyzer;
use crate::core::{AnalysisResult, ConfigProvider, Pipeline, RawTable, ReportBundle, Storage};
use crate::utils::error::{ReportError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Report file written under the configured output directory.
pub const REPORT_FILE: &str = "report.csv";
pub const SUMMARY_FILE: &str = "summary.json";

/// Reads a draw sheet from disk, runs the frequency analysis and writes the
/// report artifacts through the storage port.
pub struct CsvReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[derive(Serialize)]
struct ReportSummary<'a> {
    cutoff: NaiveDate,
    records_analyzed: usize,
    total_tokens: usize,
    top3: &'a [crate::domain::model::Token],
}

fn render_ranking_csv(analysis: &AnalysisResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["lot", "count", "probability_percent"])?;
    for entry in analysis.display_ranking() {
        writer.write_record([
            entry.token.to_string(),
            entry.count.to_string(),
            format!("{:.2}", entry.probability_percent),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| ReportError::ProcessingError {
        message: format!("failed to flush ranking table: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| ReportError::ProcessingError {
        message: format!("ranking table is not valid UTF-8: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvReportPipeline<S, C> {
    async fn extract(&self) -> Result<RawTable> {
        tracing::debug!("Reading draw sheet from {}", self.config.input_path());

        // flexible: real draw sheets are often ragged
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(self.config.input_path())?;

        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(RawTable { headers, rows })
    }

    async fn transform(&self, table: RawTable) -> Result<ReportBundle> {
        let records = analyzer::validate_and_parse(&table, self.config.date_column())?;
        tracing::debug!("{} of {} rows carry a usable date", records.len(), table.rows.len());

        let filtered = analyzer::filter_before(records, self.config.cutoff());
        let records_analyzed = filtered.len();
        let analysis = analyzer::compute(&filtered);

        if analysis.is_empty() {
            tracing::warn!(
                "no valid lots found before {}, report will be empty",
                self.config.cutoff()
            );
        }

        let csv_output = render_ranking_csv(&analysis)?;
        let summary = ReportSummary {
            cutoff: self.config.cutoff(),
            records_analyzed,
            total_tokens: analysis.total_tokens,
            top3: &analysis.top3,
        };
        let summary_json = serde_json::to_string_pretty(&summary)?;

        Ok(ReportBundle {
            analysis,
            records_analyzed,
            csv_output,
            summary_json,
        })
    }

    async fn load(&self, bundle: ReportBundle) -> Result<String> {
        let report_path = format!("{}/{}", self.config.output_path(), REPORT_FILE);
        let summary_path = format!("{}/{}", self.config.output_path(), SUMMARY_FILE);

        self.storage
            .write_file(&report_path, bundle.csv_output.as_bytes())
            .await?;
        self.storage
            .write_file(&summary_path, bundle.summary_json.as_bytes())
            .await?;

        tracing::debug!("Report written to {} and {}", report_path, summary_path);
        Ok(report_path)
    }
}
