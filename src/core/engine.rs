use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a report pipeline through its three phases.
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::default(),
        }
    }

    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Reading draw sheet...");
        let table = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} rows with {} columns",
            table.rows.len(),
            table.headers.len()
        );
        self.monitor.log_phase("extract");

        tracing::info!("Analyzing lot frequencies...");
        let bundle = self.pipeline.transform(table).await?;
        tracing::info!(
            "Ranked {} lots from {} valid tokens across {} records",
            bundle.analysis.ranked.len(),
            bundle.analysis.total_tokens,
            bundle.records_analyzed
        );
        self.monitor.log_phase("transform");

        let picks: Vec<String> = bundle.analysis.top3.iter().map(ToString::to_string).collect();

        tracing::info!("Writing report...");
        let report_path = self.pipeline.load(bundle).await?;
        self.monitor.log_phase("load");
        self.monitor.log_final_stats();

        if picks.is_empty() {
            println!("No data available before the chosen cutoff.");
        } else {
            println!("Today's picks: {}", picks.join(", "));
        }

        Ok(report_path)
    }
}
