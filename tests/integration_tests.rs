use lotstat::utils::validation::Validate;
use lotstat::{
    AnalyzeConfig, ChatMessage, ContactGroup, ContactSubmission, CsvReportPipeline, LocalStorage,
    Logbook, ReportEngine, ReportError,
};
use tempfile::TempDir;

fn write_sheet(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn analyze_config(input: String, output: String, cutoff: &str) -> AnalyzeConfig {
    AnalyzeConfig {
        input,
        cutoff: cutoff.parse().unwrap(),
        date_column: "date".to_string(),
        output,
        monitor: false,
    }
}

const SAMPLE_SHEET: &str = "\
date,first,second
2023-01-01,07,12
2023-01-02,07,33
2023-01-03,12,07
2023-01-04,45,45
2023-01-05,07,12
";

#[tokio::test]
async fn test_end_to_end_analysis() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_sheet(&temp_dir, "draws.csv", SAMPLE_SHEET);
    let output = temp_dir.path().join("report").to_str().unwrap().to_string();

    let config = analyze_config(input, output.clone(), "2023-01-05");
    assert!(config.validate().is_ok());

    let pipeline = CsvReportPipeline::new(LocalStorage::new(), config);
    let engine = ReportEngine::new(pipeline);

    let report_path = engine.run().await.unwrap();
    assert_eq!(report_path, format!("{}/report.csv", output));

    // Report table: row before cutoff only, ranked with first-occurrence ties
    let report = std::fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "lot,count,probability_percent");
    assert_eq!(lines[1], "07,3,37.50");
    assert_eq!(lines[2], "12,2,25.00");
    assert_eq!(lines[3], "45,2,25.00");
    assert_eq!(lines[4], "33,1,12.50");
    assert_eq!(lines.len(), 5);

    // Summary
    let summary_path = format!("{}/summary.json", output);
    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(summary_path).unwrap()).unwrap();
    assert_eq!(summary["cutoff"], "2023-01-05");
    assert_eq!(summary["records_analyzed"], 4);
    assert_eq!(summary["total_tokens"], 8);
    assert_eq!(summary["top3"], serde_json::json!(["07", "12", "45"]));
}

#[tokio::test]
async fn test_end_to_end_with_monitoring() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_sheet(&temp_dir, "draws.csv", SAMPLE_SHEET);
    let output = temp_dir.path().join("report").to_str().unwrap().to_string();

    let config = analyze_config(input, output, "2023-01-05");
    let pipeline = CsvReportPipeline::new(LocalStorage::new(), config);
    let engine = ReportEngine::new_with_monitoring(pipeline, true);

    assert!(engine.run().await.is_ok());
}

#[tokio::test]
async fn test_missing_date_column_aborts_with_schema_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_sheet(&temp_dir, "draws.csv", "day,first\n2023-01-01,07\n");
    let output = temp_dir.path().join("report").to_str().unwrap().to_string();

    let config = analyze_config(input, output.clone(), "2023-01-05");
    let pipeline = CsvReportPipeline::new(LocalStorage::new(), config);
    let engine = ReportEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, ReportError::SchemaError { .. }));

    // no partial report
    assert!(!std::path::Path::new(&format!("{}/report.csv", output)).exists());
}

#[tokio::test]
async fn test_cutoff_before_all_records_produces_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_sheet(&temp_dir, "draws.csv", SAMPLE_SHEET);
    let output = temp_dir.path().join("report").to_str().unwrap().to_string();

    let config = analyze_config(input, output.clone(), "2020-01-01");
    let pipeline = CsvReportPipeline::new(LocalStorage::new(), config);
    let engine = ReportEngine::new(pipeline);

    let report_path = engine.run().await.unwrap();

    let report = std::fs::read_to_string(report_path).unwrap();
    assert_eq!(report.lines().count(), 1); // header only

    let summary: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(format!("{}/summary.json", output)).unwrap(),
    )
    .unwrap();
    assert_eq!(summary["total_tokens"], 0);
    assert_eq!(summary["top3"], serde_json::json!([]));
}

#[tokio::test]
async fn test_malformed_rows_and_cells_are_absorbed() {
    let sheet = "\
date,first,second
2023-01-01,7,abc
bad-date,99,99
2023-01-02,07,123
2023-01-03,,5
";
    let temp_dir = TempDir::new().unwrap();
    let input = write_sheet(&temp_dir, "draws.csv", sheet);
    let output = temp_dir.path().join("report").to_str().unwrap().to_string();

    let config = analyze_config(input, output, "2023-02-01");
    let pipeline = CsvReportPipeline::new(LocalStorage::new(), config);
    let engine = ReportEngine::new(pipeline);

    let report_path = engine.run().await.unwrap();
    let report = std::fs::read_to_string(report_path).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    // surviving tokens: "7" -> 07, "07" -> 07, "5" -> 05; the bad-date row,
    // "abc", "123" and the empty cell are all dropped
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "07,2,66.67");
    assert_eq!(lines[2], "05,1,33.33");
}

#[tokio::test]
async fn test_report_table_caps_at_twenty_entries() {
    let mut sheet = String::from("date,first\n");
    for lot in 0..30 {
        sheet.push_str(&format!("2023-01-01,{:02}\n", lot));
    }

    let temp_dir = TempDir::new().unwrap();
    let input = write_sheet(&temp_dir, "draws.csv", &sheet);
    let output = temp_dir.path().join("report").to_str().unwrap().to_string();

    let config = analyze_config(input, output, "2023-02-01");
    let pipeline = CsvReportPipeline::new(LocalStorage::new(), config);
    let engine = ReportEngine::new(pipeline);

    let report_path = engine.run().await.unwrap();
    let report = std::fs::read_to_string(report_path).unwrap();
    assert_eq!(report.lines().count(), 21); // header + top 20
}

#[tokio::test]
async fn test_logbook_end_to_end_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logbook").to_str().unwrap().to_string();
    let logbook = Logbook::new(LocalStorage::new(), log_dir.clone());

    logbook
        .append_contact(&ContactSubmission::new(
            "An".to_string(),
            Some("0901234567".to_string()),
            None,
            ContactGroup::Telegram,
        ))
        .await
        .unwrap();
    logbook
        .append_chat(&ChatMessage::new("an".to_string(), "any tips?".to_string()))
        .await
        .unwrap();
    logbook
        .append_chat(&ChatMessage::new("binh".to_string(), "watch 07".to_string()))
        .await
        .unwrap();

    // a fresh handle over the same directory sees the appended entries
    let reopened = Logbook::new(LocalStorage::new(), log_dir);
    let contacts = reopened.contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "An");

    let messages = reopened.chat_log().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].author, "an");
    assert_eq!(messages[1].message, "watch 07");
}
