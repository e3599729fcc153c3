use clap::Parser;
use lotstat::utils::{logger, validation::Validate};
use lotstat::{
    AnalyzeConfig, ChatConfig, ChatMessage, Cli, Command, ContactSubmission, CsvReportPipeline,
    LocalStorage, Logbook, RegisterConfig, ReportEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting lotstat");

    let outcome = match cli.command {
        Command::Analyze(config) => run_analysis(config).await,
        Command::Register(config) => register_contact(config).await,
        Command::Chat(config) => post_chat(config).await,
    };

    if let Err(e) = outcome {
        tracing::error!("Command failed: {}", e);
        eprintln!("error: {}", e.user_friendly_message());
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(if e.is_config_error() { 2 } else { 1 });
    }

    Ok(())
}

async fn run_analysis(config: AnalyzeConfig) -> lotstat::Result<()> {
    config.validate()?;
    tracing::debug!("Analyze config: {:?}", config);

    let monitor_enabled = config.monitor;
    let storage = LocalStorage::new();
    let pipeline = CsvReportPipeline::new(storage, config);
    let engine = ReportEngine::new_with_monitoring(pipeline, monitor_enabled);

    let report_path = engine.run().await?;
    println!("Report saved to: {}", report_path);
    Ok(())
}

async fn register_contact(config: RegisterConfig) -> lotstat::Result<()> {
    let submission =
        ContactSubmission::new(config.name, config.phone, config.email, config.group);
    let logbook = Logbook::new(LocalStorage::new(), config.log_dir);

    logbook.append_contact(&submission).await?;
    println!(
        "Thanks {}! Your registration has been recorded (group: {}).",
        submission.name, submission.group
    );
    Ok(())
}

async fn post_chat(config: ChatConfig) -> lotstat::Result<()> {
    let message = ChatMessage::new(config.author, config.message);
    let logbook = Logbook::new(LocalStorage::new(), config.log_dir);

    logbook.append_chat(&message).await?;
    println!("Message from {} posted.", message.author);
    Ok(())
}
