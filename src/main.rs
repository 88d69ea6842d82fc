use clap::Parser;
use irish_rail::utils::error::ErrorCategory;
use irish_rail::utils::{logger, validation::Validate};
use irish_rail::{CliConfig, Command, IrishRailClient, RailConfig, RailError, RecordKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    match run(&cli.command, &config).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

async fn run(command: &Command, config: &RailConfig) -> irish_rail::Result<String> {
    let client = IrishRailClient::new(config)?;

    let (records, kind) = match command {
        Command::Stations { category } => (client.list_stations(*category).await?, RecordKind::Station),
        Command::Trains { category } => (
            client.list_current_trains(*category).await?,
            RecordKind::TrainPosition,
        ),
        Command::ByName { name, minutes } => (
            client.station_schedule_by_name(name, *minutes).await?,
            RecordKind::StationData,
        ),
        Command::ByCode { code, minutes } => (
            client.station_schedule_by_code(code, *minutes).await?,
            RecordKind::StationData,
        ),
    };

    irish_rail::core::output::render(&records, kind.table(), config.format)
}

fn exit_with(e: &RailError) -> ! {
    tracing::error!("❌ Request failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.category() {
        ErrorCategory::Validation | ErrorCategory::Config => 2,
        ErrorCategory::Fetch => 3,
        ErrorCategory::Parse => 4,
        ErrorCategory::Output => 1,
    };
    std::process::exit(exit_code);
}
