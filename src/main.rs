use clap::Parser;
use parking_optimiser::core::report;
use parking_optimiser::utils::logger;
use parking_optimiser::{CliConfig, EstimateFormat, ParkingOptimiser};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting parking-optimiser");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let optimiser = ParkingOptimiser::new();

    match optimiser.run(&config) {
        Ok(breakdown) => match config.format {
            EstimateFormat::Json => println!("{}", report::to_json(&breakdown)?),
            EstimateFormat::Human => println!("{}", report::format_result(&breakdown.result)),
        },
        Err(e) => {
            tracing::error!(
                "Optimisation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            // 輸出用戶友好的錯誤信息
            eprintln!("{}", report::format_error(&e));
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
