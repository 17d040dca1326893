use anyhow::Context;
use clap::Parser;
use parking_optimiser::core::report;
use parking_optimiser::utils::{logger, validation::Validate};
use parking_optimiser::{BatchConfig, OutputFormat, ParkingOptimiser};

#[derive(Parser)]
#[command(name = "batch-optimiser")]
#[command(about = "Estimate parking spaces for every lot in a TOML batch file")]
struct Args {
    /// Path to TOML batch file
    #[arg(short, long, default_value = "parking-batch.toml")]
    config: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show the lots that would be evaluated without evaluating them
    #[arg(long)]
    dry_run: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading batch from: {}", args.config);

    let config = match BatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load batch file '{}': {}", args.config, e);
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Batch validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }

    if args.dry_run {
        tracing::info!("DRY RUN MODE - no estimates will be computed");
        display_plan(&config);
        return Ok(());
    }

    let outcomes = ParkingOptimiser::new().run_batch(&config);

    let rendered = match args.format {
        OutputFormat::Human => report::batch_to_text(&outcomes),
        OutputFormat::Json => report::batch_to_json(&outcomes)?,
        OutputFormat::Csv => report::batch_to_csv(&outcomes)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write report to '{}'", path))?;
            tracing::info!("Report saved to: {}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn display_plan(config: &BatchConfig) {
    println!("Batch: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        println!("  {}", description);
    }
    if let Some(default) = &config.batch.default_objective {
        println!("  Default objective: {}", default);
    }

    println!();
    for lot in &config.lots {
        let state = if lot.is_enabled() { "run " } else { "skip" };
        println!(
            "  [{}] {}: area={} aisle={}x{} objective={}",
            state,
            lot.name,
            lot.area,
            lot.aisle_width,
            lot.aisle_length,
            config.objective_for(lot).unwrap_or("-")
        );
    }

    println!();
    println!(
        "{} of {} lot(s) enabled.",
        config.enabled_lots().count(),
        config.lots.len()
    );
}
