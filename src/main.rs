use anyhow::Result;
use clap::Parser;
use pasture_core::init_logging;
use pasture_lib::app::App;
use pasture_lib::model::config::AppConfig;
use pasture_lib::model::history::HistoryLogger;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Wolf/sheep/grass predator-prey simulation", long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// RNG seed, overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for the JSONL population and event logs
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write the population time series as CSV when the run ends
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Gzip archive of the population history written on exit
    #[arg(long)]
    archive: Option<PathBuf>,

    /// Pace ticks at the configured target_tps instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(if args.quiet { "warn" } else { "info" });

    let mut config = AppConfig::load_or_default(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let mut app = App::new(config)?;
    if let Some(dir) = &args.log_dir {
        app = app.with_logger(HistoryLogger::new_at(dir)?);
    }
    if let Some(path) = &args.archive {
        app = app.with_archive(path);
    }

    if args.realtime {
        app.run(Some(args.ticks)).await?;
    } else {
        app.run_for(args.ticks)?;
        app.shutdown.cleanup(&app)?;
    }

    if let Some(path) = &args.csv {
        app.history.export_csv(path)?;
    }

    let last = app.world.last_snapshot();
    let totals = app.world.pop_stats.totals;
    if !args.quiet {
        println!("tick {}: {}", last.tick, last);
        println!(
            "births {} / {}, starved {} / {}, sheep eaten {}",
            totals.prey_born,
            totals.predators_born,
            totals.prey_starved,
            totals.predators_starved,
            totals.prey_eaten
        );
    }
    Ok(())
}
