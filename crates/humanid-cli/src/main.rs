#![doc = include_str!("../README.md")]

mod command;
mod config;
mod telemetry;

use clap::Parser;
use command::{read_values, run};
use config::{CliArgs, CliConfig, Mode};
use std::io;
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry(config.log_json)?;
    log_startup_info(&config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = if config.values.is_empty() {
        let values = read_values(io::stdin().lock()).collect::<io::Result<Vec<_>>>()?;
        run(&config, values, &mut stdout.lock(), &mut stderr.lock())?
    } else {
        run(
            &config,
            config.values.iter().cloned(),
            &mut stdout.lock(),
            &mut stderr.lock(),
        )?
    };

    tracing::debug!(
        converted = summary.converted,
        rejected = summary.rejected,
        "done"
    );
    if summary.rejected > 0 {
        anyhow::bail!(
            "{} of {} values rejected",
            summary.rejected,
            summary.rejected + summary.converted
        );
    }
    Ok(())
}

fn log_startup_info(config: &CliConfig) {
    tracing::debug!(?config, "starting");
    if config.mode == Mode::Encode && config.codec != humanid::Codec::new() {
        tracing::warn!("--case and --canonical only affect decoding");
    }
}
