use clap::Parser;
use tracing::debug;

use crate::runtime::AppContext;

use super::types::{Cli, Commands, ResultSummary};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    let app = AppContext::new();

    match cli.command {
        Commands::Inspect { input } => {
            let result = app
                .result_service()
                .load(&input)
                .map_err(|error| error.to_string())?;
            print_json(&ResultSummary::from(&result))?;
        }
        Commands::Median {
            input,
            metric,
            step,
        } => {
            let result = app
                .result_service()
                .load(&input)
                .map_err(|error| error.to_string())?;
            let report = app
                .median_service()
                .report(&result, step, &metric)
                .map_err(|error| error.to_string())?;
            print_json(&report)?;
        }
        Commands::Fetch {
            test_id,
            config,
            output,
        } => {
            let config = app
                .fetch_service()
                .config(config.as_deref())
                .map_err(|error| error.to_string())?;
            debug!(base_url = %config.base_url, "using client configuration");
            let result = match output {
                Some(output) => {
                    let raw = app
                        .fetch_service()
                        .fetch_raw(config, &test_id)
                        .map_err(|error| error.to_string())?;
                    app.result_service()
                        .save_raw(&output, &raw)
                        .map_err(|error| error.to_string())?;
                    app.result_service()
                        .decode(&raw)
                        .map_err(|error| error.to_string())?
                }
                None => app
                    .fetch_service()
                    .fetch(config, &test_id)
                    .map_err(|error| error.to_string())?,
            };
            print_json(&ResultSummary::from(&result))?;
        }
    }

    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}
