pub mod aggregate;
pub mod cli;
pub mod client;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod runtime;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
