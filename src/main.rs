//! alerta-avro CLI
//!
//! Writes terminal alerts to an Avro container file

use alerta_avro::cli::{Cli, Runner};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    // Initialize logging (stderr, so `read` output stays clean)
    let level: tracing::Level = cli.log_level().into();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
