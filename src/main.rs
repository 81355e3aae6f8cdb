use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use emoji_scrub::{build_config, run, Args, ReplacementTable};

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();
    let config = build_config(&args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run(&config, ReplacementTable::builtin(), &mut out)?;
    out.flush()?;

    Ok(ExitCode::from(report.exit_code()))
}

// Diagnostics go to stderr so stdout carries only the report; RUST_LOG overrides the level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
