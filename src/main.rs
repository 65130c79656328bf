use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use msys_which::{run_which, Args, Env, HostProbe};
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Logging is off unless asked for, stdout carries only matched paths.
    let env_filter = EnvFilter::try_from_env("WHICH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(env_filter),
        )
        .init();

    let env = Env::from_process();
    let output = io::stdout().lock();
    let mut output = BufWriter::new(output);

    let status = run_which(&args, &env, HostProbe, &mut output)?;
    output.flush()?;

    Ok(status.into())
}
