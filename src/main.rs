mod cli;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console::style;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if let Some(filter) = log_filter(std::env::var("RUST_LOG").ok().as_deref()) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Build the log filter from `RUST_LOG` directives. Logging stays off when
/// the variable is unset or unparseable.
fn log_filter(directives: Option<&str>) -> Option<EnvFilter> {
    EnvFilter::try_new(directives?).ok()
}

fn run(cli: &Cli) -> Result<()> {
    let (table, options) = cli.resolve()?;
    tracing::info!("Rendering {} rows as {} table", table.rows().len(), options.style);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(table.render_with(&options).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
