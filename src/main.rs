use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vlc_recent_cleanup::cli::Cli;
use vlc_recent_cleanup::{default_plist_path, report, CleanupConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Criteria and platform checks happen before any file I/O.
    let config = CleanupConfig::new(cli.drop_exts, cli.drop_dirs, cli.verbose)?;
    let path = match cli.file {
        Some(path) => path,
        None => default_plist_path()?,
    };

    let removed = vlc_recent_cleanup::run(&config, &path)?;

    if config.verbose {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        report::write_summary(&mut out, &removed)?;
        out.flush()?;
    }
    Ok(())
}
