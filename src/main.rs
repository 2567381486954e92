use std::path::PathBuf;

use clap::Parser;
use repomirror::{AppError, MirrorConfig};

#[derive(Parser)]
#[command(name = "repomirror")]
#[command(version)]
#[command(
    about = "Mirror every repository of a GitLab group into private Bitbucket repositories",
    long_about = None
)]
struct Cli {
    /// Read environment variables from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
    /// Directory for transient mirror clones
    #[arg(long, value_name = "DIR")]
    work_dir: Option<PathBuf>,
    /// Append-only failure log (default: error.txt)
    #[arg(long, value_name = "PATH")]
    error_log: Option<PathBuf>,
    /// Seconds to pause after each mirrored repository
    #[arg(long, value_name = "SECS")]
    delay_secs: Option<u64>,
}

fn run(cli: Cli) -> Result<(), AppError> {
    repomirror::load_env_file(cli.env_file.as_deref())?;

    let mut config = MirrorConfig::from_env()?;
    if let Some(work_dir) = cli.work_dir {
        config.run.work_dir = work_dir;
    }
    if let Some(error_log) = cli.error_log {
        config.run.error_log = error_log;
    }
    if let Some(delay_secs) = cli.delay_secs {
        config.run.delay_secs = delay_secs;
    }

    repomirror::mirror_group(&config)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    repomirror::init_tracing();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
