use crate::{
    download::{Fetcher, Outcome},
    sample::sample_task,
};
use anyhow::Result;
use clap::{ArgAction, Parser};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[clap(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Give up on the request after this many seconds. No limit by default.
    #[clap(short = 't', long = "timeout", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

impl Cli {
    pub fn exec() -> Result<()> {
        let cli = Self::parse();

        setup_logging(cli.verbose);
        cli.run()
    }

    pub fn run(self) -> Result<()> {
        let task = sample_task()?;
        let fetcher = Fetcher::with_timeout(self.timeout.map(Duration::from_secs))?;

        match fetcher.ensure_present(&task) {
            Ok(Outcome::AlreadyPresent) => {
                info!("{} is already present", task.path().display());
            }

            Ok(Outcome::Downloaded { bytes }) => {
                info!("Saved {bytes} bytes to {}", task.path().display());
            }

            Err(err) => {
                error!("Failed during {}", err.stage());
                return Err(err.into());
            }
        }

        Ok(())
    }
}

fn setup_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    Cli::exec()
}
