use anyhow::Result;
use sample_fetch::cli::run;

pub fn main() -> Result<()> {
    run()
}
