use std::io::{self, Write};

use clap::Parser;

use fundamentals::cli::cli::Cli;
use fundamentals::run;
use fundamentals::utils::utils::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}
