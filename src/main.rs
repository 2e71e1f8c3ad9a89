use anyhow::Result;
use clap::Parser;

use pipit::{cli::Cli, config::Config, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    // Flushes buffered log lines when dropped at exit
    let _log_guard = logging::init(&config.log)?;

    pipit::ui::run(&config)
}
