use clap::Parser;

use carport::cli::Cli;
use carport::config::Config;
use carport::logging;
use carport::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    runtime::run(config)
}
