use cabinetr::cli::Cli;
use cabinetr::init_logging;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    cabinetr::cli::run(cli)
}
