use clap::Parser;

use tabdeck::{cli, logging};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    logging::init(cli.verbose, cli.quiet)?;

    cli.run()
}
