use clap::Parser;
use env_logger::{Builder, Env};

use codescribe::cli::Cli;
use codescribe::commands;
use codescribe::config::Config;
use codescribe::store::{self, Store};
use codescribe::{Manager, Result};

fn init_logger(verbose: bool) {
    // RUST_LOG wins; otherwise quiet unless --verbose
    let default = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp_millis()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli)?;
    store::init_schema(&config.db_path)?;

    let manager = Manager::new(Store::open(&config.db_path)?);
    let outcome = commands::execute(cli.command, &manager, &config, &mut std::io::stdout());

    // release the handle whether or not the command succeeded
    let closed = manager.close();
    outcome.and(closed)
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        log::debug!("{e:?}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
