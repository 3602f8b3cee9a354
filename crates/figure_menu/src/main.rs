use std::io;

use anyhow::Context;
use tracing::warn;

use figure_menu::config::DEFAULT_LOG_FILTER;
use figure_menu::logging::init_logging;
use figure_menu::{Menu, MenuConfig};

fn main() -> anyhow::Result<()> {
    init_logging(DEFAULT_LOG_FILTER);
    let config = MenuConfig::from_env().unwrap_or_else(|error| {
        warn!(%error, "using default configuration");
        MenuConfig::default()
    });

    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock(), config);
    menu.run().context("failed to talk to the terminal")?;
    Ok(())
}
