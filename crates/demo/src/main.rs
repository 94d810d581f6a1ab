mod config;
mod ledger_demo;
mod library_demo;

use config::{DemoConfig, DemoSelection};

fn main() -> anyhow::Result<()> {
    bookkeeping_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(?config, "starting bookkeeping demo");

    if config.selection.includes(DemoSelection::Ledger) {
        ledger_demo::run()?;
    }
    if config.selection.includes(DemoSelection::Library) {
        library_demo::run(&config.library_name)?;
    }

    Ok(())
}
