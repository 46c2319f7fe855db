use anyhow::Context;

use gildedrose_simulator::{SimulatorConfig, render, simulate, standard_catalogue};

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = SimulatorConfig::from_env().context("failed to load simulator configuration")?;
    tracing::info!(days = config.days, format = ?config.format, "starting simulation");

    let snapshots = simulate(standard_catalogue(), config.days);
    let report = render(&snapshots, config.format).context("failed to render report")?;

    print!("{report}");
    Ok(())
}
