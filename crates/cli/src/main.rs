use anyhow::Context;
use warehouse_cli::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env().context("failed to load configuration")?;
    warehouse_observability::init(config.log_format);

    tracing::info!(?config, "warehouse inventory session starting");

    let today = chrono::Local::now().date_naive();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    warehouse_cli::run(&config, today, &mut out)?;

    tracing::info!("session complete");
    Ok(())
}
