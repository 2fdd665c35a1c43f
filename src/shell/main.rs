use anyhow::Context;
use hours_report::shell::config::Config;
use hours_report::shell::state::build_report_handler;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env().context("invalid configuration")?;
    let handler = build_report_handler(&config).context("could not create the time entry source")?;

    let summary = handler
        .handle()
        .await
        .context("could not obtain time entries")?;

    println!("{summary}");
    if !summary.is_complete() {
        anyhow::bail!("one or more report artifacts could not be written");
    }
    Ok(())
}
