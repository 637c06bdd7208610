use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = llm_advisor::Config::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(llm_advisor::start_server(config))
}
