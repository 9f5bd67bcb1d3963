use clap::Parser;
use creation_scripts::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let Cli {
        priv_key,
        rpc_url,
        deployments,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    command
        .run(priv_key.as_deref(), &rpc_url, deployments.as_deref())
        .await?;

    Ok(())
}
