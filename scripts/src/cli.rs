//! Definitions of CLI arguments and commands for the creation scripts

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    client::RpcClient,
    commands::create_safe,
    config::CreationConfig,
    constants::{DEFAULT_RPC_URL, DEFAULT_THRESHOLD, PRIVATE_KEY_ENV_VAR, RPC_URL_ENV_VAR},
    errors::ScriptError,
    resolver::ContractDeployments,
    utils::parse_signer,
};

/// Plan Safe proxies at a predicted address, and create them
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer, also the default owner
    // TODO: Support hardware wallets instead of a raw key
    #[arg(short, long, env = PRIVATE_KEY_ENV_VAR)]
    pub priv_key: Option<String>,

    /// Network RPC URL
    #[arg(short, long, env = RPC_URL_ENV_VAR, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to a JSON file mapping contract names to addresses,
    /// overriding the canonical deployments
    #[arg(short, long)]
    pub deployments: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The commands the scripts support
#[derive(Subcommand)]
pub enum Command {
    /// Create a Safe
    Create(CreateArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        priv_key: Option<&str>,
        rpc_url: &str,
        deployments_path: Option<&Path>,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Create(args) => create(args, priv_key, rpc_url, deployments_path).await,
        }
    }
}

/// Create a Safe through the proxy factory.
///
/// The proxy is created with `createProxyWithNonce`, which deploys it with CREATE2,
/// so its address is known before the transaction is sent.
#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Use the version of the Safe singleton which emits more events, intended for L2 chains
    #[arg(long)]
    pub l2: bool,

    /// Only print the creation transaction, do not submit it.
    /// No network call is made in this mode
    #[arg(long)]
    pub build_only: bool,

    /// Comma separated list of owner addresses, defaults to the deployer's address
    #[arg(long, alias = "signers")]
    pub owners: Option<String>,

    /// Number of owner confirmations required for a transaction
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u64,

    /// Fallback handler address, defaults to none
    #[arg(long)]
    pub fallback: Option<String>,

    /// Nonce used with the factory, defaults to the current time in milliseconds
    #[arg(long)]
    pub nonce: Option<String>,

    /// Overrides the singleton address
    #[arg(long)]
    pub singleton: Option<String>,

    /// Overrides the factory address
    #[arg(long)]
    pub factory: Option<String>,

    /// Hex encoded proxy creation code of the factory, skips looking it up
    #[arg(long)]
    pub creation_code: Option<String>,

    /// Target of a delegate call made by the Safe during setup
    #[arg(long)]
    pub setup_to: Option<String>,

    /// Hex encoded calldata of the setup delegate call
    #[arg(long)]
    pub setup_data: Option<String>,

    /// Token in which the setup payment is made, defaults to ETH
    #[arg(long)]
    pub payment_token: Option<String>,

    /// Amount paid on setup
    #[arg(long)]
    pub payment: Option<String>,

    /// Receiver of the setup payment, defaults to the transaction origin
    #[arg(long)]
    pub payment_receiver: Option<String>,

    /// JSON file recording planned creations, used to catch reused salts
    #[arg(long)]
    pub record: Option<PathBuf>,
}

/// Run the `create` command
async fn create(
    args: CreateArgs,
    priv_key: Option<&str>,
    rpc_url: &str,
    deployments_path: Option<&Path>,
) -> Result<(), ScriptError> {
    let signer = priv_key.map(parse_signer).transpose()?;
    let config = CreationConfig::from_args(&args, &signer)?;
    let deployments = ContractDeployments::load(deployments_path)?;

    if config.build_only {
        create_safe::<RpcClient>(&config, &deployments, None).await?;
        return Ok(());
    }

    let signer = signer.ok_or_else(|| {
        ScriptError::ClientInitialization("a private key is required to submit".to_string())
    })?;
    let client = RpcClient::new(rpc_url, signer)?;
    let outcome = create_safe(&config, &deployments, Some(&client)).await?;

    if let Some(submitted) = outcome.submitted {
        info!("creation transaction: {:#x}", submitted.tx_hash);
        println!("Safe created at {}", outcome.intent.predicted_address);
    }

    Ok(())
}
