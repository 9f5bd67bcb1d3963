//! Constants used in the creation scripts

/// The RPC URL used when none is configured
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The Safe threshold used when none is configured
pub const DEFAULT_THRESHOLD: u64 = 1;

/// The number of times to poll for the receipt of the creation transaction
pub const RECEIPT_POLL_ATTEMPTS: usize = 120;

/// The delay between polls for the receipt of the creation transaction
pub const RECEIPT_POLL_INTERVAL_MS: u64 = 1_000;

/// The name of the environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PKEY";

/// The name of the environment variable holding the RPC URL
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";
