//! Definitions of errors that can occur during the execution of the creation scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy::primitives::{Address, B256};
use creation_core::errors::CreationError;

/// Errors that can occur during the execution of the creation scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error planning the creation, raised by the core before anything is submitted
    Creation(CreationError),
    /// Error parsing a configuration value
    Config(String),
    /// Error resolving a contract by name
    ContractResolution(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error reading a file
    ReadFile(String),
    /// Error writing a file
    WriteFile(String),
    /// Error de/serializing a file
    Serde(String),
    /// Error reading from the chain
    ContractInteraction(String),
    /// Error submitting the creation transaction, or the transaction reverted
    SubmissionFailure(String),
    /// The record shows the creation was already deployed
    AlreadyDeployed {
        /// The address of the deployed proxy
        address: Address,
        /// The transaction that deployed it
        tx_hash: Option<B256>,
    },
    /// The factory created the proxy somewhere other than predicted
    AddressMismatch {
        /// The predicted proxy address
        predicted: Address,
        /// The address reported by the factory
        deployed: Address,
    },
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Creation(e) => write!(f, "error planning creation: {}", e),
            ScriptError::Config(s) => write!(f, "error in configuration: {}", s),
            ScriptError::ContractResolution(s) => write!(f, "error resolving contract: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ReadFile(s) => write!(f, "error reading file: {}", s),
            ScriptError::WriteFile(s) => write!(f, "error writing file: {}", s),
            ScriptError::Serde(s) => write!(f, "error de/serializing: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::SubmissionFailure(s) => write!(f, "error submitting creation: {}", s),
            ScriptError::AlreadyDeployed { address, tx_hash } => match tx_hash {
                Some(tx_hash) => {
                    write!(f, "proxy at {} already deployed in {:#x}", address, tx_hash)
                }
                None => write!(f, "proxy at {} already deployed", address),
            },
            ScriptError::AddressMismatch {
                predicted,
                deployed,
            } => write!(
                f,
                "proxy created at {} but predicted at {}",
                deployed, predicted
            ),
        }
    }
}

impl Error for ScriptError {}

impl From<CreationError> for ScriptError {
    fn from(value: CreationError) -> Self {
        ScriptError::Creation(value)
    }
}
