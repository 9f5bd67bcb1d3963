//! The summary of a planned creation, printed before anything is submitted

use std::fmt::{self, Display, Formatter};

use alloy::primitives::{Address, Bytes, U256};
use creation_core::intent::DeploymentIntent;

/// The values of a planned creation, copied verbatim from its intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationReport {
    /// The address the Safe will be created at
    pub predicted_address: Address,
    /// The singleton the Safe delegates to
    pub singleton: Address,
    /// The encoded `setup` call
    pub setup_data: Bytes,
    /// The factory nonce
    pub nonce: U256,
    /// The factory the transaction is sent to
    pub factory: Address,
    /// The transaction calldata
    pub data: Bytes,
}

impl From<&DeploymentIntent> for CreationReport {
    fn from(intent: &DeploymentIntent) -> Self {
        Self {
            predicted_address: intent.predicted_address,
            singleton: intent.singleton.address,
            setup_data: intent.initializer.clone(),
            nonce: intent.nonce,
            factory: intent.factory.address,
            data: intent.creation_calldata.clone(),
        }
    }
}

impl Display for CreationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deploy Safe to {}", self.predicted_address)?;
        writeln!(f, "Singleton: {}", self.singleton)?;
        writeln!(f, "Setup data: {}", self.setup_data)?;
        writeln!(f, "Nonce: {}", self.nonce)?;
        writeln!(f, "To (factory): {}", self.factory)?;
        write!(f, "Data: {}", self.data)
    }
}
