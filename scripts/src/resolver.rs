//! Capabilities injected into the orchestrator: resolution of contracts by
//! name, and the owner used when no owner list is given

use std::path::Path;

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use creation_core::{
    address::parse_address,
    types::{ContractInterface, ContractReference},
};
use serde_json::Value;
use tracing::debug;

use crate::{errors::ScriptError, utils::read_json_file};

/// Resolves a contract interface to the deployment used on the target chain
pub trait ContractResolver {
    /// Resolve the deployment of the given interface
    fn resolve(&self, interface: ContractInterface) -> Result<ContractReference, ScriptError>;
}

/// Contract deployments read from a deployments file, falling back to the
/// canonical v1.3.0 deployments for contracts the file does not name
///
/// The file is a JSON object mapping deployment names, e.g. `GnosisSafeProxyFactory`,
/// to addresses.
#[derive(Debug, Clone)]
pub struct ContractDeployments {
    /// The parsed deployments file
    deployments: Value,
}

impl ContractDeployments {
    /// Only the canonical deployments
    pub fn canonical() -> Self {
        Self::from_json(Value::Object(Default::default()))
    }

    /// Deployments from the given JSON object
    pub fn from_json(deployments: Value) -> Self {
        Self { deployments }
    }

    /// Read the deployments file at the given path, if any
    pub fn load(path: Option<&Path>) -> Result<Self, ScriptError> {
        match path {
            Some(path) => read_json_file(path).map(Self::from_json),
            None => Ok(Self::canonical()),
        }
    }
}

impl ContractResolver for ContractDeployments {
    fn resolve(&self, interface: ContractInterface) -> Result<ContractReference, ScriptError> {
        let name = interface.deployment_name();
        let address = match self.deployments.get(name) {
            Some(entry) => {
                let raw = entry.as_str().ok_or_else(|| {
                    ScriptError::ContractResolution(format!("{name} is not an address string"))
                })?;
                parse_address(raw)?
            }
            None => interface.canonical_address(),
        };

        debug!("resolved {name} to {address}");
        Ok(ContractReference::new(address, interface))
    }
}

/// Supplies the owner of a Safe created without an explicit owner list
pub trait OwnerSource {
    /// The default owner
    fn default_owner(&self) -> Result<Address, ScriptError>;
}

impl OwnerSource for PrivateKeySigner {
    fn default_owner(&self) -> Result<Address, ScriptError> {
        Ok(self.address())
    }
}

impl OwnerSource for Address {
    fn default_owner(&self) -> Result<Address, ScriptError> {
        Ok(*self)
    }
}

impl<T: OwnerSource> OwnerSource for Option<T> {
    fn default_owner(&self) -> Result<Address, ScriptError> {
        match self {
            Some(source) => source.default_owner(),
            None => Err(ScriptError::Config(
                "no owners given and no private key to default to".to_string(),
            )),
        }
    }
}
