//! Encoding of the Safe `setup` initializer run on a freshly created proxy
//!
//! The encoded bytes are hashed into the proxy's salt, so the encoding must
//! match the canonical ABI encoding byte for byte.

use alloc::{collections::BTreeSet, format, string::ToString};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;

use crate::{
    constants::SENTINEL_OWNER, errors::CreationError, solidity::setupCall, types::SetupParams,
};

/// Check the setup parameters against the constraints the Safe enforces on setup
///
/// Owners are compared as raw addresses, so two spellings of the same address
/// count as a duplicate.
pub fn validate_setup(params: &SetupParams) -> Result<(), CreationError> {
    let num_owners = params.owners.len() as u64;
    if num_owners == 0 {
        return Err(CreationError::InvalidConfiguration(
            "at least one owner is required".to_string(),
        ));
    }

    if params.threshold == 0 || params.threshold > num_owners {
        return Err(CreationError::InvalidConfiguration(format!(
            "threshold {} is outside of [1, {num_owners}]",
            params.threshold
        )));
    }

    let mut seen = BTreeSet::new();
    for owner in &params.owners {
        if *owner == Address::ZERO || *owner == SENTINEL_OWNER {
            return Err(CreationError::InvalidConfiguration(format!(
                "{owner} cannot be an owner"
            )));
        }

        if !seen.insert(*owner) {
            return Err(CreationError::InvalidConfiguration(format!(
                "duplicate owner {owner}"
            )));
        }
    }

    // The Safe only runs the setup delegate call when a target is given
    if params.setup_to == Address::ZERO && !params.setup_data.is_empty() {
        return Err(CreationError::InvalidConfiguration(
            "setup data given without a setup target".to_string(),
        ));
    }

    Ok(())
}

/// Prepare calldata for the Safe singleton's `setup` method
pub fn encode_setup(params: &SetupParams) -> Result<Bytes, CreationError> {
    validate_setup(params)?;

    let calldata = setupCall::new((
        params.owners.clone(),
        U256::from(params.threshold),
        params.setup_to,
        params.setup_data.clone(),
        params.fallback_handler,
        params.payment_token,
        params.payment,
        params.payment_receiver,
    ))
    .abi_encode();

    Ok(calldata.into())
}
