//! Prediction of the address at which the factory will create a proxy

use alloc::format;
use alloy_primitives::{keccak256, Address, U256};

use crate::{
    errors::CreationError, salt::derive_salt, template::TemplateRegistry,
    types::ContractReference,
};

/// Predict the address of the proxy created by `createProxyWithNonce(singleton, initializer, nonce)`
///
/// This is the CREATE2 address
/// `keccak256(0xff ‖ factory ‖ salt ‖ keccak256(creationCode))[12..]`,
/// where the creation code is the factory's template parameterized by the
/// singleton. The prediction does not depend on chain state, and so says
/// nothing about whether the address is already occupied.
pub fn predict_address(
    templates: &TemplateRegistry,
    factory: &ContractReference,
    singleton: &ContractReference,
    initializer: &[u8],
    nonce: U256,
) -> Result<Address, CreationError> {
    if factory.interface.is_singleton() {
        return Err(CreationError::InvalidConfiguration(format!(
            "{} at {} is not a proxy factory",
            factory.interface, factory.address
        )));
    }
    if !singleton.interface.is_singleton() {
        return Err(CreationError::InvalidConfiguration(format!(
            "{} at {} is not a singleton",
            singleton.interface, singleton.address
        )));
    }

    let creation_code = templates.creation_code(&factory.address, &singleton.address)?;
    let salt = derive_salt(initializer, nonce);

    Ok(factory.address.create2(salt, keccak256(&creation_code)))
}
