//! The bundle handed to whoever submits a proxy creation

use alloy_primitives::{keccak256, Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;

use crate::{
    deriver::predict_address, errors::CreationError, initializer::encode_setup,
    salt::derive_salt, solidity::createProxyWithNonceCall, template::TemplateRegistry,
    types::{ContractReference, SetupParams},
};

/// Everything needed to create a Safe proxy and check the result
///
/// Built once per creation, the fields are consumed verbatim: the predicted
/// address and payloads are never recomputed downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentIntent {
    /// The factory creating the proxy
    pub factory: ContractReference,
    /// The singleton the proxy delegates to
    pub singleton: ContractReference,
    /// The encoded `setup` call run on the proxy
    pub initializer: Bytes,
    /// The factory nonce
    pub nonce: U256,
    /// The CREATE2 salt derived from the initializer and nonce
    pub salt: B256,
    /// The address the proxy will be created at
    pub predicted_address: Address,
    /// The `createProxyWithNonce` calldata to send to the factory
    pub creation_calldata: Bytes,
}

impl DeploymentIntent {
    /// Plan the creation of a proxy with the given setup parameters
    ///
    /// Setup parameters are validated before anything is hashed.
    pub fn plan(
        templates: &TemplateRegistry,
        factory: ContractReference,
        singleton: ContractReference,
        params: &SetupParams,
        nonce: U256,
    ) -> Result<Self, CreationError> {
        let initializer = encode_setup(params)?;
        let predicted_address =
            predict_address(templates, &factory, &singleton, &initializer, nonce)?;
        let salt = derive_salt(&initializer, nonce);

        let creation_calldata =
            createProxyWithNonceCall::new((singleton.address, initializer.clone(), nonce))
                .abi_encode()
                .into();

        Ok(Self {
            factory,
            singleton,
            initializer,
            nonce,
            salt,
            predicted_address,
            creation_calldata,
        })
    }

    /// The hash of the initializer, as committed to in the salt
    pub fn initializer_hash(&self) -> B256 {
        keccak256(&self.initializer)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloy_primitives::{hex, U256};
    use test_helpers::vectors::{
        VECTOR_CREATION_CALLDATA, VECTOR_FACTORY, VECTOR_NONCE, VECTOR_OWNER, VECTOR_PREDICTED,
        VECTOR_SETUP_DATA, VECTOR_SINGLETON,
    };

    use super::DeploymentIntent;
    use crate::{
        errors::CreationError,
        salt::salt_from_initializer_hash,
        template::TemplateRegistry,
        types::{ContractInterface, ContractReference, SetupParams},
    };

    /// Plan the conformance vector creation with the given threshold
    fn plan_vector(threshold: u64) -> Result<DeploymentIntent, CreationError> {
        DeploymentIntent::plan(
            &TemplateRegistry::canonical(),
            ContractReference::new(VECTOR_FACTORY, ContractInterface::ProxyFactory),
            ContractReference::new(VECTOR_SINGLETON, ContractInterface::Safe),
            &SetupParams::new(vec![VECTOR_OWNER], threshold),
            U256::from(VECTOR_NONCE),
        )
    }

    #[test]
    fn test_conformance_vector() {
        let intent = plan_vector(1).unwrap();

        assert_eq!(&intent.initializer[..], VECTOR_SETUP_DATA);
        assert_eq!(intent.predicted_address, VECTOR_PREDICTED);
        assert_eq!(&intent.creation_calldata[..], VECTOR_CREATION_CALLDATA);
        assert_eq!(intent.creation_calldata[..4], hex!("1688f0b9"));
        assert_eq!(
            intent.salt,
            salt_from_initializer_hash(intent.initializer_hash(), intent.nonce)
        );
    }

    #[test]
    fn test_invalid_setup_fails_before_prediction() {
        let res = plan_vector(2);
        assert!(matches!(res, Err(CreationError::InvalidConfiguration(_))));
    }
}
