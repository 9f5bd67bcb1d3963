//! Type definitions used throughout Safe proxy creation

use alloc::vec::Vec;
use alloy_primitives::{Address, Bytes, U256};
use core::fmt::{self, Display};

use crate::constants::{PROXY_FACTORY_V130, SAFE_L2_SINGLETON_V130, SAFE_SINGLETON_V130};

/// The contract interfaces taking part in a proxy creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContractInterface {
    /// The Safe singleton
    Safe,
    /// The Safe singleton variant which emits additional events
    SafeL2,
    /// The proxy factory
    ProxyFactory,
}

impl ContractInterface {
    /// The name under which the contract is recorded in a deployments file
    pub fn deployment_name(&self) -> &'static str {
        match self {
            ContractInterface::Safe => "GnosisSafe",
            ContractInterface::SafeL2 => "GnosisSafeL2",
            ContractInterface::ProxyFactory => "GnosisSafeProxyFactory",
        }
    }

    /// The address of the canonical v1.3.0 deployment of this contract
    pub fn canonical_address(&self) -> Address {
        match self {
            ContractInterface::Safe => SAFE_SINGLETON_V130,
            ContractInterface::SafeL2 => SAFE_L2_SINGLETON_V130,
            ContractInterface::ProxyFactory => PROXY_FACTORY_V130,
        }
    }

    /// Whether a proxy may delegate to this contract
    pub fn is_singleton(&self) -> bool {
        matches!(self, ContractInterface::Safe | ContractInterface::SafeL2)
    }
}

impl Display for ContractInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.deployment_name())
    }
}

/// A deployed contract: its address and the interface it exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractReference {
    /// The address of the contract
    pub address: Address,
    /// The interface the contract exposes
    pub interface: ContractInterface,
}

impl ContractReference {
    /// Reference a contract at the given address
    pub fn new(address: Address, interface: ContractInterface) -> Self {
        Self { address, interface }
    }

    /// Reference the canonical v1.3.0 deployment of the given interface
    pub fn canonical(interface: ContractInterface) -> Self {
        Self::new(interface.canonical_address(), interface)
    }
}

/// The arguments of the Safe `setup` call run by the factory on a new proxy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupParams {
    /// The owners of the Safe, in order
    pub owners: Vec<Address>,
    /// The number of owner confirmations required for a transaction
    pub threshold: u64,
    /// Target of an optional delegate call made during setup, zero for none
    pub setup_to: Address,
    /// Calldata of the optional setup delegate call
    pub setup_data: Bytes,
    /// The fallback handler, zero for none
    pub fallback_handler: Address,
    /// Token in which the setup payment is made, zero for ETH
    pub payment_token: Address,
    /// The amount paid to the payment receiver on setup
    pub payment: U256,
    /// The receiver of the setup payment, zero for `tx.origin`
    pub payment_receiver: Address,
}

impl SetupParams {
    /// Setup parameters with the given owners and threshold, and every
    /// auxiliary value set to its zero sentinel
    pub fn new(owners: Vec<Address>, threshold: u64) -> Self {
        Self {
            owners,
            threshold,
            setup_to: Address::ZERO,
            setup_data: Bytes::new(),
            fallback_handler: Address::ZERO,
            payment_token: Address::ZERO,
            payment: U256::ZERO,
            payment_receiver: Address::ZERO,
        }
    }

    /// Set the fallback handler
    pub fn with_fallback_handler(mut self, fallback_handler: Address) -> Self {
        self.fallback_handler = fallback_handler;
        self
    }

    /// Set the delegate call made during setup
    pub fn with_setup_call(mut self, to: Address, data: Bytes) -> Self {
        self.setup_to = to;
        self.setup_data = data;
        self
    }

    /// Set the payment made on setup
    pub fn with_payment(mut self, token: Address, amount: U256, receiver: Address) -> Self {
        self.payment_token = token;
        self.payment = amount;
        self.payment_receiver = receiver;
        self
    }
}
