//! Derivation of the CREATE2 salt used by the proxy factory
//!
//! The factory computes `salt = keccak256(keccak256(initializer) ‖ uint256(nonce))`,
//! binding the proxy address to both its setup call and the caller's nonce.

use alloc::collections::BTreeMap;
use alloy_primitives::{keccak256, B256, U256};

use crate::errors::CreationError;

/// Compute the salt from the hash of the initializer and the nonce
///
/// This computes H(H(initializer) || nonce)
pub fn salt_from_initializer_hash(initializer_hash: B256, nonce: U256) -> B256 {
    let nonce_bytes = nonce.to_be_bytes::<{ U256::BYTES }>();
    let preimage = [initializer_hash.as_slice(), nonce_bytes.as_slice()].concat();
    keccak256(&preimage)
}

/// Compute the salt the factory uses for the given initializer and nonce
pub fn derive_salt(initializer: &[u8], nonce: U256) -> B256 {
    salt_from_initializer_hash(keccak256(initializer), nonce)
}

/// The inputs a salt was planned from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedSalt {
    /// The hash of the initializer
    pub initializer_hash: B256,
    /// The factory nonce
    pub nonce: U256,
}

/// Tracks the salts of a set of planned creations
///
/// Planning the same (initializer, nonce) pair twice is allowed and reported,
/// but two distinct pairs resolving to one salt are a planning error.
#[derive(Debug, Clone, Default)]
pub struct SaltLedger {
    /// The planned inputs, keyed by salt
    planned: BTreeMap<B256, PlannedSalt>,
}

impl SaltLedger {
    /// An empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct salts in the ledger
    pub fn len(&self) -> usize {
        self.planned.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.planned.is_empty()
    }

    /// Record a planned creation, returning whether its salt is new to the ledger
    pub fn record(&mut self, initializer_hash: B256, nonce: U256) -> Result<bool, CreationError> {
        let salt = salt_from_initializer_hash(initializer_hash, nonce);
        self.insert(salt, PlannedSalt { initializer_hash, nonce })
    }

    /// Insert the inputs for a salt, rejecting a salt already held by other inputs
    fn insert(&mut self, salt: B256, plan: PlannedSalt) -> Result<bool, CreationError> {
        match self.planned.get(&salt) {
            Some(existing) if *existing == plan => Ok(false),
            Some(_) => Err(CreationError::SaltCollision { salt }),
            None => {
                self.planned.insert(salt, plan);
                Ok(true)
            }
        }
    }
}
