//! Errors that can occur while planning a proxy creation

use alloc::string::String;
use alloy_primitives::{Address, B256};
use core::fmt::{self, Display, Formatter};

/// Errors that can occur while encoding an initializer or predicting a proxy address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationError {
    /// The setup parameters are inconsistent, e.g. a threshold out of range
    InvalidConfiguration(String),
    /// An address failed format or checksum validation
    MalformedAddress(String),
    /// No creation code template is known for the given factory
    UnknownFactoryTemplate(Address),
    /// Two distinct (initializer, nonce) pairs produced the same salt
    SaltCollision {
        /// The salt shared by both plans
        salt: B256,
    },
}

impl Display for CreationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CreationError::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
            CreationError::MalformedAddress(s) => write!(f, "malformed address: {}", s),
            CreationError::UnknownFactoryTemplate(factory) => {
                write!(f, "unknown creation code template for factory {}", factory)
            }
            CreationError::SaltCollision { salt } => {
                write!(f, "salt {} was already planned with different inputs", salt)
            }
        }
    }
}

impl core::error::Error for CreationError {}
