//! Conformance vectors for proxy creation, computed with an independent
//! keccak256 and ABI encoder rather than with the crates under test.
//!
//! Factory and singletons are the canonical Safe v1.3.0 deployments; the
//! Safe has the single owner [`VECTOR_OWNER`], threshold 1, and every other
//! setup argument zeroed.

use alloy_primitives::{address, hex, Address};

/// The proxy factory
pub const VECTOR_FACTORY: Address = address!("a6B71E26C5e0845f74c812102Ca7114b6a896AB2");
/// The singleton
pub const VECTOR_SINGLETON: Address = address!("d9Db270c1B5E3Bd161E8c8503c55cEABeE709552");
/// The L2 singleton
pub const VECTOR_SINGLETON_L2: Address = address!("3E5c63644E683549055b9Be8653de26E0B4CD36E");
/// The only owner
pub const VECTOR_OWNER: Address = address!("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1");
/// The factory nonce
pub const VECTOR_NONCE: u64 = 1_700_000_000_000;

/// The encoded `setup` call
pub const VECTOR_SETUP_DATA: &[u8] = &hex!("b63e800d000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000014000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001000000000000000000000000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa10000000000000000000000000000000000000000000000000000000000000000");

/// The encoded `createProxyWithNonce` call
pub const VECTOR_CREATION_CALLDATA: &[u8] = &hex!("1688f0b9000000000000000000000000d9db270c1b5e3bd161e8c8503c55ceabee70955200000000000000000000000000000000000000000000000000000000000000600000000000000000000000000000000000000000000000000000018bcfe568000000000000000000000000000000000000000000000000000000000000000164b63e800d000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000014000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001000000000000000000000000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000");

/// The proxy address for [`VECTOR_NONCE`]
pub const VECTOR_PREDICTED: Address = address!("4F280863f1beF8Db0DB8E7D7910C2609Dd026D8E");
/// The proxy address for `VECTOR_NONCE + 1`
pub const VECTOR_PREDICTED_NEXT_NONCE: Address =
    address!("5B7ccBb36BABb1581DA1bf582308A73729c2A2F1");
/// The proxy address for [`VECTOR_NONCE`] with the L2 singleton
pub const VECTOR_PREDICTED_L2: Address = address!("38e6c5a399122Ad53cc0e2c8F2ed443aA4B098d5");
