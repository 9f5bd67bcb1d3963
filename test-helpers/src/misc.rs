//! Miscellaneous test helpers

use alloy_primitives::Address;
use rand::Rng;

/// Generate a random address
pub fn random_address(rng: &mut impl Rng) -> Address {
    Address::from(rng.gen::<[u8; 20]>())
}

/// Generate `n` random owner addresses
pub fn random_owners(n: usize, rng: &mut impl Rng) -> Vec<Address> {
    (0..n).map(|_| random_address(rng)).collect()
}
