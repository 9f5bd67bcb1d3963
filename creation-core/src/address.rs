//! Parsing and normalization of textual EVM addresses
//!
//! Addresses are compared as raw bytes everywhere in this crate; the textual
//! case only matters when validating an EIP-55 checksum.

use alloc::{format, vec::Vec};
use alloy_primitives::Address;
use core::str::FromStr;

use crate::{constants::ADDRESS_HEX_DIGITS, errors::CreationError};

/// Parse an address, validating its EIP-55 checksum when the input is mixed case
///
/// All-lowercase and all-uppercase inputs carry no checksum and are accepted
/// as long as they are 40 hex digits, with an optional `0x` prefix.
pub fn parse_address(raw: &str) -> Result<Address, CreationError> {
    let raw = raw.trim();
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    if digits.len() != ADDRESS_HEX_DIGITS {
        return Err(CreationError::MalformedAddress(format!(
            "{raw} is not {ADDRESS_HEX_DIGITS} hex digits"
        )));
    }

    let address = Address::from_str(digits)
        .map_err(|e| CreationError::MalformedAddress(format!("{raw}: {e}")))?;

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        let checksummed = address.to_checksum(None /* chain_id */);
        if checksummed[2..] != *digits {
            return Err(CreationError::MalformedAddress(format!(
                "{raw} has an invalid checksum, expected {checksummed}"
            )));
        }
    }

    Ok(address)
}

/// Parse a comma separated list of addresses, preserving order
pub fn parse_address_list(raw: &str) -> Result<Vec<Address>, CreationError> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(parse_address)
        .collect()
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::{parse_address, parse_address_list};
    use crate::errors::CreationError;

    #[test]
    fn test_valid_checksum() {
        let addr = parse_address("0xd9Db270c1B5E3Bd161E8c8503c55cEABeE709552").unwrap();
        assert_eq!(addr, address!("d9db270c1b5e3bd161e8c8503c55ceabee709552"));
    }

    #[test]
    fn test_single_case_skips_checksum() {
        let lower = parse_address("0xd9db270c1b5e3bd161e8c8503c55ceabee709552").unwrap();
        let upper = parse_address("0xD9DB270C1B5E3BD161E8C8503C55CEABEE709552").unwrap();
        let unprefixed = parse_address("d9db270c1b5e3bd161e8c8503c55ceabee709552").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, unprefixed);
    }

    #[test]
    fn test_invalid_checksum() {
        // `E` before `709552` lowercased
        let res = parse_address("0xd9Db270c1B5E3Bd161E8c8503c55cEABee709552");
        assert!(matches!(res, Err(CreationError::MalformedAddress(_))));
    }

    #[test]
    fn test_bad_format() {
        for raw in ["", "0x", "0x1234", "0xd9Db270c1B5E3Bd161E8c8503c55cEABeE70955", "0xzz"] {
            assert!(
                matches!(parse_address(raw), Err(CreationError::MalformedAddress(_))),
                "{raw} should be rejected"
            );
        }

        let non_hex = "0xg9db270c1b5e3bd161e8c8503c55ceabee709552";
        assert!(matches!(parse_address(non_hex), Err(CreationError::MalformedAddress(_))));
    }

    #[test]
    fn test_list_preserves_order() {
        let owners = parse_address_list(
            "0x0000000000000000000000000000000000000002, 0x0000000000000000000000000000000000000003,",
        )
        .unwrap();

        assert_eq!(
            owners,
            [
                address!("0000000000000000000000000000000000000002"),
                address!("0000000000000000000000000000000000000003"),
            ]
        );
    }

    #[test]
    fn test_list_propagates_bad_entry() {
        let res = parse_address_list("0x0000000000000000000000000000000000000002,0xbeef");
        assert!(matches!(res, Err(CreationError::MalformedAddress(_))));
    }
}
