//! Constants that parameterize Safe proxy creation

use alloy_primitives::{address, hex, Address};

/// The number of bytes in an EVM address
pub const ADDRESS_BYTES: usize = 20;

/// The number of bytes in an ABI word
pub const WORD_BYTES: usize = 32;

/// The number of hex digits in a textual EVM address, excluding the `0x` prefix
pub const ADDRESS_HEX_DIGITS: usize = ADDRESS_BYTES * 2;

/// The prefix byte hashed in front of a CREATE2 preimage, see EIP-1014
pub const CREATE2_PREFIX: u8 = 0xff;

/// The sentinel address heading the Safe owner linked list, which can never be an owner
pub const SENTINEL_OWNER: Address = address!("0000000000000000000000000000000000000001");

/// The canonical Safe v1.3.0 singleton
pub const SAFE_SINGLETON_V130: Address = address!("d9Db270c1B5E3Bd161E8c8503c55cEABeE709552");

/// The canonical Safe v1.3.0 singleton which emits additional events, intended for L2 chains
pub const SAFE_L2_SINGLETON_V130: Address = address!("3E5c63644E683549055b9Be8653de26E0B4CD36E");

/// The canonical Safe v1.3.0 proxy factory
pub const PROXY_FACTORY_V130: Address = address!("a6B71E26C5e0845f74c812102Ca7114b6a896AB2");

/// The creation code of the v1.3.0 `GnosisSafeProxy`, as returned by the
/// factory's `proxyCreationCode()` method.
///
/// The singleton address is appended to this code as a single ABI word to
/// form the proxy's init code.
pub const PROXY_CREATION_CODE_V130: &[u8] = &hex!("608060405234801561001057600080fd5b506040516101e63803806101e68339818101604052602081101561003357600080fd5b8101908080519060200190929190505050600073ffffffffffffffffffffffffffffffffffffffff168173ffffffffffffffffffffffffffffffffffffffff1614156100ca576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004018080602001828103825260228152602001806101c46022913960400191505060405180910390fd5b806000806101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055505060ab806101196000396000f3fe608060405273ffffffffffffffffffffffffffffffffffffffff600054167fa619486e0000000000000000000000000000000000000000000000000000000060003514156050578060005260206000f35b3660008037600080366000845af43d6000803e60008114156070573d6000fd5b3d6000f3fea2646970667358221220d1429297349653a4918076d650332de1a1068c5f3e07c5c82360c277770b955264736f6c63430007060033496e76616c69642073696e676c65746f6e20616464726573732070726f7669646564");
