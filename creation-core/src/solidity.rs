//! Solidity method definitions used to build Safe creation calldata

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use alloy_sol_types::sol;

// Methods of the v1.3.0 `GnosisSafe` singleton and `GnosisSafeProxyFactory`, taken from
// https://github.com/safe-global/safe-smart-account/tree/v1.3.0/contracts
sol! {
    /// Initial setup of a freshly created Safe proxy
    function setup(
        address[] calldata _owners,
        uint256 _threshold,
        address to,
        bytes calldata data,
        address fallbackHandler,
        address paymentToken,
        uint256 payment,
        address paymentReceiver
    ) external;

    /// Deploy a proxy to `_singleton` with CREATE2, calling `initializer` on it
    function createProxyWithNonce(
        address _singleton,
        bytes memory initializer,
        uint256 saltNonce
    ) public returns (address proxy);
}
