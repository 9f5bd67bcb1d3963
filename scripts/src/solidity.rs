//! Definitions of Solidity contract interfaces used during creation

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use alloy::sol;

// The parts of the v1.3.0 `GnosisSafeProxyFactory` read by the scripts
sol! {
    #[sol(rpc)]
    interface IProxyFactory {
        /// Emitted when a proxy is created
        event ProxyCreation(address proxy, address singleton);

        /// The creation code of the proxies this factory deploys
        function proxyCreationCode() external pure returns (bytes memory);
    }
}
