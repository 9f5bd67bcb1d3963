//! The chain client used to look up factory code and submit creations

use std::time::Duration;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, B256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use creation_core::intent::DeploymentIntent;
use tracing::{debug, info};

use crate::{
    constants::{RECEIPT_POLL_ATTEMPTS, RECEIPT_POLL_INTERVAL_MS},
    errors::ScriptError,
    solidity::IProxyFactory,
};

/// The result of a submitted creation transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedCreation {
    /// The hash of the creation transaction
    pub tx_hash: B256,
    /// The proxy address reported by the factory's `ProxyCreation` event, if emitted
    pub proxy: Option<Address>,
}

/// The network operations the orchestrator needs
///
/// Retries and timeouts are the implementor's concern; callers treat each
/// method as a single fallible call.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Read the proxy creation code of a factory
    async fn proxy_creation_code(&self, factory: Address) -> Result<Bytes, ScriptError>;

    /// Send the creation transaction of the intent and wait for its inclusion
    async fn submit_creation(
        &self,
        intent: &DeploymentIntent,
    ) -> Result<SubmittedCreation, ScriptError>;
}

/// A [`ChainClient`] talking to an RPC node with a local signer
#[derive(Clone)]
pub struct RpcClient {
    /// The signing provider
    provider: DynProvider,
}

impl RpcClient {
    /// Connect to the given RPC URL, signing with the given key
    pub fn new(rpc_url: &str, signer: PrivateKeySigner) -> Result<Self, ScriptError> {
        let url =
            Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
        let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

        Ok(Self {
            provider: DynProvider::new(provider),
        })
    }

    /// Poll for the receipt of a transaction
    async fn wait_for_receipt(&self, tx_hash: B256) -> Result<TransactionReceipt, ScriptError> {
        for _ in 0..RECEIPT_POLL_ATTEMPTS {
            let receipt = self
                .provider
                .get_transaction_receipt(tx_hash)
                .await
                .map_err(|e| ScriptError::SubmissionFailure(e.to_string()))?;

            match receipt {
                Some(receipt) => return Ok(receipt),
                None => tokio::time::sleep(Duration::from_millis(RECEIPT_POLL_INTERVAL_MS)).await,
            }
        }

        Err(ScriptError::SubmissionFailure(format!(
            "no receipt for {tx_hash:#x} after {RECEIPT_POLL_ATTEMPTS} attempts"
        )))
    }
}

impl ChainClient for RpcClient {
    async fn proxy_creation_code(&self, factory: Address) -> Result<Bytes, ScriptError> {
        debug!("fetching proxy creation code of {factory}");
        IProxyFactory::new(factory, &self.provider)
            .proxyCreationCode()
            .call()
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }

    async fn submit_creation(
        &self,
        intent: &DeploymentIntent,
    ) -> Result<SubmittedCreation, ScriptError> {
        let factory = intent.factory.address;
        let tx = TransactionRequest::default()
            .with_to(factory)
            .with_input(intent.creation_calldata.clone());

        let pending_tx = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::SubmissionFailure(e.to_string()))?;
        let tx_hash = *pending_tx.tx_hash();
        info!("sent creation transaction {tx_hash:#x}, waiting for inclusion");

        let receipt = self.wait_for_receipt(tx_hash).await?;
        if !receipt.status() {
            return Err(ScriptError::SubmissionFailure(format!(
                "creation transaction {tx_hash:#x} reverted"
            )));
        }

        let proxy = receipt
            .logs()
            .iter()
            .filter(|log| log.inner.address == factory)
            .find_map(|log| log.log_decode::<IProxyFactory::ProxyCreation>().ok())
            .map(|log| log.inner.data.proxy);

        Ok(SubmittedCreation { tx_hash, proxy })
    }
}
