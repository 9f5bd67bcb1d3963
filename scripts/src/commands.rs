//! Implementations of the creation scripts

use alloy::primitives::Address;
use creation_core::{
    initializer::validate_setup,
    intent::DeploymentIntent,
    template::TemplateRegistry,
    types::{ContractInterface, ContractReference},
};
use tracing::{info, warn};

use crate::{
    client::{ChainClient, SubmittedCreation},
    config::CreationConfig,
    errors::ScriptError,
    record::{CreationRecord, CreationStatus},
    report::CreationReport,
    resolver::ContractResolver,
};

/// The result of running a creation
#[derive(Debug, Clone)]
pub struct CreationOutcome {
    /// The planned creation
    pub intent: DeploymentIntent,
    /// The submitted transaction, unless only the transaction was built
    pub submitted: Option<SubmittedCreation>,
}

/// Plan a creation from its configuration
///
/// The client is only used to fetch the creation code of a factory with no
/// known template. Without a client such a factory fails to resolve.
pub async fn plan_creation<C: ChainClient>(
    config: &CreationConfig,
    resolver: &impl ContractResolver,
    client: Option<&C>,
) -> Result<DeploymentIntent, ScriptError> {
    validate_setup(&config.setup)?;

    let singleton = resolve(resolver, config.singleton_interface, config.singleton)?;
    let factory = resolve(resolver, ContractInterface::ProxyFactory, config.factory)?;

    let mut templates = TemplateRegistry::canonical();
    match (&config.creation_code, client) {
        (Some(code), _) => templates.register(factory.address, code.clone()),
        (None, Some(client)) if !templates.contains(&factory.address) => {
            info!("no known creation code for factory {}, fetching it", factory.address);
            let code = client.proxy_creation_code(factory.address).await?;
            templates.register(factory.address, code);
        }
        _ => {}
    }

    DeploymentIntent::plan(&templates, factory, singleton, &config.setup, config.nonce)
        .map_err(ScriptError::from)
}

/// Resolve a contract, preferring an explicit address
fn resolve(
    resolver: &impl ContractResolver,
    interface: ContractInterface,
    address: Option<Address>,
) -> Result<ContractReference, ScriptError> {
    match address {
        Some(address) => Ok(ContractReference::new(address, interface)),
        None => resolver.resolve(interface),
    }
}

/// Plan a Safe creation, print it, and submit it unless only building
///
/// In build-only mode the client is never touched. Otherwise the proxy address
/// reported by the factory is checked against the prediction, and a creation
/// the record already shows as deployed is refused before anything is sent.
pub async fn create_safe<C: ChainClient>(
    config: &CreationConfig,
    resolver: &impl ContractResolver,
    client: Option<&C>,
) -> Result<CreationOutcome, ScriptError> {
    let client = match (config.build_only, client) {
        (true, _) => None,
        (false, Some(client)) => Some(client),
        (false, None) => {
            return Err(ScriptError::ClientInitialization(
                "a client is required to submit".to_string(),
            ))
        }
    };

    let intent = plan_creation(config, resolver, client).await?;
    println!("{}", CreationReport::from(&intent));

    let mut record = match &config.record {
        Some(path) => {
            let mut record = CreationRecord::load(path)?;
            if let Some(entry) = record.find(&intent) {
                if entry.status == CreationStatus::Deployed && client.is_some() {
                    return Err(ScriptError::AlreadyDeployed {
                        address: entry.predicted_address,
                        tx_hash: entry.tx_hash,
                    });
                }
            }

            if !record.plan(&intent)? {
                warn!("creation at {} was already planned", intent.predicted_address);
            }
            record.save(path)?;
            Some(record)
        }
        None => None,
    };

    let Some(client) = client else {
        return Ok(CreationOutcome {
            intent,
            submitted: None,
        });
    };

    let submitted = client.submit_creation(&intent).await?;
    match submitted.proxy {
        Some(deployed) if deployed != intent.predicted_address => {
            return Err(ScriptError::AddressMismatch {
                predicted: intent.predicted_address,
                deployed,
            });
        }
        Some(_) => info!("proxy created at {}", intent.predicted_address),
        None => warn!(
            "no ProxyCreation event in {:#x}, could not confirm the proxy address",
            submitted.tx_hash
        ),
    }

    if let (Some(record), Some(path)) = (record.as_mut(), &config.record) {
        record.mark_deployed(&intent, submitted.tx_hash);
        record.save(path)?;
    }

    Ok(CreationOutcome {
        intent,
        submitted: Some(submitted),
    })
}
