//! A JSON record of planned and deployed creations
//!
//! The record lets repeated runs notice a reused salt: planning the exact same
//! creation again is reported, while a distinct creation landing on a salt
//! already in the record is refused.

use std::path::Path;

use alloy::primitives::{Address, B256, U256};
use creation_core::{intent::DeploymentIntent, salt::SaltLedger};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ScriptError,
    utils::{read_json_file, write_json_file},
};

/// The lifecycle state of a recorded creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationStatus {
    /// Planned, not known to be deployed
    Planned,
    /// Deployed by a transaction sent from these scripts
    Deployed,
}

/// A single recorded creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedCreation {
    /// The predicted proxy address
    pub predicted_address: Address,
    /// The factory creating the proxy
    pub factory: Address,
    /// The singleton the proxy delegates to
    pub singleton: Address,
    /// The factory nonce
    pub nonce: U256,
    /// The CREATE2 salt
    pub salt: B256,
    /// The hash of the encoded `setup` call
    pub initializer_hash: B256,
    /// Whether the creation was deployed
    pub status: CreationStatus,
    /// The creation transaction, once deployed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<B256>,
}

impl RecordedCreation {
    /// Whether this entry records the given intent
    fn matches(&self, intent: &DeploymentIntent) -> bool {
        self.predicted_address == intent.predicted_address && self.salt == intent.salt
    }
}

/// The record of creations kept in a JSON file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRecord {
    /// The recorded creations, in planning order
    pub creations: Vec<RecordedCreation>,
}

impl CreationRecord {
    /// Read the record at the given path, starting an empty one if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        read_json_file(path)
    }

    /// Write the record to the given path
    pub fn save(&self, path: &Path) -> Result<(), ScriptError> {
        write_json_file(path, self)
    }

    /// Rebuild the salt ledger of every recorded creation
    pub fn ledger(&self) -> Result<SaltLedger, ScriptError> {
        let mut ledger = SaltLedger::new();
        for creation in &self.creations {
            ledger.record(creation.initializer_hash, creation.nonce)?;
        }

        Ok(ledger)
    }

    /// Add a planned creation to the record, returning whether it was new
    ///
    /// A creation already in the record is left untouched.
    pub fn plan(&mut self, intent: &DeploymentIntent) -> Result<bool, ScriptError> {
        let mut ledger = self.ledger()?;
        ledger.record(intent.initializer_hash(), intent.nonce)?;

        if self.creations.iter().any(|c| c.matches(intent)) {
            return Ok(false);
        }

        self.creations.push(RecordedCreation {
            predicted_address: intent.predicted_address,
            factory: intent.factory.address,
            singleton: intent.singleton.address,
            nonce: intent.nonce,
            salt: intent.salt,
            initializer_hash: intent.initializer_hash(),
            status: CreationStatus::Planned,
            tx_hash: None,
        });
        Ok(true)
    }

    /// The recorded creation matching the given intent, if any
    pub fn find(&self, intent: &DeploymentIntent) -> Option<&RecordedCreation> {
        self.creations.iter().find(|c| c.matches(intent))
    }

    /// Mark a recorded creation as deployed by the given transaction
    pub fn mark_deployed(&mut self, intent: &DeploymentIntent, tx_hash: B256) {
        for creation in self.creations.iter_mut().filter(|c| c.matches(intent)) {
            creation.status = CreationStatus::Deployed;
            creation.tx_hash = Some(tx_hash);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use alloy::primitives::{B256, U256};
    use creation_core::{
        intent::DeploymentIntent,
        template::TemplateRegistry,
        types::{ContractInterface, ContractReference, SetupParams},
    };
    use test_helpers::vectors::{VECTOR_FACTORY, VECTOR_OWNER, VECTOR_SINGLETON};

    use super::{CreationRecord, CreationStatus};

    /// Plan the vector Safe with the given nonce
    fn intent(nonce: u64) -> DeploymentIntent {
        DeploymentIntent::plan(
            &TemplateRegistry::canonical(),
            ContractReference::new(VECTOR_FACTORY, ContractInterface::ProxyFactory),
            ContractReference::new(VECTOR_SINGLETON, ContractInterface::Safe),
            &SetupParams::new(vec![VECTOR_OWNER], 1),
            U256::from(nonce),
        )
        .unwrap()
    }

    #[test]
    fn test_repeated_plan() {
        let mut record = CreationRecord::default();
        assert!(record.plan(&intent(1)).unwrap());
        assert!(!record.plan(&intent(1)).unwrap());
        assert!(record.plan(&intent(2)).unwrap());
        assert_eq!(record.creations.len(), 2);
        assert_eq!(record.ledger().unwrap().len(), 2);
    }

    #[test]
    fn test_mark_deployed() {
        let mut record = CreationRecord::default();
        let planned = intent(1);
        record.plan(&planned).unwrap();
        record.plan(&intent(2)).unwrap();

        let tx_hash = B256::repeat_byte(9);
        record.mark_deployed(&planned, tx_hash);

        assert_eq!(record.creations[0].status, CreationStatus::Deployed);
        assert_eq!(record.creations[0].tx_hash, Some(tx_hash));
        assert_eq!(record.creations[1].status, CreationStatus::Planned);
    }

    #[test]
    fn test_find() {
        let mut record = CreationRecord::default();
        let planned = intent(1);
        assert!(record.find(&planned).is_none());

        record.plan(&planned).unwrap();
        assert_eq!(record.find(&planned).unwrap().status, CreationStatus::Planned);
        assert!(record.find(&intent(2)).is_none());

        record.mark_deployed(&planned, B256::repeat_byte(9));
        assert_eq!(record.find(&planned).unwrap().status, CreationStatus::Deployed);
    }

    #[test]
    fn test_missing_file_is_empty_record() {
        let path = env::temp_dir().join(format!("missing-record-{}.json", process::id()));
        assert_eq!(CreationRecord::load(&path).unwrap(), CreationRecord::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = env::temp_dir().join(format!("creation-record-{}.json", process::id()));
        let mut record = CreationRecord::default();
        record.plan(&intent(1)).unwrap();

        record.save(&path).unwrap();
        let loaded = CreationRecord::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, record);
    }
}
