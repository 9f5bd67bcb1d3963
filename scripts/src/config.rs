//! The configuration of a Safe creation, resolved from CLI arguments once
//! before any planning happens

use std::path::PathBuf;

use alloy::primitives::{Address, Bytes, U256};
use creation_core::{
    address::{parse_address, parse_address_list},
    types::{ContractInterface, SetupParams},
};
use itertools::Itertools;
use tracing::info;

use crate::{
    cli::CreateArgs,
    errors::ScriptError,
    resolver::OwnerSource,
    utils::{parse_hex_bytes, parse_u256, wall_clock_nonce},
};

/// A fully resolved Safe creation configuration
#[derive(Debug, Clone)]
pub struct CreationConfig {
    /// The singleton interface the proxy delegates to, `Safe` unless `--l2` is set
    pub singleton_interface: ContractInterface,
    /// Whether to stop after printing the creation transaction
    pub build_only: bool,
    /// The arguments of the Safe's `setup` call
    pub setup: SetupParams,
    /// The factory nonce, wall clock milliseconds unless given
    pub nonce: U256,
    /// A singleton address overriding the resolved deployment
    pub singleton: Option<Address>,
    /// A factory address overriding the resolved deployment
    pub factory: Option<Address>,
    /// The factory's proxy creation code, if given explicitly
    pub creation_code: Option<Bytes>,
    /// The record of planned creations to check and update
    pub record: Option<PathBuf>,
}

impl CreationConfig {
    /// Resolve the configuration from CLI arguments
    ///
    /// `owner_source` is only consulted when no owner list is given.
    pub fn from_args(
        args: &CreateArgs,
        owner_source: &impl OwnerSource,
    ) -> Result<Self, ScriptError> {
        let owners = match &args.owners {
            Some(owners) => parse_address_list(owners)?,
            None => vec![owner_source.default_owner()?],
        };

        let nonce = match &args.nonce {
            Some(nonce) => parse_u256(nonce, "nonce")?,
            None => {
                let nonce = wall_clock_nonce()?;
                info!("no nonce given, using wall clock nonce {nonce}");
                nonce
            }
        };

        let setup_data = args
            .setup_data
            .as_deref()
            .map(|data| parse_hex_bytes(data, "setup data"))
            .transpose()?
            .unwrap_or_default();
        let payment = args
            .payment
            .as_deref()
            .map(|payment| parse_u256(payment, "payment"))
            .transpose()?
            .unwrap_or_default();

        let setup = SetupParams::new(owners, args.threshold)
            .with_fallback_handler(parse_optional_address(args.fallback.as_deref())?)
            .with_setup_call(parse_optional_address(args.setup_to.as_deref())?, setup_data)
            .with_payment(
                parse_optional_address(args.payment_token.as_deref())?,
                payment,
                parse_optional_address(args.payment_receiver.as_deref())?,
            );

        info!(
            "owners: [{}], threshold: {}",
            setup.owners.iter().join(", "),
            setup.threshold
        );

        let singleton_interface = if args.l2 {
            ContractInterface::SafeL2
        } else {
            ContractInterface::Safe
        };

        Ok(Self {
            singleton_interface,
            build_only: args.build_only,
            setup,
            nonce,
            singleton: args.singleton.as_deref().map(parse_address).transpose()?,
            factory: args.factory.as_deref().map(parse_address).transpose()?,
            creation_code: args
                .creation_code
                .as_deref()
                .map(|code| parse_hex_bytes(code, "creation code"))
                .transpose()?,
            record: args.record.clone(),
        })
    }
}

/// Parse an optional address, defaulting to the zero address
fn parse_optional_address(raw: Option<&str>) -> Result<Address, ScriptError> {
    Ok(raw.map(parse_address).transpose()?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, hex, Address, U256};
    use creation_core::{errors::CreationError, types::ContractInterface};

    use super::CreationConfig;
    use crate::{cli::CreateArgs, errors::ScriptError};

    /// An owner source that must not be consulted
    const NO_OWNER: Option<Address> = None;

    /// Arguments as clap fills them in when no flag is given
    fn default_args() -> CreateArgs {
        CreateArgs {
            threshold: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let owner = address!("00000000000000000000000000000000000000aa");
        let config = CreationConfig::from_args(&default_args(), &owner).unwrap();

        assert_eq!(config.setup.owners, [owner]);
        assert_eq!(config.setup.threshold, 1);
        assert_eq!(config.setup.fallback_handler, Address::ZERO);
        assert_eq!(config.setup.setup_to, Address::ZERO);
        assert!(config.setup.setup_data.is_empty());
        assert_eq!(config.setup.payment, U256::ZERO);
        assert_eq!(config.singleton_interface, ContractInterface::Safe);
        assert!(!config.build_only);
        assert!(config.singleton.is_none() && config.factory.is_none());
        assert!(config.nonce > U256::from(1_700_000_000_000u64));
    }

    #[test]
    fn test_explicit_owners_skip_owner_source() {
        let args = CreateArgs {
            owners: Some(
                "0x00000000000000000000000000000000000000aa,0x00000000000000000000000000000000000000bb"
                    .to_string(),
            ),
            threshold: 2,
            nonce: Some("7".to_string()),
            ..default_args()
        };
        let config = CreationConfig::from_args(&args, &NO_OWNER).unwrap();

        assert_eq!(
            config.setup.owners,
            [
                address!("00000000000000000000000000000000000000aa"),
                address!("00000000000000000000000000000000000000bb"),
            ]
        );
        assert_eq!(config.nonce, U256::from(7));
    }

    #[test]
    fn test_missing_owner_source() {
        let res = CreationConfig::from_args(&default_args(), &NO_OWNER);
        assert!(matches!(res, Err(ScriptError::Config(_))));
    }

    #[test]
    fn test_malformed_addresses() {
        let bad_owner = CreateArgs {
            owners: Some("0xd9Db270c1B5E3Bd161E8c8503c55cEABee709552".to_string()),
            ..default_args()
        };
        let bad_fallback = CreateArgs {
            fallback: Some("0x1234".to_string()),
            ..default_args()
        };

        for args in [bad_owner, bad_fallback] {
            let res = CreationConfig::from_args(&args, &Address::repeat_byte(1));
            assert!(matches!(
                res,
                Err(ScriptError::Creation(CreationError::MalformedAddress(_)))
            ));
        }
    }

    #[test]
    fn test_full_arguments() {
        let args = CreateArgs {
            l2: true,
            build_only: true,
            fallback: Some("0xf48f2B2d2a534e402487b3ee7C18c33Aec0Fe5e4".to_string()),
            nonce: Some("0x10".to_string()),
            singleton: Some("0x00000000000000000000000000000000000000cc".to_string()),
            factory: Some("0x00000000000000000000000000000000000000dd".to_string()),
            creation_code: Some("0x6080".to_string()),
            setup_to: Some("0x00000000000000000000000000000000000000ee".to_string()),
            setup_data: Some("0xdeadbeef".to_string()),
            payment: Some("1000".to_string()),
            ..default_args()
        };
        let config = CreationConfig::from_args(&args, &Address::repeat_byte(1)).unwrap();

        assert_eq!(config.singleton_interface, ContractInterface::SafeL2);
        assert!(config.build_only);
        assert_eq!(
            config.setup.fallback_handler,
            address!("f48f2B2d2a534e402487b3ee7C18c33Aec0Fe5e4")
        );
        assert_eq!(config.nonce, U256::from(16));
        assert_eq!(config.singleton, Some(address!("00000000000000000000000000000000000000cc")));
        assert_eq!(config.factory, Some(address!("00000000000000000000000000000000000000dd")));
        assert_eq!(&config.creation_code.unwrap()[..], hex!("6080"));
        assert_eq!(&config.setup.setup_data[..], hex!("deadbeef"));
        assert_eq!(config.setup.payment, U256::from(1000));
    }

    #[test]
    fn test_bad_nonce() {
        let args = CreateArgs {
            nonce: Some("soon".to_string()),
            ..default_args()
        };
        let res = CreationConfig::from_args(&args, &Address::repeat_byte(1));
        assert!(matches!(res, Err(ScriptError::Config(_))));
    }
}
