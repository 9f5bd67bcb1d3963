//! Core Safe proxy creation functionality: initializer encoding and
//! deterministic address prediction, defined agnostically of any chain client

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![no_std]

extern crate alloc;

pub mod address;
pub mod constants;
pub mod deriver;
pub mod errors;
pub mod initializer;
pub mod intent;
pub mod salt;
pub mod solidity;
pub mod template;
pub mod types;
