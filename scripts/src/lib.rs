//! Scripts for planning Safe proxy creations at a predicted address, and
//! submitting them through the proxy factory.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod record;
pub mod report;
pub mod resolver;
mod solidity;
pub mod utils;
