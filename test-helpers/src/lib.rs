//! Common helper functions used in unit and integration tests across the project crates

pub mod misc;
pub mod vectors;
