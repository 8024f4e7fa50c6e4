//! CLI command implementations.

pub mod common;
pub mod cycle;
pub mod encode;
pub mod memory;
pub mod version;
