//! Hydrate Tools module
//!
//! MCP tool implementations for the Hydration Goal Manager.

pub mod goal;
pub mod intake;
pub mod status;
