//! Hydration Goal Manager Library
//!
//! Daily water intake goals from weight, activity level and weather, plus the
//! conversion, progress and validation helpers around them.

pub mod build_info;
pub mod hydration;
pub mod mcp;
pub mod models;
pub mod tools;
