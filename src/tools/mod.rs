//! Tools module
//!
//! MCP tool implementations for Galactic Cocktails.

pub mod catalog;
pub mod cocktailatrice;
pub mod favorites;
pub mod status;
pub mod suggestions;
