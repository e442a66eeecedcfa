//! Loads static enemy balance data and decodes it into typed enemy records.

pub mod cli;
pub mod data;
