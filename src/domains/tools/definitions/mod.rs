//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod address;
pub mod common;
pub mod listings;

pub use address::{CityInseeCodeParams, CityInseeCodeTool};
pub use listings::{GetAdParams, GetAdTool, SearchAdsParams, SearchAdsTool};
