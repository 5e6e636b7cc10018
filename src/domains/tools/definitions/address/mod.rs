//! Address-lookup tools backed by the national address API.

pub mod city_insee_code;

pub use city_insee_code::{CityInseeCodeParams, CityInseeCodeTool};
