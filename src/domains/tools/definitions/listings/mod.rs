//! MoteurImmo listings tools.
//!
//! - `search_ads`: filtered search across the aggregated portals
//! - `get_ad`: one ad by its MoteurImmo id

pub mod constants;
pub mod get_ad;
pub mod search_ads;

pub use get_ad::{GetAdParams, GetAdTool};
pub use search_ads::{LocationFilter, SearchAdsParams, SearchAdsTool};
