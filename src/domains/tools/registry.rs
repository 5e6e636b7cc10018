//! Tool Registry - the closed catalog of tools.
//!
//! `ToolKind` is the single source of truth for tool names: discovery lists
//! exactly its variants and invocation only accepts names that resolve to
//! one of them.

use rmcp::model::Tool;

use super::definitions::{CityInseeCodeTool, GetAdTool, SearchAdsTool};

/// Every tool this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    SearchAds,
    GetAd,
    SearchCityInseeCode,
}

impl ToolKind {
    /// All tools, in discovery order.
    pub const ALL: [ToolKind; 3] = [
        ToolKind::SearchAds,
        ToolKind::GetAd,
        ToolKind::SearchCityInseeCode,
    ];

    /// Name as registered in MCP.
    pub fn name(self) -> &'static str {
        match self {
            Self::SearchAds => SearchAdsTool::NAME,
            Self::GetAd => GetAdTool::NAME,
            Self::SearchCityInseeCode => CityInseeCodeTool::NAME,
        }
    }

    /// Resolve a tool name received from a client.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Tool model (name, description, input schema) for discovery.
    pub fn to_tool(self) -> Tool {
        match self {
            Self::SearchAds => SearchAdsTool::to_tool(),
            Self::GetAd => GetAdTool::to_tool(),
            Self::SearchCityInseeCode => CityInseeCodeTool::to_tool(),
        }
    }
}

/// Tool registry - lists the available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        ToolKind::ALL.into_iter().map(ToolKind::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        ToolKind::ALL.into_iter().map(ToolKind::to_tool).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        assert_eq!(
            ToolRegistry::tool_names(),
            vec!["search_ads", "get_ad", "search_city_insee_code"]
        );
    }

    #[test]
    fn test_catalog_has_no_duplicates_or_extras() {
        let tools = ToolRegistry::get_all_tools();
        let names: HashSet<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(tools.len(), 3);
        assert_eq!(
            names,
            HashSet::from(["search_ads", "get_ad", "search_city_insee_code"])
        );
    }

    #[test]
    fn test_every_listed_tool_resolves() {
        for tool in ToolRegistry::get_all_tools() {
            let kind = ToolKind::from_name(&tool.name).expect("listed tool must resolve");
            assert_eq!(kind.name(), tool.name);
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_unknown_name_does_not_resolve() {
        assert_eq!(ToolKind::from_name("not_a_tool"), None);
        assert_eq!(ToolKind::from_name("SEARCH_ADS"), None);
        assert_eq!(ToolKind::from_name(""), None);
    }
}
