use super::definitions::{CompareAreasTool, SaveSearchResultsTool, SearchAccommodationsTool};
use super::{Tool, ToolError};
use crate::crawler::AccommodationCrawler;
use indexmap::IndexMap;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// Table of callable tools keyed by name, built once at startup
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<&'static str, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the three accommodation tools
    pub fn with_accommodation_tools(crawler: AccommodationCrawler) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SearchAccommodationsTool::new(crawler.clone())));
        registry.register(Arc::new(CompareAreasTool::new(crawler)));
        registry.register(Arc::new(SaveSearchResultsTool));
        info!("Registered {} tools", registry.tools.len());
        registry
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name(), tool);
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.keys().copied()
    }

    /// Name, description and parameter schema for every tool
    pub fn describe(&self) -> Vec<Value> {
        self.tools
            .values()
            .map(|tool| {
                json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "parameters": tool.parameters(),
                })
            })
            .collect()
    }

    /// Run the named tool with JSON arguments
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        debug!(tool = name, "Dispatching tool call");
        tool.execute(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FallbackPolicy;
    use crate::scrapers::testing::FailingSource;
    use crate::scrapers::ListingFetcher;

    fn registry() -> ToolRegistry {
        let fetcher = ListingFetcher::new(Arc::new(FailingSource), FallbackPolicy::Synthetic);
        ToolRegistry::with_accommodation_tools(AccommodationCrawler::new(fetcher))
    }

    #[test]
    fn registers_tools_in_order() {
        let names: Vec<&str> = registry().names().collect();
        assert_eq!(
            names,
            vec!["search_accommodations", "compare_areas", "save_search_results"]
        );
        assert_eq!(registry().describe()[1]["parameters"]["required"], json!(["areas"]));
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let err = registry().dispatch("book_room", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(name) if name == "book_room"));
    }

    #[tokio::test]
    async fn bad_arguments_are_rejected() {
        let err = registry()
            .dispatch("compare_areas", json!({ "areas": "강남" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn search_defaults_dates_to_empty() {
        let output = registry()
            .dispatch("search_accommodations", json!({ "keyword": "명동" }))
            .await
            .unwrap();
        assert_eq!(output["keyword"], "명동");
        assert_eq!(output["check_in"], "");
        assert_eq!(output["total_found"], 10);
        assert_eq!(output["accommodations"].as_array().unwrap().len(), 5);
        assert_eq!(output["price_analysis"]["min_price"], 100_000);
    }

    #[tokio::test]
    async fn comparison_output_keeps_area_order() {
        let output = registry()
            .dispatch("compare_areas", json!({ "areas": ["홍대", "강남", "명동"] }))
            .await
            .unwrap();
        let keys: Vec<&String> = output["comparison"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["홍대", "강남", "명동"]);
        assert_eq!(output["cheapest_area"], "홍대");
    }

    #[tokio::test]
    async fn save_failure_is_returned_as_data() {
        let missing = std::env::temp_dir()
            .join(format!("no-such-dir-{}", std::process::id()))
            .join("out.json");
        let output = registry()
            .dispatch(
                "save_search_results",
                json!({ "keyword": "x", "results": {}, "filename": missing }),
            )
            .await
            .unwrap();
        assert_eq!(output["success"], false);
        assert!(output["error"].as_str().is_some_and(|e| !e.is_empty()));
    }
}
