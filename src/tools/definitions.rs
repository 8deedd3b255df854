use super::{Tool, ToolError};
use crate::crawler::AccommodationCrawler;
use crate::storage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

fn to_output<T: Serialize>(value: T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::Execution(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    keyword: String,
    #[serde(default)]
    check_in: String,
    #[serde(default)]
    check_out: String,
}

#[derive(Debug, Deserialize)]
struct CompareArgs {
    areas: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SaveArgs {
    keyword: String,
    results: Value,
    #[serde(default)]
    filename: Option<String>,
}

/// Keyword search with price analysis
pub struct SearchAccommodationsTool {
    crawler: AccommodationCrawler,
}

impl SearchAccommodationsTool {
    pub fn new(crawler: AccommodationCrawler) -> Self {
        Self { crawler }
    }
}

#[async_trait]
impl Tool for SearchAccommodationsTool {
    fn name(&self) -> &'static str {
        "search_accommodations"
    }

    fn description(&self) -> &'static str {
        "Search accommodations by keyword and optional dates, returning the top 5 listings and a price analysis."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "keyword": { "type": "string", "description": "Search keyword, e.g. '광화문' or '강남'" },
                "check_in": { "type": "string", "description": "Check-in date (YYYY-MM-DD)", "default": "" },
                "check_out": { "type": "string", "description": "Check-out date (YYYY-MM-DD)", "default": "" }
            },
            "required": ["keyword"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let args: SearchArgs = serde_json::from_value(args)?;
        let result = self
            .crawler
            .search_accommodations(&args.keyword, &args.check_in, &args.check_out)
            .await
            .map_err(|e| ToolError::Execution(format!("{:#}", e)))?;
        to_output(result)
    }
}

/// Average-price comparison across areas
pub struct CompareAreasTool {
    crawler: AccommodationCrawler,
}

impl CompareAreasTool {
    pub fn new(crawler: AccommodationCrawler) -> Self {
        Self { crawler }
    }
}

#[async_trait]
impl Tool for CompareAreasTool {
    fn name(&self) -> &'static str {
        "compare_areas"
    }

    fn description(&self) -> &'static str {
        "Compare accommodation prices across several areas and name the cheapest and most expensive."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "areas": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Areas to compare, e.g. ['강남', '홍대', '명동']"
                }
            },
            "required": ["areas"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let args: CompareArgs = serde_json::from_value(args)?;
        let comparison = self
            .crawler
            .compare_areas(&args.areas)
            .await
            .map_err(|e| ToolError::Execution(format!("{:#}", e)))?;
        to_output(comparison)
    }
}

/// Persists a result payload as JSON
pub struct SaveSearchResultsTool;

#[async_trait]
impl Tool for SaveSearchResultsTool {
    fn name(&self) -> &'static str {
        "save_search_results"
    }

    fn description(&self) -> &'static str {
        "Save search results to a JSON file (default: <keyword>_results.json)."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "keyword": { "type": "string", "description": "Search keyword" },
                "results": { "type": "object", "description": "Result payload to save" },
                "filename": { "type": ["string", "null"], "description": "Output file name" }
            },
            "required": ["keyword", "results"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value, ToolError> {
        let args: SaveArgs = serde_json::from_value(args)?;
        let outcome =
            storage::save_search_results(&args.keyword, &args.results, args.filename.as_deref())
                .await;
        to_output(outcome)
    }
}
