use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single lodging listing, either fetched or synthesized
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub name: String,
    pub price: Option<i64>,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
    pub location: String,
    pub amenities: Vec<String>,
    pub image_url: Option<String>,
    pub availability: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
}

/// Listing counts per price bucket
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceDistribution {
    pub budget: usize,
    pub mid_range: usize,
    pub luxury: usize,
}

impl PriceDistribution {
    pub fn total(&self) -> usize {
        self.budget + self.mid_range + self.luxury
    }
}

/// Descriptive price statistics over a listing set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceAnalysis {
    pub average_price: f64,
    pub min_price: i64,
    pub max_price: i64,
    pub price_range: u64,
    pub total_accommodations: usize,
    pub price_distribution: PriceDistribution,
}

/// Either a full analysis or the reason one could not be produced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PriceReport {
    Analysis(PriceAnalysis),
    Error { error: String },
}

impl PriceReport {
    pub fn analysis(&self) -> Option<&PriceAnalysis> {
        match self {
            PriceReport::Analysis(analysis) => Some(analysis),
            PriceReport::Error { .. } => None,
        }
    }
}

/// Output of a keyword search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub keyword: String,
    pub check_in: String,
    pub check_out: String,
    pub total_found: usize,
    pub accommodations: Vec<Listing>,
    pub price_analysis: PriceReport,
}

/// Reduced per-area statistics used when comparing areas
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct AreaSummary {
    pub average_price: f64,
    pub min_price: i64,
    pub max_price: i64,
    pub total_accommodations: usize,
}

impl From<&PriceReport> for AreaSummary {
    /// Areas without usable price data are reported as zeros
    fn from(report: &PriceReport) -> Self {
        match report.analysis() {
            Some(analysis) => Self {
                average_price: analysis.average_price,
                min_price: analysis.min_price,
                max_price: analysis.max_price,
                total_accommodations: analysis.total_accommodations,
            },
            None => Self::default(),
        }
    }
}

/// Price comparison across several areas, keyed in first-seen order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaComparison {
    pub areas: Vec<String>,
    pub comparison: IndexMap<String, AreaSummary>,
    pub cheapest_area: Option<String>,
    pub most_expensive_area: Option<String>,
}

/// Result of persisting a payload to disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveOutcome {
    pub fn saved(filename: String, count: usize) -> Self {
        Self {
            success: true,
            filename: Some(filename),
            message: Some(format!("Successfully saved {} accommodations", count)),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: None,
            message: None,
            error: Some(error.into()),
        }
    }
}
