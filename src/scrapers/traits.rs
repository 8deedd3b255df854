use crate::models::Listing;
use crate::scrapers::types::SearchParams;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all upstream listing sources
/// Anything that can turn a keyword and dates into listings plugs in here
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch listings matching the search parameters
    async fn fetch(&self, params: &SearchParams) -> Result<Vec<Listing>>;

    /// Get the name of the upstream source
    fn source_name(&self) -> &'static str;
}
