use crate::config::FallbackPolicy;
use crate::models::Listing;
use crate::scrapers::mock::generate_mock_listings;
use crate::scrapers::traits::ListingSource;
use crate::scrapers::types::SearchParams;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Fetches listings from a source, applying the configured fallback policy
#[derive(Clone)]
pub struct ListingFetcher {
    source: Arc<dyn ListingSource>,
    policy: FallbackPolicy,
}

impl ListingFetcher {
    pub fn new(source: Arc<dyn ListingSource>, policy: FallbackPolicy) -> Self {
        Self { source, policy }
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Fetch listings for the given parameters
    ///
    /// Under [`FallbackPolicy::Synthetic`] this never fails: any upstream
    /// error is replaced by mock listings for the keyword.
    pub async fn fetch(&self, params: &SearchParams) -> Result<Vec<Listing>> {
        params.warn_on_invalid_dates();

        match self.source.fetch(params).await {
            Ok(listings) => Ok(listings),
            Err(e) => match self.policy {
                FallbackPolicy::Synthetic => {
                    warn!(
                        source = self.source.source_name(),
                        keyword = %params.keyword,
                        error = %e,
                        "Upstream fetch failed, using mock listings"
                    );
                    let listings = generate_mock_listings(&params.keyword);
                    info!("📋 Generated {} mock listings", listings.len());
                    Ok(listings)
                }
                FallbackPolicy::Surface => Err(e.context(format!(
                    "{} fetch failed for '{}'",
                    self.source.source_name(),
                    params.keyword
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::testing::{FailingSource, StaticSource};

    #[tokio::test]
    async fn failure_falls_back_to_mock_listings() {
        let fetcher = ListingFetcher::new(Arc::new(FailingSource), FallbackPolicy::Synthetic);
        let listings = fetcher.fetch(&SearchParams::keyword("명동")).await.unwrap();
        assert_eq!(listings, generate_mock_listings("명동"));
    }

    #[tokio::test]
    async fn surface_policy_propagates_failure() {
        let fetcher = ListingFetcher::new(Arc::new(FailingSource), FallbackPolicy::Surface);
        let err = fetcher.fetch(&SearchParams::keyword("명동")).await.unwrap_err();
        assert!(err.to_string().contains("명동"));
    }

    #[tokio::test]
    async fn successful_fetch_is_returned_untouched() {
        let source = StaticSource::with_prices(&[Some(50_000), None]);
        let fetcher = ListingFetcher::new(Arc::new(source), FallbackPolicy::Surface);
        let listings = fetcher.fetch(&SearchParams::keyword("anything")).await.unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].price, Some(50_000));
    }

    #[tokio::test]
    async fn empty_upstream_result_is_not_a_failure() {
        let fetcher = ListingFetcher::new(
            Arc::new(StaticSource::with_prices(&[])),
            FallbackPolicy::Synthetic,
        );
        assert!(fetcher.fetch(&SearchParams::keyword("x")).await.unwrap().is_empty());
    }
}
