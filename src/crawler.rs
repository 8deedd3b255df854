use crate::analysis::{price_report, AreaComparator};
use crate::models::{AreaComparison, AreaSummary, SearchResult};
use crate::scrapers::{ListingFetcher, SearchParams};
use anyhow::Result;
use tracing::{info, instrument};

/// Number of listings returned inline with a search result
pub const SAMPLE_SIZE: usize = 5;

/// Search and comparison operations over a listing fetcher
#[derive(Clone)]
pub struct AccommodationCrawler {
    fetcher: ListingFetcher,
}

impl AccommodationCrawler {
    pub fn new(fetcher: ListingFetcher) -> Self {
        Self { fetcher }
    }

    /// Fetch listings for a keyword and summarize their prices
    #[instrument(skip(self), fields(policy = ?self.fetcher.policy()))]
    pub async fn search_accommodations(
        &self,
        keyword: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<SearchResult> {
        let params = SearchParams::new(keyword, check_in, check_out);
        if let Some(nights) = params.nights() {
            info!(nights, "Searching '{}'", keyword);
        }

        let listings = self.fetcher.fetch(&params).await?;
        let price_analysis = price_report(&listings);

        Ok(SearchResult {
            keyword: params.keyword,
            check_in: params.check_in,
            check_out: params.check_out,
            total_found: listings.len(),
            accommodations: listings.into_iter().take(SAMPLE_SIZE).collect(),
            price_analysis,
        })
    }

    /// Search each area in turn and rank them by average price
    #[instrument(skip(self))]
    pub async fn compare_areas(&self, areas: &[String]) -> Result<AreaComparison> {
        let mut comparator = AreaComparator::new();

        for area in areas {
            let listings = self.fetcher.fetch(&SearchParams::keyword(area.as_str())).await?;
            let report = price_report(&listings);
            comparator.record(area.as_str(), AreaSummary::from(&report));
        }

        let comparison = comparator.finish();
        info!(
            cheapest = ?comparison.cheapest_area,
            most_expensive = ?comparison.most_expensive_area,
            "Compared {} areas",
            areas.len()
        );
        Ok(comparison)
    }
}
