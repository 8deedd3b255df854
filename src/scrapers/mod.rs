pub mod api;
pub mod fetcher;
pub mod mock;
pub mod traits;
pub mod types;

pub use api::HttpListingSource;
pub use fetcher::ListingFetcher;
pub use types::SearchParams;

/// Stub sources for exercising fetch paths without the network
#[cfg(test)]
pub mod testing {
    use super::traits::ListingSource;
    use super::SearchParams;
    use crate::models::Listing;
    use anyhow::Result;
    use async_trait::async_trait;

    /// Always fails, like an unreachable upstream
    pub struct FailingSource;

    #[async_trait]
    impl ListingSource for FailingSource {
        async fn fetch(&self, _params: &SearchParams) -> Result<Vec<Listing>> {
            anyhow::bail!("connection refused")
        }

        fn source_name(&self) -> &'static str {
            "failing"
        }
    }

    /// Returns the same listings for every search
    pub struct StaticSource {
        listings: Vec<Listing>,
    }

    impl StaticSource {
        pub fn with_prices(prices: &[Option<i64>]) -> Self {
            let listings = prices
                .iter()
                .enumerate()
                .map(|(i, price)| Listing {
                    name: format!("static {}", i),
                    price: *price,
                    rating: None,
                    reviews: None,
                    location: String::new(),
                    amenities: Vec::new(),
                    image_url: None,
                    availability: true,
                    check_in: None,
                    check_out: None,
                })
                .collect();
            Self { listings }
        }
    }

    #[async_trait]
    impl ListingSource for StaticSource {
        async fn fetch(&self, _params: &SearchParams) -> Result<Vec<Listing>> {
            Ok(self.listings.clone())
        }

        fn source_name(&self) -> &'static str {
            "static"
        }
    }
}
