use crate::config::{CrawlerConfig, REQUEST_HEADERS};
use crate::models::Listing;
use crate::scrapers::traits::ListingSource;
use crate::scrapers::types::SearchParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Upstream response body
#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawListing>,
}

/// A listing as the upstream API names its fields
#[derive(Debug, Default, Deserialize)]
struct RawListing {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    price: Option<i64>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    review_count: Option<i64>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    amenities: Option<Vec<String>>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    available: Option<bool>,
}

impl From<RawListing> for Listing {
    fn from(raw: RawListing) -> Self {
        Listing {
            name: raw.name.unwrap_or_default(),
            price: raw.price,
            rating: raw.rating,
            reviews: raw.review_count,
            location: raw.address.unwrap_or_default(),
            amenities: raw.amenities.unwrap_or_default(),
            image_url: raw.image,
            availability: raw.available.unwrap_or(true),
            check_in: None,
            check_out: None,
        }
    }
}

/// Listing source backed by the accommodation search API
pub struct HttpListingSource {
    client: Client,
    api_url: String,
}

impl HttpListingSource {
    /// Create a source with the configured endpoint, headers and timeout
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in REQUEST_HEADERS {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid header name '{}'", name))?;
            headers.insert(name, HeaderValue::from_static(value));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Map an upstream JSON body onto listings
    fn parse_listings(body: &str) -> Result<Vec<Listing>> {
        let response: SearchResponse =
            serde_json::from_str(body).context("Failed to parse search response")?;
        Ok(response.results.into_iter().map(Listing::from).collect())
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch(&self, params: &SearchParams) -> Result<Vec<Listing>> {
        let url = params.query_url(&self.api_url);
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach accommodation API")?;

        if response.status() != StatusCode::OK {
            warn!("Accommodation API returned status: {}", response.status());
            anyhow::bail!("Accommodation API returned status {}", response.status());
        }

        let body = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of JSON", body.len());

        let listings = Self::parse_listings(&body)?;
        info!("Fetched {} listings for '{}'", listings.len(), params.keyword);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "accommodation-api"
    }
}
