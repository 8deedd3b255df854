use crate::models::{Listing, PriceAnalysis, PriceDistribution, PriceReport};
use thiserror::Error;

/// Prices below this are budget
pub const BUDGET_CEILING: i64 = 100_000;
/// Prices at or above this are luxury
pub const LUXURY_FLOOR: i64 = 200_000;

/// Reasons a listing set cannot be analyzed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No data to analyze")]
    NoData,

    #[error("No price data available")]
    NoPriceData,
}

/// Compute price statistics over the priced subset of `listings`
pub fn analyze_price_trends(listings: &[Listing]) -> Result<PriceAnalysis, AnalysisError> {
    if listings.is_empty() {
        return Err(AnalysisError::NoData);
    }

    let prices: Vec<i64> = listings.iter().filter_map(|l| l.price).collect();
    let (Some(&min_price), Some(&max_price)) = (prices.iter().min(), prices.iter().max()) else {
        return Err(AnalysisError::NoPriceData);
    };

    let sum: i128 = prices.iter().map(|&p| i128::from(p)).sum();
    let mut distribution = PriceDistribution::default();
    for &price in &prices {
        if price < BUDGET_CEILING {
            distribution.budget += 1;
        } else if price < LUXURY_FLOOR {
            distribution.mid_range += 1;
        } else {
            distribution.luxury += 1;
        }
    }
    debug_assert_eq!(distribution.total(), prices.len());

    Ok(PriceAnalysis {
        average_price: sum as f64 / prices.len() as f64,
        min_price,
        max_price,
        price_range: max_price.abs_diff(min_price),
        total_accommodations: listings.len(),
        price_distribution: distribution,
    })
}

/// Same as [`analyze_price_trends`], with failures folded into the report
pub fn price_report(listings: &[Listing]) -> PriceReport {
    match analyze_price_trends(listings) {
        Ok(analysis) => PriceReport::Analysis(analysis),
        Err(e) => PriceReport::Error {
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::mock::generate_mock_listings;

    fn priced(prices: &[Option<i64>]) -> Vec<Listing> {
        prices
            .iter()
            .map(|price| Listing {
                name: "test".to_string(),
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
            .collect()
    }

    #[test]
    fn empty_input_reports_no_data() {
        assert_eq!(analyze_price_trends(&[]), Err(AnalysisError::NoData));
        assert_eq!(
            price_report(&[]),
            PriceReport::Error {
                error: "No data to analyze".to_string()
            }
        );
    }

    #[test]
    fn all_null_prices_report_no_price_data() {
        assert_eq!(
            analyze_price_trends(&priced(&[None, None])),
            Err(AnalysisError::NoPriceData)
        );
    }

    #[test]
    fn one_listing_per_bucket() {
        let analysis =
            analyze_price_trends(&priced(&[Some(80_000), Some(150_000), Some(250_000)])).unwrap();
        assert_eq!(analysis.average_price, 160_000.0);
        assert_eq!(analysis.min_price, 80_000);
        assert_eq!(analysis.max_price, 250_000);
        assert_eq!(analysis.price_range, 170_000);
        assert_eq!(analysis.total_accommodations, 3);
        assert_eq!(
            analysis.price_distribution,
            PriceDistribution {
                budget: 1,
                mid_range: 1,
                luxury: 1
            }
        );
    }

    #[test]
    fn thresholds_are_half_open() {
        let analysis = analyze_price_trends(&priced(&[
            Some(99_999),
            Some(100_000),
            Some(199_999),
            Some(200_000),
        ]))
        .unwrap();
        assert_eq!(analysis.price_distribution.budget, 1);
        assert_eq!(analysis.price_distribution.mid_range, 2);
        assert_eq!(analysis.price_distribution.luxury, 1);
    }

    #[test]
    fn unpriced_listings_count_toward_total_only() {
        let analysis =
            analyze_price_trends(&priced(&[None, Some(120_000), None, Some(0)])).unwrap();
        assert_eq!(analysis.total_accommodations, 4);
        assert_eq!(analysis.price_distribution.total(), 2);
        assert_eq!(analysis.min_price, 0);
        assert_eq!(analysis.average_price, 60_000.0);
    }

    #[test]
    fn extreme_prices_do_not_overflow() {
        let analysis = analyze_price_trends(&priced(&[Some(i64::MAX), Some(1)])).unwrap();
        assert_eq!(analysis.average_price, 2f64.powi(62));
        assert_eq!(analysis.max_price, i64::MAX);
        assert_eq!(analysis.price_distribution.luxury, 1);

        let analysis = analyze_price_trends(&priced(&[Some(i64::MIN), Some(i64::MAX)])).unwrap();
        assert_eq!(analysis.price_range, u64::MAX);
        assert_eq!(analysis.average_price, -0.5);
        assert_eq!(analysis.price_distribution.budget, 1);
    }

    #[test]
    fn mock_listings_analysis() {
        let analysis = analyze_price_trends(&generate_mock_listings("강남")).unwrap();
        assert_eq!(analysis.average_price, 190_000.0);
        assert_eq!(analysis.min_price, 100_000);
        assert_eq!(analysis.max_price, 280_000);
        assert_eq!(analysis.price_distribution.mid_range, 5);
        assert_eq!(analysis.price_distribution.luxury, 5);
    }
}
