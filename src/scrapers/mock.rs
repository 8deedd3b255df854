use crate::models::Listing;

pub const MOCK_LISTING_COUNT: usize = 10;

const MOCK_AREAS: [&str; 5] = ["강남", "명동", "홍대", "광화문", "이태원"];
const MOCK_AMENITIES: [&str; 4] = ["WiFi", "주차장", "조식", "피트니스"];

/// Generate deterministic placeholder listings for a keyword
///
/// This is also the fallback whenever the upstream fetch fails, so the output
/// depends on nothing but the keyword.
pub fn generate_mock_listings(keyword: &str) -> Vec<Listing> {
    (0..MOCK_LISTING_COUNT)
        .map(|i| {
            let area = MOCK_AREAS[i % MOCK_AREAS.len()];
            let step = i as i64;
            Listing {
                name: format!("{} 호텔 {}", keyword, i + 1),
                price: Some(100_000 + step * 20_000),
                rating: Some(4.0 + i as f64 * 0.1),
                reviews: Some(100 + step * 50),
                location: format!("{}역 도보 5분", area),
                amenities: MOCK_AMENITIES.iter().map(|a| a.to_string()).collect(),
                image_url: Some(format!("https://picsum.photos/400/300?random={}", i)),
                availability: i % 3 != 0,
                check_in: None,
                check_out: None,
            }
        })
        .collect()
}
