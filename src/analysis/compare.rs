use crate::models::{AreaComparison, AreaSummary};
use indexmap::IndexMap;

/// Accumulates per-area summaries in first-seen order
#[derive(Debug, Default)]
pub struct AreaComparator {
    areas: Vec<String>,
    summaries: IndexMap<String, AreaSummary>,
}

impl AreaComparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an area's summary. A repeated area replaces the earlier value
    /// but keeps its original position.
    pub fn record(&mut self, area: impl Into<String>, summary: AreaSummary) {
        let area = area.into();
        self.areas.push(area.clone());
        self.summaries.insert(area, summary);
    }

    pub fn finish(self) -> AreaComparison {
        let (cheapest_area, most_expensive_area) = rank(&self.summaries);
        AreaComparison {
            areas: self.areas,
            comparison: self.summaries,
            cheapest_area,
            most_expensive_area,
        }
    }
}

/// Names of the areas with the lowest and highest average price.
/// Ties go to whichever area comes first.
fn rank(summaries: &IndexMap<String, AreaSummary>) -> (Option<String>, Option<String>) {
    let mut cheapest: Option<(&String, f64)> = None;
    let mut priciest: Option<(&String, f64)> = None;

    for (area, summary) in summaries {
        let avg = summary.average_price;
        if cheapest.map_or(true, |(_, best)| avg < best) {
            cheapest = Some((area, avg));
        }
        if priciest.map_or(true, |(_, best)| avg > best) {
            priciest = Some((area, avg));
        }
    }

    (
        cheapest.map(|(area, _)| area.clone()),
        priciest.map(|(area, _)| area.clone()),
    )
}
