use chrono::NaiveDate;
use tracing::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Search parameters for an accommodation lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Free-text keyword, usually an area name such as "광화문"
    pub keyword: String,
    /// Check-in date (YYYY-MM-DD), empty when unset
    pub check_in: String,
    /// Check-out date (YYYY-MM-DD), empty when unset
    pub check_out: String,
}

impl SearchParams {
    pub fn new(
        keyword: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            check_in: check_in.into(),
            check_out: check_out.into(),
        }
    }

    /// Keyword-only search, as used by area comparison
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self::new(keyword, "", "")
    }

    /// Build the upstream query URL for these parameters
    pub fn query_url(&self, base_url: &str) -> String {
        let mut url = format!("{}?keyword={}", base_url, urlencoding::encode(&self.keyword));
        if !self.check_in.is_empty() {
            url.push_str("&check_in=");
            url.push_str(&urlencoding::encode(&self.check_in));
        }
        if !self.check_out.is_empty() {
            url.push_str("&check_out=");
            url.push_str(&urlencoding::encode(&self.check_out));
        }
        url
    }

    /// Number of nights between the dates, if both parse and are ordered
    pub fn nights(&self) -> Option<i64> {
        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;
        let nights = (check_out - check_in).num_days();
        (nights > 0).then_some(nights)
    }

    /// Log suspicious dates. Dates are forwarded upstream as given either way.
    pub fn warn_on_invalid_dates(&self) {
        for (field, value) in [("check_in", &self.check_in), ("check_out", &self.check_out)] {
            if !value.is_empty() && parse_date(value).is_none() {
                warn!(field, value = %value, "Date is not in YYYY-MM-DD form");
            }
        }

        if let (Some(check_in), Some(check_out)) =
            (parse_date(&self.check_in), parse_date(&self.check_out))
        {
            if check_out <= check_in {
                warn!(%check_in, %check_out, "Check-out is not after check-in");
            }
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
