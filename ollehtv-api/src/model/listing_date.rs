use chrono::NaiveDate;

/// Value the vendor reads as "today"
pub const CURRENT_DATE: &str = "0";

/// Date filter for `epg/list`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingDate {
    /// Let the service pick the current date
    #[default]
    Current,
    /// A calendar date, sent as `YYYYMMDD`
    On(NaiveDate),
    /// A pre-formatted value passed through as-is
    Raw(String),
}

impl ListingDate {
    /// Encoding used for `SRCH_DATE`
    pub fn to_param(&self) -> String {
        match self {
            ListingDate::Current => CURRENT_DATE.to_string(),
            ListingDate::On(date) => date.format("%Y%m%d").to_string(),
            ListingDate::Raw(raw) if raw.is_empty() => CURRENT_DATE.to_string(),
            ListingDate::Raw(raw) => raw.clone(),
        }
    }
}

impl From<NaiveDate> for ListingDate {
    fn from(date: NaiveDate) -> Self {
        ListingDate::On(date)
    }
}

impl From<&str> for ListingDate {
    fn from(raw: &str) -> Self {
        ListingDate::Raw(raw.to_string())
    }
}

impl From<String> for ListingDate {
    fn from(raw: String) -> Self {
        ListingDate::Raw(raw)
    }
}

impl From<Option<NaiveDate>> for ListingDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map(ListingDate::On).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_date_sentinel() {
        assert_eq!(ListingDate::default().to_param(), "0");
        assert_eq!(ListingDate::from("").to_param(), "0");
        assert_eq!(ListingDate::from(None::<NaiveDate>).to_param(), "0");
    }

    #[test]
    fn test_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
        assert_eq!(ListingDate::from(date).to_param(), "20170101");
        assert_eq!(ListingDate::from(Some(date)).to_param(), "20170101");
    }

    #[test]
    fn test_raw_passthrough() {
        assert_eq!(ListingDate::from("20170101").to_param(), "20170101");
        assert_eq!(
            ListingDate::from("20170101".to_string()),
            ListingDate::Raw("20170101".to_string())
        );
    }
}
