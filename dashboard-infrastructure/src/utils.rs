use anyhow::{anyhow, Result};
use chrono::NaiveDate;

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|err| anyhow!("invalid date '{}': {}", date, err))
}

/// SQL `COUNT(*)` comes back signed; a negative value never happens in practice.
pub fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_days() {
        let date = parse_date("2024-02-29").expect("leap day");
        assert_eq!(date.to_string(), "2024-02-29");
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn to_count_clamps_negative_values() {
        assert_eq!(to_count(7), 7);
        assert_eq!(to_count(-1), 0);
    }
}
