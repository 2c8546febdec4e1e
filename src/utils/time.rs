use chrono::{DateTime, SecondsFormat, Utc};

/// Current time in unix seconds, the unit of a batch's dispatch time.
pub fn time_secs() -> i64 {
    let time: DateTime<chrono::Utc> = Utc::now();
    time.timestamp()
}

/// RFC 3339 in UTC without fractional seconds, e.g. `2023-11-14T22:13:20Z`.
pub fn format_rfc3339_short(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_format_rfc3339_short() {
        let time = Utc.timestamp_opt(1700000000, 500).unwrap();
        assert_eq!(format_rfc3339_short(&time), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_time_secs() {
        assert!(time_secs() > 1700000000);
    }
}
