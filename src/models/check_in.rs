use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Timezone the check-in log is kept in, regardless of where the server runs.
pub const LOG_TIMEZONE: Tz = chrono_tz::Asia::Bangkok;

pub const DATE_FORMAT: &str = "%m/%d/%Y";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// One row of the check-in log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInRecord {
    pub name: String,
    pub date: String,
    pub time: String,
}

impl CheckInRecord {
    /// Stamp a check-in for `name` at `instant`, formatted in [`LOG_TIMEZONE`].
    pub fn at(name: &str, instant: DateTime<Utc>) -> Self {
        let local = instant.with_timezone(&LOG_TIMEZONE);
        Self {
            name: name.to_string(),
            date: local.format(DATE_FORMAT).to_string(),
            time: local.format(TIME_FORMAT).to_string(),
        }
    }

    pub fn now(name: &str) -> Self {
        Self::at(name, Utc::now())
    }

    /// Cell values in log column order: name, date, time.
    pub fn to_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.date.clone(), self.time.clone()]
    }
}

/// Timestamp shown on the confirmation view: "HH:MM:SS - MM/DD/YYYY" in the
/// server's local timezone.
pub fn display_timestamp<Z: TimeZone>(instant: DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    instant.format(&format!("{TIME_FORMAT} - {DATE_FORMAT}")).to_string()
}

pub fn display_now() -> String {
    display_timestamp(Local::now())
}

/// Today's date for the page footer.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_bangkok_time() {
        // 2024-03-05 18:30:07 UTC is 2024-03-06 01:30:07 in Bangkok (UTC+7).
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 18, 30, 7).unwrap();
        let rec = CheckInRecord::at("Alice", instant);
        assert_eq!(rec.name, "Alice");
        assert_eq!(rec.date, "03/06/2024");
        assert_eq!(rec.time, "01:30:07");
    }

    #[test]
    fn test_record_row_order() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 1, 2, 3).unwrap();
        let rec = CheckInRecord::at("Bob", instant);
        assert_eq!(rec.to_row(), vec!["Bob", "12/31/2024", "08:02:03"]);
    }

    #[test]
    fn test_display_timestamp_format() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 9, 14, 5, 0).unwrap();
        assert_eq!(display_timestamp(instant), "14:05:00 - 01/09/2024");
    }
}
