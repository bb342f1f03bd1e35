//! Provides resolution of the countdown target entered by the user.

use crate::error::Error;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use std::str::FromStr;

/// The formats of local date-times accepted from date-time inputs.
static LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A shortcut for a target a fixed number of days from now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetPreset {
    /// Three days from now.
    ThreeDays,
    /// Seven days from now.
    SevenDays,
    /// Thirty days from now.
    ThirtyDays,
}

/// Resolves the raw target into an ISO-8601 UTC timestamp with millisecond precision.
///
/// If the target cannot be parsed, the current time is used instead, which produces a countdown that has
///   already finished. Resolution never fails.
pub fn resolve_target(raw: &str) -> String {
    to_iso(parse_target(raw).unwrap_or_else(Utc::now))
}

/// Attempts to parse a raw target.
///
/// Date-times without an offset are interpreted in the local timezone, dates without a time as UTC midnight.
pub fn parse_target(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            if let Some(date) = from_local(&Local, &naive) {
                return Some(date);
            }
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }

    parse_lenient(raw)
}

/// Interprets a naive date-time in the given timezone.
///
/// Ambiguous times take the earlier offset. Times skipped by a forward transition are moved forward by an
///   hour, so `02:30` on the day clocks go from `02:00` to `03:00` becomes `03:30`.
fn from_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(naive)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(*naive + Duration::hours(1)))
                .earliest()
        })
        .map(|date| date.with_timezone(&Utc))
}

/// Parses any other date format the `dateparser` crate recognises.
#[cfg(feature = "date")]
fn parse_lenient(raw: &str) -> Option<DateTime<Utc>> {
    use chrono::NaiveTime;
    use dateparser::parse_with;

    let midnight = NaiveTime::from_hms_opt(0, 0, 0)?;

    std::panic::catch_unwind(|| parse_with(raw, &Local, midnight).ok())
        .ok()
        .flatten()
}

/// Without the `date` feature, only the strict formats are recognised.
#[cfg(not(feature = "date"))]
fn parse_lenient(_raw: &str) -> Option<DateTime<Utc>> {
    None
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn to_iso(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Formats a timestamp the way a local date-time input holds it, `YYYY-MM-DDTHH:MM`.
pub fn to_local_input_value<Tz: TimeZone>(date: DateTime<Tz>) -> String {
    date.with_timezone(&Local)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

impl TargetPreset {
    /// Returns the number of days the preset is ahead of now.
    pub fn days(&self) -> i64 {
        match self {
            TargetPreset::ThreeDays => 3,
            TargetPreset::SevenDays => 7,
            TargetPreset::ThirtyDays => 30,
        }
    }

    /// Returns the raw target the preset produces relative to `now`.
    pub fn target_from(&self, now: DateTime<Local>) -> String {
        to_local_input_value(now + Duration::days(self.days()))
    }

    /// Returns the raw target the preset produces relative to the current time.
    pub fn target(&self) -> String {
        self.target_from(Local::now())
    }
}

impl FromStr for TargetPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+3d" | "3d" => Ok(TargetPreset::ThreeDays),
            "+7d" | "7d" => Ok(TargetPreset::SevenDays),
            "+30d" | "30d" => Ok(TargetPreset::ThirtyDays),
            _ => Err(Error::InvalidValue {
                field: "target preset",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use chrono::{FixedOffset, LocalResult};

    #[test]
    fn rfc3339_is_normalised_to_utc() {
        assert_eq!(
            resolve_target("2030-06-01T12:00:00+02:00"),
            "2030-06-01T10:00:00.000Z"
        );
    }

    #[test]
    fn local_input_round_trips() {
        let local = Local.with_ymd_and_hms(2030, 6, 1, 9, 30, 0).unwrap();
        let raw = to_local_input_value(local);

        assert_eq!(raw, "2030-06-01T09:30");
        assert_eq!(parse_target(&raw), Some(local.with_timezone(&Utc)));
    }

    /// Eastern time around the 2030 spring transition: clocks skip from 02:00 to 03:00 on 10 March.
    #[derive(Clone, Copy, Debug)]
    struct SpringForward;

    impl SpringForward {
        fn transition() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2030, 3, 10)
                .and_then(|date| date.and_hms_opt(2, 0, 0))
                .unwrap()
        }

        fn est() -> FixedOffset {
            FixedOffset::west_opt(5 * 3600).unwrap()
        }

        fn edt() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            local
                .and_hms_opt(0, 0, 0)
                .map(|midnight| self.offset_from_local_datetime(&midnight))
                .unwrap_or(LocalResult::None)
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let transition = Self::transition();

            if *local < transition {
                LocalResult::Single(Self::est())
            } else if *local < transition + Duration::hours(1) {
                LocalResult::None
            } else {
                LocalResult::Single(Self::edt())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            utc.and_hms_opt(0, 0, 0)
                .map(|midnight| self.offset_from_utc_datetime(&midnight))
                .unwrap_or_else(Self::est)
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::transition() + Duration::hours(5) {
                Self::est()
            } else {
                Self::edt()
            }
        }
    }

    fn naive(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn skipped_local_times_move_forward() {
        assert_eq!(
            from_local(&SpringForward, &naive("2030-03-10T02:30")).map(to_iso),
            Some("2030-03-10T07:30:00.000Z".to_string())
        );
        assert_eq!(
            from_local(&SpringForward, &naive("2030-03-10T03:30")).map(to_iso),
            Some("2030-03-10T07:30:00.000Z".to_string())
        );
        assert_eq!(
            from_local(&SpringForward, &naive("2030-03-10T01:30")).map(to_iso),
            Some("2030-03-10T06:30:00.000Z".to_string())
        );
    }

    #[test]
    fn bare_dates_are_utc_midnight() {
        assert_eq!(resolve_target("2030-06-01"), "2030-06-01T00:00:00.000Z");
    }

    #[test]
    fn garbage_falls_back_to_now() {
        let before = Utc::now();
        let resolved = resolve_target("definitely not a date");
        let resolved = DateTime::parse_from_rfc3339(&resolved)
            .unwrap()
            .with_timezone(&Utc);

        assert!((resolved - before).num_milliseconds().abs() < 1000);
    }

    #[test]
    fn empty_falls_back_to_now() {
        assert_eq!(parse_target("   "), None);
    }

    #[test]
    fn presets_are_relative_to_now() {
        let now = Local.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap();

        assert_eq!(TargetPreset::ThreeDays.target_from(now), "2030-01-04T08:00");
        assert_eq!(
            "+30d".parse::<TargetPreset>(),
            Ok(TargetPreset::ThirtyDays)
        );
        assert!("+1y".parse::<TargetPreset>().is_err());
    }
}
