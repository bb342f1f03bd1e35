//! Provides the countdown script and its model.

use crate::scripts::{compact, fill, js_string};

use chrono::{DateTime, Duration, Utc};

/// The identifier of the element which hosts the countdown.
pub const TIMER_ID: &str = "cr-timer";

/// The attribute of the host element holding the ISO-8601 target.
pub const TARGET_ATTRIBUTE: &str = "data-target";

/// The countdown script generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    /// The target used when the host element has no target attribute, relative to script execution.
    pub fallback: Duration,
    /// The time between renders, in milliseconds.
    pub interval_ms: u32,
}

/// The whole days, hours, minutes and seconds remaining until a target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    /// Whole days remaining.
    pub days: i64,
    /// Whole hours remaining after the days.
    pub hours: i64,
    /// Whole minutes remaining after the hours.
    pub minutes: i64,
    /// Whole seconds remaining after the minutes.
    pub seconds: i64,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            fallback: Duration::days(7),
            interval_ms: 1000,
        }
    }
}

impl Countdown {
    /// Returns the target used when the host element carries none.
    pub fn fallback_target(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.fallback
    }

    /// Serializes the countdown as script text.
    ///
    /// The script finds the host element, reads its target and renders the remaining time as four labelled
    ///   segments, re-rendering forever. It keeps counting past the target, showing all-zero segments.
    pub fn script(&self) -> String {
        compact(&fill(
            SOURCE,
            &[
                ("TIMER_ID", js_string(TIMER_ID)),
                ("TARGET_ATTRIBUTE", js_string(TARGET_ATTRIBUTE)),
                ("FALLBACK_MS", self.fallback.num_milliseconds().to_string()),
                ("INTERVAL_MS", self.interval_ms.to_string()),
            ],
        ))
    }
}

impl Remaining {
    /// Computes the time remaining from `now` until `target`.
    ///
    /// Every component is clamped at zero, so a target in the past yields all zeros.
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let ms = (target - now).num_milliseconds().max(0);

        Self {
            days: ms / 86_400_000,
            hours: (ms % 86_400_000) / 3_600_000,
            minutes: (ms % 3_600_000) / 60_000,
            seconds: (ms % 60_000) / 1000,
        }
    }

    /// Returns the four segments, each padded to at least two digits and suffixed with its unit.
    pub fn segments(&self) -> [String; 4] {
        [
            format!("{:02}d", self.days),
            format!("{:02}h", self.hours),
            format!("{:02}m", self.minutes),
            format!("{:02}s", self.seconds),
        ]
    }

    /// Returns the markup the script places inside the host element.
    pub fn to_html(&self) -> String {
        self.segments()
            .iter()
            .map(|segment| format!(r#"<div class="box">{}</div>"#, segment))
            .collect()
    }
}

/// The script source, mirroring [`Remaining::between`] and [`Remaining::to_html`].
const SOURCE: &str = r#"
    (function(){
      var el = document.getElementById(@TIMER_ID@); if (!el) return;
      var iso = el.getAttribute(@TARGET_ATTRIBUTE@);
      var target = iso ? new Date(iso) : new Date(Date.now() + @FALLBACK_MS@);
      var pad = function(n){ return String(n).padStart(2, '0'); };
      function box(v, l){ return '<div class="box">' + pad(v) + l + '</div>'; }
      function tick(){
        var d = Math.max(0, target - new Date());
        var days = Math.floor(d / 86400000);
        var hours = Math.floor((d % 86400000) / 3600000);
        var mins = Math.floor((d % 3600000) / 60000);
        var secs = Math.floor((d % 60000) / 1000);
        el.innerHTML = box(days, 'd') + box(hours, 'h') + box(mins, 'm') + box(secs, 's');
      }
      tick(); setInterval(tick, @INTERVAL_MS@);
    })();
"#;

#[cfg(test)]
mod test {
    use super::*;

    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn remaining_breaks_down_difference() {
        let remaining = Remaining::between(
            at("2030-01-03T04:05:06.900Z"),
            at("2030-01-01T00:00:00.000Z"),
        );

        assert_eq!(
            remaining,
            Remaining {
                days: 2,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
        assert_eq!(remaining.segments(), ["02d", "04h", "05m", "06s"]);
    }

    #[test]
    fn remaining_is_zero_after_target() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let remaining = Remaining::between(now - Duration::seconds(90), now);

        assert_eq!(remaining, Remaining::default());
        assert_eq!(
            remaining.to_html(),
            r#"<div class="box">00d</div><div class="box">00h</div><div class="box">00m</div><div class="box">00s</div>"#
        );
    }

    #[test]
    fn days_are_not_truncated() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let remaining = Remaining::between(now + Duration::days(120), now);

        assert_eq!(remaining.segments()[0], "120d");
    }

    #[test]
    fn fallback_is_seven_days() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(
            Countdown::default().fallback_target(now),
            Utc.with_ymd_and_hms(2030, 1, 8, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn script_is_filled_and_compact() {
        let script = Countdown::default().script();

        assert!(script.contains(r#"document.getElementById("cr-timer")"#));
        assert!(script.contains(r#"el.getAttribute("data-target")"#));
        assert!(script.contains("Date.now() + 604800000"));
        assert!(script.contains("setInterval(tick, 1000)"));
        assert!(!script.contains('@'));
        assert!(script.lines().all(|line| line == line.trim()));
    }
}
