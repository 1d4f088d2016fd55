//! Store calendar: local days, day windows and date parsing.
//!
//! Every "calendar day" in the service is a day in the store's time zone. The
//! calendar is built once from configuration and passed by value into each
//! request path.

use chrono::{DateTime, NaiveDate, NaiveTime, SubsecRound, TimeZone, Utc};
use chrono_tz::Tz;

use super::error::BusinessDayError;

/// The active business day as resolved for a login.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BusinessDate {
    /// A calendar day derived by the service.
    Calendar(NaiveDate),
    /// A calendar day supplied by the client, kept with its original text.
    Client {
        /// The day the text names.
        date: NaiveDate,
        /// The text as the client sent it.
        raw: String,
    },
    /// Client text that is not a recognizable date, carried verbatim.
    ///
    /// Window lookups on such a date match nothing.
    Unrecognized(String),
}

impl BusinessDate {
    /// Returns the calendar day, if the date was recognized.
    #[must_use]
    pub const fn calendar_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Calendar(date) | Self::Client { date, .. } => Some(*date),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<NaiveDate> for BusinessDate {
    fn from(date: NaiveDate) -> Self {
        Self::Calendar(date)
    }
}

impl std::fmt::Display for BusinessDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Client { raw, .. } | Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// Half-open UTC interval `[start, end)` covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// Local midnight of the day, in UTC.
    pub start: DateTime<Utc>,
    /// Local midnight of the following day, in UTC.
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Returns true if the instant falls within the window.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Calendar arithmetic in a store's time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessCalendar {
    tz: Tz,
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl BusinessCalendar {
    /// Creates a calendar for the given zone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Creates a calendar from an IANA zone name such as `Europe/Madrid`.
    ///
    /// # Errors
    ///
    /// Returns `BusinessDayError::InvalidTimezone` for unknown names.
    pub fn from_timezone_name(name: &str) -> Result<Self, BusinessDayError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| BusinessDayError::InvalidTimezone(name.to_string()))
    }

    /// Returns the calendar's time zone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Returns the local calendar day an instant falls on.
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Returns the local calendar day after the one `closed_at` falls on.
    ///
    /// The time of day of `closed_at` is irrelevant.
    #[must_use]
    pub fn day_after(&self, closed_at: DateTime<Utc>) -> NaiveDate {
        let date = self.local_date(closed_at);
        date.succ_opt().unwrap_or(date)
    }

    /// Returns the instant the local day begins.
    ///
    /// When local midnight does not exist (a DST gap), the day begins at the
    /// first local time that does.
    #[must_use]
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(NaiveTime::MIN);

        (0..=2)
            .find_map(|hour| {
                self.tz
                    .from_local_datetime(&(midnight + chrono::Duration::hours(hour)))
                    .earliest()
            })
            .map_or_else(
                || Utc.from_utc_datetime(&midnight),
                |t| t.with_timezone(&Utc),
            )
    }

    /// Returns the window covering the local day.
    #[must_use]
    pub fn day_window(&self, date: NaiveDate) -> DayWindow {
        let next = date.succ_opt().unwrap_or(date);
        DayWindow {
            start: self.start_of_day(date),
            end: self.start_of_day(next),
        }
    }

    /// Interprets client-supplied date text.
    ///
    /// Accepts `YYYY-MM-DD` (month and day padding optional) or an RFC 3339
    /// timestamp. A timestamp names the day written in its own date part; it is
    /// not moved into the store's zone. The text is kept as sent. Anything
    /// else is kept as [`BusinessDate::Unrecognized`].
    #[must_use]
    pub fn parse_business_date(&self, raw: &str) -> BusinessDate {
        let trimmed = raw.trim();

        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed).ok()?;
                NaiveDate::parse_from_str(trimmed.get(..10)?, "%Y-%m-%d").ok()
            });

        match date {
            Some(date) => BusinessDate::Client {
                date,
                raw: raw.to_string(),
            },
            None => BusinessDate::Unrecognized(raw.to_string()),
        }
    }

    /// Interprets client-supplied text as an instant.
    ///
    /// RFC 3339 timestamps are taken as-is; plain dates become the start of
    /// that local day. The result is truncated to microseconds, the precision
    /// the store keeps.
    #[must_use]
    pub fn parse_instant(&self, raw: &str) -> Option<DateTime<Utc>> {
        let trimmed = raw.trim();

        let instant = match DateTime::parse_from_rfc3339(trimmed) {
            Ok(instant) => instant.with_timezone(&Utc),
            Err(_) => {
                let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
                self.start_of_day(date)
            }
        };

        Some(instant.trunc_subsecs(6))
    }
}
