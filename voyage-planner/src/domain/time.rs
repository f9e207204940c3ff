//! Calendar dates and clock times for voyage schedules.
//!
//! Schedules give each voyage a calendar date plus "HH:MM" departure and
//! arrival clock times. Clock times carry no date of their own, so every
//! duration between two of them is computed with explicit wraparound: a
//! later time that is numerically smaller lies on the following day.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Error returned when parsing an invalid clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct InvalidClockTime {
    reason: &'static str,
}

impl InvalidClockTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Error returned when parsing an invalid calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {reason}")]
pub struct InvalidDate {
    reason: &'static str,
}

impl InvalidDate {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day on a 24-hour clock, stored as minutes since midnight.
///
/// # Examples
///
/// ```
/// use voyage_planner::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.minutes(), 870);
/// assert_eq!(t.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Create a clock time from minutes since midnight.
    ///
    /// Returns `None` unless `minutes` is in `0..1440`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Create a clock time from hour and minute components.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    /// Parse a time in "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use voyage_planner::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("14:3").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, InvalidClockTime> {
        if s.len() != 5 {
            return Err(InvalidClockTime::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(InvalidClockTime::new("expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| InvalidClockTime::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(InvalidClockTime::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| InvalidClockTime::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(InvalidClockTime::new("minute must be 0-59"));
        }

        Ok(Self(hour * 60 + minute))
    }

    /// Returns minutes since midnight (0-1439).
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Time from `self` until the next occurrence of `later`.
    ///
    /// If `later` is numerically earlier than `self` it is taken to be on
    /// the following day. Equal times give zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use voyage_planner::domain::ClockTime;
    /// use chrono::Duration;
    ///
    /// let arrive = ClockTime::parse_hhmm("23:30").unwrap();
    /// let depart = ClockTime::parse_hhmm("00:45").unwrap();
    /// assert_eq!(arrive.until(depart), Duration::minutes(75));
    /// ```
    pub fn until(&self, later: ClockTime) -> Duration {
        Duration::minutes(i64::from(wrapping_gap(self.0, later.0)))
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Minutes from `from` forward to `to` on a clock that may pass midnight.
///
/// Both values are minute counts. When `to` is not behind `from` no wrap
/// is applied, so `to` may exceed a day.
fn wrapping_gap(from: u16, to: u16) -> u16 {
    if to >= from {
        to - from
    } else {
        MINUTES_PER_DAY - from + to
    }
}

/// A calendar date on which a voyage sails.
///
/// Dates are totally ordered by (year, month, day). Two text forms are
/// accepted: `DD/MM/YYYY`, used by schedule files, and ISO `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use voyage_planner::domain::VoyageDate;
///
/// let a = VoyageDate::parse("15/03/2024").unwrap();
/// let b = VoyageDate::parse("2024-03-15").unwrap();
/// assert_eq!(a, b);
/// assert!(VoyageDate::parse("2024/03/15").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VoyageDate(NaiveDate);

impl VoyageDate {
    /// Wrap a chrono date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Create a date from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a date in `DD/MM/YYYY` or `YYYY-MM-DD` form.
    pub fn parse(s: &str) -> Result<Self, InvalidDate> {
        if s.len() != 10 || !s.is_ascii() {
            return Err(InvalidDate::new("expected DD/MM/YYYY or YYYY-MM-DD"));
        }

        let bytes = s.as_bytes();
        let (day, month, year) = match (bytes[2], bytes[4]) {
            (b'/', _) if bytes[5] == b'/' => (&s[0..2], &s[3..5], &s[6..10]),
            (_, b'-') if bytes[7] == b'-' => (&s[8..10], &s[5..7], &s[0..4]),
            _ => return Err(InvalidDate::new("expected DD/MM/YYYY or YYYY-MM-DD")),
        };

        let day = parse_digits(day).ok_or_else(|| InvalidDate::new("invalid day digits"))?;
        let month =
            parse_digits(month).ok_or_else(|| InvalidDate::new("invalid month digits"))?;
        let year = parse_digits(year).ok_or_else(|| InvalidDate::new("invalid year digits"))?;

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Self)
            .ok_or_else(|| InvalidDate::new("no such calendar day"))
    }

    /// Returns the underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns true if `self` is the same day as `other` or later.
    pub fn is_on_or_after(&self, other: VoyageDate) -> bool {
        *self >= other
    }
}

impl fmt::Debug for VoyageDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoyageDate({})", self.0)
    }
}

impl fmt::Display for VoyageDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

/// Parse two ASCII digit bytes into a u16.
fn parse_two_digits(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some((d1 * 10 + d2) as u16)
}

/// Parse a run of ASCII digits (no sign, no whitespace).
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
