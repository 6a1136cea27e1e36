//! Yearly recurrence of a lunar birthday.
//!
//! A birthday is anchored to the lunar month and day of birth. Each lunar year
//! yields exactly one anniversary:
//!
//! - the ordinary month with the birth month number is used, even for births
//!   in a leap month, since most years have no such leap month;
//! - in years whose leap month matches a leap-month birth, the occurrence is
//!   flagged, and with `include_leap` the leap-month date itself is used;
//! - a birthday on day 30 falls back to day 29 in years where that month is
//!   short;
//! - the year of birth always yields the birth date itself.

use thiserror::Error;
use tracing::debug;

use crate::chinese::table::{LAST_YEAR, Table};
use crate::chinese::{self, LunarDate};
use crate::date::Date;

/// Errors of a birthday projection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum ProjectionError {
    #[error(transparent)]
    Calendar(#[from] chinese::Error),
    #[error("start year {start} precedes the lunar birth year {birth}")]
    StartBeforeBirth { start: i32, birth: i32 },
    #[error("years_count must be a positive integer")]
    EmptySpan,
}

/// Span and leap-month policy of a projection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Projection {
    /// First lunar year to project.
    pub start_year: i32,
    /// Number of consecutive lunar years.
    pub years_count: u32,
    /// Use the leap-month date in years that repeat the leap month of birth.
    pub include_leap: bool,
}

/// The anniversary of a birthday in one lunar year.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Anniversary {
    pub lunar: LunarDate,
    pub date: Date,
    /// Birth was in a leap month and this year has that same leap month.
    pub is_leap_birthday: bool,
    /// Day 30 was moved to day 29 because the month is short this year.
    pub is_adjusted: bool,
}

/// One row of a projection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BirthdayOccurrence {
    pub lunar_year: i32,
    /// Gregorian year of `solar_date`. Rows are keyed by lunar year, so across
    /// a projection this is non-decreasing but not strictly increasing: a
    /// birthday late in 冬月 or 腊月 may land in January of one year and in
    /// December of the next.
    pub solar_year: i32,
    pub solar_date: Date,
    pub lunar_date: LunarDate,
    /// ISO day of week, `1..=7` for Monday through Sunday.
    pub weekday: i32,
    pub actual_age: i32,
    /// 虚岁
    pub nominal_age: i32,
    pub is_past: bool,
    pub is_leap_birthday: bool,
    pub is_adjusted: bool,
}

/// A birth date with its lunar counterpart.
///
/// # Example
///
/// ```
/// use lunar_birthday::Date;
/// use lunar_birthday::birthday::{Birth, Projection};
///
/// let birth = Birth::from_date(Date::from_gregorian(2000, 5, 11).unwrap()).unwrap();
/// let projection = Projection { start_year: 2024, years_count: 3, include_leap: true };
/// let today = Date::from_gregorian(2025, 6, 1).unwrap();
///
/// let rows = birth.project(&projection, today).unwrap();
/// let dates: Vec<_> = rows.iter().map(|r| r.solar_date.iso_gregorian()).collect();
/// assert_eq!(vec!["2024-05-15", "2025-05-05", "2026-05-24"], dates);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Birth {
    pub date: Date,
    pub lunar: LunarDate,
}

impl Birth {
    pub fn from_date(date: Date) -> Result<Self, chinese::Error> {
        Ok(Self {
            date,
            lunar: LunarDate::from_date(date)?,
        })
    }

    /// Resolves the birthday in lunar year `year`.
    pub fn anniversary(&self, year: i32, include_leap: bool) -> Result<Anniversary, chinese::Error> {
        let info = Table::get().lookup(year)?;
        let birth_month = self.lunar.month;
        let is_leap_birthday = birth_month.is_leap() && info.leap_month == Some(birth_month.num());
        if year == self.lunar.year {
            return Ok(Anniversary {
                lunar: self.lunar,
                date: self.date,
                is_leap_birthday,
                is_adjusted: false,
            });
        }
        let month = if is_leap_birthday && include_leap {
            birth_month
        } else {
            birth_month.common()
        };
        let day = match info.month_len(month) {
            Some(len) => self.lunar.day.min(len),
            None => self.lunar.day,
        };
        let lunar = LunarDate::new(year, month, day)?;
        Ok(Anniversary {
            lunar,
            date: lunar.to_date()?,
            is_leap_birthday,
            is_adjusted: day != self.lunar.day,
        })
    }

    /// Number of lunar birthdays passed on `date`, counting the one falling on
    /// `date` itself. Zero up to the first anniversary.
    pub fn actual_age_on(&self, date: Date, include_leap: bool) -> Result<i32, chinese::Error> {
        let year = LunarDate::from_date(date)?.year;
        let age = year - self.lunar.year;
        if age <= 0 {
            return Ok(0);
        }
        let anniversary = self.anniversary(year, include_leap)?;
        Ok(if date < anniversary.date { age - 1 } else { age })
    }

    /// 虚岁 on `date`: one at birth, plus one at every lunar New Year since.
    /// Zero before birth.
    pub fn nominal_age_on(&self, date: Date) -> Result<i32, chinese::Error> {
        if date < self.date {
            return Ok(0);
        }
        Ok(LunarDate::from_date(date)?.year - self.lunar.year + 1)
    }

    /// One occurrence per lunar year of the projection, in ascending order.
    /// Solar dates strictly increase; solar years never decrease.
    ///
    /// Years past the end of the calendar table are dropped from the span.
    pub fn project(
        &self,
        projection: &Projection,
        today: Date,
    ) -> Result<Vec<BirthdayOccurrence>, ProjectionError> {
        let start = projection.start_year;
        if projection.years_count == 0 {
            return Err(ProjectionError::EmptySpan);
        }
        if start < self.lunar.year {
            return Err(ProjectionError::StartBeforeBirth {
                start,
                birth: self.lunar.year,
            });
        }
        if start > LAST_YEAR {
            return Err(chinese::Error::YearOutOfRange(start).into());
        }
        let requested_end = start.saturating_add_unsigned(projection.years_count);
        let end = requested_end.min(LAST_YEAR + 1);
        if end < requested_end {
            debug!(start, requested_end, end, "projection clamped to calendar table");
        }

        (start..end)
            .map(|year| self.occurrence(year, projection.include_leap, today))
            .collect::<Result<_, _>>()
            .map_err(ProjectionError::from)
    }

    fn occurrence(
        &self,
        year: i32,
        include_leap: bool,
        today: Date,
    ) -> Result<BirthdayOccurrence, chinese::Error> {
        let anniversary = self.anniversary(year, include_leap)?;
        let date = anniversary.date;
        Ok(BirthdayOccurrence {
            lunar_year: year,
            solar_year: date.year(),
            solar_date: date,
            lunar_date: anniversary.lunar,
            weekday: date.day_of_week(),
            actual_age: self.actual_age_on(date, include_leap)?,
            nominal_age: self.nominal_age_on(date)?,
            is_past: date < today,
            is_leap_birthday: anniversary.is_leap_birthday,
            is_adjusted: anniversary.is_adjusted,
        })
    }
}
