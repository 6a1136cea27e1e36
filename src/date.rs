//! Calendar-independant date.

use std::ops::{Add, Sub};

use chrono::{Datelike, Local, NaiveDate};

/// JDN of 0001-01-01 minus one, i.e. the offset between chrono's day count
/// from the common era and the Julian day number.
const JDN_CE_OFFSET: i32 = 1_721_425;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
/// Within the lunisolar conversions of this crate, it plays the role of the
/// solar (Gregorian) date.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `month` or `day` does not name an existing day of
    /// that year, or if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_birthday::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(2023, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return None;
        }
        let (y, m, d) = (year, month, day);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_birthday::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        // JDN never exceeds i32 for dates produced by this crate
        let jdn = self.jdn as i32;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year, month, day)
    }
    /// Gregorian year of the date.
    pub fn year(&self) -> i32 {
        self.gregorian().0
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_birthday::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
    /// Parses a date in `YYYY-MM-DD` format.
    ///
    /// Returns `None` if the text is malformed or names a nonexistent day.
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_birthday::Date;
    ///
    /// let date = Date::parse_iso("2000-05-11").unwrap();
    /// assert_eq!((2000, 5, 11), date.gregorian());
    /// assert!(Date::parse_iso("2000-02-30").is_none());
    /// ```
    pub fn parse_iso(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .ok()
            .and_then(Self::from_naive)
    }
    /// Converts a chrono [`NaiveDate`].
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        u32::try_from(date.num_days_from_ce() + JDN_CE_OFFSET)
            .map(Self::from_jdn)
            .ok()
    }
    /// Current date in the local timezone.
    pub fn today() -> Self {
        let today = Local::now().date_naive();
        Self::from_naive(today).unwrap_or_else(|| unreachable!("local date before 4713 BC"))
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use lunar_birthday::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 => 28 + YearType::from_gregorian(year).is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
    }

    #[test]
    fn from_gregorian_rejects_nonexistent_days() {
        for (y, m, d) in [(2023, 2, 29), (2000, 4, 31), (2000, 13, 1), (2000, 0, 1), (2000, 1, 0)] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
        assert!(Date::from_gregorian(2000, 2, 29).is_some());
        assert!(Date::from_gregorian(1900, 2, 29).is_none());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
    }

    #[test]
    fn naive_date_agrees_with_jdn() {
        for (y, m, d) in [(1900, 1, 31), (1970, 1, 1), (2000, 5, 11), (2101, 1, 28)] {
            let naive = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(
                Date::from_gregorian(y, m as i32, d as i32),
                Date::from_naive(naive)
            );
        }
    }

    #[test]
    fn parse() {
        assert_eq!(
            Some((2021, 9, 8)),
            Date::parse_iso("2021-09-08").map(|d| d.gregorian())
        );
        for bad in ["", "2021-9", "2021/09/08", "abcd-ef-gh", "2021-02-29"] {
            assert_eq!(None, Date::parse_iso(bad), "{bad:?}");
        }
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2000, 2, 28).unwrap();
        assert_eq!("2000-03-01", (date + 2).iso_gregorian());
        assert_eq!("2000-02-27", (date + -1).iso_gregorian());
        assert_eq!(366, Date::from_gregorian(2001, 1, 1).unwrap() - Date::from_gregorian(2000, 1, 1).unwrap());
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }
}
