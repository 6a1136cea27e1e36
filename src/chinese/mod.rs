//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用預製的農曆年表（各月大小、閏月、正月初一日期）進行換算，見 [`table`]。支持範圍為農曆 1900 年正月初一（公曆 1900-01-31）至農曆 2100 年除夕（公曆 2101-01-28）。

use std::fmt::{self as std_fmt, Display};

use thiserror::Error;

use crate::date::Date;

pub mod fmt;
pub mod table;

use table::{Table, YearInfo};

/// 換算錯誤
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// 農曆年份不在年表範圍內
    #[error("lunar year {0} is outside the supported range 1900..=2100")]
    YearOutOfRange(i32),
    /// 公曆日期不在年表範圍內
    #[error("date {} is outside the supported range 1900-01-31..=2101-01-28", .0.iso_gregorian())]
    DateOutOfRange(Date),
    /// 農曆日期不存在，例如小月三十或該年並無此閏月
    #[error("lunar date {year}/{month}/{day} does not exist")]
    InvalidLunarDate { year: i32, month: Month, day: u32 },
}

impl Error {
    /// 是否屬超出年表範圍一類
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::YearOutOfRange(_) | Error::DateOutOfRange(_))
    }
}

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 同序號的平月
    pub fn common(&self) -> Self {
        Self::Common(self.num())
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「腊月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}
impl Display for Month {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        match self {
            Month::Common(m) => write!(f, "{m}"),
            Month::Leap(m) => write!(f, "leap {m}"),
        }
    }
}

/// 農曆日期
///
/// # 用例
///
/// ```
/// use lunar_birthday::Date;
/// use lunar_birthday::chinese::{LunarDate, Month::*};
///
/// let date = Date::from_gregorian(2000, 5, 11).unwrap();
/// let lunar = LunarDate::from_date(date).unwrap();
///
/// assert_eq!((2000, Common(4), 8), (lunar.year, lunar.month, lunar.day));
/// assert_eq!(Ok(date), lunar.to_date());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// 農曆年，以正月所在公元年記
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl LunarDate {
    /// 構造農曆日期並檢查其是否存在。
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, Error> {
        let date = Self { year, month, day };
        date.check(Table::get().lookup(year)?)?;
        Ok(date)
    }

    /// 公曆轉農曆
    ///
    /// 若日期不在年表範圍內則回報 [`Error::DateOutOfRange`]。
    pub fn from_date(date: Date) -> Result<Self, Error> {
        let year = Year::from_date(date)?;
        let (month, day) = year
            .ymd_for(date)
            .unwrap_or_else(|e| unreachable!("{} not in year {}: {e:?}", date.iso_gregorian(), year.year));
        Ok(Self {
            year: year.year,
            month,
            day,
        })
    }

    /// 農曆轉公曆
    ///
    /// 若月日不存在（日數超出該月、該年並無此閏月等）則回報
    /// [`Error::InvalidLunarDate`]，年份超出年表則回報 [`Error::YearOutOfRange`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunar_birthday::chinese::{Error, LunarDate, Month::*};
    ///
    /// let date = LunarDate { year: 2017, month: Leap(6), day: 1 };
    /// assert_eq!("2017-07-23", date.to_date().unwrap().iso_gregorian());
    ///
    /// let date = LunarDate { year: 2018, month: Leap(6), day: 1 };
    /// assert!(matches!(date.to_date(), Err(Error::InvalidLunarDate { .. })));
    /// ```
    pub fn to_date(&self) -> Result<Date, Error> {
        let info = Table::get().lookup(self.year)?;
        self.check(info)?;
        let offset: u32 = info
            .months
            .iter()
            .take_while(|&&(m, _)| m != self.month)
            .map(|&(_, len)| len)
            .sum();
        Ok(info.new_year + (offset + self.day - 1) as i32)
    }

    /// 是否為閏月
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }

    fn check(&self, info: &YearInfo) -> Result<(), Error> {
        let len = info.month_len(self.month).unwrap_or(0);
        if (1..=len).contains(&self.day) {
            Ok(())
        } else {
            Err(Error::InvalidLunarDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })
        }
    }
}

/// 一個農曆年，自正月初一至除夕。
///
/// # 用例
///
/// ```
/// use lunar_birthday::Date;
/// use lunar_birthday::chinese::{Month::*, Year};
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// let year = Year::from_date(date).unwrap();
///
/// assert_eq!(1999, year.year);
/// assert_eq!(Ok((Common(11), 25)), year.ymd_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct Year {
    /// 農曆年，以正月所在公元年記
    pub year: i32,
    /// 該年的年表
    pub info: &'static YearInfo,
    /// 全部月首，包括次年正月以標記本年最末日
    pub months: Vec<NewMoon>,
}
/// 月首信息
#[derive(Debug, Copy, Clone)]
pub struct NewMoon {
    /// 月名
    pub month: Month,
    /// 月首所在日期
    pub date: Date,
}

impl Year {
    /// 取得農曆 `year` 年。
    ///
    /// 若年表無該年資料則回報 [`Error::YearOutOfRange`]。
    pub fn new(year: i32) -> Result<Self, Error> {
        Ok(Self::expand(Table::get().lookup(year)?))
    }
    /// 依特定日期取得其所在農曆年。
    ///
    /// 若日期不在年表範圍內則回報 [`Error::DateOutOfRange`]。
    pub fn from_date(date: Date) -> Result<Self, Error> {
        Ok(Self::expand(Table::get().year_of(date)?))
    }

    fn expand(info: &'static YearInfo) -> Self {
        let mut months = Vec::with_capacity(info.months.len() + 1);
        let mut date = info.new_year;
        for &(month, len) in &info.months {
            months.push(NewMoon { month, date });
            date = date + len as i32;
        }
        months.push(NewMoon {
            month: Month::Common(1),
            date,
        });
        Self {
            year: info.year,
            info,
            months,
        }
    }

    /// 閏月序號，無閏月則為 `None`
    pub fn leap_month(&self) -> Option<u32> {
        self.info.leap_month
    }

    /// 取得給定日期在該年的月日，返回格式為 `(月, 日)`。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    pub fn ymd_for(&self, date: Date) -> Result<(Month, u32), OtherYear> {
        let begin = self.months[0].date;
        let end = self.months[self.months.len() - 1].date;

        if date < begin {
            return Err(OtherYear::Before);
        } else if date >= end {
            return Err(OtherYear::After);
        }

        let idx = self.months.partition_point(|m| m.date <= date) - 1;
        let m = self.months[idx];
        let d = date.jdn() - m.date.jdn() + 1;
        Ok((m.month, d))
    }
}

/// 表示給定日期不在該年，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

/// 取得所給公元年的干支序號，1 為甲子，60 為癸亥。
///
/// # 用例
///
/// ```
/// use lunar_birthday::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// assert_eq!(17, sexagenary_for_year(2000)); // 庚辰
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}
