//! 農曆年表數據
//!
//! 每年以一個整數編碼：
//!
//! - 第 15 至 4 位：正月至十二月的大小，`1` 為大月（30 日），`0` 為小月（29 日）
//! - 第 3 至 0 位：閏月序號，無閏月則為 `0`
//! - 第 16 位：閏月的大小
//!
//! 各年正月初一由 1900 年正月初一（公曆 1900-01-31）起依月長逐年累加，故年表首尾相接、無缺無疊。

use std::sync::LazyLock;

use super::{Error, Month};
use crate::date::Date;

/// 年表首年
pub const FIRST_YEAR: i32 = 1900;
/// 年表末年
pub const LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
static PACKED: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

static TABLE: LazyLock<Table> = LazyLock::new(Table::unpack);

/// 一年的年表信息
#[derive(Debug, Clone)]
pub struct YearInfo {
    /// 農曆年，以正月所在公元年記
    pub year: i32,
    /// 閏月序號，無閏月則為 `None`
    pub leap_month: Option<u32>,
    /// 依曆序排列的各月及其日數，閏月緊隨其同序號的平月
    pub months: Vec<(Month, u32)>,
    /// 正月初一所在公曆日期
    pub new_year: Date,
}

impl YearInfo {
    fn unpack(year: i32, word: u32, new_year: Date) -> Self {
        let leap = word & 0xf;
        let leap_month = (leap != 0).then_some(leap);
        let mut months = Vec::with_capacity(13);
        for m in 1..=12 {
            months.push((Month::Common(m), month_len(word & (0x10000 >> m))));
            if leap_month == Some(m) {
                months.push((Month::Leap(m), month_len(word & 0x10000)));
            }
        }
        Self {
            year,
            leap_month,
            months,
            new_year,
        }
    }

    /// 各月日數，依曆序排列。
    pub fn month_lengths(&self) -> impl Iterator<Item = u32> + '_ {
        self.months.iter().map(|&(_, len)| len)
    }
    /// 全年日數
    pub fn days(&self) -> u32 {
        self.month_lengths().sum()
    }
    /// 取得某月日數，該年無此月則為 `None`。
    pub fn month_len(&self, month: Month) -> Option<u32> {
        self.months
            .iter()
            .find(|&&(m, _)| m == month)
            .map(|&(_, len)| len)
    }
    /// 本年末日的次日，即次年正月初一。
    pub fn next_new_year(&self) -> Date {
        self.new_year + self.days() as i32
    }
}

fn month_len(flag: u32) -> u32 {
    if flag != 0 { 30 } else { 29 }
}

/// 全部支持年份的年表，進程內只構造一次，此後只讀。
#[derive(Debug)]
pub struct Table {
    years: Vec<YearInfo>,
}

impl Table {
    /// 取得共享的年表。
    pub fn get() -> &'static Self {
        &TABLE
    }

    fn unpack() -> Self {
        let mut new_year = Date::from_jdn(2_415_051); // 1900-01-31
        let years = (FIRST_YEAR..)
            .zip(PACKED)
            .map(|(year, word)| {
                let info = YearInfo::unpack(year, word, new_year);
                new_year = info.next_new_year();
                info
            })
            .collect();
        Self { years }
    }

    /// 取得農曆 `year` 年的年表信息。
    ///
    /// # 用例
    ///
    /// ```
    /// use lunar_birthday::chinese::table::Table;
    ///
    /// let info = Table::get().lookup(2017).unwrap();
    /// assert_eq!(Some(6), info.leap_month);
    /// assert_eq!("2017-01-28", info.new_year.iso_gregorian());
    /// ```
    pub fn lookup(&self, year: i32) -> Result<&YearInfo, Error> {
        usize::try_from(year - FIRST_YEAR)
            .ok()
            .and_then(|idx| self.years.get(idx))
            .ok_or(Error::YearOutOfRange(year))
    }

    /// 依公曆日期取得其所在農曆年，即正月初一不晚於該日的最末一年。
    pub fn year_of(&self, date: Date) -> Result<&YearInfo, Error> {
        if date < self.first_date() || date > self.last_date() {
            return Err(Error::DateOutOfRange(date));
        }
        let idx = self.years.partition_point(|info| info.new_year <= date) - 1;
        Ok(&self.years[idx])
    }

    /// 支持的首日，即 1900 年正月初一。
    pub fn first_date(&self) -> Date {
        self.years[0].new_year
    }
    /// 支持的末日，即 2100 年除夕。
    pub fn last_date(&self) -> Date {
        self.years[self.years.len() - 1].next_new_year() + -1
    }
}
