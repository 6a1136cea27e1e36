//! 格式化日期相關功能
//!
//! 輸出文本用簡體字，與前端頁面一致。

use super::{LunarDate, Month};
use crate::date::Date;

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 干支序號轉為文本形式。
///
/// # 用例
///
/// ```
/// use lunar_birthday::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    static NAME1: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
    static NAME2: &[&str] = &[
        "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
    ];
    NAME1[num.rem_euclid(10) as usize].to_owned() + NAME2[num.rem_euclid(12) as usize]
}

/// 干支序號對應的生肖。
///
/// # 用例
///
/// ```
/// use lunar_birthday::chinese;
///
/// assert_eq!("龙", chinese::fmt::zodiac(17)); // 庚辰
/// ```
pub fn zodiac(num: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "猪", "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗",
    ];
    NAMES[num.rem_euclid(12) as usize]
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「腊月」。
///
/// # 用例
///
/// ```
/// use lunar_birthday::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("闰正月", chinese::fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "腊",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use lunar_birthday::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 星期名，`1..=7` 為「周一」至「周日」，與 [`Date::day_of_week`] 一致。
pub fn weekday(dow: i32) -> &'static str {
    const NAMES: &[&str] = &["周日", "周一", "周二", "周三", "周四", "周五", "周六"];
    NAMES[dow.rem_euclid(7) as usize]
}

/// 公曆日期，如「2000年05月11日」。
pub fn solar_date(date: Date) -> String {
    let (y, m, d) = date.gregorian();
    format!("{y}年{m:02}月{d:02}日")
}

/// 農曆月日，如「四月初八」「闰六月初一」。
pub fn lunar_month_day(date: &LunarDate) -> String {
    month(date.month) + &day(date.day)
}

/// 農曆全稱，如「农历2000年四月初八」。
pub fn lunar_date(date: &LunarDate) -> String {
    format!("农历{}年{}", date.year, lunar_month_day(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("癸亥", 60), ("甲辰", 41)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_zodiac() {
        for (std, num) in [("鼠", 1), ("牛", 2), ("猪", 60), ("龙", 41)] {
            assert_eq!(std, zodiac(num));
        }
    }

    #[test]
    fn test_month() {
        use Month::*;
        for (std, m) in [
            ("正月", Common(1)),
            ("四月", Common(4)),
            ("十月", Common(10)),
            ("腊月", Common(12)),
            ("闰四月", Leap(4)),
        ] {
            assert_eq!(std, month(m));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    fn test_weekday() {
        let date = Date::from_gregorian(2000, 1, 1).unwrap();
        assert_eq!("周六", weekday(date.day_of_week()));
        let date = Date::from_gregorian(2024, 5, 15).unwrap();
        assert_eq!("周三", weekday(date.day_of_week()));
        assert_eq!("周日", weekday(7));
    }

    #[test]
    fn test_dates() {
        let date = Date::from_gregorian(2000, 5, 11).unwrap();
        assert_eq!("2000年05月11日", solar_date(date));
        let lunar = LunarDate {
            year: 2017,
            month: Month::Leap(6),
            day: 1,
        };
        assert_eq!("闰六月初一", lunar_month_day(&lunar));
        assert_eq!("农历2017年闰六月初一", lunar_date(&lunar));
    }
}
