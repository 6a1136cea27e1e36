//! Response body of `POST /api/convert`.

use serde::Serialize;

use crate::birthday::{Birth, BirthdayOccurrence};
use crate::chinese::{fmt, sexagenary_for_year};

/// Birth details followed by one row per projected year.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResponse {
    pub birth_solar: String,
    pub birth_lunar: String,
    pub lunar_year: i32,
    pub lunar_month: u32,
    pub lunar_day: u32,
    pub lunar_month_name: String,
    pub lunar_day_name: String,
    pub is_birth_leap: bool,
    pub sexagenary_year: String,
    pub zodiac: &'static str,
    pub results: Vec<OccurrenceRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OccurrenceRow {
    pub lunar_year: i32,
    pub solar_year: i32,
    pub solar_date: String,
    pub weekday: &'static str,
    pub lunar_date: String,
    pub age: i32,
    pub age_xu: i32,
    pub is_past: bool,
    pub is_leap_birthday: bool,
    pub is_adjusted: bool,
}

impl From<&BirthdayOccurrence> for OccurrenceRow {
    fn from(occ: &BirthdayOccurrence) -> Self {
        Self {
            lunar_year: occ.lunar_year,
            solar_year: occ.solar_year,
            solar_date: fmt::solar_date(occ.solar_date),
            weekday: fmt::weekday(occ.weekday),
            lunar_date: fmt::lunar_month_day(&occ.lunar_date),
            age: occ.actual_age,
            age_xu: occ.nominal_age,
            is_past: occ.is_past,
            is_leap_birthday: occ.is_leap_birthday,
            is_adjusted: occ.is_adjusted,
        }
    }
}

impl ConvertResponse {
    pub fn new(birth: &Birth, occurrences: &[BirthdayOccurrence]) -> Self {
        let lunar = &birth.lunar;
        let sexagenary = sexagenary_for_year(lunar.year);
        Self {
            birth_solar: fmt::solar_date(birth.date),
            birth_lunar: fmt::lunar_date(lunar),
            lunar_year: lunar.year,
            lunar_month: lunar.month.num(),
            lunar_day: lunar.day,
            lunar_month_name: fmt::month(lunar.month),
            lunar_day_name: fmt::day(lunar.day),
            is_birth_leap: lunar.is_leap_month(),
            sexagenary_year: fmt::sexagenary(sexagenary),
            zodiac: fmt::zodiac(sexagenary),
            results: occurrences.iter().map(OccurrenceRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birthday::Projection;
    use crate::date::Date;

    #[test]
    fn formats_birth_and_rows() {
        let birth = Birth::from_date(Date::from_gregorian(2000, 5, 11).unwrap()).unwrap();
        let projection = Projection {
            start_year: 2024,
            years_count: 1,
            include_leap: true,
        };
        let rows = birth
            .project(&projection, Date::from_gregorian(2024, 1, 1).unwrap())
            .unwrap();
        let response = ConvertResponse::new(&birth, &rows);

        assert_eq!("2000年05月11日", response.birth_solar);
        assert_eq!("农历2000年四月初八", response.birth_lunar);
        assert_eq!("四月", response.lunar_month_name);
        assert_eq!("初八", response.lunar_day_name);
        assert_eq!("庚辰", response.sexagenary_year);
        assert_eq!("龙", response.zodiac);
        assert!(!response.is_birth_leap);

        let row = &response.results[0];
        assert_eq!("2024年05月15日", row.solar_date);
        assert_eq!("周三", row.weekday);
        assert_eq!("四月初八", row.lunar_date);
        assert_eq!((24, 25), (row.age, row.age_xu));
        assert!(!row.is_past);
    }

    #[test]
    fn leap_birth_names() {
        let birth = Birth::from_date(Date::from_gregorian(2020, 6, 1).unwrap()).unwrap();
        let response = ConvertResponse::new(&birth, &[]);
        assert_eq!("闰四月", response.lunar_month_name);
        assert_eq!("初十", response.lunar_day_name);
        assert_eq!("农历2020年闰四月初十", response.birth_lunar);
        assert!(response.is_birth_leap);
        assert_eq!(4, response.lunar_month);
    }
}
