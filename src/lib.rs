//! Find the Gregorian dates of a Chinese lunar birthday, year by year.
//!
//! A solar birth date is converted into the Chinese lunisolar calendar, and
//! the lunar month and day are then followed through the following years,
//! with leap months, short months, actual age and 虚岁 (nominal age) taken
//! into account. Supported dates run from 1900-01-31 to 2101-01-28.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use lunar_birthday::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use lunar_birthday::Date;
//! use lunar_birthday::chinese::{LunarDate, Month::*};
//!
//! let date = Date::from_gregorian(2000, 5, 11).unwrap();
//! let lunar = LunarDate::from_date(date).unwrap();
//!
//! assert_eq!((2000, Common(4), 8), (lunar.year, lunar.month, lunar.day));
//! ```
//!
//! The HTTP API in [`http_server`] serves `POST /api/convert`; see
//! [`api::ConvertResponse`] for the response schema.

pub mod api;
pub mod birthday;
pub mod chinese;
pub mod config;
pub mod date;
pub mod http_server;

pub use date::{Date, YearType};
