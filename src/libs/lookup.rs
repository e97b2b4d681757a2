//! Lookup parameters: mobile validation and month ranges.
//!
//! An attendance lookup is always one calendar month. The month is chosen
//! as `YYYY-MM` and expanded to its first and last day before it goes to
//! the script endpoint.

use crate::libs::locale::Language;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Required length of a mobile number.
pub const MOBILE_LENGTH: usize = 10;

/// Number of month options offered by default.
pub const DEFAULT_MONTH_OPTIONS: usize = 3;

/// Checks the local mobile format: ten characters starting with `0`.
pub fn validate_mobile(mobile: &str) -> bool {
    mobile.chars().count() == MOBILE_LENGTH && mobile.starts_with('0')
}

/// A calendar month in `YYYY-MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MonthValue {
    year: i32,
    month: u32,
}

impl MonthValue {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(first)
    }

    /// First and last day of the month as `YYYY-MM-DD`.
    pub fn range(&self) -> (String, String) {
        (self.first_day().format("%Y-%m-%d").to_string(), self.last_day().format("%Y-%m-%d").to_string())
    }

    /// The month `count` months before this one.
    pub fn months_back(&self, count: u32) -> Option<Self> {
        self.first_day().checked_sub_months(Months::new(count)).map(Self::of)
    }

    /// `"{month name} {year}"` in the given language.
    pub fn label(&self, language: Language) -> String {
        format!("{} {}", language.month_name(self.month).unwrap_or_default(), self.year)
    }
}

impl fmt::Display for MonthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid month '{}', expected YYYY-MM", s);
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

/// One entry of the month picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthOption {
    pub value: MonthValue,
    pub label: String,
}

/// The current month and the `count - 1` months before it, newest first.
pub fn recent_months(today: NaiveDate, count: usize, language: Language) -> Vec<MonthOption> {
    let current = MonthValue::of(today);
    (0..count as u32)
        .filter_map(|back| current.months_back(back))
        .map(|value| MonthOption {
            value,
            label: value.label(language),
        })
        .collect()
}

/// Parameters of one attendance request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub mobile: String,
    #[serde(rename = "startISO")]
    pub start_iso: String,
    #[serde(rename = "endISO")]
    pub end_iso: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_details: Option<String>,
}

impl LookupQuery {
    pub fn for_month(mobile: &str, month: MonthValue) -> Self {
        let (start_iso, end_iso) = month.range();
        Self {
            mobile: mobile.to_owned(),
            start_iso,
            end_iso,
            ..Default::default()
        }
    }

    pub fn with_client_info(mut self, ip_address: Option<String>, device_details: Option<String>) -> Self {
        self.ip_address = ip_address;
        self.device_details = device_details;
        self
    }
}
