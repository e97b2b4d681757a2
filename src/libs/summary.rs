//! Derived attendance metrics.
//!
//! The upstream summary already carries absent/sunday/warning counters and
//! those are shown verbatim. This module derives the figures the sheet does
//! not provide: worked days, the attendance percentage and the final hours
//! after the warning deduction.
//!
//! ## Warning Deduction
//!
//! ```text
//! final_hours = max(0, total_hours - warning)
//! ```
//!
//! `warning` is a counter of infractions, yet it is subtracted as hours.
//! The two units are conflated upstream and the calculation keeps that
//! behaviour unchanged.

use crate::libs::attendance::AttendanceData;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceMetrics {
    /// Rows with both duty-in and duty-out filled.
    pub working_days: usize,
    /// All rows returned for the period.
    pub total_days: usize,
    /// `working_days / total_days` as a rounded percentage, 0 for an empty period.
    pub working_days_percentage: u32,
    /// Total hours minus the warning deduction, two decimals, never negative.
    pub final_hours: String,
}

impl AttendanceMetrics {
    pub fn calculate(data: &AttendanceData) -> Self {
        let working_days = data.rows.iter().filter(|row| row.is_working_day()).count();
        let total_days = data.rows.len();

        Self {
            working_days,
            total_days,
            working_days_percentage: working_days_percentage(working_days, total_days),
            final_hours: final_hours(&data.summary.total_hours, data.summary.warning),
        }
    }
}

pub fn working_days_percentage(working_days: usize, total_days: usize) -> u32 {
    if total_days == 0 {
        return 0;
    }
    ((working_days as f64 / total_days as f64) * 100.0).round() as u32
}

/// Subtracts the warning figure from the total hours and formats to 2 decimals.
///
/// A non-numeric `total_hours` counts as zero.
pub fn final_hours(total_hours: &str, warning: f64) -> String {
    let total = total_hours.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
    let warning = if warning.is_finite() { warning } else { 0.0 };
    format!("{:.2}", (total - warning).max(0.0))
}

/// Display class of a row, derived from its remarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Absent,
    Warning,
    Sunday,
    Neutral,
}

impl RowClass {
    /// Case-insensitive substring match, first hit wins: absent, warning, sunday.
    pub fn classify(remarks: Option<&str>) -> Self {
        let remarks = remarks.unwrap_or_default().to_lowercase();
        if remarks.contains("absent") {
            RowClass::Absent
        } else if remarks.contains("warning") {
            RowClass::Warning
        } else if remarks.contains("sunday") {
            RowClass::Sunday
        } else {
            RowClass::Neutral
        }
    }

    /// prettytable style spec for the class.
    pub fn style(&self) -> &'static str {
        match self {
            RowClass::Absent => "Fr",
            RowClass::Warning => "Fy",
            RowClass::Sunday => "Fb",
            RowClass::Neutral => "",
        }
    }
}
