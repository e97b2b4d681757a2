//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one match over [`Message`].
//! Commands and views never embed literal strings; they build a message
//! variant and let this implementation render it. The interface text is
//! English; only month names and remarks follow the selected language.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === LOOKUP MESSAGES ===
            Message::InvalidMobile(mobile) => {
                format!("Invalid mobile number '{}': expected 10 digits starting with 0", mobile)
            }
            Message::MobileRequired => "A mobile number is required (pass --mobile or save one with `prefs --mobile`)".to_string(),
            Message::FetchingAttendance { mobile, month } => format!("Fetching attendance for {} ({})", mobile, month),
            Message::NoDataFound => "No attendance records found for this period.".to_string(),
            Message::TranslatingRemarks(count) => format!("Translated {} distinct remark(s)", count),

            // === SUMMARY LABELS ===
            Message::SummaryTotalHours => "Total Hours".to_string(),
            Message::SummaryTotalOvertime => "Total Overtime".to_string(),
            Message::SummaryWorkingDays => "Working Days".to_string(),
            Message::SummaryAbsent => "Absent".to_string(),
            Message::SummarySunday => "Sunday".to_string(),
            Message::SummaryWarning => "Warning".to_string(),
            Message::SummaryFinalHours => "Final Hours".to_string(),
            Message::SummaryOverview(name) => format!("Attendance overview for {}", name),
            Message::SummaryTotalWorked { hours, overtime } => {
                format!("Worked {} hours in total, including {} hours of overtime.", hours, overtime)
            }
            Message::SummaryAttendanceRate {
                working,
                total,
                percentage,
                absent,
            } => format!(
                "Present on {} of {} days ({}% attendance) with {} absence(s).",
                working, total, percentage, absent
            ),
            Message::SummaryWarnings(warnings) => {
                let plural = if warnings == "1" { "" } else { "s" };
                format!("Received {} warning{} this month.", warnings, plural)
            }
            Message::SummaryDeduction(final_hours) => format!("Final hours after warning deductions: {}", final_hours),
            Message::EmployeeId(id) => format!("Employee ID: {}", id),
            Message::EmployeeName(name) => format!("Employee Name: {}", name),

            // === COLUMN LABELS ===
            Message::ColDate => "Date".to_string(),
            Message::ColWorkLocation => "Work Location".to_string(),
            Message::ColDutyIn => "Duty In".to_string(),
            Message::ColBreakOut => "Break Out".to_string(),
            Message::ColBreakIn => "Break In".to_string(),
            Message::ColDutyOut => "Duty Out".to_string(),
            Message::ColTotalHour => "Total Hour".to_string(),
            Message::ColTotalBreak => "Total Break".to_string(),
            Message::ColBasicHour => "Basic Hour".to_string(),
            Message::ColOvertime => "Overtime".to_string(),
            Message::ColLessBasic => "Less Basic".to_string(),
            Message::ColRemarks => "Remarks".to_string(),

            // === MONTH PICKER ===
            Message::MonthOptionsHeader => "Available months:".to_string(),

            // === PREFERENCES MESSAGES ===
            Message::PreferencesHeader => "Saved preferences:".to_string(),
            Message::PreferenceLanguage(language) => format!("  language: {}", language.as_deref().unwrap_or("-")),
            Message::PreferenceMobile(mobile) => format!("  mobile:   {}", mobile.as_deref().unwrap_or("-")),
            Message::PreferencesSaved => "Preferences saved".to_string(),
            Message::PreferencesCleared => "Saved preferences cleared".to_string(),
            Message::PreferencesUnavailable => "Preferences storage is unavailable; nothing was saved".to_string(),
            Message::UnsupportedLanguage(code) => format!("Unsupported language '{}', expected one of: en, bn, hi, ar", code),

            // === TRANSLATION MESSAGES ===
            Message::TranslationEndpointsFailed => "Translation service unavailable, showing original text".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleUpstream => "Attendance source".to_string(),
            Message::ConfigModuleTranslation => "Translation".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Enter the script host URL".to_string(),
            Message::PromptScriptId => "Enter the attendance script ID".to_string(),
            Message::PromptTimeout => "Enter the request timeout (seconds)".to_string(),
            Message::PromptEndpoints => "Enter translation endpoint URLs (comma separated)".to_string(),
            Message::PromptCacheCapacity => "Enter the translation cache size".to_string(),
        };
        write!(f, "{}", text)
    }
}
