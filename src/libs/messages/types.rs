/// Every user-facing text of the application.
///
/// Variants are grouped by the part of the application that emits them.
/// The text itself lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === LOOKUP MESSAGES ===
    InvalidMobile(String),
    MobileRequired,
    FetchingAttendance { mobile: String, month: String },
    NoDataFound,
    TranslatingRemarks(usize), // distinct remarks translated

    // === SUMMARY LABELS ===
    SummaryTotalHours,
    SummaryTotalOvertime,
    SummaryWorkingDays,
    SummaryAbsent,
    SummarySunday,
    SummaryWarning,
    SummaryFinalHours,
    SummaryOverview(String), // worker name
    SummaryTotalWorked { hours: String, overtime: String },
    SummaryAttendanceRate { working: usize, total: usize, percentage: u32, absent: u32 },
    SummaryWarnings(String), // warning figure
    SummaryDeduction(String), // final hours
    EmployeeId(String),
    EmployeeName(String),

    // === COLUMN LABELS ===
    ColDate,
    ColWorkLocation,
    ColDutyIn,
    ColBreakOut,
    ColBreakIn,
    ColDutyOut,
    ColTotalHour,
    ColTotalBreak,
    ColBasicHour,
    ColOvertime,
    ColLessBasic,
    ColRemarks,

    // === MONTH PICKER ===
    MonthOptionsHeader,

    // === PREFERENCES MESSAGES ===
    PreferencesHeader,
    PreferenceLanguage(Option<String>),
    PreferenceMobile(Option<String>),
    PreferencesSaved,
    PreferencesCleared,
    PreferencesUnavailable,
    UnsupportedLanguage(String),

    // === TRANSLATION MESSAGES ===
    TranslationEndpointsFailed,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleUpstream,
    ConfigModuleTranslation,
    PromptSelectModules,
    PromptApiUrl,
    PromptScriptId,
    PromptTimeout,
    PromptEndpoints,
    PromptCacheCapacity,
}
