//! Attendance lookup command.
//!
//! Fetches one month of attendance for a mobile number and renders the
//! summary and rows. Mobile and language default to the saved preferences
//! and are saved again after a successful lookup.

use crate::{
    api::{client_info, AttendanceApi, EndpointRotation, TranslationProvider},
    libs::{
        attendance::AttendanceRow,
        config::Config,
        locale::Language,
        lookup::{validate_mobile, LookupQuery, MonthValue},
        messages::Message,
        preferences::Preferences,
        summary::AttendanceMetrics,
        translator::Translator,
        view::{RowDisplay, View, ViewMode},
    },
    msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_info,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use reqwest::Client;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Mobile number, 10 digits starting with 0 (defaults to the saved one)
    #[arg(short, long)]
    mobile: Option<String>,

    /// Month to look up as YYYY-MM (defaults to the current month)
    #[arg(long)]
    month: Option<MonthValue>,

    /// Interface language (defaults to the saved one, then English)
    #[arg(short, long, value_enum)]
    lang: Option<Language>,

    /// Row layout
    #[arg(short, long, value_enum, default_value_t = ViewMode::Table)]
    view: ViewMode,

    /// Show remarks untranslated
    #[arg(long)]
    no_translate: bool,
}

/// Picks the explicit language, else the saved one, else English.
pub fn resolve_language(explicit: Option<Language>, preferences: &Preferences) -> Language {
    explicit
        .or_else(|| preferences.saved_language().and_then(|code| Language::from_code(&code)))
        .unwrap_or_default()
}

/// Translates every distinct remark of the rows into `language`.
///
/// Returns a map from original remark to its translation. Remarks are
/// translated one after another; failures fall back inside the translator.
pub async fn translate_remarks<P>(translator: &Translator<P>, rows: &[AttendanceRow], language: Language) -> HashMap<String, String>
where
    P: TranslationProvider,
{
    let remarks: BTreeSet<&str> = rows.iter().filter_map(|row| row.remarks()).filter(|r| !r.trim().is_empty()).collect();

    let mut translated = HashMap::with_capacity(remarks.len());
    for remark in remarks {
        let text = translator.resolve(remark, language.code()).await;
        translated.insert(remark.to_string(), text);
    }
    translated
}

pub async fn cmd(args: LookupArgs) -> Result<()> {
    let preferences = Preferences::new();
    let language = resolve_language(args.lang, &preferences);

    let mobile = args
        .mobile
        .or_else(|| preferences.saved_mobile())
        .ok_or_else(|| msg_error_anyhow!(Message::MobileRequired))?;
    let mobile = mobile.trim().to_string();
    if !validate_mobile(&mobile) {
        msg_bail_anyhow!(Message::InvalidMobile(mobile));
    }

    let month = args.month.unwrap_or_else(|| MonthValue::of(Local::now().date_naive()));
    let config = Config::read()?.with_env_overrides();
    let api = AttendanceApi::new(&config.upstream)?;

    let ip_address = client_info::fetch_ip_address(&Client::new()).await;
    let query = LookupQuery::for_month(&mobile, month).with_client_info(ip_address, Some(client_info::device_details().to_string()));

    msg_info!(Message::FetchingAttendance {
        mobile: mobile.clone(),
        month: month.label(language),
    });
    let data = api.fetch(&query).await?;

    preferences.save_mobile(&mobile);
    preferences.save_language(language.code());

    let metrics = AttendanceMetrics::calculate(&data);

    let remarks = if language != Language::En && !args.no_translate {
        let translator = Translator::new(EndpointRotation::from_config(&config.translation)?, config.translation.cache_capacity);
        let remarks = translate_remarks(&translator, &data.rows, language).await;
        msg_debug!(Message::TranslatingRemarks(remarks.len()));
        remarks
    } else {
        HashMap::new()
    };

    let rows: Vec<RowDisplay> = data.rows.iter().map(|row| RowDisplay::new(row, &remarks)).collect();

    View::summary(&data, &metrics)?;
    View::rows(&rows, args.view, language)?;

    Ok(())
}
