use crate::libs::{
    locale::Language,
    lookup::{recent_months, DEFAULT_MONTH_OPTIONS},
    preferences::Preferences,
    view::View,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct MonthsArgs {
    /// Language of the month names (defaults to the saved one)
    #[arg(short, long, value_enum)]
    lang: Option<Language>,

    /// Number of months to list, newest first
    #[arg(short, long, default_value_t = DEFAULT_MONTH_OPTIONS)]
    count: usize,
}

pub fn cmd(args: MonthsArgs) -> Result<()> {
    let language = super::lookup::resolve_language(args.lang, &Preferences::new());
    let options = recent_months(Local::now().date_naive(), args.count, language);
    View::months(&options)
}
