use crate::{
    libs::{locale::Language, lookup::validate_mobile, messages::Message, preferences::Preferences},
    msg_bail_anyhow, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PrefsArgs {
    /// Save the interface language
    #[arg(short, long)]
    language: Option<String>,

    /// Save the mobile number used by default
    #[arg(short, long)]
    mobile: Option<String>,

    /// Forget both saved values
    #[arg(long, conflicts_with_all = ["language", "mobile"])]
    clear: bool,
}

pub fn cmd(args: PrefsArgs) -> Result<()> {
    let preferences = Preferences::new();
    if !preferences.is_available() {
        msg_warning!(Message::PreferencesUnavailable);
        return Ok(());
    }

    if args.clear {
        preferences.clear_all();
        msg_success!(Message::PreferencesCleared);
        return Ok(());
    }

    if args.language.is_none() && args.mobile.is_none() {
        msg_print!(Message::PreferencesHeader);
        msg_print!(Message::PreferenceLanguage(preferences.saved_language()));
        msg_print!(Message::PreferenceMobile(preferences.saved_mobile()));
        return Ok(());
    }

    let mut saved = true;
    if let Some(code) = args.language {
        let Some(language) = Language::from_code(&code) else {
            msg_bail_anyhow!(Message::UnsupportedLanguage(code));
        };
        saved &= preferences.save_language(language.code());
    }
    if let Some(mobile) = args.mobile {
        if !validate_mobile(&mobile) {
            msg_bail_anyhow!(Message::InvalidMobile(mobile));
        }
        saved &= preferences.save_mobile(&mobile);
    }

    if saved {
        msg_success!(Message::PreferencesSaved);
    } else {
        msg_warning!(Message::PreferencesUnavailable);
    }
    Ok(())
}
