use crate::{
    api::{EndpointRotation, AUTO_LANGUAGE, UNKNOWN_LANGUAGE},
    libs::{config::Config, locale::Language, messages::Message, translator::Translator},
    msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Text to translate
    text: String,

    /// Target language
    #[arg(short, long, value_enum)]
    to: Language,

    /// Source language code, or "auto" to detect
    #[arg(short, long, default_value = AUTO_LANGUAGE)]
    from: String,
}

pub async fn cmd(args: TranslateArgs) -> Result<()> {
    let config = Config::read()?;
    let translator = Translator::new(EndpointRotation::from_config(&config.translation)?, config.translation.cache_capacity);

    let translation = translator.translate(&args.text, args.to.code(), &args.from).await;
    if translation.detected_language == UNKNOWN_LANGUAGE {
        msg_warning!(Message::TranslationEndpointsFailed);
    }
    println!("{}", translation.text);

    Ok(())
}
