//! API client modules for external service integrations.
//!
//! Provides the outbound HTTP side of the application: the spreadsheet
//! script endpoint that serves attendance data, the translation providers
//! used for free-text remarks, and the public-IP lookup that accompanies
//! each attendance request.
//!
//! ## Features
//!
//! - **Attendance**: Fetches a worker's rows and summary for a date range
//! - **Translation**: LibreTranslate endpoints behind a rotating fallback chain
//! - **Client Info**: Best-effort IP address and device label for audit fields
//!
//! ## Usage
//!
//! ```rust,no_run
//! use almuraqib::api::{translate::EndpointRotation, TranslationProvider, TranslationRequest};
//! use almuraqib::libs::config::TranslationConfig;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let rotation = EndpointRotation::from_config(&TranslationConfig::default())?;
//! let request = TranslationRequest::new("Absent", "bn", "auto");
//! let translation = rotation.translate(&request).await?;
//! println!("{}", translation.text);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod attendance;
pub mod client_info;
pub mod translate;

pub use attendance::{AttendanceApi, LookupError};
pub use translate::{EndpointRotation, LibreTranslate, TranslateError};

/// Language code meaning "let the provider detect the source language".
pub const AUTO_LANGUAGE: &str = "auto";

/// Detected-language marker used when no translation could be produced.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// A single translation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    #[serde(rename = "targetLanguage")]
    pub target: String,
    #[serde(rename = "sourceLanguage", default = "auto_language")]
    pub source: String,
}

fn auto_language() -> String {
    AUTO_LANGUAGE.to_string()
}

impl TranslationRequest {
    pub fn new(text: &str, target: &str, source: &str) -> Self {
        Self {
            text: text.to_owned(),
            target: target.to_owned(),
            source: source.to_owned(),
        }
    }
}

/// Translated text together with the language the provider detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    #[serde(rename = "translatedText")]
    pub text: String,
    pub detected_language: String,
}

impl Translation {
    /// The text as-is, marked with the given detected language.
    pub fn untranslated(text: &str, detected_language: &str) -> Self {
        Self {
            text: text.to_owned(),
            detected_language: detected_language.to_owned(),
        }
    }
}

/// Common interface for anything that can translate a piece of text.
///
/// Implemented by single LibreTranslate endpoints and by the rotation that
/// chains them. The translator only depends on this trait, which keeps the
/// network out of its tests.
#[allow(async_fn_in_trait)]
pub trait TranslationProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Translates `request.text` from `request.source` into `request.target`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, Self::Error>;
}
