//! Remote translation providers.
//!
//! Translation goes through free LibreTranslate instances. A single instance
//! is unreliable, so [`EndpointRotation`] scans a fixed list of them once per
//! request and stays on the first one that answers.

use super::{Translation, TranslationProvider, TranslationRequest};
use crate::libs::config::{EndpointConfig, TranslationConfig};
use parking_lot::Mutex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: reqwest::StatusCode },
    #[error("no translation endpoints configured")]
    NoEndpoints,
    #[error("all {0} translation endpoints failed")]
    Exhausted(usize),
}

#[derive(Serialize, Debug)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct LibreTranslateResponse {
    #[serde(default)]
    translated_text: Option<String>,
    #[serde(default)]
    detected_language: Option<DetectedLanguage>,
}

#[derive(Deserialize, Debug)]
struct DetectedLanguage {
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    language: Option<String>,
}

/// One LibreTranslate-compatible endpoint.
#[derive(Debug, Clone)]
pub struct LibreTranslate {
    client: Client,
    name: String,
    url: String,
}

impl LibreTranslate {
    pub fn new(client: Client, endpoint: &EndpointConfig) -> Self {
        Self {
            client,
            name: endpoint.name.clone(),
            url: endpoint.url.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TranslationProvider for LibreTranslate {
    type Error = TranslateError;

    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, TranslateError> {
        let body = LibreTranslateRequest {
            q: &request.text,
            source: &request.source,
            target: &request.target,
            format: "text",
        };

        let res = self.client.post(&self.url).json(&body).send().await.map_err(|source| TranslateError::Transport {
            endpoint: self.name.clone(),
            source,
        })?;

        if !res.status().is_success() {
            return Err(TranslateError::Status {
                endpoint: self.name.clone(),
                status: res.status(),
            });
        }

        let data = res.json::<LibreTranslateResponse>().await.map_err(|source| TranslateError::Transport {
            endpoint: self.name.clone(),
            source,
        })?;

        let text = data.translated_text.filter(|t| !t.is_empty()).unwrap_or_else(|| request.text.clone());
        let detected_language = match data.detected_language {
            Some(DetectedLanguage {
                confidence: Some(confidence),
                language: Some(language),
            }) if confidence != 0.0 => language,
            _ => request.source.clone(),
        };

        Ok(Translation { text, detected_language })
    }
}

/// Tries a fixed list of providers in turn, one pass per request.
///
/// The cursor belongs to this instance. A failed attempt moves it to the
/// next provider; a successful one leaves it in place so the next request
/// starts on the provider that last worked.
#[derive(Debug)]
pub struct EndpointRotation<P> {
    providers: Vec<P>,
    cursor: Mutex<usize>,
}

impl<P> EndpointRotation<P> {
    pub fn new(providers: Vec<P>) -> Self {
        Self {
            providers,
            cursor: Mutex::new(0),
        }
    }

    pub fn cursor(&self) -> usize {
        *self.cursor.lock()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl EndpointRotation<LibreTranslate> {
    /// Builds the rotation over the configured LibreTranslate endpoints.
    pub fn from_config(config: &TranslationConfig) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let providers = config.endpoints.iter().map(|endpoint| LibreTranslate::new(client.clone(), endpoint)).collect();
        Ok(Self::new(providers))
    }
}

impl<P> TranslationProvider for EndpointRotation<P>
where
    P: TranslationProvider,
{
    type Error = TranslateError;

    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, TranslateError> {
        let count = self.providers.len();
        if count == 0 {
            return Err(TranslateError::NoEndpoints);
        }

        for attempt in 1..=count {
            let index = *self.cursor.lock() % count;
            match self.providers[index].translate(request).await {
                Ok(translation) => return Ok(translation),
                Err(e) => {
                    tracing::warn!(attempt, index, "translation attempt failed: {}", e);
                    *self.cursor.lock() = (index + 1) % count;
                }
            }
        }

        tracing::warn!("all translation endpoints failed, falling back");
        Err(TranslateError::Exhausted(count))
    }
}
