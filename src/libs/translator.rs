//! Best-effort translation of free-text remarks.
//!
//! [`Translator`] never fails its caller. For every call it walks the same
//! sequence and stops at the first step that produces text:
//!
//! ```text
//! blank text ─────────────▶ returned as-is
//! target "en" ────────────▶ returned as-is
//! cache hit ──────────────▶ cached translation
//! remote provider ok ─────▶ cached + returned
//! fallback dictionary ────▶ cached + returned
//! otherwise ──────────────▶ original text, detected language "unknown"
//! ```
//!
//! The cache is a bounded LRU owned by the translator instance. Concurrent
//! calls for the same key are not coalesced: both may miss the cache and
//! both will reach the provider.

use crate::api::{Translation, TranslationProvider, TranslationRequest, AUTO_LANGUAGE, UNKNOWN_LANGUAGE};
use crate::libs::cache::LruCache;
use crate::libs::fallback::fallback_translation;
use parking_lot::Mutex;

/// Default number of cached translations.
pub const DEFAULT_CACHE_CAPACITY: usize = 512;

/// Language that never needs translating.
pub const SOURCE_LANGUAGE: &str = "en";

pub struct Translator<P> {
    provider: P,
    cache: Mutex<LruCache<TranslationRequest, Translation>>,
}

impl<P> Translator<P>
where
    P: TranslationProvider,
{
    pub fn new(provider: P, cache_capacity: usize) -> Self {
        Self {
            provider,
            cache: Mutex::new(LruCache::new(cache_capacity)),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Translates `text` into `target`, returning only the text.
    pub async fn resolve(&self, text: &str, target: &str) -> String {
        self.resolve_from(text, target, AUTO_LANGUAGE).await
    }

    pub async fn resolve_from(&self, text: &str, target: &str, source: &str) -> String {
        self.translate(text, target, source).await.text
    }

    /// Translates `text` and reports the detected source language.
    pub async fn translate(&self, text: &str, target: &str, source: &str) -> Translation {
        if text.trim().is_empty() {
            return Translation::untranslated(text, source);
        }
        if target == SOURCE_LANGUAGE {
            return Translation::untranslated(text, SOURCE_LANGUAGE);
        }

        let request = TranslationRequest::new(text, target, source);
        if let Some(cached) = self.cache.lock().get(&request) {
            tracing::debug!(target_language = target, "translation cache hit");
            return cached;
        }

        match self.provider.translate(&request).await {
            Ok(mut translation) => {
                if translation.text.is_empty() {
                    translation.text = text.to_owned();
                }
                self.cache.lock().insert(request, translation.clone());
                return translation;
            }
            Err(e) => tracing::warn!("translation request failed: {}", e),
        }

        if let Some(fallback) = fallback_translation(text, target) {
            tracing::debug!(target_language = target, "using fallback dictionary");
            let translation = Translation::untranslated(&fallback, source);
            self.cache.lock().insert(request, translation.clone());
            return translation;
        }

        Translation::untranslated(text, UNKNOWN_LANGUAGE)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}
