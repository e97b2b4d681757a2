#[cfg(test)]
mod tests {
    use almuraqib::api::{Translation, TranslationProvider, TranslationRequest, UNKNOWN_LANGUAGE};
    use almuraqib::commands::lookup::translate_remarks;
    use almuraqib::libs::attendance::AttendanceRow;
    use almuraqib::libs::locale::Language;
    use almuraqib::libs::translator::Translator;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("mock provider offline")]
    struct Offline;

    /// Provider that upper-cases text, or fails every call when offline.
    struct MockProvider {
        calls: AtomicUsize,
        offline: bool,
        reply: Option<String>,
    }

    impl MockProvider {
        fn online() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                offline: false,
                reply: None,
            }
        }

        fn offline() -> Self {
            Self {
                offline: true,
                ..Self::online()
            }
        }

        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                ..Self::online()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TranslationProvider for MockProvider {
        type Error = Offline;

        async fn translate(&self, request: &TranslationRequest) -> Result<Translation, Offline> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.offline {
                return Err(Offline);
            }
            let text = self.reply.clone().unwrap_or_else(|| request.text.to_uppercase());
            Ok(Translation::untranslated(&text, "en"))
        }
    }

    fn remark_row(remarks: Option<&str>) -> AttendanceRow {
        let mut cells: Vec<Option<&str>> = vec![None; 10];
        cells.push(remarks);
        AttendanceRow::new(cells)
    }

    #[tokio::test]
    async fn test_english_target_skips_provider() {
        let translator = Translator::new(MockProvider::online(), 8);
        let translation = translator.translate("Absent", "en", "auto").await;
        assert_eq!(translation.text, "Absent");
        assert_eq!(translation.detected_language, "en");
        assert_eq!(translator.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_text_skips_provider() {
        let translator = Translator::new(MockProvider::online(), 8);
        let translation = translator.translate("   ", "bn", "auto").await;
        assert_eq!(translation.text, "   ");
        assert_eq!(translation.detected_language, "auto");
        assert_eq!(translator.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_repeated_request_hits_cache() {
        let translator = Translator::new(MockProvider::online(), 8);
        assert_eq!(translator.resolve("late", "hi").await, "LATE");
        assert_eq!(translator.resolve("late", "hi").await, "LATE");
        assert_eq!(translator.provider().calls(), 1);
        assert_eq!(translator.cache_size(), 1);

        assert_eq!(translator.resolve("late", "ar").await, "LATE");
        assert_eq!(translator.provider().calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_provider_text_falls_back_to_original() {
        let translator = Translator::new(MockProvider::replying(""), 8);
        assert_eq!(translator.resolve("Site visit", "bn").await, "Site visit");
    }

    #[tokio::test]
    async fn test_offline_uses_fallback_dictionary() {
        let translator = Translator::new(MockProvider::offline(), 8);
        let translation = translator.translate("Absent", "bn", "auto").await;
        assert_eq!(translation.text, "অনুপস্থিত");
        assert_eq!(translation.detected_language, "auto");

        translator.resolve("Absent", "bn").await;
        assert_eq!(translator.provider().calls(), 1);
    }

    #[tokio::test]
    async fn test_offline_without_fallback_returns_original() {
        let translator = Translator::new(MockProvider::offline(), 8);
        let translation = translator.translate("Site visit", "bn", "auto").await;
        assert_eq!(translation.text, "Site visit");
        assert_eq!(translation.detected_language, UNKNOWN_LANGUAGE);

        translator.resolve("Site visit", "bn").await;
        assert_eq!(translator.provider().calls(), 2);
        assert_eq!(translator.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_cache_is_bounded() {
        let translator = Translator::new(MockProvider::online(), 1);
        translator.resolve("late", "bn").await;
        translator.resolve("early", "bn").await;
        translator.resolve("late", "bn").await;
        assert_eq!(translator.provider().calls(), 3);
        assert_eq!(translator.cache_size(), 1);

        translator.clear_cache();
        assert_eq!(translator.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_translate_remarks_deduplicates() {
        let translator = Translator::new(MockProvider::online(), 8);
        let rows = vec![
            remark_row(Some("Late")),
            remark_row(Some("Late")),
            remark_row(Some("Absent")),
            remark_row(Some("")),
            remark_row(None),
        ];

        let remarks = translate_remarks(&translator, &rows, Language::Bn).await;
        assert_eq!(remarks.len(), 2);
        assert_eq!(remarks.get("Late").map(String::as_str), Some("LATE"));
        assert_eq!(remarks.get("Absent").map(String::as_str), Some("ABSENT"));
        assert_eq!(translator.provider().calls(), 2);
    }
}
