#[cfg(test)]
mod tests {
    use almuraqib::libs::fallback::{fallback_translation, has_fallback_translation};

    #[test]
    fn test_exact_match() {
        assert_eq!(fallback_translation("Absent", "bn").as_deref(), Some("অনুপস্থিত"));
        assert_eq!(fallback_translation("  SUNDAY ", "ar").as_deref(), Some("الأحد"));
        assert_eq!(fallback_translation("leave", "hi").as_deref(), Some("छुट्टी"));
    }

    #[test]
    fn test_partial_match_replaces_keyword() {
        assert_eq!(fallback_translation("Sick leave", "hi").as_deref(), Some("बीमार leave"));
        assert_eq!(fallback_translation("Late arrival, LATE again", "bn").as_deref(), Some("বিলম্ব arrival, বিলম্ব again"));
    }

    #[test]
    fn test_partial_match_inside_words() {
        assert_eq!(fallback_translation("breakfast", "ar").as_deref(), Some("استراحةfast"));
    }

    #[test]
    fn test_english_target_has_no_fallback() {
        assert_eq!(fallback_translation("Absent", "en"), None);
        assert!(!has_fallback_translation("Absent", "en"));
    }

    #[test]
    fn test_unknown_text_or_language() {
        assert_eq!(fallback_translation("Site visit", "bn"), None);
        assert_eq!(fallback_translation("Absent", "fr"), None);
        assert!(has_fallback_translation("Absent", "ar"));
    }
}
