#[cfg(test)]
mod tests {
    use almuraqib::libs::preferences::{Preferences, LANGUAGE_KEY, MOBILE_KEY, PREFERENCES_FILE_NAME};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Preferences backed by a file in a fresh temporary directory.
    struct PreferencesTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
        preferences: Preferences,
    }

    impl TestContext for PreferencesTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join(PREFERENCES_FILE_NAME);
            PreferencesTestContext {
                preferences: Preferences::at(&path),
                path,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_empty_store(ctx: &mut PreferencesTestContext) {
        assert!(ctx.preferences.is_available());
        assert_eq!(ctx.preferences.saved_language(), None);
        assert_eq!(ctx.preferences.saved_mobile(), None);
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut PreferencesTestContext) {
        assert!(ctx.preferences.save_language("bn"));
        assert!(ctx.preferences.save_mobile("0512345678"));

        let reopened = Preferences::at(&ctx.path);
        assert_eq!(reopened.saved_language().as_deref(), Some("bn"));
        assert_eq!(reopened.saved_mobile().as_deref(), Some("0512345678"));
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_keys_in_file(ctx: &mut PreferencesTestContext) {
        ctx.preferences.save_language("ar");
        let content = fs::read_to_string(&ctx.path).unwrap();
        assert!(content.contains(LANGUAGE_KEY));
        assert!(!content.contains(MOBILE_KEY));
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_overwrite_and_remove(ctx: &mut PreferencesTestContext) {
        ctx.preferences.save_language("hi");
        ctx.preferences.save_language("ar");
        assert_eq!(ctx.preferences.saved_language().as_deref(), Some("ar"));

        assert!(ctx.preferences.remove(LANGUAGE_KEY));
        assert_eq!(ctx.preferences.saved_language(), None);
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_clear_all(ctx: &mut PreferencesTestContext) {
        ctx.preferences.save_language("hi");
        ctx.preferences.save_mobile("0512345678");
        ctx.preferences.clear_all();
        assert_eq!(ctx.preferences.saved_language(), None);
        assert_eq!(ctx.preferences.saved_mobile(), None);
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_malformed_file_is_ignored(ctx: &mut PreferencesTestContext) {
        fs::write(&ctx.path, "not json").unwrap();
        assert_eq!(ctx.preferences.saved_language(), None);
        assert!(ctx.preferences.save_language("bn"));
        assert_eq!(ctx.preferences.saved_language().as_deref(), Some("bn"));
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_unwritable_location_fails_quietly(ctx: &mut PreferencesTestContext) {
        let preferences = Preferences::at(ctx.path.join("missing-dir").join(PREFERENCES_FILE_NAME));
        assert!(!preferences.save_mobile("0512345678"));
        assert_eq!(preferences.saved_mobile(), None);
    }
}
