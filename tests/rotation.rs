#[cfg(test)]
mod tests {
    use almuraqib::api::{EndpointRotation, TranslateError, Translation, TranslationProvider, TranslationRequest};
    use almuraqib::libs::config::TranslationConfig;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("endpoint {0} down")]
    struct Down(usize);

    /// Endpoint whose availability can be switched from the test.
    struct MockEndpoint {
        id: usize,
        up: Arc<AtomicBool>,
        calls: Arc<AtomicUsize>,
    }

    impl TranslationProvider for MockEndpoint {
        type Error = Down;

        async fn translate(&self, request: &TranslationRequest) -> Result<Translation, Down> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.up.load(Ordering::SeqCst) {
                return Err(Down(self.id));
            }
            Ok(Translation::untranslated(&format!("{}#{}", request.text, self.id), "en"))
        }
    }

    struct Endpoints {
        up: Vec<Arc<AtomicBool>>,
        calls: Vec<Arc<AtomicUsize>>,
    }

    impl Endpoints {
        fn calls(&self) -> Vec<usize> {
            self.calls.iter().map(|c| c.load(Ordering::SeqCst)).collect()
        }

        fn set_up(&self, id: usize, up: bool) {
            self.up[id].store(up, Ordering::SeqCst);
        }
    }

    fn rotation(availability: &[bool]) -> (EndpointRotation<MockEndpoint>, Endpoints) {
        let endpoints = Endpoints {
            up: availability.iter().map(|&up| Arc::new(AtomicBool::new(up))).collect(),
            calls: availability.iter().map(|_| Arc::new(AtomicUsize::new(0))).collect(),
        };
        let providers = (0..availability.len())
            .map(|id| MockEndpoint {
                id,
                up: endpoints.up[id].clone(),
                calls: endpoints.calls[id].clone(),
            })
            .collect();
        (EndpointRotation::new(providers), endpoints)
    }

    fn request() -> TranslationRequest {
        TranslationRequest::new("Absent", "bn", "auto")
    }

    #[tokio::test]
    async fn test_success_keeps_cursor() {
        let (rotation, endpoints) = rotation(&[true, true, true]);
        let translation = rotation.translate(&request()).await.unwrap();
        assert_eq!(translation.text, "Absent#0");
        assert_eq!(rotation.cursor(), 0);

        rotation.translate(&request()).await.unwrap();
        assert_eq!(endpoints.calls(), vec![2, 0, 0]);
    }

    #[tokio::test]
    async fn test_failure_advances_cursor() {
        let (rotation, endpoints) = rotation(&[false, true, true]);
        let translation = rotation.translate(&request()).await.unwrap();
        assert_eq!(translation.text, "Absent#1");
        assert_eq!(rotation.cursor(), 1);

        rotation.translate(&request()).await.unwrap();
        assert_eq!(endpoints.calls(), vec![1, 2, 0]);
    }

    #[tokio::test]
    async fn test_scan_wraps_around() {
        let (rotation, endpoints) = rotation(&[true, false, true]);
        rotation.translate(&request()).await.unwrap();

        endpoints.set_up(0, false);
        let translation = rotation.translate(&request()).await.unwrap();
        assert_eq!(translation.text, "Absent#2");
        assert_eq!(rotation.cursor(), 2);

        endpoints.set_up(2, false);
        endpoints.set_up(0, true);
        let translation = rotation.translate(&request()).await.unwrap();
        assert_eq!(translation.text, "Absent#0");
        assert_eq!(rotation.cursor(), 0);
    }

    #[tokio::test]
    async fn test_all_endpoints_failing() {
        let (rotation, endpoints) = rotation(&[false, false, false]);
        let result = rotation.translate(&request()).await;
        assert!(matches!(result, Err(TranslateError::Exhausted(3))));
        assert_eq!(endpoints.calls(), vec![1, 1, 1]);
        assert_eq!(rotation.cursor(), 0);
    }

    #[tokio::test]
    async fn test_no_endpoints() {
        let (rotation, _endpoints) = rotation(&[]);
        assert!(rotation.is_empty());
        let result = rotation.translate(&request()).await;
        assert!(matches!(result, Err(TranslateError::NoEndpoints)));
    }

    #[test]
    fn test_from_default_config() {
        let rotation = EndpointRotation::from_config(&TranslationConfig::default()).unwrap();
        assert_eq!(rotation.len(), 3);
        assert_eq!(rotation.cursor(), 0);
    }
}
