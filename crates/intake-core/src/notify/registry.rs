//! Registry for managing available notification channels

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Notifier, NotifyError};

type NotifierFactory = Arc<dyn Fn() -> Arc<dyn Notifier> + Send + Sync>;

/// Maps channel names to notifier factories.
///
/// Thread-safe and async-compatible using tokio's RwLock. Channel names are
/// case-insensitive and registering a name twice replaces the earlier entry.
/// Each `resolve` call builds a fresh notifier from the factory.
#[derive(Clone)]
pub struct NotifierRegistry {
    factories: Arc<RwLock<HashMap<String, NotifierFactory>>>,
}

impl NotifierRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a channel under `name`, replacing any earlier registration.
    pub async fn register<N, F>(&self, name: &str, factory: F)
    where
        N: Notifier + 'static,
        F: Fn() -> N + Send + Sync + 'static,
    {
        let erased: NotifierFactory = Arc::new(move || {
            let notifier: Arc<dyn Notifier> = Arc::new(factory());
            notifier
        });

        let mut factories = self.factories.write().await;
        factories.insert(name.to_lowercase(), erased);
    }

    /// Build a notifier for the named channel.
    pub async fn resolve(&self, name: &str) -> Result<Arc<dyn Notifier>, NotifyError> {
        let factories = self.factories.read().await;

        factories
            .get(&name.to_lowercase())
            .map(|factory| factory())
            .ok_or(NotifyError::NotifierNotFound)
    }

    /// Check if a channel is registered
    pub async fn contains(&self, name: &str) -> bool {
        let factories = self.factories.read().await;
        factories.contains_key(&name.to_lowercase())
    }

    /// Names of all registered channels
    pub async fn channels(&self) -> Vec<String> {
        let factories = self.factories.read().await;
        factories.keys().cloned().collect()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::super::NotificationContent;
    use super::*;

    #[derive(Debug)]
    struct MockNotifier {
        succeed: bool,
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn send(&self, _: &str, _: &str, _: &NotificationContent) -> bool {
            self.succeed
        }
    }

    fn content() -> NotificationContent {
        NotificationContent {
            name: "John Doe".to_string(),
            message: "Thank you for registering with our service.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_registry_is_empty() {
        let registry = NotifierRegistry::new();
        assert!(registry.channels().await.is_empty());
        assert!(!registry.contains("email").await);
    }

    #[tokio::test]
    async fn test_register_and_resolve() {
        let registry = NotifierRegistry::new();
        registry
            .register("email", || MockNotifier { succeed: true })
            .await;

        assert!(registry.contains("email").await);
        let notifier = registry.resolve("email").await.unwrap();
        assert!(notifier.send("john@example.com", "Hello", &content()).await);
    }

    #[tokio::test]
    async fn test_channel_names_are_case_insensitive() {
        let registry = NotifierRegistry::new();
        registry
            .register("Email", || MockNotifier { succeed: true })
            .await;

        assert!(registry.contains("email").await);
        assert!(registry.resolve("EMAIL").await.is_ok());
        assert_eq!(registry.channels().await, vec!["email".to_string()]);
    }

    #[tokio::test]
    async fn test_resolve_unknown_channel() {
        let registry = NotifierRegistry::new();
        let err = registry.resolve("carrier-pigeon").await.unwrap_err();
        assert_eq!(err, NotifyError::NotifierNotFound);
        assert_eq!(err.to_string(), "No notifier found for the requested type");
    }

    #[tokio::test]
    async fn test_last_registration_wins() {
        let registry = NotifierRegistry::new();
        registry
            .register("email", || MockNotifier { succeed: true })
            .await;
        registry
            .register("EMAIL", || MockNotifier { succeed: false })
            .await;

        assert_eq!(registry.channels().await.len(), 1);
        let notifier = registry.resolve("email").await.unwrap();
        assert!(!notifier.send("john@example.com", "Hello", &content()).await);
    }

    #[tokio::test]
    async fn test_resolve_builds_fresh_instance_per_call() {
        let registry = NotifierRegistry::new();
        let built = Arc::new(AtomicUsize::new(0));
        let counter = built.clone();
        registry
            .register("email", move || {
                counter.fetch_add(1, Ordering::SeqCst);
                MockNotifier { succeed: true }
            })
            .await;

        registry.resolve("email").await.unwrap();
        registry.resolve("email").await.unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_clone_shares_registrations() {
        let registry = NotifierRegistry::new();
        registry
            .register("sms", || MockNotifier { succeed: true })
            .await;

        let cloned = registry.clone();
        assert!(cloned.contains("sms").await);

        cloned
            .register("email", || MockNotifier { succeed: true })
            .await;
        assert!(registry.contains("email").await);
    }
}
