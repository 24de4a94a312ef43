use crate::analytics::source::AnalyticsSource;
use crate::analytics::state::ALL_TEMPLATES;
use crate::error::StorageError;
use crate::storage::{ANALYTICS_SOURCE_KEY, ANALYTICS_TEMPLATE_ID_KEY, KeyValueStore};

/// Typed access to the two persisted analytics fields.
///
/// Loads never fail: absent, unreadable and invalid values all come back as
/// the `all` defaults.
#[derive(Debug, Clone)]
pub struct SourceRepository<S> {
    store: S,
}

impl<S: KeyValueStore> SourceRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_source(&self) -> AnalyticsSource {
        self.store
            .get_or_absent(ANALYTICS_SOURCE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn load_template_id(&self) -> String {
        self.store
            .get_or_absent(ANALYTICS_TEMPLATE_ID_KEY)
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| ALL_TEMPLATES.to_string())
    }

    pub fn save_source(&self, source: AnalyticsSource) -> Result<(), StorageError> {
        self.store.set(ANALYTICS_SOURCE_KEY, source.as_str())
    }

    pub fn save_template_id(&self, template_id: &str) -> Result<(), StorageError> {
        self.store.set(ANALYTICS_TEMPLATE_ID_KEY, template_id)
    }
}
