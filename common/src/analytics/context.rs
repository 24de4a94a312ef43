use crate::error::ContextError;

/// Turns an optional context lookup into the fail-fast contract consumers
/// rely on: outside a provider there is no default value to fall back to.
pub fn require_context<T>(found: Option<T>, consumer: &'static str) -> Result<T, ContextError> {
    found.ok_or(ContextError::MissingProvider(consumer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_provider_names_the_consumer() {
        let err = require_context::<u8>(None, "AnalyticsDashboard").unwrap_err();
        assert_eq!(err.to_string(), "AnalyticsDashboard must be used within its provider");
    }

    #[test]
    fn present_context_passes_through() {
        assert_eq!(require_context(Some(3), "x"), Ok(3));
    }
}
