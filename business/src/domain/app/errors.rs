/// Failure modes raised by the external backend SDK.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend.duplicate_app")]
    DuplicateApp,
    #[error("backend.app_not_initialized")]
    AppNotInitialized,
    #[error("backend.analytics_unavailable")]
    AnalyticsUnavailable,
    #[error("backend.invalid_configuration")]
    InvalidConfiguration,
}
