use super::TypeaheadConfig;
use std::time::Duration;

/// Durations derived from the millisecond fields of [`TypeaheadConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub debounce: Duration,
    pub request_timeout: Duration,
}

impl From<&TypeaheadConfig> for Timing {
    fn from(config: &TypeaheadConfig) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            request_timeout: Duration::from_millis(config.request_timeout_ms),
        }
    }
}
