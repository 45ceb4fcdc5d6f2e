mod timing;
mod typeahead;

pub use timing::Timing;
pub use typeahead::{ConfigError, TypeaheadConfig};
