pub(crate) mod config;
pub use config::{ConfigError, Timing, TypeaheadConfig};

pub(crate) mod identifier;
pub use identifier::{Identifier, IdentifierError, MAX_IDENTIFIER_LENGTH};

pub(crate) mod query;
pub use query::{Query, Sequence};

pub(crate) mod result;
pub use result::SearchResult;
