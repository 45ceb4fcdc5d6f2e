//! Typeahead search core.
//!
//! Turns keystrokes into a debounced, sequenced stream of provider queries
//! and keeps the dropdown/selection state that a renderer draws from.
//!
//! # Design
//!
//! - Time is injected: every operation that depends on the clock takes `now`.
//! - The only async collaborator (the search provider) lives outside this
//!   crate. The core hands out a [`types::Query`] and later accepts the
//!   response tagged with its [`types::Sequence`].
//! - Responses for anything but the current sequence are discarded, so
//!   out-of-order network returns can never overwrite newer results.

pub mod error;
pub mod types;
pub mod widget;

pub use error::ProviderError;
pub use types::{Identifier, Query, SearchResult, Sequence, TypeaheadConfig};
pub use widget::{
    DropdownView, NavKey, NavState, PointerTarget, ResponseOutcome, Selection, Snapshot, Typeahead,
};
