//! Async host for the typeahead core.
//!
//! Runs one [`Typeahead`] per worker task and connects it to a
//! [`SearchProvider`].
//!
//! # Design
//!
//! - The worker owns the widget state. UI events arrive as [`Request`]s over
//!   a channel and are processed one at a time.
//! - The debounce timer is a tokio sleep armed from the core's deadline.
//!   Dropping the worker drops the timer with it.
//! - Lookups run concurrently in a `JoinSet` and may finish in any order;
//!   the core's sequence check decides which response is shown.
//! - After every event the worker publishes a [`Snapshot`] for renderers.
//!
//! # API
//!
//! - `start()`: spawns the worker and returns a [`TypeaheadHandle`]
//! - `TypeaheadHandle::input()`, `key()`, `focus()`, ...: forward UI events
//! - `TypeaheadHandle::snapshot()`, `changed()`: read render state

mod error;
mod handle;
mod provider;
mod worker;

pub use error::HostError;
pub use handle::TypeaheadHandle;
pub use provider::{FnProvider, SearchProvider};
pub use worker::{OnSelect, Request, start};

pub use typeahead_core::{
    DropdownView, NavKey, NavState, PointerTarget, ProviderError, SearchResult, Snapshot,
    Typeahead, TypeaheadConfig,
};
