//! The typeahead widget: debounce gate, request sequencer, result set,
//! navigation, dismissal and selection combined into one state machine.
//!
//! Every method processes one event to completion. Methods that depend on
//! time take `now`; the host decides what clock that is.

pub mod gate;
pub mod navigation;
pub mod results;
pub mod sequencer;
mod view;

use crate::error::ProviderError;
use crate::types::{Query, SearchResult, Sequence, Timing, TypeaheadConfig};
use gate::TimerGate;
use navigation::Dropdown;
use results::ResultSet;
use sequencer::RequestSequencer;
use std::time::Instant;
use tracing::{debug, info, warn};

pub use navigation::{NavKey, NavState, UnsupportedKey};
pub use view::{DropdownView, Snapshot};

/// Where a pointer-down landed, as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Input,
    Dropdown,
    Outside,
}

/// What happened to a provider response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Current response; the result set now holds this many items.
    Applied(usize),
    /// Current response was a failure; the result set is now empty.
    Failed,
    /// Not the current sequence; discarded.
    Stale,
}

/// A committed choice. The host passes `result` to its `on_select` callback.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub result: SearchResult,
}

impl Selection {
    pub fn into_result(self) -> SearchResult {
        self.result
    }
}

pub struct Typeahead {
    config: TypeaheadConfig,
    text: String,
    focused: bool,
    gate: TimerGate,
    sequencer: RequestSequencer,
    results: ResultSet,
    dropdown: Dropdown,
}

impl Typeahead {
    /// Invalid config values are replaced with their defaults.
    pub fn new(config: TypeaheadConfig) -> Self {
        let config = config.with_defaults_for_invalid();
        let timing = Timing::from(&config);

        Self {
            text: config.initial_text.clone(),
            focused: false,
            gate: TimerGate::new(timing.debounce),
            sequencer: RequestSequencer::new(),
            results: ResultSet::default(),
            dropdown: Dropdown::default(),
            config,
        }
    }

    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }
}

/// Read operations.
impl Typeahead {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn is_loading(&self) -> bool {
        self.results.is_loading()
    }

    pub fn items(&self) -> &[SearchResult] {
        self.results.items()
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.dropdown.highlighted()
    }

    pub fn highlighted_result(&self) -> Option<&SearchResult> {
        self.results.get(self.dropdown.highlighted()?)
    }

    pub fn state(&self) -> NavState {
        self.dropdown.state(self.results.len())
    }

    /// Sequence whose response would currently be accepted.
    pub fn current_sequence(&self) -> Option<Sequence> {
        self.sequencer.current()
    }

    /// When the armed debounce timer is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.gate.deadline()
    }

    pub fn snapshot(&self) -> Snapshot {
        let loading = self.results.is_loading();
        Snapshot {
            text: self.text.clone(),
            placeholder: self.config.placeholder.clone(),
            state: self.state(),
            loading,
            show_clear: !self.text.is_empty() && !loading,
            dropdown: DropdownView::of(&self.dropdown, &self.results, &self.text),
        }
    }
}

/// Input operations.
impl Typeahead {
    /// Records new input text and restarts the debounce timer.
    ///
    /// Typing implies focus. Empty text resets the pipeline right away.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.focused = true;
        if text == self.text {
            return;
        }

        self.text = text;
        self.dropdown.reset_highlight();

        if self.text.is_empty() {
            self.reset();
            return;
        }
        self.gate.arm(self.text.clone(), now);
    }

    /// Fires the debounce timer if it is due.
    ///
    /// Returns the query the host must send to the provider. Text shorter
    /// than the minimum length resets the pipeline instead.
    pub fn fire_timer(&mut self, now: Instant) -> Option<Query> {
        let text = self.gate.fire(now)?;

        if text.chars().count() < self.config.minimum_query_length {
            debug!(
                len = text.chars().count(),
                min = self.config.minimum_query_length,
                "query below minimum length; not dispatching"
            );
            self.reset();
            return None;
        }

        Some(self.dispatch(text))
    }

    fn dispatch(&mut self, text: String) -> Query {
        let query = self.sequencer.issue(text);
        self.results.begin(query.sequence());
        self.dropdown.reset_highlight();
        if self.focused {
            self.dropdown.open();
        }
        debug!(sequence = %query.sequence(), text = query.text(), "dispatching query");
        query
    }
}

/// Response operations.
impl Typeahead {
    /// Applies a provider response if `sequence` is still current.
    ///
    /// Failures are logged and degrade to an empty result set.
    pub fn apply_response(
        &mut self,
        sequence: Sequence,
        response: Result<Vec<SearchResult>, ProviderError>,
    ) -> ResponseOutcome {
        if !self.sequencer.is_current(sequence) {
            debug!(%sequence, current = ?self.sequencer.current(), "discarding stale response");
            return ResponseOutcome::Stale;
        }

        self.dropdown.reset_highlight();
        match response {
            Ok(mut items) => {
                items.truncate(self.config.max_results);
                let count = items.len();
                self.results.apply(sequence, items);
                debug!(%sequence, count, "applied response");
                ResponseOutcome::Applied(count)
            }
            Err(err) => {
                warn!(%sequence, error = %err, "search provider failed");
                self.results.fail(sequence);
                ResponseOutcome::Failed
            }
        }
    }
}

/// Navigation operations.
impl Typeahead {
    /// Handles a navigation key. Keys are ignored while the dropdown is closed.
    pub fn key(&mut self, key: NavKey) -> Option<Selection> {
        if !self.dropdown.is_open() {
            return None;
        }

        match key {
            NavKey::Cancel => self.cancel(),
            _ if !self.rows_match_text() => {
                debug!(?key, "rows are out of date; key ignored");
            }
            NavKey::Down => self.dropdown.move_down(self.results.len()),
            NavKey::Up => self.dropdown.move_up(),
            NavKey::Commit => return self.commit(),
        }
        None
    }

    /// Rows answer the current text: no keystroke is waiting on the timer and
    /// no newer query is loading.
    fn rows_match_text(&self) -> bool {
        !self.gate.is_armed() && self.results.is_settled()
    }
}

/// Dismissal operations.
impl Typeahead {
    /// Closes the dropdown without selecting. The input text is untouched.
    pub fn dismiss(&mut self) {
        self.dropdown.close();
    }

    /// Focus left the widget. A pending debounce still fires, but its
    /// results stay hidden until the input is focused again.
    pub fn blur(&mut self) {
        self.focused = false;
        self.dismiss();
    }

    /// Reopens the dropdown over the last known results, without a new query.
    ///
    /// Nothing opens if no query has been dispatched for the current text.
    pub fn focus(&mut self) {
        self.focused = true;
        if !self.text.is_empty() && self.results.sequence().is_some() {
            self.dropdown.open();
        }
    }

    pub fn pointer_down(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.blur();
        }
    }

    /// Escape: closes without selecting. A pending search still runs and
    /// reopens the dropdown when it is dispatched.
    pub fn cancel(&mut self) {
        self.dismiss();
    }

    /// Empties the input and resets the pipeline (the clear button).
    pub fn clear(&mut self) {
        self.text.clear();
        self.reset();
    }

    /// Ends a load whose response can no longer arrive.
    ///
    /// Used by hosts when a lookup task died without reporting back.
    pub fn abandon_pending(&mut self) {
        if let Some(sequence) = self.sequencer.current()
            && self.results.is_loading()
        {
            self.apply_response(sequence, Err(ProviderError::Cancelled));
        }
    }

    /// Releases the timer and stops accepting responses.
    pub fn teardown(&mut self) {
        self.gate.disarm();
        self.sequencer.retire();
        self.results.abandon();
        self.dropdown.close();
    }

    fn reset(&mut self) {
        self.gate.disarm();
        self.sequencer.retire();
        self.results.clear();
        self.dropdown.close();
    }
}

/// Selection operations.
impl Typeahead {
    /// Commits the highlighted row. A no-op without a highlight.
    pub fn commit(&mut self) -> Option<Selection> {
        let index = self.dropdown.highlighted()?;
        self.emit(index)
    }

    /// Commits the row at `index` (a pointer click). A no-op while closed or
    /// out of range.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        if !self.dropdown.is_open() {
            return None;
        }
        self.emit(index)
    }

    fn emit(&mut self, index: usize) -> Option<Selection> {
        if !self.rows_match_text() {
            debug!(index, "rows are out of date; selection ignored");
            return None;
        }
        let result = self.results.get(index)?.clone();

        self.text = result.label();
        self.dropdown.close();
        self.results.clear();
        self.gate.disarm();
        self.sequencer.retire();

        info!(identifier = %result.identifier, "selection committed");
        Some(Selection { result })
    }
}
