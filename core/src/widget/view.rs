//! Render-facing view of the widget.

use super::navigation::{Dropdown, NavState};
use super::results::ResultSet;
use crate::types::SearchResult;

/// What the dropdown area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownView {
    Hidden,
    /// Open, waiting for the first response of this query.
    Loading,
    /// Open, the provider found nothing for `query`.
    NoMatches { query: String },
    Results {
        items: Vec<SearchResult>,
        highlighted: Option<usize>,
    },
}

impl DropdownView {
    pub(crate) fn of(dropdown: &Dropdown, results: &ResultSet, text: &str) -> Self {
        if !dropdown.is_open() {
            return DropdownView::Hidden;
        }
        if !results.is_empty() {
            return DropdownView::Results {
                items: results.items().to_vec(),
                highlighted: dropdown.highlighted(),
            };
        }
        if results.is_loading() {
            DropdownView::Loading
        } else {
            DropdownView::NoMatches {
                query: text.to_string(),
            }
        }
    }
}

/// Everything a renderer needs, captured after an event was processed.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub text: String,
    pub placeholder: String,
    pub state: NavState,
    pub loading: bool,
    /// The clear button shows when there is text and nothing is loading.
    pub show_clear: bool,
    pub dropdown: DropdownView,
}
