//! Background worker task that owns a Typeahead and drives it.

use crate::handle::TypeaheadHandle;
use crate::provider::SearchProvider;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinSet};
use tokio::time::{self, Instant};
use tracing::{debug, error};
use typeahead_core::types::Timing;
use typeahead_core::{
    NavKey, PointerTarget, ProviderError, SearchResult, Sequence, Snapshot, Typeahead,
    TypeaheadConfig,
};

/// UI events forwarded to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// The input text changed.
    Input(String),
    Key(NavKey),
    Focus,
    Blur,
    PointerDown(PointerTarget),
    /// A dropdown row was clicked.
    Select(usize),
    /// The clear button was pressed.
    Clear,
    Shutdown,
}

/// Invoked once per committed selection, after the widget has reset.
pub type OnSelect = Box<dyn FnMut(SearchResult) + Send>;

type Lookup = (Sequence, Result<Vec<SearchResult>, ProviderError>);

/// Starts the worker task on the current tokio runtime.
///
/// The worker owns the Typeahead and every lookup it spawns. It stops on
/// [`Request::Shutdown`] or when the returned handle is dropped.
pub fn start<P>(provider: P, config: TypeaheadConfig, on_select: OnSelect) -> TypeaheadHandle
where
    P: SearchProvider + 'static,
{
    let (request_tx, request_rx) = mpsc::unbounded_channel::<Request>();

    let typeahead = Typeahead::new(config);
    let (snapshot_tx, snapshot_rx) = watch::channel(typeahead.snapshot());

    let worker = Worker {
        timing: Timing::from(typeahead.config()),
        abort_superseded: typeahead.config().abort_superseded,
        typeahead,
        provider: Arc::new(provider),
        lookups: JoinSet::new(),
        snapshots: snapshot_tx,
        on_select,
    };
    let task = tokio::spawn(worker.run(request_rx));

    TypeaheadHandle::new(request_tx, snapshot_rx, task)
}

struct Worker<P> {
    typeahead: Typeahead,
    provider: Arc<P>,
    timing: Timing,
    abort_superseded: bool,
    lookups: JoinSet<Lookup>,
    snapshots: watch::Sender<Snapshot>,
    on_select: OnSelect,
}

impl<P> Worker<P>
where
    P: SearchProvider + 'static,
{
    async fn run(mut self, mut requests: mpsc::UnboundedReceiver<Request>) {
        debug!("typeahead worker started");

        loop {
            let deadline = self.typeahead.next_deadline().map(Instant::from_std);

            let selection = tokio::select! {
                request = requests.recv() => match request {
                    None | Some(Request::Shutdown) => break,
                    Some(Request::Input(text)) => {
                        self.typeahead.input(text, now());
                        None
                    }
                    Some(Request::Key(key)) => self.typeahead.key(key),
                    Some(Request::Focus) => {
                        self.typeahead.focus();
                        None
                    }
                    Some(Request::Blur) => {
                        self.typeahead.blur();
                        None
                    }
                    Some(Request::PointerDown(target)) => {
                        self.typeahead.pointer_down(target);
                        None
                    }
                    Some(Request::Select(index)) => self.typeahead.select(index),
                    Some(Request::Clear) => {
                        self.typeahead.clear();
                        None
                    }
                },
                Some(joined) = self.lookups.join_next(), if !self.lookups.is_empty() => {
                    self.finish_lookup(joined);
                    None
                }
                () = wait_until(deadline) => {
                    self.fire_timer();
                    None
                }
            };

            self.publish();
            if let Some(selection) = selection {
                (self.on_select)(selection.into_result());
            }
        }

        self.typeahead.teardown();
        self.lookups.abort_all();
        self.publish();
        debug!("typeahead worker stopped");
    }

    fn fire_timer(&mut self) {
        let Some(query) = self.typeahead.fire_timer(now()) else {
            return;
        };

        if self.abort_superseded && !self.lookups.is_empty() {
            debug!(count = self.lookups.len(), "aborting superseded lookups");
            self.lookups.abort_all();
        }

        let provider = Arc::clone(&self.provider);
        let timeout = self.timing.request_timeout;
        let (text, sequence) = query.into_parts();

        self.lookups.spawn(async move {
            let response = match time::timeout(timeout, provider.search(&text)).await {
                Ok(response) => response,
                Err(_) => Err(ProviderError::Timeout(timeout)),
            };
            (sequence, response)
        });
    }

    fn finish_lookup(&mut self, joined: Result<Lookup, JoinError>) {
        match joined {
            Ok((sequence, response)) => {
                self.typeahead.apply_response(sequence, response);
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => error!(error = %err, "lookup task panicked"),
        }

        // Nothing left in flight can answer the current query.
        if self.lookups.is_empty() && self.typeahead.is_loading() {
            self.typeahead.abandon_pending();
        }
    }

    fn publish(&self) {
        let next = self.typeahead.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
}

fn now() -> std::time::Instant {
    Instant::now().into_std()
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
