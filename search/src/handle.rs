use crate::error::HostError;
use crate::worker::Request;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use typeahead_core::{NavKey, PointerTarget, Snapshot};

/// Owner-side end of a running typeahead worker.
///
/// Dropping the handle aborts the worker, releasing its timer and any
/// lookups in flight.
pub struct TypeaheadHandle {
    requests: mpsc::UnboundedSender<Request>,
    snapshots: watch::Receiver<Snapshot>,
    task: Option<JoinHandle<()>>,
}

impl TypeaheadHandle {
    pub(crate) fn new(
        requests: mpsc::UnboundedSender<Request>,
        snapshots: watch::Receiver<Snapshot>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            requests,
            snapshots,
            task: Some(task),
        }
    }

    pub fn send(&self, request: Request) -> Result<(), HostError> {
        self.requests.send(request).map_err(|_| HostError::Closed)
    }

    /// Stops the worker and waits for it to finish.
    pub async fn shutdown(mut self) -> Result<(), HostError> {
        let _ = self.requests.send(Request::Shutdown);
        match self.task.take() {
            Some(task) => task.await.map_err(|err| HostError::Worker(err.to_string())),
            None => Ok(()),
        }
    }
}

/// Event operations.
impl TypeaheadHandle {
    pub fn input(&self, text: impl Into<String>) -> Result<(), HostError> {
        self.send(Request::Input(text.into()))
    }

    pub fn key(&self, key: NavKey) -> Result<(), HostError> {
        self.send(Request::Key(key))
    }

    pub fn focus(&self) -> Result<(), HostError> {
        self.send(Request::Focus)
    }

    pub fn blur(&self) -> Result<(), HostError> {
        self.send(Request::Blur)
    }

    pub fn pointer_down(&self, target: PointerTarget) -> Result<(), HostError> {
        self.send(Request::PointerDown(target))
    }

    pub fn select(&self, index: usize) -> Result<(), HostError> {
        self.send(Request::Select(index))
    }

    pub fn clear(&self) -> Result<(), HostError> {
        self.send(Request::Clear)
    }
}

/// Snapshot operations.
impl TypeaheadHandle {
    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Waits until the worker publishes a snapshot that differs from the last
    /// one seen through this handle.
    pub async fn changed(&mut self) -> Result<Snapshot, HostError> {
        self.snapshots
            .changed()
            .await
            .map_err(|_| HostError::Closed)?;
        Ok(self.snapshots.borrow_and_update().clone())
    }
}

impl Drop for TypeaheadHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
