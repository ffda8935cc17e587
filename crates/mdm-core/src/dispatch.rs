//! Transfer dispatch: hands resolved descriptors to the external
//! worker pool.
//!
//! The worker pool is a collaborator, not part of this crate: it owns
//! the receiving end of the queue, performs the byte transfer, invokes
//! the progress callback, and resolves each request's completion
//! channel exactly once. This module only builds requests, submits
//! them without waiting, and (for blocking callers) awaits the result.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::file_id::FileData;
use crate::target::DownloadTarget;

/// Progress callback: `(bytes_transferred, total_bytes)`. Extra
/// caller state is captured in the closure.
pub type ProgressFn = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// One unit of work for the external worker pool.
///
/// `done` is both the result slot and the completion signal: resolving
/// it delivers the final path (or `None` for an aborted transfer) and
/// wakes the blocked caller in one step, so a woken waiter always sees
/// a settled result.
pub struct TransferRequest {
    pub data: FileData,
    pub directory: PathBuf,
    pub file_name: String,
    pub progress: Option<ProgressFn>,
    done: oneshot::Sender<Option<PathBuf>>,
}

impl TransferRequest {
    /// Builds a request plus the receiver its outcome arrives on.
    /// Callers who want to observe the result out of band can hold the
    /// receiver themselves instead of going through [`dispatch`].
    pub fn new(
        data: FileData,
        target: DownloadTarget,
        progress: Option<ProgressFn>,
    ) -> (Self, oneshot::Receiver<Option<PathBuf>>) {
        let (done_tx, done_rx) = oneshot::channel();
        let request = Self {
            data,
            directory: target.directory,
            file_name: target.file_name,
            progress,
            done: done_tx,
        };
        (request, done_rx)
    }

    /// Invokes the progress callback, if the caller installed one.
    pub fn report_progress(&self, current: u64, total: u64) {
        if let Some(progress) = &self.progress {
            progress(current, total);
        }
    }

    /// Resolves the request with the final path, or `None` when the
    /// transfer was aborted. Consumes the request; a request can only
    /// be completed once. The send result is discarded because a
    /// fire-and-forget caller has already dropped the receiving end.
    pub fn complete(self, result: Option<PathBuf>) {
        let _ = self.done.send(result);
    }
}

impl std::fmt::Debug for TransferRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferRequest")
            .field("data", &self.data)
            .field("directory", &self.directory)
            .field("file_name", &self.file_name)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

/// Producer handle for the transfer queue. Unbounded, so submission
/// never waits; backpressure is the worker pool's concern.
#[derive(Debug, Clone)]
pub struct TransferQueue {
    tx: mpsc::UnboundedSender<TransferRequest>,
}

impl TransferQueue {
    /// Creates the queue, returning the producer handle and the
    /// receiver the worker pool consumes.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TransferRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Non-blocking enqueue. Returns false when the worker pool has
    /// dropped the receiver; the request (and its completion channel)
    /// is dropped with it.
    pub fn submit(&self, request: TransferRequest) -> bool {
        match self.tx.send(request) {
            Ok(()) => true,
            Err(_) => {
                tracing::warn!("transfer queue closed; dropping request");
                false
            }
        }
    }
}

/// Submits one transfer and optionally waits for its outcome.
///
/// Decoding and target resolution have already happened by this point,
/// so there is nothing left that can fail loudly: the only outcomes
/// are a resolved path or `None`. Non-blocking calls return `None`
/// immediately and the caller observes progress via the callback; a
/// closed or vanished worker pool also yields `None`.
pub async fn dispatch(
    queue: &TransferQueue,
    data: FileData,
    target: DownloadTarget,
    progress: Option<ProgressFn>,
    block: bool,
) -> Option<PathBuf> {
    let (request, done_rx) = TransferRequest::new(data, target, progress);

    tracing::debug!(
        directory = %request.directory.display(),
        file_name = %request.file_name,
        block,
        "dispatching transfer"
    );

    if !queue.submit(request) {
        return None;
    }

    if block {
        // The worker resolves the channel exactly once; an Err here
        // means it went away without completing, i.e. no result.
        done_rx.await.unwrap_or(None)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_id::FileLocation;
    use crate::media_type::MediaType;
    use std::time::Duration;

    fn data() -> FileData {
        FileData {
            media_type: MediaType::Document,
            location: FileLocation::Document {
                dc_id: 1,
                document_id: 2,
                access_hash: 3,
            },
            file_name: None,
            file_size: None,
            mime_type: None,
            date: None,
        }
    }

    fn target() -> DownloadTarget {
        DownloadTarget {
            directory: PathBuf::from("downloads"),
            file_name: "doc.zip".to_owned(),
        }
    }

    #[tokio::test]
    async fn blocking_dispatch_returns_worker_path() {
        let (queue, mut rx) = TransferQueue::channel();
        tokio::spawn(async move {
            let req = rx.recv().await.unwrap();
            let path = req.directory.join(&req.file_name);
            req.complete(Some(path));
        });

        let result = dispatch(&queue, data(), target(), None, true).await;
        assert_eq!(result, Some(PathBuf::from("downloads/doc.zip")));
    }

    #[tokio::test]
    async fn aborted_transfer_yields_none_not_error() {
        let (queue, mut rx) = TransferQueue::channel();
        tokio::spawn(async move {
            let req = rx.recv().await.unwrap();
            req.complete(None);
        });

        let result = dispatch(&queue, data(), target(), None, true).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn vanished_worker_yields_none() {
        let (queue, rx) = TransferQueue::channel();
        drop(rx);
        let result = dispatch(&queue, data(), target(), None, true).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn non_blocking_dispatch_returns_immediately() {
        let (queue, mut rx) = TransferQueue::channel();
        // Worker that never completes the request.
        tokio::spawn(async move {
            let _req = rx.recv().await.unwrap();
            std::future::pending::<()>().await;
        });

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            dispatch(&queue, data(), target(), None, false),
        )
        .await
        .expect("non-blocking dispatch must not wait on the worker");
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn progress_is_forwarded() {
        let (queue, mut rx) = TransferQueue::channel();
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();
        let progress: ProgressFn = Arc::new(move |current, total| {
            let _ = seen_tx.send((current, total));
        });

        tokio::spawn(async move {
            let req = rx.recv().await.unwrap();
            req.report_progress(50, 100);
            req.report_progress(100, 100);
            let path = req.directory.join(&req.file_name);
            req.complete(Some(path));
        });

        let result = dispatch(&queue, data(), target(), Some(progress), true).await;
        assert!(result.is_some());
        assert_eq!(seen_rx.recv().await, Some((50, 100)));
        assert_eq!(seen_rx.recv().await, Some((100, 100)));
    }
}
