//! The public download surface: decode, resolve, dispatch.

use std::path::PathBuf;

use chrono::Utc;

use crate::config::DownloadConfig;
use crate::dispatch::{self, ProgressFn, TransferQueue};
use crate::error::DownloadError;
use crate::file_id;
use crate::media::FileReference;
use crate::target;

/// Per-call options for [`Downloader::download_media`].
#[derive(Clone)]
pub struct DownloadOptions {
    /// Destination path. A trailing separator means "directory only";
    /// relative paths resolve against the configured download dir.
    pub file_name: Option<PathBuf>,
    /// Wait for the transfer to finish (default). When false the call
    /// returns `None` immediately and the outcome is observed through
    /// the progress callback.
    pub block: bool,
    /// Progress callback invoked by the worker with
    /// `(bytes_transferred, total_bytes)`.
    pub progress: Option<ProgressFn>,
}

impl Default for DownloadOptions {
    /// Blocking, no explicit destination, no progress callback.
    fn default() -> Self {
        Self {
            file_name: None,
            block: true,
            progress: None,
        }
    }
}

impl DownloadOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Front end over the transfer queue: turns media references into
/// dispatched transfer requests.
#[derive(Debug, Clone)]
pub struct Downloader {
    config: DownloadConfig,
    queue: TransferQueue,
}

impl Downloader {
    pub fn new(config: DownloadConfig, queue: TransferQueue) -> Self {
        Self { config, queue }
    }

    /// Downloads the media behind `reference`.
    ///
    /// Returns the final path the worker resolved, or `None` when the
    /// call is non-blocking or the transfer was aborted. Fails with
    /// [`DownloadError::NoDownloadableMedia`] for a message carrying
    /// no media and [`DownloadError::InvalidFileId`] for an
    /// undecodable id; both are raised before anything is enqueued,
    /// and nothing fails after the point of dispatch.
    pub async fn download_media(
        &self,
        reference: impl Into<FileReference>,
        options: DownloadOptions,
    ) -> Result<Option<PathBuf>, DownloadError> {
        let reference = reference.into();
        let (file_id, media) = match &reference {
            FileReference::Message(message) => {
                let media = message
                    .first_media()
                    .ok_or(DownloadError::NoDownloadableMedia)?;
                (media.file_id.as_str(), Some(media))
            }
            FileReference::Media(media) => (media.file_id.as_str(), Some(media)),
            FileReference::FileId(id) => (id.as_str(), None),
        };

        let mut data = file_id::decode(file_id)?;
        if let Some(media) = media {
            data.merge_meta(media);
        }

        let target = target::resolve_target(
            &data,
            options.file_name.as_deref(),
            &self.config.download_dir,
            Utc::now(),
            rand::random::<u64>(),
        );

        tracing::info!(
            media_type = ?data.media_type,
            dc_id = data.location.dc_id(),
            file_name = %target.file_name,
            "downloading media"
        );

        Ok(dispatch::dispatch(&self.queue, data, target, options.progress, options.block).await)
    }
}
