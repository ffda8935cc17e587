//! Error taxonomy for the download surface.
//!
//! Decode and assembly failures are raised synchronously, before any
//! queue interaction. Transfer-time failures are the worker pool's
//! concern and never appear here; an aborted transfer is observed as
//! `None` from the dispatcher, not as an error.

use thiserror::Error;

/// The file id could not be decoded.
///
/// Deliberately carries no detail: a bad text encoding, a record whose
/// length does not match its discriminant, and an unknown discriminant
/// all collapse into this one condition, so callers cannot (and need
/// not) tell the stages apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid file id")]
pub struct InvalidFileId;

/// Error returned by [`Downloader::download_media`](crate::downloader::Downloader::download_media).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// The reference carries no recognized media payload.
    #[error("this reference doesn't contain any downloadable media")]
    NoDownloadableMedia,
    /// The file id failed to decode (either stage).
    #[error(transparent)]
    InvalidFileId(#[from] InvalidFileId),
}
