//! Caller-facing media references: what a download can start from.

/// Metadata attached to a media object by whoever produced it.
///
/// Only `file_id` is required; everything else is best-effort and is
/// merged onto the decoded descriptor without overwriting decoded
/// state (see [`FileData::merge_meta`](crate::file_id::FileData::merge_meta)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaMeta {
    pub file_id: String,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
    /// Unix timestamp (seconds) the media was sent.
    pub date: Option<i64>,
}

impl MediaMeta {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            ..Self::default()
        }
    }
}

/// A message-shaped container carrying at most one media payload per
/// kind. Which kinds exist, and the order they are scanned in, is
/// fixed by the ecosystem's message model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub audio: Option<MediaMeta>,
    pub document: Option<MediaMeta>,
    pub photo: Option<MediaMeta>,
    pub sticker: Option<MediaMeta>,
    pub animation: Option<MediaMeta>,
    pub video: Option<MediaMeta>,
    pub voice: Option<MediaMeta>,
    pub video_note: Option<MediaMeta>,
}

impl Message {
    /// First media payload present, scanning kinds in the fixed order
    /// audio, document, photo, sticker, animation, video, voice,
    /// video note. `None` means the message has nothing downloadable.
    pub fn first_media(&self) -> Option<&MediaMeta> {
        [
            &self.audio,
            &self.document,
            &self.photo,
            &self.sticker,
            &self.animation,
            &self.video,
            &self.voice,
            &self.video_note,
        ]
        .into_iter()
        .find_map(Option::as_ref)
    }
}

/// Input union accepted by
/// [`download_media`](crate::downloader::Downloader::download_media):
/// a whole message, a single media object, or a bare file id string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReference {
    Message(Message),
    Media(MediaMeta),
    FileId(String),
}

impl From<Message> for FileReference {
    fn from(m: Message) -> Self {
        FileReference::Message(m)
    }
}

impl From<MediaMeta> for FileReference {
    fn from(m: MediaMeta) -> Self {
        FileReference::Media(m)
    }
}

impl From<String> for FileReference {
    fn from(s: String) -> Self {
        FileReference::FileId(s)
    }
}

impl From<&str> for FileReference {
    fn from(s: &str) -> Self {
        FileReference::FileId(s.to_owned())
    }
}
