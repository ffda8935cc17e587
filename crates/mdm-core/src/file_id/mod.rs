//! File-id decoding and encoding.
//!
//! A file id is an opaque string: URL-safe base64 wrapping a fixed
//! little-endian record whose shape is selected by a leading 4-byte
//! media type tag. Decoding is strict: any alignment, length, or
//! alphabet problem collapses into the single [`InvalidFileId`]
//! condition, so callers cannot distinguish a malformed wrapper from
//! a malformed record.

mod codec;
mod record;

use crate::error::InvalidFileId;
use crate::media_type::MediaType;

use record::{RecordReader, RecordWriter};

/// Remote file location, decoded from a file id.
///
/// Exactly one variant matches a given media type tag; the tag fully
/// determines which fields exist and their byte layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLocation {
    /// Tag 1: a peer's profile or chat photo.
    PeerPhoto {
        dc_id: i32,
        peer_id: i64,
        volume_id: i64,
        local_id: i32,
        is_big: bool,
    },
    /// Tags 0, 2, 14: a photo or thumbnail with a size designator.
    PhotoThumb {
        dc_id: i32,
        document_id: i64,
        access_hash: i64,
        thumb_size: char,
    },
    /// Tags 3, 4, 5, 8, 9, 10, 13: a plain document.
    Document {
        dc_id: i32,
        document_id: i64,
        access_hash: i64,
    },
}

impl FileLocation {
    /// Data center the file lives on.
    pub fn dc_id(&self) -> i32 {
        match *self {
            FileLocation::PeerPhoto { dc_id, .. }
            | FileLocation::PhotoThumb { dc_id, .. }
            | FileLocation::Document { dc_id, .. } => dc_id,
        }
    }
}

/// Parsed form of a file id plus caller-side metadata.
///
/// The decoder fills `media_type` and `location` only; the optional
/// metadata fields stay `None` until [`FileData::merge_meta`] copies
/// them from the caller's media object. The decoder never overwrites
/// a caller-supplied value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    pub media_type: MediaType,
    pub location: FileLocation,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub mime_type: Option<String>,
    /// Unix timestamp (seconds) the media was sent, if known.
    pub date: Option<i64>,
}

impl FileData {
    fn new(media_type: MediaType, location: FileLocation) -> Self {
        Self {
            media_type,
            location,
            file_name: None,
            file_size: None,
            mime_type: None,
            date: None,
        }
    }

    /// Copies caller-side metadata onto the decoded descriptor. Empty
    /// file names count as absent.
    pub fn merge_meta(&mut self, meta: &crate::media::MediaMeta) {
        if self.file_name.is_none() {
            self.file_name = meta
                .file_name
                .as_deref()
                .filter(|n| !n.is_empty())
                .map(str::to_owned);
        }
        if self.file_size.is_none() {
            self.file_size = meta.file_size;
        }
        if self.mime_type.is_none() {
            self.mime_type = meta.mime_type.clone();
        }
        if self.date.is_none() {
            self.date = meta.date;
        }
    }
}

/// Decodes a file id string into its typed descriptor.
pub fn decode(file_id: &str) -> Result<FileData, InvalidFileId> {
    let raw = codec::decode_text(file_id)?;
    let mut r = RecordReader::new(&raw);

    let media_type = MediaType::from_tag(r.i32()?).ok_or(InvalidFileId)?;
    let location = match media_type {
        MediaType::ChatPhoto => FileLocation::PeerPhoto {
            dc_id: r.i32()?,
            peer_id: r.i64()?,
            volume_id: r.i64()?,
            local_id: r.i32()?,
            is_big: r.u8()? != 0,
        },
        MediaType::Thumbnail | MediaType::Photo | MediaType::StickerThumbnail => {
            FileLocation::PhotoThumb {
                dc_id: r.i32()?,
                document_id: r.i64()?,
                access_hash: r.i64()?,
                thumb_size: r.u8()? as char,
            }
        }
        _ => FileLocation::Document {
            dc_id: r.i32()?,
            document_id: r.i64()?,
            access_hash: r.i64()?,
        },
    };
    r.finish()?;

    Ok(FileData::new(media_type, location))
}

/// Encodes a descriptor back into a file id string.
///
/// Structural inverse of [`decode`]: the record is rebuilt with the
/// same field widths, so `decode(encode(d))` yields `d` (metadata
/// aside) and the byte length matches the original exactly. The
/// location variant must belong to the media type's tag group.
pub fn encode(data: &FileData) -> String {
    let mut w = RecordWriter::new();
    w.i32(data.media_type.tag());
    match data.location {
        FileLocation::PeerPhoto {
            dc_id,
            peer_id,
            volume_id,
            local_id,
            is_big,
        } => {
            w.i32(dc_id)
                .i64(peer_id)
                .i64(volume_id)
                .i32(local_id)
                .u8(is_big as u8);
        }
        FileLocation::PhotoThumb {
            dc_id,
            document_id,
            access_hash,
            thumb_size,
        } => {
            w.i32(dc_id)
                .i64(document_id)
                .i64(access_hash)
                .u8(thumb_size as u8);
        }
        FileLocation::Document {
            dc_id,
            document_id,
            access_hash,
        } => {
            w.i32(dc_id).i64(document_id).i64(access_hash);
        }
    }
    codec::encode_text(&w.into_bytes())
}
