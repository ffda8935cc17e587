//! Media type tags: the leading discriminant of a decoded file id.
//!
//! The tag selects both the binary layout of the rest of the record
//! (see `file_id`) and the category label / default extension used
//! when a filename has to be synthesized (see `target`).

/// Media type discriminant of a file id.
///
/// The numeric values are wire values; anything outside this set is an
/// invalid file id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MediaType {
    Thumbnail = 0,
    ChatPhoto = 1,
    Photo = 2,
    Voice = 3,
    Video = 4,
    Document = 5,
    Sticker = 8,
    Audio = 9,
    Animation = 10,
    VideoNote = 13,
    StickerThumbnail = 14,
}

impl MediaType {
    /// Maps a wire tag to a media type; `None` for unrecognized tags.
    pub fn from_tag(tag: i32) -> Option<Self> {
        Some(match tag {
            0 => MediaType::Thumbnail,
            1 => MediaType::ChatPhoto,
            2 => MediaType::Photo,
            3 => MediaType::Voice,
            4 => MediaType::Video,
            5 => MediaType::Document,
            8 => MediaType::Sticker,
            9 => MediaType::Audio,
            10 => MediaType::Animation,
            13 => MediaType::VideoNote,
            14 => MediaType::StickerThumbnail,
            _ => return None,
        })
    }

    /// Wire tag for this media type.
    pub fn tag(self) -> i32 {
        self as i32
    }

    /// True for the photo-shaped tag group; photos always save as
    /// `.jpg` without consulting the MIME type.
    pub fn is_photo(self) -> bool {
        matches!(
            self,
            MediaType::Thumbnail
                | MediaType::ChatPhoto
                | MediaType::Photo
                | MediaType::StickerThumbnail
        )
    }

    /// Category label used as the synthesized filename prefix.
    pub fn category(self) -> &'static str {
        match self {
            MediaType::Thumbnail
            | MediaType::ChatPhoto
            | MediaType::Photo
            | MediaType::StickerThumbnail => "photo",
            MediaType::Voice | MediaType::Audio => "audio",
            MediaType::Video | MediaType::Animation | MediaType::VideoNote => "video",
            MediaType::Document => "document",
            MediaType::Sticker => "sticker",
        }
    }

    /// Extension used when the MIME type yields no guess.
    pub fn default_extension(self) -> &'static str {
        match self {
            MediaType::Thumbnail
            | MediaType::ChatPhoto
            | MediaType::Photo
            | MediaType::StickerThumbnail => ".jpg",
            MediaType::Voice => ".ogg",
            MediaType::Video | MediaType::Animation | MediaType::VideoNote => ".mp4",
            MediaType::Document => ".zip",
            MediaType::Sticker => ".webp",
            MediaType::Audio => ".mp3",
        }
    }
}
