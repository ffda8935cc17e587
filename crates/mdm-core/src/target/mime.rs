//! MIME type to filename extension mapping.
//!
//! Stand-in for the platform extension-guessing collaborator: a fixed
//! table over the media MIME types that actually show up on the wire.
//! Unknown types yield `None` and the caller falls back to the tag
//! group's default extension.

/// Extension (with leading dot) for a MIME type, if recognized.
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    // Parameters ("audio/ogg; codecs=opus") are ignored.
    let essence = mime.split(';').next().unwrap_or(mime).trim();
    Some(match essence {
        "audio/ogg" | "application/ogg" => ".ogg",
        "audio/mpeg" => ".mp3",
        "audio/mp4" => ".m4a",
        "audio/flac" | "audio/x-flac" => ".flac",
        "audio/wav" | "audio/x-wav" => ".wav",
        "video/mp4" => ".mp4",
        "video/quicktime" => ".mov",
        "video/webm" => ".webm",
        "video/x-matroska" => ".mkv",
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/webp" => ".webp",
        "image/gif" => ".gif",
        "application/zip" => ".zip",
        "application/pdf" => ".pdf",
        "application/x-tar" => ".tar",
        "application/gzip" => ".gz",
        "text/plain" => ".txt",
        _ => return None,
    })
}
