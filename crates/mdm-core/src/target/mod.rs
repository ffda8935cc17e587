//! Destination resolution and filename synthesis.
//!
//! Pure string/path computation: splits the caller's destination into
//! directory and file name, resolves relative directories against the
//! configured download root, and synthesizes a
//! `<category>_<timestamp>_<suffix><ext>` name when neither the caller
//! nor the media metadata supplies one. Never touches the filesystem.

mod mime;

pub use mime::extension_for_mime;

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::file_id::FileData;

/// Resolved destination for one transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub directory: PathBuf,
    pub file_name: String,
}

/// Resolves the caller's destination (if any) against the download
/// root and the descriptor's metadata.
///
/// A `caller_path` with a trailing separator is a bare directory. The
/// file name falls back to the descriptor's known name, then to
/// synthesis from `now` and `suffix`; both are passed in so resolution
/// stays deterministic under test.
pub fn resolve_target(
    data: &FileData,
    caller_path: Option<&Path>,
    download_dir: &Path,
    now: DateTime<Utc>,
    suffix: u64,
) -> DownloadTarget {
    let (directory, mut file_name) = split_caller_path(caller_path);

    if file_name.is_empty() {
        file_name = data.file_name.clone().unwrap_or_default();
    }

    let directory = if directory.is_absolute() {
        directory
    } else {
        download_dir.join(directory)
    };

    if file_name.is_empty() {
        file_name = synthesize_file_name(data, now, suffix);
    }

    DownloadTarget {
        directory,
        file_name,
    }
}

/// Splits a caller-supplied destination into directory and file name.
/// Trailing-separator paths carry no file name.
fn split_caller_path(path: Option<&Path>) -> (PathBuf, String) {
    let Some(path) = path else {
        return (PathBuf::new(), String::new());
    };
    if path.to_string_lossy().ends_with(std::path::MAIN_SEPARATOR) {
        return (path.to_path_buf(), String::new());
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
    (directory, file_name)
}

/// Builds `<category>_<%Y-%m-%d_%H-%M-%S>_<suffix><ext>`.
///
/// Extension priority: photo-group tags are always `.jpg`; otherwise a
/// MIME-based guess, then the tag group's default. The timestamp is
/// the media's send date when known, else `now`, formatted in UTC.
fn synthesize_file_name(data: &FileData, now: DateTime<Utc>, suffix: u64) -> String {
    let extension = if data.media_type.is_photo() {
        ".jpg"
    } else {
        data.mime_type
            .as_deref()
            .and_then(extension_for_mime)
            .unwrap_or_else(|| data.media_type.default_extension())
    };

    let stamp = data
        .date
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or(now);

    format!(
        "{}_{}_{}{}",
        data.media_type.category(),
        stamp.format("%Y-%m-%d_%H-%M-%S"),
        suffix,
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_id::FileLocation;
    use crate::media_type::MediaType;

    fn voice_data() -> FileData {
        FileData {
            media_type: MediaType::Voice,
            location: FileLocation::Document {
                dc_id: 2,
                document_id: 1,
                access_hash: 1,
            },
            file_name: None,
            file_size: None,
            mime_type: None,
            date: Some(1_577_882_096), // 2020-01-01 12:34:56 UTC
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_600_000_000, 0).unwrap()
    }

    #[test]
    fn caller_file_name_wins() {
        let mut data = voice_data();
        data.file_name = Some("from_meta.ogg".to_owned());
        let target = resolve_target(
            &data,
            Some(Path::new("talk.ogg")),
            Path::new("downloads"),
            fixed_now(),
            1,
        );
        assert_eq!(target.directory, PathBuf::from("downloads"));
        assert_eq!(target.file_name, "talk.ogg");
    }

    #[test]
    fn metadata_file_name_used_when_caller_gives_directory() {
        let mut data = voice_data();
        data.file_name = Some("from_meta.ogg".to_owned());
        let target = resolve_target(
            &data,
            Some(Path::new("voice/")),
            Path::new("downloads"),
            fixed_now(),
            1,
        );
        assert_eq!(target.directory, PathBuf::from("downloads/voice/"));
        assert_eq!(target.file_name, "from_meta.ogg");
    }

    #[test]
    fn absolute_directory_kept_verbatim() {
        let data = voice_data();
        let target = resolve_target(
            &data,
            Some(Path::new("/tmp/out/x.bin")),
            Path::new("downloads"),
            fixed_now(),
            1,
        );
        assert_eq!(target.directory, PathBuf::from("/tmp/out"));
        assert_eq!(target.file_name, "x.bin");
    }

    #[test]
    fn no_caller_path_resolves_to_download_root() {
        let data = voice_data();
        let target = resolve_target(&data, None, Path::new("downloads"), fixed_now(), 7);
        assert_eq!(target.directory, PathBuf::from("downloads"));
        assert_eq!(target.file_name, "audio_2020-01-01_12-34-56_7.ogg");
    }

    #[test]
    fn synthesis_prefers_mime_guess() {
        let mut data = voice_data();
        data.mime_type = Some("audio/mpeg".to_owned());
        let target = resolve_target(&data, None, Path::new("downloads"), fixed_now(), 7);
        assert_eq!(target.file_name, "audio_2020-01-01_12-34-56_7.mp3");
    }

    #[test]
    fn synthesis_falls_back_to_group_default_on_unknown_mime() {
        let mut data = voice_data();
        data.mime_type = Some("application/x-unheard-of".to_owned());
        let target = resolve_target(&data, None, Path::new("downloads"), fixed_now(), 7);
        assert_eq!(target.file_name, "audio_2020-01-01_12-34-56_7.ogg");
    }

    #[test]
    fn photo_group_ignores_mime() {
        let mut data = voice_data();
        data.media_type = MediaType::Photo;
        data.mime_type = Some("image/png".to_owned());
        let target = resolve_target(&data, None, Path::new("downloads"), fixed_now(), 7);
        assert_eq!(target.file_name, "photo_2020-01-01_12-34-56_7.jpg");
    }

    #[test]
    fn unknown_date_uses_now() {
        let mut data = voice_data();
        data.date = None;
        let target = resolve_target(&data, None, Path::new("downloads"), fixed_now(), 7);
        assert_eq!(target.file_name, "audio_2020-09-13_12-26-40_7.ogg");
    }

    #[test]
    fn distinct_suffixes_never_collide() {
        let data = voice_data();
        let a = resolve_target(&data, None, Path::new("downloads"), fixed_now(), 1);
        let b = resolve_target(&data, None, Path::new("downloads"), fixed_now(), 2);
        assert_ne!(a.file_name, b.file_name);
    }
}
