pub mod config;
pub mod logging;

pub mod dispatch;
pub mod downloader;
pub mod error;
pub mod file_id;
pub mod media;
pub mod media_type;
pub mod target;
