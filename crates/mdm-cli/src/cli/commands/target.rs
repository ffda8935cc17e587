//! Target command: show where a download would be saved.

use anyhow::{Context, Result};
use chrono::Utc;
use mdm_core::config::DownloadConfig;
use mdm_core::file_id;
use mdm_core::target;
use std::path::Path;

/// Decode the file id, resolve its destination, and print it.
pub async fn run_target(
    cfg: &DownloadConfig,
    file_id: &str,
    file_name: Option<&str>,
    mime: Option<String>,
    date: Option<i64>,
) -> Result<()> {
    let mut data = file_id::decode(file_id).context("decoding file id")?;
    data.mime_type = mime;
    data.date = date;

    let resolved = target::resolve_target(
        &data,
        file_name.map(Path::new),
        &cfg.download_dir,
        Utc::now(),
        rand::random::<u64>(),
    );

    println!("{}", resolved.directory.join(&resolved.file_name).display());
    Ok(())
}
