//! Archive download with streaming progress
//!
//! Tarballs are streamed into `<file>.part` and renamed into place only once
//! the stream completes, so an interrupted download can never satisfy the
//! skip-on-exists check on a later run.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::Client;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::filename_from_url;
use crate::ui::Reporter;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a fetch completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Streamed this many bytes to a new archive file.
    Downloaded(u64),
    /// Destination already existed; no network call was made.
    Cached,
}

/// Flat archive filename for a package version.
///
/// Path separators in scoped names are replaced so every archive lands as a
/// single file in one directory; the extension comes from the tarball URL.
pub fn archive_filename(name: &str, version: &str, url: &str) -> String {
    let flat = name.replace('/', "_");
    let ext = filename_from_url(url)
        .rsplit_once('.')
        .map_or("tgz", |(_, ext)| ext);
    format!("{flat}-{version}.{ext}")
}

/// Destination path for a package version inside the storage directory.
pub fn archive_path(dir: &Path, name: &str, version: &str, url: &str) -> PathBuf {
    dir.join(archive_filename(name, version, url))
}

/// Stream `url` into the storage directory.
///
/// Returns [`Outcome::Cached`] without touching the network when the
/// destination file already exists. Progress is reported per chunk; a
/// response without `Content-Length` reports raw bytes loaded instead of a
/// percentage. On a stream or write error the partial file is removed.
pub async fn fetch_archive(
    client: &Client,
    name: &str,
    version: &str,
    url: &str,
    dest_dir: &Path,
    reporter: &dyn Reporter,
) -> Result<Outcome, DownloadError> {
    let dest = archive_path(dest_dir, name, version, url);
    if dest.exists() {
        return Ok(Outcome::Cached);
    }

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()
        .await?
        .error_for_status()?;

    let total = response.content_length();
    reporter.downloading(name, version, 0, total);

    let part = dest.with_extension("part");
    let result = stream_to(response, &part, name, version, total, reporter).await;

    match result {
        Ok(downloaded) => {
            tokio::fs::rename(&part, &dest).await?;
            Ok(Outcome::Downloaded(downloaded))
        }
        Err(e) => {
            tokio::fs::remove_file(&part).await.ok();
            Err(e)
        }
    }
}

async fn stream_to(
    response: reqwest::Response,
    part: &Path,
    name: &str,
    version: &str,
    total: Option<u64>,
    reporter: &dyn Reporter,
) -> Result<u64, DownloadError> {
    let mut file = File::create(part).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
        reporter.downloading(name, version, downloaded, total);
    }

    file.flush().await?;
    Ok(downloaded)
}
