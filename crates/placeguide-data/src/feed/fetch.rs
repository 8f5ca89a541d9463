use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use super::Result;

/// Download the feed at `url` and move it into `dest`.
///
/// The body is streamed to a temporary file and only persisted once it parses
/// as a place feed.
#[instrument(name = "Download feed", skip(dest), level = "info")]
pub fn download_feed(url: &str, dest: &Path) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    // Stage next to the destination so the final persist is a rename.
    let staging_dir = dest.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(staging_dir)?;

    let temp_file = rt.block_on(async {
        let client = Client::new();
        download_to_temp_file(&client, url, staging_dir).await
    })?;

    let json = std::fs::read_to_string(temp_file.path())?;
    let places = super::parse_places(&json)?;
    info!(count = places.len(), "Downloaded feed parsed");

    temp_file.persist(dest).map_err(|e| e.error)?;
    info!(path = ?dest, "Feed cached");
    Ok(())
}

async fn download_to_temp_file(
    client: &Client,
    url: &str,
    staging_dir: &Path,
) -> Result<NamedTempFile> {
    info!(url, "Starting download");
    let response = client.get(url).send().await?.error_for_status()?;

    let total_size = response.content_length().unwrap_or(0);

    let pb = ProgressBar::new(total_size);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
    ) {
        pb.set_style(style.progress_chars("█░"));
    }
    pb.set_message(format!(
        "Downloading {}",
        url.split('/').next_back().unwrap_or(url)
    ));

    let temp_file = NamedTempFile::new_in(staging_dir)?;
    let mut dest_file = tokio::fs::File::create(temp_file.path()).await?;

    let mut stream = response.bytes_stream();
    while let Some(item) = stream.next().await {
        let chunk = item?;
        dest_file.write_all(&chunk).await?;
        pb.inc(chunk.len() as u64);
    }
    dest_file.flush().await?;
    pb.finish_and_clear();
    Ok(temp_file)
}
