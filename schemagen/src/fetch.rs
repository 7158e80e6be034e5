//! Remote schema retrieval.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use eyre::{Result, WrapErr};
use tempfile::TempDir;

/// File name used when the URL doesn't end in a `.json` segment.
const FALLBACK_FILE_NAME: &str = "target.json";

/// Downloads a remote document.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Fetches over HTTP(S) with a blocking client and no timeout.
///
/// The client is built per fetch, so runs over a local directory never
/// create one.
#[derive(Debug, Default)]
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .wrap_err("failed to build HTTP client")?;
        let response = client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .wrap_err_with(|| format!("failed to fetch '{}'", url))?;
        let body = response
            .bytes()
            .wrap_err_with(|| format!("failed to read response from '{}'", url))?;
        Ok(body.to_vec())
    }
}

/// A fetched document in a temporary directory, removed on drop.
pub struct Staged {
    dir: TempDir,
    file: PathBuf,
}

impl Staged {
    /// Directory holding the document.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// Fetch `url` completely and write it into a fresh staging directory.
pub fn stage(url: &str, fetcher: &dyn Fetcher) -> Result<Staged> {
    let body = fetcher.fetch(url)?;
    let dir = TempDir::new().wrap_err("failed to create staging directory")?;
    let file = dir.path().join(staged_file_name(url));
    std::fs::write(&file, body)
        .wrap_err_with(|| format!("failed to stage '{}'", file.display()))?;

    tracing::debug!(url, dir = %dir.path().display(), "staged remote schema");
    Ok(Staged { dir, file })
}

/// The URL's last path segment when it ends in `.json`, else `target.json`.
pub fn staged_file_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();

    if segment.to_ascii_lowercase().ends_with(".json") && segment.len() > ".json".len() {
        segment.to_string()
    } else {
        FALLBACK_FILE_NAME.to_string()
    }
}
