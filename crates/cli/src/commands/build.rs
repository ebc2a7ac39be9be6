use std::{
    fs::read_to_string,
    io::{Read, stdin},
    path::Path,
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use fontpack_core::{HttpFetcher, PackOptions, handle_build};
use log::debug;

/// Run a build request through the JSON boundary and print the response.
///
/// Exits with an error when the response status is not 200.
pub fn build(body: Option<&Path>, content_type: &str, options: PackOptions) -> Result<()> {
    let request = match body {
        Some(path) => {
            read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            stdin().read_to_string(&mut buf).context("Failed to read request from stdin")?;
            buf
        }
    };

    debug!("Request: {} bytes as {content_type}", request.len());

    let fetcher = Arc::new(HttpFetcher::new(&options.fetch)?);
    let response = handle_build(Some(content_type), &request, fetcher, &options);

    println!("HTTP {}", response.status);
    if let Some(body) = &response.body {
        println!("{body}");
    }
    if response.status != 200 {
        bail!("Build request failed with status {}", response.status);
    }
    Ok(())
}
