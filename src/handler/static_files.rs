//! Static JSON file serving module
//!
//! Handles path resolution, the extension check and file loading.

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The only extension eligible for a successful response (case-sensitive)
const JSON_EXTENSION: &str = "json";

/// Serve the file `url_path` names under `root`, or 404
///
/// Every failure (unresolvable path, wrong extension, any I/O error) collapses to
/// the same not-found response. The file's bytes are served unchanged; they are
/// never checked to be valid JSON.
pub async fn serve_json(root: &Path, url_path: &str) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve_path(root, url_path) else {
        return http::build_404_response();
    };

    if !has_json_extension(&file_path) {
        return http::build_404_response();
    }

    match load_file(&file_path).await {
        Some(content) => http::build_json_response(Bytes::from(content)),
        None => http::build_404_response(),
    }
}

/// Join the segments of a URL path onto `root`
///
/// Empty and `.` segments are skipped. Returns `None` when a segment is `..` (the
/// path could leave `root`) or when the path ends in `/` (it names a directory).
pub fn resolve_path(root: &Path, url_path: &str) -> Option<PathBuf> {
    if url_path.len() > 1 && url_path.ends_with('/') {
        return None;
    }

    let mut file_path = root.to_path_buf();
    for segment in url_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            name => file_path.push(name),
        }
    }
    Some(file_path)
}

/// Whether the final path component has the extension `.json`
///
/// A bare dotfile such as `.json` has no extension.
pub fn has_json_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == JSON_EXTENSION)
}

/// Read a whole file, any I/O error yields `None`
pub async fn load_file(path: &Path) -> Option<Vec<u8>> {
    fs::read(path).await.ok()
}
