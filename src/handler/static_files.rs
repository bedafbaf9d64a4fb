//! Static file serving module
//!
//! Resolves request paths against the configured server root and builds the
//! file responses. Paths escaping the root are rejected.

use crate::config::FilesConfig;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a static file from the server root
pub async fn serve(path: &str, is_head: bool, files: &FilesConfig) -> Response<Full<Bytes>> {
    match load_from_root(&files.root_dir, path, &files.index_files).await {
        Some((content, content_type)) => {
            http::build_file_response(&content, content_type, is_head)
        }
        None => http::build_404_response(),
    }
}

/// Load a file from the server root with index file support
pub async fn load_from_root(
    root_dir: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");

    let mut file_path = Path::new(root_dir).join(&clean_path);

    let root_canonical = match Path::new(root_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Server root not found or inaccessible '{root_dir}': {e}"
            ));
            return None;
        }
    };

    // Directory request: try the configured index files
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        for index_file in index_files {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    // File not found is common (404), no need to log at warning level
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(
        file_path_canonical
            .extension()
            .and_then(|e| e.to_str()),
    );

    Some((content, content_type))
}
