//! Path traversal rejection.
//!
//! Requests are screened before the filesystem is touched. The raw path is
//! percent-decoded and split on `/`; any `..` segment, backslash, or NUL
//! byte gets a `403 Forbidden`. Paths that do not decode to UTF-8 get a
//! `400 Bad Request`.

use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;

/// Why a request path was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRejection {
    /// The path tries to leave the served root.
    Traversal,
    /// The path is not valid percent-encoded UTF-8.
    Malformed,
}

impl IntoResponse for PathRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Traversal => (StatusCode::FORBIDDEN, "403 Forbidden: path escapes the served root\n"),
            Self::Malformed => (StatusCode::BAD_REQUEST, "400 Bad Request: malformed request path\n"),
        }
        .into_response()
    }
}

/// Decode a request path and check that it stays inside the root.
pub fn decode_request_path(raw: &str) -> Result<String, PathRejection> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| PathRejection::Malformed)?;

    if decoded.contains('\0') || decoded.contains('\\') {
        return Err(PathRejection::Traversal);
    }
    if decoded.split('/').any(|segment| segment == "..") {
        return Err(PathRejection::Traversal);
    }

    Ok(decoded.into_owned())
}

/// Map an already-decoded request path onto the filesystem under `root`.
///
/// Returns `None` for paths [`decode_request_path`] would reject.
pub fn resolve(root: &Path, decoded: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            s if s.contains('\\') || s.contains('\0') => return None,
            s => path.push(s),
        }
    }
    Some(path)
}

/// Middleware refusing requests whose path would escape the served root.
pub async fn reject_traversal(req: Request<Body>, next: Next) -> Response {
    match decode_request_path(req.uri().path()) {
        Ok(_) => next.run(req).await,
        Err(rejection) => {
            tracing::warn!(path = %req.uri().path(), ?rejection, "Rejected request path");
            rejection.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_decode() {
        assert_eq!(decode_request_path("/").unwrap(), "/");
        assert_eq!(decode_request_path("/pkg/app_bg.wasm").unwrap(), "/pkg/app_bg.wasm");
        assert_eq!(decode_request_path("/my%20file.txt").unwrap(), "/my file.txt");
        assert_eq!(decode_request_path("/a/./b/").unwrap(), "/a/./b/");
        assert_eq!(decode_request_path("/..hidden/x..y").unwrap(), "/..hidden/x..y");
    }

    #[test]
    fn traversal_is_rejected() {
        for raw in [
            "/../../etc/passwd",
            "/a/../../b",
            "/%2e%2e/%2e%2e/etc/passwd",
            "/%2E%2E/secret",
            "/..%2fetc%2fpasswd",
            "/a/..",
            "/..\\windows",
            "/%5c..%5cwindows",
            "/file%00.txt",
        ] {
            assert_eq!(decode_request_path(raw), Err(PathRejection::Traversal), "{raw}");
        }
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        assert_eq!(decode_request_path("/%ff%fe"), Err(PathRejection::Malformed));
    }

    #[test]
    fn resolve_stays_under_root() {
        let root = Path::new("/srv/www");
        assert_eq!(resolve(root, "/"), Some(PathBuf::from("/srv/www")));
        assert_eq!(
            resolve(root, "/pkg//./app.js"),
            Some(PathBuf::from("/srv/www/pkg/app.js"))
        );
        assert_eq!(resolve(root, "/a/../b"), None);
    }
}
