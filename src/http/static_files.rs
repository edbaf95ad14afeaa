//! Static file resolution.
//!
//! Files, `index.html` lookup, directory redirects, `Content-Type`,
//! `Last-Modified`, conditional and range requests all come from
//! `tower_http::services::ServeDir`. This module adds what a development
//! server needs on top: a method check, directory listings, and readable
//! error bodies.

use std::path::Path;

use axum::{
    body::Body,
    extract::State,
    handler::HandlerWithoutStateExt,
    http::{header, Method, Request, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::http::listing;
use crate::http::server::AppState;
use crate::http::traversal::{self, PathRejection};

const INDEX_FILE: &str = "index.html";

/// Fallback handler serving everything under the served root.
pub async fn serve(State(state): State<AppState>, req: Request<Body>) -> Response {
    let method = req.method().clone();
    if method != Method::GET && method != Method::HEAD {
        return method_not_allowed();
    }

    let decoded = match traversal::decode_request_path(req.uri().path()) {
        Ok(decoded) => decoded,
        Err(rejection) => return rejection.into_response(),
    };

    if decoded.ends_with('/') {
        let Some(dir) = traversal::resolve(&state.root, &decoded) else {
            return PathRejection::Traversal.into_response();
        };
        if needs_listing(&dir).await {
            tracing::debug!(path = %decoded, "Listing directory");
            return listing::respond(&dir, &decoded, method == Method::HEAD).await;
        }
    }

    let serve_dir = ServeDir::new(&*state.root)
        .append_index_html_on_directories(true)
        .not_found_service(not_found.into_service());

    match serve_dir.oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Static file handler failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error\n").into_response()
        }
    }
}

/// A directory gets a listing when it has no index file to serve.
async fn needs_listing(dir: &Path) -> bool {
    let is_dir = tokio::fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return false;
    }
    let has_index = tokio::fs::metadata(dir.join(INDEX_FILE))
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    !has_index
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found: file not found\n")
}

fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, HEAD")],
        "405 Method Not Allowed\n",
    )
        .into_response()
}
