//! Cross-origin isolation headers.
//!
//! Browsers only grant `SharedArrayBuffer` (and with it threaded WASM) to
//! documents served with both of these headers. They are set with
//! `overriding` layers wrapped around the whole router, so every response
//! carries them: files, listings, redirects, and errors alike, and no inner
//! handler can weaken them.
//!
//! Responses hyper writes itself before routing (400 for an unparseable
//! request line, 431 for oversized headers) never pass through the router
//! and go out without these headers.

use axum::{
    http::{HeaderName, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");
pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-embedder-policy");

pub const SAME_ORIGIN: HeaderValue = HeaderValue::from_static("same-origin");
pub const REQUIRE_CORP: HeaderValue = HeaderValue::from_static("require-corp");

/// Wrap `router` so that every response it produces is cross-origin isolated.
///
/// Must be the last `layer` call on the router so it sits outside every
/// other middleware.
pub fn with_cross_origin_isolation<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(SetResponseHeaderLayer::overriding(
            CROSS_ORIGIN_OPENER_POLICY,
            SAME_ORIGIN,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            CROSS_ORIGIN_EMBEDDER_POLICY,
            REQUIRE_CORP,
        ))
}

/// True when `headers` carry exactly the isolation values.
#[cfg(test)]
pub(crate) fn is_cross_origin_isolated(headers: &axum::http::HeaderMap) -> bool {
    let single = |name: &HeaderName, expected: &HeaderValue| {
        let mut values = headers.get_all(name).iter();
        values.next() == Some(expected) && values.next().is_none()
    };
    single(&CROSS_ORIGIN_OPENER_POLICY, &SAME_ORIGIN)
        && single(&CROSS_ORIGIN_EMBEDDER_POLICY, &REQUIRE_CORP)
}
