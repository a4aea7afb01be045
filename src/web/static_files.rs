//! Embedded editor page.
//!
//! The single-page editor under `web/static` is compiled into the binary, so
//! `mapthemer serve` needs no files next to it.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use std::path::Path;

/// Page served for every path that is not an asset.
const EDITOR_PAGE: &str = "index.html";

/// Editor assets embedded at compile time from `web/static`.
#[derive(Embed)]
#[folder = "web/static"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
#[include = "*.svg"]
#[include = "*.ico"]
pub struct EditorAssets;

/// Fallback handler: an embedded asset, or the editor page.
///
/// Paths with an extension that match no asset get a 404 so a missing script
/// does not come back as HTML.
pub async fn serve_static(request: Request) -> Response {
    let path = request.uri().path().trim_start_matches('/');

    if let Some(response) = asset(path) {
        return response;
    }

    if has_extension(path) {
        return (StatusCode::NOT_FOUND, format!("No such asset: /{path}")).into_response();
    }

    asset(EDITOR_PAGE)
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, "Editor page not embedded").into_response())
}

/// Looks up an embedded file and wraps it with content type and caching headers.
fn asset(path: &str) -> Option<Response> {
    let file = EditorAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Some(
        (
            [
                (header::CONTENT_TYPE, mime.to_string()),
                (header::CACHE_CONTROL, cache_policy(path).to_string()),
            ],
            file.data.into_owned(),
        )
            .into_response(),
    )
}

fn has_extension(path: &str) -> bool {
    Path::new(path).extension().is_some_and(|ext| !ext.is_empty())
}

/// The page itself is always revalidated; other assets may be cached briefly.
fn cache_policy(path: &str) -> &'static str {
    let is_html = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
    if is_html {
        "no-cache, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}

/// Returns true if the editor page was embedded.
#[must_use]
pub fn has_embedded_assets() -> bool {
    EditorAssets::get(EDITOR_PAGE).is_some()
}
