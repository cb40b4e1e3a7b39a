//! Embedded frontend assets and the SPA fallback chain.
//!
//! The frontend is compiled into the binary so the server runs from any
//! directory. Resolution for a non-API path tries, in order: the literal
//! asset path, the path with a `.html` suffix, a directory index, and
//! finally the SPA root `index.html` so client-side routes deep-link.

use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

/// Embedded frontend files, keyed by path relative to the site root.
const ASSETS: &[(&str, &str)] = &[
    ("index.html", include_str!("../assets/index.html")),
    ("holiday.html", include_str!("../assets/holiday.html")),
    ("ip.html", include_str!("../assets/ip.html")),
    ("styles.css", include_str!("../assets/styles.css")),
    ("app.js", include_str!("../assets/app.js")),
];

/// Looks up an embedded asset by exact path.
fn asset(path: &str) -> Option<(&'static str, &'static str)> {
    ASSETS.iter().find(|(name, _)| *name == path).copied()
}

/// Maps a file extension onto a Content-Type header value.
fn content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

/// Resolves a request path through the fallback chain.
///
/// Returns the asset path served and its body, or `None` if nothing matched
/// (only possible when even the SPA root is missing).
fn resolve(path: &str) -> Option<(&'static str, &'static str)> {
    let path = path.trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    // "/holiday" serves holiday.html via the suffix step
    asset(path)
        .or_else(|| asset(&format!("{path}.html")))
        .or_else(|| asset(&format!("{path}/index.html")))
        .or_else(|| asset("index.html"))
}

/// Axum fallback handler serving the embedded single-page frontend.
///
/// Routed requests never reach this handler; it sees only paths outside the
/// API router, which it answers from the embedded assets.
pub async fn static_handler(uri: Uri) -> Response {
    match resolve(uri.path()) {
        Some((name, body)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type(name))],
            body,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "404 page not found").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_serves_index() {
        let (name, body) = resolve("/").unwrap();
        assert_eq!(name, "index.html");
        assert!(body.contains("<title>Utils</title>"));
    }

    #[test]
    fn test_literal_path_wins() {
        let (name, _) = resolve("/styles.css").unwrap();
        assert_eq!(name, "styles.css");
    }

    #[test]
    fn test_html_suffix_fallback() {
        let (name, body) = resolve("/holiday").unwrap();
        assert_eq!(name, "holiday.html");
        assert!(body.contains("Holiday check"));
    }

    #[test]
    fn test_unknown_path_falls_back_to_spa_root() {
        let (name, body) = resolve("/some/client/route").unwrap();
        assert_eq!(name, "index.html");
        assert!(body.contains("<title>Utils</title>"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("app.js"), "application/javascript");
        assert_eq!(content_type("styles.css"), "text/css");
        assert_eq!(content_type("data.json"), "application/json");
        assert_eq!(content_type("logo.svg"), "image/svg+xml");
        assert_eq!(content_type("unknown.bin"), "application/octet-stream");
        assert_eq!(content_type("no-extension"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_static_handler_serves_css_with_content_type() {
        let response = static_handler("/styles.css".parse().unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );
    }
}
