//! Extension to content-type mapping.
//!
//! Stock MIME databases disagree across platforms on the three types the
//! app under test is picky about (module scripts, the manifest, icon
//! preloads), so those are pinned here. Anything unresolved is served as
//! `text/html` so extensionless app routes still render.

use std::ffi::OsStr;
use std::path::Path;

pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(OsStr::to_str) {
        Some("js") | Some("mjs") => "text/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        Some("wasm") => "application/wasm",
        Some("woff2") => "font/woff2",
        Some("webmanifest") => "application/manifest+json",
        _ => "text/html",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_overrides() {
        assert_eq!(content_type(Path::new("app/sw.js")), "text/javascript");
        assert_eq!(content_type(Path::new("manifest.json")), "application/json");
        assert_eq!(content_type(Path::new("icons/icon-512.png")), "image/png");
    }

    #[test]
    fn unknown_and_missing_extensions_fall_back_to_html() {
        assert_eq!(content_type(Path::new("notes.xyz")), "text/html");
        assert_eq!(content_type(Path::new("LICENSE")), "text/html");
    }
}
