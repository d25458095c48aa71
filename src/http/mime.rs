use std::path::Path;

/// Determines the `Content-Type` for a file from its extension.
///
/// Unknown or missing extensions fall back to `application/octet-stream`.
///
/// # Example
///
/// ```
/// # use atrium::http::mime::from_path;
/// # use std::path::Path;
/// assert_eq!(from_path(Path::new("index.html")), "text/html");
/// assert_eq!(from_path(Path::new("archive.bin")), "application/octet-stream");
/// ```
pub fn from_path(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str());

    match extension {
        // Text
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Audio/Video
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz") => "application/gzip",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_types() {
        assert_eq!(from_path(Path::new("page.html")), "text/html");
        assert_eq!(from_path(Path::new("style.css")), "text/css");
        assert_eq!(from_path(Path::new("app.js")), "application/javascript");
        assert_eq!(from_path(Path::new("data.json")), "application/json");
        assert_eq!(from_path(Path::new("logo.png")), "image/png");
    }

    #[test]
    fn unknown_extension_defaults_to_octet_stream() {
        assert_eq!(from_path(Path::new("file.xyz")), "application/octet-stream");
        assert_eq!(from_path(Path::new("noextension")), "application/octet-stream");
    }
}
