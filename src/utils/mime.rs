//! MIME Type Detection Utilities
//!
//! Raw uploads are classified by their content (magic numbers via the `infer`
//! crate); files referenced by path are classified by extension first.

use std::path::Path;

pub const OCTET_STREAM: &str = "application/octet-stream";
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Guess MIME by inspecting bytes (magic numbers)
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|k| k.mime_type().to_string())
}

/// Sniff the MIME type of `bytes` without looking at any name.
///
/// Binary signatures win; otherwise non-empty valid UTF-8 without NUL bytes
/// is plain text and everything else is an octet stream.
pub fn sniff_mime(bytes: &[u8]) -> String {
    if let Some(m) = guess_mime_from_bytes(bytes) {
        return m;
    }
    if !bytes.is_empty() && !bytes.contains(&0) && std::str::from_utf8(bytes).is_ok() {
        return TEXT_PLAIN_UTF8.to_string();
    }
    OCTET_STREAM.to_string()
}

/// Guess MIME by file path (extension-based)
pub fn guess_mime_from_path(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
}

/// Combined guess for files read from disk: extension, then content.
pub fn guess_mime(path: &Path, bytes: &[u8]) -> String {
    guess_mime_from_path(path).unwrap_or_else(|| sniff_mime(bytes))
}

/// Base name of a path-like hint, or `fallback` when it has none.
pub fn file_name_of(hint: &str, fallback: &str) -> String {
    Path::new(hint)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_sniff_mime() {
        assert_eq!(sniff_mime(PNG), "image/png");
        assert_eq!(sniff_mime(b"%PDF-1.7\n"), "application/pdf");
        assert_eq!(sniff_mime(b"hello world"), TEXT_PLAIN_UTF8);
        assert_eq!(sniff_mime(&[0x00, 0xFF, 0x13, 0x37]), OCTET_STREAM);
        assert_eq!(sniff_mime(&[]), OCTET_STREAM);
    }

    #[test]
    fn test_guess_mime_from_path() {
        assert_eq!(
            guess_mime_from_path(Path::new("photo.jpg")),
            Some("image/jpeg".to_string())
        );
        assert_eq!(
            guess_mime_from_path(Path::new("/tmp/IMAGE.PNG")),
            Some("image/png".to_string())
        );
        assert_eq!(guess_mime_from_path(Path::new("file.unknownext")), None);
    }

    #[test]
    fn test_guess_mime_combined() {
        // Extension wins for files on disk
        assert_eq!(guess_mime(Path::new("a.jpg"), PNG), "image/jpeg");
        // Content fills in when the extension is unknown
        assert_eq!(guess_mime(Path::new("a.bin0"), PNG), "image/png");
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(file_name_of("/home/user/pics/cat.png", "file"), "cat.png");
        assert_eq!(file_name_of("cat.png", "file"), "cat.png");
        assert_eq!(file_name_of("", "file"), "file");
        assert_eq!(file_name_of("/", "file"), "file");
    }
}
