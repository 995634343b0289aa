//! Coarse MIME classification for display purposes.

use crate::types::{EntryType, MimeClass};

/// MIME substrings grouped under the generic "file" class.
const FILE_MARKERS: &[&str] = &["zip", "rar", "octet-stream"];

/// MIME substrings grouped under the "text" class.
const TEXT_MARKERS: &[&str] = &["excel", "word", "css", "javascript", "plain", "rtf", "text"];

/// Map a raw MIME string plus extension to a display class.
///
/// Ordered rule evaluation, first match wins. Substring matching is
/// case-sensitive against the MIME string exactly as the backend reported
/// it; the extension is expected lowercase (the normalizer lowers it).
pub fn classify(entry_type: EntryType, mime: Option<&str>, extension: Option<&str>) -> MimeClass {
    if entry_type.is_dir() || mime.is_some_and(|m| m.contains("directory")) {
        return MimeClass::Dir;
    }
    // SVG is an extension override: it classifies as an image even when the
    // backend reports application/octet-stream or nothing at all.
    if mime.is_some_and(|m| m.contains("image")) || extension == Some("svg") {
        return MimeClass::Image;
    }

    let Some(mime) = mime else {
        return MimeClass::Unknown;
    };

    if mime.contains("pdf") {
        MimeClass::Pdf
    } else if mime.contains("audio") {
        MimeClass::Audio
    } else if mime.contains("video") {
        MimeClass::Video
    } else if FILE_MARKERS.iter().any(|marker| mime.contains(marker)) {
        MimeClass::File
    } else if TEXT_MARKERS.iter().any(|marker| mime.contains(marker)) {
        MimeClass::Text
    } else {
        MimeClass::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime: Option<&str>, ext: Option<&str>) -> MimeClass {
        classify(EntryType::File, mime, ext)
    }

    #[test]
    fn directories_always_classify_as_dir() {
        assert_eq!(classify(EntryType::Dir, None, None), MimeClass::Dir);
        assert_eq!(file(Some("inode/directory"), None), MimeClass::Dir);
    }

    #[test]
    fn images_by_mime_or_svg_extension() {
        assert_eq!(file(Some("image/png"), Some("png")), MimeClass::Image);
        assert_eq!(file(Some("application/octet-stream"), Some("svg")), MimeClass::Image);
        assert_eq!(file(None, Some("svg")), MimeClass::Image);
    }

    #[test]
    fn documents_and_media() {
        assert_eq!(file(Some("application/pdf"), Some("pdf")), MimeClass::Pdf);
        assert_eq!(file(Some("audio/mpeg"), Some("mp3")), MimeClass::Audio);
        assert_eq!(file(Some("video/mp4"), Some("mp4")), MimeClass::Video);
    }

    #[test]
    fn archives_and_blobs_are_plain_files() {
        assert_eq!(file(Some("application/zip"), Some("zip")), MimeClass::File);
        assert_eq!(file(Some("application/vnd.rar"), Some("rar")), MimeClass::File);
        assert_eq!(file(Some("application/octet-stream"), Some("bin")), MimeClass::File);
    }

    #[test]
    fn text_family() {
        assert_eq!(file(Some("text/plain"), Some("txt")), MimeClass::Text);
        assert_eq!(file(Some("application/msword"), Some("doc")), MimeClass::Text);
        assert_eq!(file(Some("application/vnd.ms-excel"), Some("xls")), MimeClass::Text);
        assert_eq!(file(Some("text/javascript"), Some("js")), MimeClass::Text);
    }

    #[test]
    fn unmatched_mime_is_unknown() {
        assert_eq!(file(Some("application/x-unknown"), Some("xyz")), MimeClass::Unknown);
        assert_eq!(file(None, Some("xyz")), MimeClass::Unknown);
        assert!(!file(Some("application/x-unknown"), None).is_known());
    }
}
