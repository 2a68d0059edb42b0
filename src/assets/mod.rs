//! Embedded fixture content.
//!
//! # Responsibilities
//! - Hand out fixture bytes and their media type by logical name
//! - Keep handlers ignorant of where fixture content lives
//!
//! # Design Decisions
//! - Fixtures are embedded at compile time; the store does no I/O
//! - Content is opaque to the rest of the service

pub const INDEX_HTML: &str = include_str!("../../fixtures/index.html");
pub const FORMS_POST_HTML: &str = include_str!("../../fixtures/forms-post.html");
pub const MOBY_HTML: &str = include_str!("../../fixtures/moby.html");
pub const SAMPLE_XML: &str = include_str!("../../fixtures/sample.xml");
pub const UTF8_DEMO: &str = include_str!("../../fixtures/utf8-demo.txt");

pub const ROBOTS_TXT: &str = "User-agent: *\nDisallow: /deny\n";
pub const DENY_TEXT: &str = "YOU SHOULDN'T BE HERE";

const IMAGE_PNG: &[u8] = include_bytes!("../../fixtures/images/sample.png");
const IMAGE_JPEG: &[u8] = include_bytes!("../../fixtures/images/sample.jpeg");
const IMAGE_WEBP: &[u8] = include_bytes!("../../fixtures/images/sample.webp");
const IMAGE_SVG: &[u8] = include_bytes!("../../fixtures/images/sample.svg");

/// Image variants held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Webp,
    Svg,
}

/// Fixture bytes and media type for an image variant.
pub fn image(kind: ImageKind) -> (&'static [u8], &'static str) {
    match kind {
        ImageKind::Png => (IMAGE_PNG, "image/png"),
        ImageKind::Jpeg => (IMAGE_JPEG, "image/jpeg"),
        ImageKind::Webp => (IMAGE_WEBP, "image/webp"),
        ImageKind::Svg => (IMAGE_SVG, "image/svg+xml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_magic_bytes_match_media_type() {
        let (png, _) = image(ImageKind::Png);
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let (jpeg, _) = image(ImageKind::Jpeg);
        assert_eq!(&jpeg[..2], b"\xff\xd8");
        let (webp, _) = image(ImageKind::Webp);
        assert_eq!(&webp[..4], b"RIFF");
        assert_eq!(&webp[8..12], b"WEBP");
        let (svg, media_type) = image(ImageKind::Svg);
        assert!(std::str::from_utf8(svg).unwrap().contains("<svg"));
        assert_eq!(media_type, "image/svg+xml");
    }
}
