//! Accept-header content negotiation for the image endpoints.

use crate::assets::ImageKind;

/// Select an image variant for the given Accept header.
///
/// Substring containment, checked in fixed priority order. An absent or
/// blank header defaults to PNG; `None` means nothing acceptable and the
/// caller answers with the simulated 406.
pub fn negotiate(accept: Option<&str>) -> Option<ImageKind> {
    let accept = accept.unwrap_or("").trim();
    if accept.is_empty() {
        return Some(ImageKind::Png);
    }
    if accept.contains("image/webp") {
        return Some(ImageKind::Webp);
    }
    if accept.contains("image/svg+xml") {
        return Some(ImageKind::Svg);
    }
    if accept.contains("image/jpeg") {
        return Some(ImageKind::Jpeg);
    }
    if accept.contains("image/png") || accept.contains("image/*") {
        return Some(ImageKind::Png);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_prefers_webp() {
        assert_eq!(negotiate(Some("image/webp,image/png")), Some(ImageKind::Webp));
        assert_eq!(negotiate(Some("image/png, image/svg+xml")), Some(ImageKind::Svg));
    }

    #[test]
    fn test_absent_or_blank_header_defaults_to_png() {
        assert_eq!(negotiate(None), Some(ImageKind::Png));
        assert_eq!(negotiate(Some("")), Some(ImageKind::Png));
    }

    #[test]
    fn test_wildcard_serves_png() {
        assert_eq!(negotiate(Some("image/*")), Some(ImageKind::Png));
    }

    #[test]
    fn test_unsupported_types_are_not_acceptable() {
        assert_eq!(negotiate(Some("text/html")), None);
        assert_eq!(negotiate(Some("application/json")), None);
    }
}
