//! Status-code simulation table.
//!
//! # Design Decisions
//! - One explicit record type per entry, not ad hoc tuples
//! - Unlisted codes pass through verbatim with an empty body
//! - The table is process-wide, immutable and consulted read-only

/// Media types the content negotiator can serve, echoed by the 406 entry.
pub const ACCEPTED_MEDIA_TYPES: [&str; 5] = [
    "image/webp",
    "image/svg+xml",
    "image/jpeg",
    "image/png",
    "image/*",
];

/// A canned response for one simulated status code.
pub struct StatusEntry {
    pub code: u16,
    pub body: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
}

const REDIRECT: &[(&str, &str)] = &[("Location", "/redirect/1")];

const NOT_ACCEPTABLE_BODY: &str = concat!(
    r#"{"message":"Client did not request a supported media type.","#,
    r#""accept":["image/webp","image/svg+xml","image/jpeg","image/png","image/*"]}"#,
);

/// Fixed lookup table; everything not listed falls through verbatim.
pub const STATUS_TABLE: &[StatusEntry] = &[
    StatusEntry { code: 301, body: "", headers: REDIRECT },
    StatusEntry { code: 302, body: "", headers: REDIRECT },
    StatusEntry { code: 303, body: "", headers: REDIRECT },
    StatusEntry { code: 304, body: "", headers: &[] },
    StatusEntry { code: 305, body: "", headers: REDIRECT },
    StatusEntry { code: 307, body: "", headers: REDIRECT },
    StatusEntry {
        code: 401,
        body: "",
        headers: &[("WWW-Authenticate", r#"Basic realm="Fake Realm""#)],
    },
    StatusEntry {
        code: 402,
        body: "Fuck you, pay me!",
        headers: &[("x-more-info", "http://vimeo.com/22053820")],
    },
    StatusEntry {
        code: 406,
        body: NOT_ACCEPTABLE_BODY,
        headers: &[("Content-Type", "application/json")],
    },
    StatusEntry {
        code: 407,
        body: "",
        headers: &[("Proxy-Authenticate", r#"Basic realm="Fake Realm""#)],
    },
    StatusEntry {
        code: 418,
        body: "I'm a teapot!",
        headers: &[("x-more-info", "http://tools.ietf.org/html/rfc2324")],
    },
];

/// Canned (body, headers, status) for `code`.
///
/// Total: unlisted codes yield an empty body and the literal status.
pub fn simulate(code: u16) -> (&'static str, &'static [(&'static str, &'static str)], u16) {
    match STATUS_TABLE.iter().find(|entry| entry.code == code) {
        Some(entry) => (entry.body, entry.headers, entry.code),
        None => ("", &[], code),
    }
}
