//! Set-Cookie directive computation.
//!
//! Directives are derived purely from the current request; nothing is
//! stored server-side.

/// RFC 1123 timestamp safely in the past; clients purge the cookie on sight.
pub const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// One Set-Cookie header value to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieDirective {
    pub name: String,
    pub value: String,
    pub path: &'static str,
    pub expires: Option<&'static str>,
}

impl CookieDirective {
    /// Session cookie for a name/value pair.
    pub fn set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/",
            expires: None,
        }
    }

    /// Expire the named cookie: empty value, expiry in the past.
    pub fn delete(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            path: "/",
            expires: Some(EXPIRED),
        }
    }

    /// Render the header value.
    pub fn render(&self) -> String {
        match self.expires {
            Some(expires) => format!(
                "{}={}; Path={}; Expires={}",
                self.name, self.value, self.path, expires
            ),
            None => format!("{}={}; Path={}", self.name, self.value, self.path),
        }
    }
}
