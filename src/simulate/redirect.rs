//! Redirect chain computation.
//!
//! Chains carry no server-side state: each hop is an independent request
//! whose remaining length is encoded in the path.

/// Endpoint every chain terminates at.
pub const LANDING: &str = "/get";

/// Default status for redirect responses.
pub const DEFAULT_REDIRECT_STATUS: u16 = 302;

/// Next hop for `/redirect/{n}`.
///
/// Signed so that degenerate counts (zero, negative) still hand off to the
/// relative chain, which terminates them.
pub fn absolute_hop(count: i64) -> String {
    if count == 1 {
        LANDING.to_string()
    } else {
        format!("/relative-redirect/{}", count - 1)
    }
}

/// Next hop for `/relative-redirect/{n}`.
pub fn relative_hop(count: i64) -> String {
    if count <= 1 {
        LANDING.to_string()
    } else {
        format!("/relative-redirect/{}", count - 1)
    }
}

/// Status for `/redirect-to`: an explicit code is honored only inside the
/// redirect range, everything else falls back to the default.
pub fn redirect_status(requested: Option<&str>) -> u16 {
    requested
        .and_then(|raw| raw.parse::<u16>().ok())
        .filter(|code| (300..400).contains(code))
        .unwrap_or(DEFAULT_REDIRECT_STATUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_chain_counts_down_to_landing() {
        assert_eq!(relative_hop(5), "/relative-redirect/4");
        assert_eq!(relative_hop(2), "/relative-redirect/1");
        assert_eq!(relative_hop(1), "/get");
        assert_eq!(relative_hop(0), "/get");
        assert_eq!(relative_hop(-3), "/get");
    }

    #[test]
    fn test_absolute_chain_hands_off_to_relative() {
        assert_eq!(absolute_hop(3), "/relative-redirect/2");
        assert_eq!(absolute_hop(1), "/get");
    }

    #[test]
    fn test_explicit_status_honored_only_in_range() {
        assert_eq!(redirect_status(Some("307")), 307);
        assert_eq!(redirect_status(Some("399")), 399);
        assert_eq!(redirect_status(Some("404")), 302);
        assert_eq!(redirect_status(Some("200")), 302);
        assert_eq!(redirect_status(Some("not-a-code")), 302);
        assert_eq!(redirect_status(None), 302);
    }
}
