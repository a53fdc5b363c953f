//! Canonical card address codec. QR rendering and camera scanning are
//! external concerns; this module only emits and classifies the payload
//! strings they carry.

/// Classification of a decoded QR payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// A Taply card: either a full card URL or a bare profile id.
    Card(String),
    /// Any other URL; callers pass it through untouched.
    External(String),
    /// Not something we can route.
    Unrecognized,
}

/// The canonical shareable address for a card: `<origin>/#/card/<id>`.
pub fn card_url(origin: &str, id: &str) -> String {
    format!("{}/#/card/{}", origin.trim_end_matches('/'), id)
}

/// Classify a decoded payload. Card URLs are matched on the `#/card/`
/// fragment with the id truncated at any query separator; a bare
/// `[A-Za-z0-9_-]` token is treated as a raw id.
pub fn parse_scan(text: &str) -> ScanTarget {
    let text = text.trim();

    if let Some((_, rest)) = text.split_once("#/card/") {
        let id = rest
            .split(['?', '&'])
            .next()
            .unwrap_or("")
            .trim();
        if !id.is_empty() {
            return ScanTarget::Card(id.to_string());
        }
        return ScanTarget::Unrecognized;
    }

    if !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return ScanTarget::Card(text.to_string());
    }

    if text.starts_with("http") {
        return ScanTarget::External(text.to_string());
    }

    ScanTarget::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_url_is_fragment_based() {
        assert_eq!(
            card_url("https://cards.example.com", "usr_123"),
            "https://cards.example.com/#/card/usr_123"
        );
        // Trailing slash on the origin does not double up.
        assert_eq!(
            card_url("http://localhost:5173/", "u1"),
            "http://localhost:5173/#/card/u1"
        );
    }

    #[test]
    fn parse_full_card_url() {
        assert_eq!(
            parse_scan("http://localhost:5173/#/card/usr_123"),
            ScanTarget::Card("usr_123".to_string())
        );
    }

    #[test]
    fn parse_card_url_truncates_query() {
        assert_eq!(
            parse_scan("https://x.example/#/card/usr_123?utm=qr&x=1"),
            ScanTarget::Card("usr_123".to_string())
        );
        assert_eq!(
            parse_scan("https://x.example/#/card/usr_123&x=1"),
            ScanTarget::Card("usr_123".to_string())
        );
    }

    #[test]
    fn parse_bare_id() {
        assert_eq!(parse_scan("usr_123"), ScanTarget::Card("usr_123".to_string()));
        assert_eq!(parse_scan("a-b_C9"), ScanTarget::Card("a-b_C9".to_string()));
    }

    #[test]
    fn parse_external_url_passthrough() {
        assert_eq!(
            parse_scan("https://example.com/menu"),
            ScanTarget::External("https://example.com/menu".to_string())
        );
    }

    #[test]
    fn parse_junk_is_unrecognized() {
        assert_eq!(parse_scan(""), ScanTarget::Unrecognized);
        assert_eq!(parse_scan("hello world!"), ScanTarget::Unrecognized);
        assert_eq!(parse_scan("https://x.example/#/card/"), ScanTarget::Unrecognized);
    }

    #[test]
    fn round_trip_through_scan() {
        let url = card_url("https://cards.example.com", "usr_9f3");
        assert_eq!(parse_scan(&url), ScanTarget::Card("usr_9f3".to_string()));
    }
}
