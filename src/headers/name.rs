//! Header name validation and the table of well-known header names.

use std::collections::HashSet;

use regex::Regex;

use super::HeaderError;

/// Used to define a constant in the form of a header.
macro_rules! define_const {
    { $($vn:ident = $st:literal),+ } => {
        $(
            #[allow(dead_code)]
            pub const $vn: &'static str = $st;
        )+

        /// Every name defined above, lowercased.
        pub const WELL_KNOWN: &[&str] = &[$($st),+];
    }
}

define_const!{
    ACCEPT                           = "accept",
    ACCEPT_CHARSET                   = "accept-charset",
    ACCEPT_ENCODING                  = "accept-encoding",
    ACCEPT_LANGUAGE                  = "accept-language",
    ACCEPT_RANGES                    = "accept-ranges",
    ACCESS_CONTROL_ALLOW_CREDENTIALS = "access-control-allow-credentials",
    ACCESS_CONTROL_ALLOW_HEADERS     = "access-control-allow-headers",
    ACCESS_CONTROL_ALLOW_METHODS     = "access-control-allow-methods",
    ACCESS_CONTROL_ALLOW_ORIGIN      = "access-control-allow-origin",
    ACCESS_CONTROL_EXPOSE_HEADERS    = "access-control-expose-headers",
    ACCESS_CONTROL_MAX_AGE           = "access-control-max-age",
    ACCESS_CONTROL_REQUEST_HEADERS   = "access-control-request-headers",
    ACCESS_CONTROL_REQUEST_METHOD    = "access-control-request-method",
    AGE                              = "age",
    AUTHORIZATION                    = "authorization",
    CACHE_CONTROL                    = "cache-control",
    CONNECTION                       = "connection",
    CONTENT_DISPOSITION              = "content-disposition",
    CONTENT_ENCODING                 = "content-encoding",
    CONTENT_LANGUAGE                 = "content-language",
    CONTENT_LENGTH                   = "content-length",
    CONTENT_LOCATION                 = "content-location",
    CONTENT_RANGE                    = "content-range",
    CONTENT_SECURITY_POLICY          = "content-security-policy",
    CONTENT_TYPE                     = "content-type",
    COOKIE                           = "cookie",
    DATE                             = "date",
    DNT                              = "dnt",
    ETAG                             = "etag",
    EXPECT                           = "expect",
    EXPIRES                          = "expires",
    HOST                             = "host",
    IF_MATCH                         = "if-match",
    IF_MODIFIED_SINCE                = "if-modified-since",
    IF_NONE_MATCH                    = "if-none-match",
    IF_RANGE                         = "if-range",
    IF_UNMODIFIED_SINCE              = "if-unmodified-since",
    KEEP_ALIVE                       = "keep-alive",
    LAST_MODIFIED                    = "last-modified",
    LINK                             = "link",
    LOCATION                         = "location",
    ORIGIN                           = "origin",
    PRAGMA                           = "pragma",
    PROXY_AUTHORIZATION              = "proxy-authorization",
    RANGE                            = "range",
    REFERER                          = "referer",
    REFERRER_POLICY                  = "referrer-policy",
    REFRESH                          = "refresh",
    SEC_WEBSOCKET_ACCEPT             = "sec-websocket-accept",
    SEC_WEBSOCKET_EXTENSIONS         = "sec-websocket-extensions",
    SEC_WEBSOCKET_KEY                = "sec-websocket-key",
    SEC_WEBSOCKET_PROTOCOL           = "sec-websocket-protocol",
    SEC_WEBSOCKET_VERSION            = "sec-websocket-version",
    SERVER                           = "server",
    SET_COOKIE                       = "set-cookie",
    STRICT_TRANSPORT_SECURITY        = "strict-transport-security",
    TE                               = "te",
    TRAILER                          = "trailer",
    TRANSFER_ENCODING                = "transfer-encoding",
    UPGRADE                          = "upgrade",
    USER_AGENT                       = "user-agent",
    VARY                             = "vary",
    VIA                              = "via",
    WWW_AUTHENTICATE                 = "www-authenticate",
    X_CONTENT_TYPE_OPTIONS           = "x-content-type-options",
    X_FRAME_OPTIONS                  = "x-frame-options",
    X_XSS_PROTECTION                 = "x-xss-protection"
}

lazy_static::lazy_static! {
    // RFC 7230 `token`
    static ref TOKEN: Regex = Regex::new(r"^[!#$%&'*+\-.^_`|~0-9A-Za-z]+$")
        .expect("token pattern is valid");

    static ref WELL_KNOWN_SET: HashSet<&'static str> = WELL_KNOWN
        .iter()
        .cloned()
        .collect();
}

/// Checks that `name` is a valid field name.
pub fn validate(name: &str) -> Result<(), HeaderError> {
    if TOKEN.is_match(name) {
        Ok(())
    }else{
        log::debug!("rejected header name '{}'", name.escape_debug());
        Err(HeaderError::InvalidName(name.into()))
    }
}

/// Whether `name` is one of the common header names, ignoring case.
pub fn is_well_known(name: &str) -> bool {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        WELL_KNOWN_SET.contains(name.to_ascii_lowercase().as_str())
    }else{
        WELL_KNOWN_SET.contains(name)
    }
}

/// Case-insensitive name comparison.
pub fn matches(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

pub fn is_set_cookie(name: &str) -> bool {
    matches(name, SET_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        assert!(validate("Content-Type").is_ok());
        assert!(validate("x-custom_header.v2").is_ok());
        assert!(validate("!#$%&'*+-.^_`|~").is_ok());

        assert_eq!(validate(""), Err(HeaderError::InvalidName("".into())));
        assert!(validate("has space").is_err());
        assert!(validate("colon:").is_err());
        assert!(validate("quote\"").is_err());
        assert!(validate("caf\u{e9}").is_err());
        assert!(validate("line\n").is_err());
    }

    #[test]
    fn well_known_ignores_case() {
        assert!(is_well_known("content-type"));
        assert!(is_well_known("Content-Type"));
        assert!(is_well_known("SET-COOKIE"));
        assert!(!is_well_known("X-Request-Id"));
    }

    #[test]
    fn well_known_table_is_lowercase() {
        for name in WELL_KNOWN {
            assert_eq!(*name, name.to_ascii_lowercase());
            assert!(validate(name).is_ok());
        }
    }
}
