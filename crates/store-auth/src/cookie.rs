//! Cookie header parsing.

/// Look up a cookie value in a raw `Cookie` header.
///
/// Follows RFC 6265 pair syntax: `name=value; name2=value2`. Values are
/// returned verbatim, without unquoting.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k.trim() == name {
            Some(v.trim())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_named_cookie() {
        let header = "theme=dark; jwt_token=abc.def.ghi; _ga=GA1";
        assert_eq!(cookie_value(header, "jwt_token"), Some("abc.def.ghi"));
    }

    #[test]
    fn tolerates_whitespace() {
        assert_eq!(cookie_value("  jwt_token = tok  ", "jwt_token"), Some("tok"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(cookie_value("theme=dark", "jwt_token"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        assert_eq!(cookie_value("jwt_token_old=x", "jwt_token"), None);
    }

    #[test]
    fn empty_header_is_none() {
        assert_eq!(cookie_value("", "jwt_token"), None);
    }
}
