//! Request cookie jar (name → value), parsed from `Cookie` header values.

use std::borrow::Cow;
use std::collections::HashMap;

/// Name of the cookie carrying the session credential.
pub const SESSION_COOKIE_NAME: &str = "triangle_session";

/// Cookies presented with a single request.
///
/// Parsing is lenient: malformed pairs are skipped, values are unquoted and
/// percent-decoded, and the first occurrence of a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(header: &str) -> Self {
        Self::from_headers([header])
    }

    /// Merge several `Cookie` header values, in order.
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut jar = Self::new();
        for header in headers {
            for pair in header.split(';') {
                let Some((name, value)) = pair.split_once('=') else {
                    continue;
                };
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                jar.cookies
                    .entry(name.to_string())
                    .or_insert_with(|| decode_value(value.trim()));
            }
        }
        jar
    }

    /// Like [`CookieJar::from_headers`], for raw header bytes.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so one foreign cookie
    /// with non-ASCII bytes cannot hide the others in the same header.
    pub fn from_header_bytes<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let decoded: Vec<Cow<'a, str>> =
            headers.into_iter().map(String::from_utf8_lossy).collect();
        Self::from_headers(decoded.iter().map(|header| header.as_ref()))
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.entry(name.into()).or_insert(value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

fn decode_value(raw: &str) -> String {
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(raw);

    if !unquoted.contains('%') {
        return unquoted.to_string();
    }
    urlencoding::decode(unquoted)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| unquoted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_pairs() {
        let jar = CookieJar::parse("theme=dark; triangle_session=abc123==; lang=es");

        assert_eq!(jar.len(), 3);
        assert_eq!(jar.get("theme"), Some("dark"));
        assert_eq!(jar.get(SESSION_COOKIE_NAME), Some("abc123=="));
        assert_eq!(jar.get("lang"), Some("es"));
        assert_eq!(jar.get("missing"), None);
    }

    #[test]
    fn skips_malformed_pairs() {
        let jar = CookieJar::parse(";;flag; =orphan;  ok = 1 ;");

        assert_eq!(jar.len(), 1);
        assert_eq!(jar.get("ok"), Some("1"));
    }

    #[test]
    fn first_occurrence_wins() {
        let jar = CookieJar::from_headers(["a=1; a=2", "a=3; b=4"]);

        assert_eq!(jar.get("a"), Some("1"));
        assert_eq!(jar.get("b"), Some("4"));
    }

    #[test]
    fn values_are_unquoted_and_percent_decoded() {
        let jar = CookieJar::parse(r#"q="quoted"; enc=eyJk%2B%3D%3D; bad=%E0%A4%A"#);

        assert_eq!(jar.get("q"), Some("quoted"));
        assert_eq!(jar.get("enc"), Some("eyJk+=="));
        assert_eq!(jar.get("bad"), Some("%E0%A4%A"));
    }

    #[test]
    fn non_ascii_neighbour_does_not_hide_the_session() {
        let jar = CookieJar::from_header_bytes([
            b"theme=caf\xc3\xa9; triangle_session=abc==".as_slice(),
            b"junk=\xff\xfe; lang=es".as_slice(),
        ]);

        assert_eq!(jar.get(SESSION_COOKIE_NAME), Some("abc=="));
        assert_eq!(jar.get("theme"), Some("caf\u{e9}"));
        assert_eq!(jar.get("lang"), Some("es"));
        assert_eq!(jar.get("junk"), Some("\u{fffd}\u{fffd}"));
    }

    #[test]
    fn empty_header_is_empty_jar() {
        assert!(CookieJar::parse("").is_empty());
        assert!(CookieJar::new().with("a", "b").get("a").is_some());
    }
}
