//! This module contains `Headers`, an ordered list of name/value pairs
//! with the lookup and mutation rules of the Fetch standard's header list.
//! Names are matched case-insensitively, values are trimmed of HTTP
//! whitespace before they are stored, and `Set-Cookie` keeps each of its
//! values separately retrievable.
//! The usage is as follows:
//! ```rust
//! use fetch_headers::Headers;
//!
//! let mut headers: Headers = "Content-Type: text/html\r\nX-Trace: a"
//!     .parse()
//!     .unwrap();
//!
//! headers.append("x-trace", "b").unwrap();
//! assert_eq!(headers.get("X-TRACE").as_deref(), Some("a, b"));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::*;

pub mod error;
pub mod iter;
pub mod json;
pub mod name;
pub mod typed;
pub mod value;

pub use error::HeaderError;
pub use iter::{Entries, Keys, Values};

/// Everything a `Headers` can be built from.
#[derive(Debug, Clone)]
pub enum HeadersInit {
    /// Copied as-is, every `Set-Cookie` value included.
    Headers(Headers),
    /// Appended in order.
    Pairs(Vec<(String, String)>),
    /// Appended in the map's iteration order.
    Record(HashMap<String, String>)
}

impl From<Headers> for HeadersInit {
    fn from(headers: Headers) -> Self {
        HeadersInit::Headers(headers)
    }
}

impl From<&Headers> for HeadersInit {
    fn from(headers: &Headers) -> Self {
        HeadersInit::Headers(headers.clone())
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for HeadersInit {
    fn from(pairs: Vec<(K, V)>) -> Self {
        HeadersInit::Pairs(pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

impl<K: Into<String>, V: Into<String>> From<HashMap<K, V>> for HeadersInit {
    fn from(record: HashMap<K, V>) -> Self {
        HeadersInit::Record(record
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

/// An ordered header list.
///
/// Every pair sharing a name (ignoring case) is stored with the spelling
/// that name was first given.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Headers {
    list: Vec<(String, String)>
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a header list from `init`, failing on the first invalid
    /// name or value.
    pub fn with_init<I: Into<HeadersInit>>(init: I) -> Result<Self, HeaderError> {
        let mut ret = Self::new();

        match init.into() {
            HeadersInit::Headers(headers) => {
                ret.list = headers.list;
            },
            HeadersInit::Pairs(pairs) => {
                for (name, value) in pairs.iter() {
                    ret.append(name, value)?;
                }
            },
            HeadersInit::Record(record) => {
                for (name, value) in record.iter() {
                    ret.append(name, value)?;
                }
            }
        }

        Ok(ret)
    }

    /// Adds `name: value` to the end of the list without touching any
    /// existing value for `name`.
    pub fn append(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        name::validate(name)?;
        let value = value::prepare(name, value)?;

        let name = match self.stored_name(name) {
            Some(stored) => stored.to_owned(),
            None         => name.to_owned()
        };

        trace!("append '{}: {}'", name, value);
        self.list.push((name, value));

        Ok(())
    }

    /// Removes every value stored under `name`.
    pub fn delete(&mut self, name: &str) {
        let before = self.list.len();
        self.list.retain(|(n, _)| !name::matches(n, name));

        if self.list.len() != before {
            trace!("deleted {} value(s) of '{}'", before - self.list.len(), name);
        }
    }

    /// Replaces the first value stored under `name` and drops the rest,
    /// or appends when `name` is not present.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        name::validate(name)?;
        let value = value::prepare(name, value)?;

        let first = self.list
            .iter()
            .position(|(n, _)| name::matches(n, name));

        match first {
            Some(ind) => {
                trace!("set '{}: {}'", self.list[ind].0, value);
                self.list[ind].1 = value;

                let mut pos = 0;
                self.list.retain(|(n, _)| {
                    pos += 1;
                    pos - 1 <= ind || !name::matches(n, name)
                });
            },
            None => {
                trace!("set '{}: {}'", name, value);
                self.list.push((name.to_owned(), value));
            }
        }

        Ok(())
    }

    /// All values of `name` joined by `", "`, or `None` when absent.
    pub fn get(&self, name: &str) -> Option<String> {
        let mut values = self.values_of(name);
        let first = values.next()?;

        let mut ret = String::from(first);
        for value in values {
            ret.push_str(", ");
            ret.push_str(value);
        }

        Some(ret)
    }

    pub fn has(&self, name: &str) -> bool {
        self.list
            .iter()
            .any(|(n, _)| name::matches(n, name))
    }

    /// Every value of `name`. Only `Set-Cookie` is kept apart; for any
    /// other name this is empty.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        if name::is_set_cookie(name) {
            self.list
                .iter()
                .filter(|(n, _)| name::is_set_cookie(n))
                .map(|(_, v)| v.as_str())
                .collect()
        }else{
            Vec::new()
        }
    }

    pub fn get_set_cookie(&self) -> Vec<&str> {
        self.get_all(name::SET_COOKIE)
    }

    /// The number of entries iteration yields: one per distinct name,
    /// plus one per `Set-Cookie` value.
    pub fn count(&self) -> usize {
        let mut cookies = 0;
        let mut names = HashSet::new();

        for (name, _) in self.list.iter() {
            if name::is_set_cookie(name) {
                cookies += 1;
            }else{
                names.insert(name.to_ascii_lowercase());
            }
        }

        names.len() + cookies
    }

    /// The number of stored pairs.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Calls `callback(value, name, self)` once per iteration entry.
    pub fn for_each<F>(&self, mut callback: F)
        where F: FnMut(&str, &str, &Headers)
    {
        for (name, value) in self.entries() {
            callback(&value, &name, self);
        }
    }

    fn values_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.list
            .iter()
            .filter(move |(n, _)| name::matches(n, name))
            .map(|(_, v)| v.as_str())
    }

    fn stored_name(&self, name: &str) -> Option<&str> {
        self.list
            .iter()
            .find(|(n, _)| name::matches(n, name))
            .map(|(n, _)| n.as_str())
    }
}

impl FromStr for Headers {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use HeaderError::*;

        let mut ret = Self::new();

        for line in s.lines() {
            if line.trim().is_empty() {
                break;
            }else if line.starts_with(|c: char| c == ' ' || c == '\t') {
                // obsolete line folding
                return Err(InvalidFormat(line.into()));
            }

            let mut req = line.splitn(2, ':');
            let (name, value) = match (req.next(), req.next()) {
                (Some(name), Some(value)) => (name, value),
                _ => return Err(InvalidFormat(line.into()))
            };

            ret.append(name, value)?;
        }

        debug!("parsed {} header line(s)", ret.len());
        Ok(ret)
    }
}

impl Display for Headers {
    fn fmt(&self, fmt: &mut Formatter) -> std::fmt::Result {
        for (name, value) in self.list.iter() {
            write!(fmt, "{}: {}\r\n", name, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header() {
        let headers: Headers = "ConnecTion: close\r\nhost: localhost:80\r\n\r\nbody: ignored"
            .parse()
            .unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("connection").as_deref(), Some("close"));
        assert_eq!(headers.get("HOST").as_deref(), Some("localhost:80"));
        assert!(!headers.has("body"));
    }

    #[test]
    fn parse_rejects_bad_lines() {
        assert_eq!(
            "no colon here".parse::<Headers>(),
            Err(HeaderError::InvalidFormat("no colon here".into()))
        );
        assert!("X-A: 1\r\n folded".parse::<Headers>().is_err());
        assert!("Bad Name: 1".parse::<Headers>().is_err());
    }

    #[test]
    fn case_insensitive_lookup() {
        let mut headers = Headers::new();
        headers.append("X-A", "1").unwrap();

        assert_eq!(headers.get("x-a").as_deref(), Some("1"));
        assert!(headers.has("X-a"));
        assert_eq!(headers.get("x-b"), None);
        assert!(!headers.has("not a token"));
    }

    #[test]
    fn append_combines_and_keeps_first_spelling() {
        let mut headers = Headers::new();
        headers.append("Accept", "text/html").unwrap();
        headers.append("ACCEPT", "  application/json ").unwrap();

        assert_eq!(headers.get("accept").as_deref(), Some("text/html, application/json"));
        assert_eq!(headers.to_string(), "Accept: text/html\r\nAccept: application/json\r\n");
    }

    #[test]
    fn set_collapses_at_first_position() {
        let mut headers = Headers::with_init(vec![
            ("a", "1"),
            ("B", "2"),
            ("b", "3"),
            ("c", "4"),
            ("b", "5")
        ]).unwrap();

        headers.set("b", "x").unwrap();

        assert_eq!(headers.to_string(), "a: 1\r\nB: x\r\nc: 4\r\n");
        assert_eq!(headers.len(), 3);

        headers.set("D", "new").unwrap();
        assert_eq!(headers.to_string(), "a: 1\r\nB: x\r\nc: 4\r\nD: new\r\n");
    }

    #[test]
    fn delete_removes_every_value() {
        let mut headers = Headers::with_init(vec![
            ("Set-Cookie", "a=1"),
            ("x", "y"),
            ("set-cookie", "b=2")
        ]).unwrap();

        headers.delete("SET-COOKIE");
        assert!(!headers.has("set-cookie"));
        assert_eq!(headers.len(), 1);

        headers.delete("missing");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn rejects_invalid_input() {
        let mut headers = Headers::new();

        assert_eq!(
            headers.append("", "v"),
            Err(HeaderError::InvalidName("".into()))
        );
        assert!(headers.set("x", "a\nb").is_err());
        assert!(headers.append("x", "nul\0").is_err());
        assert!(headers.is_empty());

        assert!(Headers::with_init(vec![("ok", "1"), ("bad name", "2")]).is_err());
    }

    #[test]
    fn get_all_is_set_cookie_only() {
        let mut headers = Headers::new();
        headers.append("Set-Cookie", "foo=bar").unwrap();
        headers.append("Set-Cookie", "baz=qux").unwrap();
        headers.append("X-Multi", "1").unwrap();
        headers.append("X-Multi", "2").unwrap();

        assert_eq!(headers.get_all("Set-Cookie"), vec!["foo=bar", "baz=qux"]);
        assert_eq!(headers.get_all("set-cookie"), vec!["foo=bar", "baz=qux"]);
        assert_eq!(headers.get_set_cookie(), vec!["foo=bar", "baz=qux"]);
        assert!(headers.get_all("X-Multi").is_empty());
        assert!(headers.get_all("missing").is_empty());
        assert_eq!(headers.get("set-cookie").as_deref(), Some("foo=bar, baz=qux"));
    }

    #[test]
    fn count_matches_iteration() {
        let mut headers = Headers::new();
        assert_eq!(headers.count(), 0);

        headers.append("A", "1").unwrap();
        headers.append("a", "2").unwrap();
        headers.append("Set-Cookie", "x=1").unwrap();
        headers.append("set-cookie", "y=2").unwrap();
        headers.append("B", "3").unwrap();

        assert_eq!(headers.count(), 4);
        assert_eq!(headers.count(), headers.entries().count());
        assert_eq!(headers.len(), 5);
    }

    #[test]
    fn for_each_visits_entries_in_order() {
        let headers = Headers::with_init(vec![
            ("Zeta", "z"),
            ("alpha", "a1"),
            ("Alpha", "a2")
        ]).unwrap();

        let mut seen = Vec::new();
        headers.for_each(|value, name, parent| {
            assert_eq!(parent.count(), 2);
            seen.push(format!("{}={}", name, value));
        });

        assert_eq!(seen, vec!["alpha=a1, a2", "zeta=z"]);
    }

    #[test]
    fn init_from_other_headers_copies_cookies() {
        let mut source = Headers::new();
        source.append("Set-Cookie", "a=1").unwrap();
        source.append("Set-Cookie", "b=2").unwrap();

        let copy = Headers::with_init(&source).unwrap();
        assert_eq!(copy, source);
        assert_eq!(copy.get_set_cookie(), vec!["a=1", "b=2"]);
    }

    #[test]
    fn init_from_record() {
        let mut record = HashMap::new();
        record.insert("Content-Type", "text/plain");
        record.insert("X-Id", " 7 ");

        let headers = Headers::with_init(record).unwrap();
        assert_eq!(headers.get("content-type").as_deref(), Some("text/plain"));
        assert_eq!(headers.get("x-id").as_deref(), Some("7"));
    }
}
