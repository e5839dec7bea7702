//! Iteration over a `Headers` in sorted, combined form: names lowercased
//! and sorted bytewise, each name's values joined by `", "`, except
//! `set-cookie` which yields one entry per value.

use std::collections::BTreeMap;
use std::vec;

use super::{name, Headers};

fn sort_and_combine(headers: &Headers) -> Vec<(String, String)> {
    let mut grouped: BTreeMap<String, Vec<&str>> = BTreeMap::new();

    for (name, value) in headers.list.iter() {
        grouped
            .entry(name.to_ascii_lowercase())
            .or_insert_with(Vec::new)
            .push(value.as_str());
    }

    let mut ret = Vec::with_capacity(grouped.len());
    for (name, values) in grouped.into_iter() {
        if name == name::SET_COOKIE {
            for value in values {
                ret.push((name.clone(), value.to_owned()));
            }
        }else{
            ret.push((name, values.join(", ")));
        }
    }

    ret
}

/// Iterator over `(name, value)` entries.
///
/// Nothing is computed until the first call to `next`. Cloning an
/// untouched iterator, or asking the `Headers` for a new one, starts the
/// sequence over.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    headers: &'a Headers,
    pairs:   Option<vec::IntoIter<(String, String)>>
}

impl<'a> Entries<'a> {
    /// Starts the sequence over from the first entry.
    pub fn restart(&mut self) {
        self.pairs = None;
    }

    fn pairs(&mut self) -> &mut vec::IntoIter<(String, String)> {
        let headers = self.headers;
        self.pairs
            .get_or_insert_with(|| sort_and_combine(headers).into_iter())
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.pairs {
            Some(pairs) => pairs.size_hint(),
            None        => (0, Some(self.headers.len()))
        }
    }
}

/// Iterator over entry names.
#[derive(Debug, Clone)]
pub struct Keys<'a>(Entries<'a>);

impl<'a> Keys<'a> {
    pub fn restart(&mut self) {
        self.0.restart();
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(name, _)| name)
    }
}

/// Iterator over entry values.
#[derive(Debug, Clone)]
pub struct Values<'a>(Entries<'a>);

impl<'a> Values<'a> {
    pub fn restart(&mut self) {
        self.0.restart();
    }
}

impl<'a> Iterator for Values<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }
}

impl Headers {
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            headers: self,
            pairs:   None
        }
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys(self.entries())
    }

    pub fn values(&self) -> Values<'_> {
        Values(self.entries())
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (String, String);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
