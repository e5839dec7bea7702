//! Convenience accessors that read and write header values as typed data.

use chrono::{DateTime, Utc};
use mime::Mime;

use super::name::*;
use super::{HeaderError, Headers};

const DATE_FORMAT: &str = "%a, %d %b %Y %T GMT";

impl Headers {
    /// Used to retrieve a date stored under the given header name.
    /// Values that are not valid HTTP dates read as `None`.
    pub fn get_date(&self, name: &str) -> Option<DateTime<Utc>> {
        let date = self.get(name)?;

        match DateTime::parse_from_rfc2822(&date) {
            Ok(date) => Some(date.with_timezone(&Utc)),
            Err(err) => {
                log::debug!("'{}' is not a date: '{}' ({})", name, date, err);
                None
            }
        }
    }

    /// Sets `name` to `date` in IMF-fixdate form.
    pub fn set_date(&mut self, name: &str, date: &DateTime<Utc>) -> Result<(), HeaderError> {
        self.set(name, &format_date(date))
    }

    pub fn content_type(&self) -> Option<Mime> {
        self.get(CONTENT_TYPE)?
            .parse()
            .ok()
    }

    pub fn content_length(&self) -> Option<usize> {
        self.get(CONTENT_LENGTH)?
            .parse()
            .ok()
    }

    /// A helper method for when specifying the content type
    /// and length of a body.
    pub fn content(&mut self, typ: &Mime, len: usize) -> Result<(), HeaderError> {
        self.set(CONTENT_TYPE, typ.as_ref())?;
        self.set(CONTENT_LENGTH, &len.to_string())
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT)
        .to_string()
}
