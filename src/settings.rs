use std::path::PathBuf;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

fn deserialize_input<'de, D> (des: D) -> Result<Option<PathBuf>, D::Error>
    where D: Deserializer<'de>
{
    let val = String::deserialize(des)?;

    if val == "-" {
        Ok(None)
    }else{
        Ok(Some(PathBuf::from(val)))
    }
}

fn deserialize_format<'de, D> (des: D) -> Result<Format, D::Error>
    where D: Deserializer<'de>
{
    let val = String::deserialize(des)?;
    val.parse()
        .map_err(D::Error::custom)
}

/// How the parsed headers are printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    /// The `to_json` map, keys sorted.
    Json,
    /// One `name: value` line per iteration entry.
    Entries,
    /// The stored pairs in insertion order.
    Wire
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json"    => Ok(Format::Json),
            "entries" => Ok(Format::Entries),
            "wire"    => Ok(Format::Wire),
            _         => Err(format!("unknown output format: '{}'", s))
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Settings {
    /// `None` reads standard input.
    #[serde(deserialize_with = "deserialize_input")]
    pub input:  Option<PathBuf>,
    #[serde(deserialize_with = "deserialize_format")]
    pub format: Format,
    pub pretty: bool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_settings() {
        let settings: Settings = serde_json::from_str(
            r#"{"input": "-", "format": "Entries", "pretty": false}"#
        ).unwrap();

        assert_eq!(settings.input, None);
        assert_eq!(settings.format, Format::Entries);
        assert!(!settings.pretty);

        let settings: Settings = serde_json::from_str(
            r#"{"input": "req.txt", "format": "wire", "pretty": true}"#
        ).unwrap();

        assert_eq!(settings.input, Some(PathBuf::from("req.txt")));
        assert_eq!(settings.format, Format::Wire);
    }

    #[test]
    fn unknown_format() {
        let res: Result<Settings, _> = serde_json::from_str(
            r#"{"input": "-", "format": "yaml", "pretty": true}"#
        );

        assert!(res.is_err());
    }
}
