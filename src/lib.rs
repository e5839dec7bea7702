//! An ordered, case-insensitive HTTP header list with the surface of the
//! Fetch API's `Headers`.

pub mod headers;

pub use headers::{
    Entries,
    HeaderError,
    Headers,
    HeadersInit,
    Keys,
    Values
};
