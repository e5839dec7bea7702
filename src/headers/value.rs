use super::HeaderError;

fn is_http_whitespace(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' | ' ' => true,
        _ => false
    }
}

/// Strips leading and trailing HTTP whitespace.
pub fn normalize(value: &str) -> &str {
    value.trim_matches(is_http_whitespace)
}

/// A normalized value must not contain NUL, CR or LF.
pub fn validate(name: &str, value: &str) -> Result<(), HeaderError> {
    if value.contains(|c: char| c == '\0' || c == '\r' || c == '\n') {
        log::debug!(
            "rejected value for '{}': '{}'",
            name,
            value.escape_debug()
        );

        Err(HeaderError::InvalidValue{
            name:  name.into(),
            value: value.into()
        })
    }else{
        Ok(())
    }
}

/// Normalizes `value` and checks the result, returning what should be stored.
pub fn prepare(name: &str, value: &str) -> Result<String, HeaderError> {
    let value = normalize(value);
    validate(name, value)?;

    Ok(value.into())
}
