use crate::server::error::{internal::InternalError, AppError};

/// Parses a user id stored as a string, such as a session value.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::InternalErr(ParseStringId))` - The string is not an integer
pub fn parse_i32_from_string(value: String) -> Result<i32, AppError> {
    let result = value
        .parse::<i32>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an appid used as an object key in imported catalog data.
///
/// # Returns
/// - `Ok(i64)` - Successfully parsed appid
/// - `Err(AppError::InternalErr(ParseStringId))` - The key is not an integer
pub fn parse_appid(value: &str) -> Result<i64, AppError> {
    let result = value
        .trim()
        .parse::<i64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_ids() {
        assert_eq!(parse_i32_from_string("42".to_string()).unwrap(), 42);
        assert!(matches!(
            parse_i32_from_string("abc".to_string()),
            Err(AppError::InternalErr(InternalError::ParseStringId { .. }))
        ));
    }

    #[test]
    fn parses_appid_keys() {
        assert_eq!(parse_appid(" 730 ").unwrap(), 730);
        assert!(parse_appid("").is_err());
    }
}
