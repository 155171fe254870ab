use crate::error::internal::InternalError;

/// Converts a stored integer column into an unsigned domain value.
///
/// # Arguments
/// - `field` - Column name, used in the error message
/// - `value` - The stored value
///
/// # Returns
/// - `Ok(u32)` - Value is non-negative
/// - `Err(InternalError::IntOutOfRange)` - Value is negative
pub fn u32_from_column(field: &'static str, value: i32) -> Result<u32, InternalError> {
    u32::try_from(value).map_err(|source| InternalError::IntOutOfRange {
        field,
        value: i64::from(value),
        source,
    })
}

/// Converts an unsigned domain value into the signed integer column type.
///
/// # Returns
/// - `Ok(i32)` - Value fits the column
/// - `Err(InternalError::IntOutOfRange)` - Value exceeds `i32::MAX`
pub fn u32_to_column(field: &'static str, value: u32) -> Result<i32, InternalError> {
    i32::try_from(value).map_err(|source| InternalError::IntOutOfRange {
        field,
        value: i64::from(value),
        source,
    })
}

/// Parses a ranking cell as an unsigned integer, defaulting to 0.
///
/// Thousands separators (`,` `.` and spaces) are ignored so "1,024" reads as 1024.
pub fn parse_stat_or_zero(text: &str) -> u32 {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '.' | ' '))
        .collect();

    digits.parse::<u32>().unwrap_or(0)
}
