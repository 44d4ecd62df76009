use serde_json::Value;

use crate::FeedError;

/// Parses the gridded wind JSON drawn by the velocity layer. The records
/// are handed to the page as-is; the document only has to be an array.
pub fn parse_winds(text: &str) -> Result<Value, FeedError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(FeedError::Invalid("wind grid is not an array".to_string()));
    }
    Ok(value)
}
