use serde_json::Value;

use crate::FeedError;

/// Parses the administrative-boundary GeoJSON. The document is passed
/// through untouched; it only has to be a JSON object.
pub fn parse_boundary(text: &str) -> Result<Value, FeedError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(FeedError::Invalid(
            "boundary geojson is not an object".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_feature_collection() {
        let geojson = r#"{"type": "FeatureCollection", "features": []}"#;
        let value = parse_boundary(geojson).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
    }

    #[test]
    fn rejects_non_objects() {
        assert!(matches!(parse_boundary("[1, 2]"), Err(FeedError::Invalid(_))));
        assert!(matches!(parse_boundary("{"), Err(FeedError::Json(_))));
    }
}
