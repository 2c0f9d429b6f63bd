use aws_sdk_dynamodb::types::AttributeValue;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::{ApiError, ApiResult};

/// Convert a DynamoDB item into a plain JSON object.
///
/// DynamoDB stores every number as an arbitrary-precision decimal; this is the
/// single place where that type is normalized before a record leaves the core.
pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> ApiResult<Value> {
    let mut map = Map::new();
    for (key, value) in item {
        map.insert(key.clone(), attribute_to_json(value)?);
    }
    Ok(Value::Object(map))
}

/// Recursively convert one attribute, descending through maps and lists.
/// Numbers with a zero fractional part become JSON integers, the rest floats.
pub fn attribute_to_json(value: &AttributeValue) -> ApiResult<Value> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(items) => Ok(Value::Array(
            items
                .iter()
                .map(attribute_to_json)
                .collect::<ApiResult<Vec<_>>>()?,
        )),
        AttributeValue::M(map) => item_to_json(map),
        AttributeValue::Ss(strings) => Ok(Value::Array(
            strings.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(numbers) => Ok(Value::Array(
            numbers
                .iter()
                .map(|n| number_to_json(n))
                .collect::<ApiResult<Vec<_>>>()?,
        )),
        AttributeValue::B(blob) => Ok(Value::String(BASE64.encode(blob.as_ref()))),
        other => Err(ApiError::BackendUnavailable(format!(
            "unsupported DynamoDB attribute type: {:?}",
            other
        ))),
    }
}

fn number_to_json(n: &str) -> ApiResult<Value> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::from(i));
    }

    let f: f64 = n
        .parse()
        .map_err(|_| ApiError::BackendUnavailable(format!("malformed number attribute: {}", n)))?;

    // "5.0" style values still count as integers
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        return Ok(Value::from(f as i64));
    }

    serde_json::Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| ApiError::BackendUnavailable(format!("non-finite number attribute: {}", n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_become_json_integers() {
        assert_eq!(
            attribute_to_json(&AttributeValue::N("42".to_string())).unwrap(),
            Value::from(42)
        );
        assert_eq!(
            attribute_to_json(&AttributeValue::N("5.0".to_string())).unwrap(),
            Value::from(5)
        );
        assert_eq!(
            attribute_to_json(&AttributeValue::N("-7".to_string())).unwrap(),
            Value::from(-7)
        );
    }

    #[test]
    fn fractional_numbers_become_json_floats() {
        assert_eq!(
            attribute_to_json(&AttributeValue::N("3.25".to_string())).unwrap(),
            Value::from(3.25)
        );
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(attribute_to_json(&AttributeValue::N("not-a-number".to_string())).is_err());
    }

    #[test]
    fn scalars_convert_structurally() {
        assert_eq!(
            attribute_to_json(&AttributeValue::S("rex.jpg".to_string())).unwrap(),
            Value::from("rex.jpg")
        );
        assert_eq!(
            attribute_to_json(&AttributeValue::Bool(true)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            attribute_to_json(&AttributeValue::Null(true)).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn normalization_descends_through_maps_and_lists() {
        let mut inner = HashMap::new();
        inner.insert("count".to_string(), AttributeValue::N("2.0".to_string()));
        let value = AttributeValue::L(vec![
            AttributeValue::M(inner),
            AttributeValue::N("0.5".to_string()),
        ]);

        assert_eq!(
            attribute_to_json(&value).unwrap(),
            serde_json::json!([{ "count": 2 }, 0.5])
        );
    }

    #[test]
    fn item_to_json_builds_an_object() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("abc".to_string()));
        item.insert("completed".to_string(), AttributeValue::Bool(false));
        item.insert("photo_url".to_string(), AttributeValue::Null(true));

        assert_eq!(
            item_to_json(&item).unwrap(),
            serde_json::json!({ "id": "abc", "completed": false, "photo_url": null })
        );
    }
}
