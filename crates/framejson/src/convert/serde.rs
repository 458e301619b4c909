//! Bridge to and from [`serde_json::Value`].
//!
//! `serde_json` is built with `preserve_order`, so object key order
//! survives the crossing in both directions.

use serde_json::Value as SerdeValue;

use crate::model::{JsonArray, JsonObject, JsonValue, NumberKind};

/// Converts a `serde_json` tree into the value model.
///
/// Integer numbers become `Long`-kind (the model stores doubles, so
/// magnitudes beyond 2^53 lose precision), everything else `Double`.
pub fn from_serde(value: &SerdeValue) -> JsonValue {
    match value {
        SerdeValue::Null => JsonValue::Null,
        SerdeValue::Bool(b) => JsonValue::Boolean(*b),
        SerdeValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::Number(i as f64, NumberKind::Long)
            } else if let Some(u) = n.as_u64() {
                if let Ok(i) = i64::try_from(u) {
                    JsonValue::Number(i as f64, NumberKind::Long)
                } else {
                    JsonValue::Number(u as f64, NumberKind::Double)
                }
            } else {
                JsonValue::Number(n.as_f64().unwrap_or(0.0), NumberKind::Double)
            }
        }
        SerdeValue::String(s) => JsonValue::String(s.clone()),
        SerdeValue::Array(items) => items
            .iter()
            .map(from_serde)
            .collect::<JsonArray>()
            .into(),
        SerdeValue::Object(members) => members
            .iter()
            .map(|(key, member)| (key.clone(), from_serde(member)))
            .collect::<JsonObject>()
            .into(),
    }
}

/// Converts the value model into a `serde_json` tree.
///
/// Integer-kind numbers that hold an exact `i64` become serde integers;
/// all other numbers become `f64` (non-finite doubles degrade to `Null`,
/// which is all `serde_json` can represent for them).
pub fn to_serde(value: &JsonValue) -> SerdeValue {
    match value {
        JsonValue::Null => SerdeValue::Null,
        JsonValue::Boolean(b) => SerdeValue::Bool(*b),
        JsonValue::Number(v, kind) => match kind {
            NumberKind::Int | NumberKind::Long if value.is_long() => {
                SerdeValue::Number((*v as i64).into())
            }
            _ => serde_json::Number::from_f64(*v)
                .map(SerdeValue::Number)
                .unwrap_or(SerdeValue::Null),
        },
        JsonValue::String(s) => SerdeValue::String(s.clone()),
        JsonValue::Object(obj) => SerdeValue::Object(
            obj.borrow()
                .iter()
                .map(|(key, member)| (key.to_owned(), to_serde(member)))
                .collect(),
        ),
        JsonValue::Array(arr) => {
            SerdeValue::Array(arr.borrow().iter().map(to_serde).collect())
        }
    }
}

impl From<&SerdeValue> for JsonValue {
    fn from(value: &SerdeValue) -> Self {
        from_serde(value)
    }
}

impl From<&JsonValue> for SerdeValue {
    fn from(value: &JsonValue) -> Self {
        to_serde(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trip_preserves_structure_and_order() {
        let source = json!({"z": 1, "a": [true, null, "x"], "m": {"k": 2.5}});
        let model = from_serde(&source);
        assert_eq!(to_serde(&model), source);

        let obj = model.as_object().unwrap();
        let keys: Vec<String> = obj.borrow().keys().map(str::to_owned).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn integers_become_long_kind() {
        let model = from_serde(&json!(7));
        assert!(matches!(model, JsonValue::Number(_, NumberKind::Long)));
        assert_eq!(to_serde(&model), json!(7));
    }

    #[test]
    fn fractional_numbers_stay_doubles() {
        let model = from_serde(&json!(2.5));
        assert!(matches!(model, JsonValue::Number(_, NumberKind::Double)));
        assert_eq!(to_serde(&model), json!(2.5));
    }

    #[test]
    fn non_finite_doubles_degrade_to_null() {
        assert_eq!(to_serde(&JsonValue::from(f64::NAN)), SerdeValue::Null);
    }
}
