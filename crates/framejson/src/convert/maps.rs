//! String-keyed dictionary conversions.

use std::collections::HashMap;

use super::{deserialize, FromJson, JsonDeserialize, JsonSerialize, ToJson};
use crate::model::{JsonObject, JsonValue};

/// Converts an object value into a homogeneous native map. `Null` (and
/// any non-object value) converts to `None`, never an error.
pub fn to_map<T: FromJson>(value: &JsonValue) -> Option<HashMap<String, T>> {
    let obj = value.as_object()?;
    let obj = obj.borrow();
    Some(
        obj.iter()
            .map(|(key, member)| (key.to_owned(), T::from_json(member)))
            .collect(),
    )
}

/// Converts a homogeneous native map into an object value.
pub fn from_map<T: ToJson>(map: &HashMap<String, T>) -> JsonValue {
    map.iter()
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect::<JsonObject>()
        .into()
}

/// Converts an object value into a dynamic map of raw values, keeping
/// heterogeneous members as they are.
pub fn to_dynamic_map(value: &JsonValue) -> Option<HashMap<String, JsonValue>> {
    to_map(value)
}

/// Converts a dynamic map back into an object value.
pub fn from_dynamic_map(map: &HashMap<String, JsonValue>) -> JsonValue {
    from_map(map)
}

/// Converts an object whose members are themselves objects into
/// deserializable instances.
pub fn to_map_of<T: JsonDeserialize>(value: &JsonValue) -> Option<HashMap<String, T>> {
    let obj = value.as_object()?;
    let obj = obj.borrow();
    Some(
        obj.iter()
            .map(|(key, member)| {
                let instance = match member.as_object() {
                    Some(inner) => deserialize(&inner.borrow()),
                    None => T::default(),
                };
                (key.to_owned(), instance)
            })
            .collect(),
    )
}

/// Converts a map of serializable instances into an object value.
pub fn from_map_of<T: JsonSerialize>(map: &HashMap<String, T>) -> JsonValue {
    map.iter()
        .map(|(key, value)| (key.clone(), value.serialize()))
        .collect::<JsonObject>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_round_trip() {
        let mut map = HashMap::new();
        map.insert("a".to_owned(), 1i32);
        map.insert("b".to_owned(), 2i32);
        let value = from_map(&map);
        assert_eq!(to_map::<i32>(&value), Some(map));
    }

    #[test]
    fn null_converts_to_none() {
        assert_eq!(to_map::<bool>(&JsonValue::Null), None);
        assert_eq!(to_dynamic_map(&JsonValue::from("x")), None);
    }

    #[test]
    fn dynamic_map_keeps_heterogeneous_members() {
        let value = crate::text::decode("{\"n\":1,\"s\":\"x\",\"z\":null}").unwrap();
        let map = to_dynamic_map(&value).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["n"], JsonValue::from(1.0f64));
        assert_eq!(map["s"], JsonValue::from("x"));
        assert_eq!(map["z"], JsonValue::Null);
    }
}
