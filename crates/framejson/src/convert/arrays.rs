//! Sequence and 2D-array conversions.

use super::{deserialize, FromJson, JsonDeserialize, JsonSerialize, ToJson};
use crate::model::{JsonArray, JsonValue};

/// Converts an array value into a native vector. `Null` (and any
/// non-array value) converts to `None`, never an error.
pub fn to_vec<T: FromJson>(value: &JsonValue) -> Option<Vec<T>> {
    let arr = value.as_array()?;
    let arr = arr.borrow();
    Some(arr.iter().map(T::from_json).collect())
}

/// Converts a slice of native elements into an array value.
pub fn from_slice<T: ToJson>(items: &[T]) -> JsonValue {
    items.iter().map(ToJson::to_json).collect::<JsonArray>().into()
}

/// Converts an array-of-arrays value into a row-major 2D vector.
///
/// Every row is decoded at the first row's length: longer rows are
/// truncated and shorter ones padded with `Null`-coerced elements.
pub fn to_vec2d<T: FromJson>(value: &JsonValue) -> Option<Vec<Vec<T>>> {
    let rows = value.as_array()?;
    let rows = rows.borrow();
    let width = rows
        .get(0)
        .and_then(JsonValue::as_array)
        .map(|row| row.borrow().len())
        .unwrap_or(0);

    let mut out = Vec::with_capacity(rows.len());
    for row in rows.iter() {
        let row = row.as_array()?;
        let row = row.borrow();
        let mut native = Vec::with_capacity(width);
        for j in 0..width {
            native.push(T::from_json(row.get(j).unwrap_or(&JsonValue::Null)));
        }
        out.push(native);
    }
    Some(out)
}

/// Converts row-major 2D data into an array-of-arrays value.
pub fn from_rows<T: ToJson>(rows: &[Vec<T>]) -> JsonValue {
    rows.iter()
        .map(|row| from_slice(row))
        .collect::<JsonArray>()
        .into()
}

/// Converts an array of objects into deserializable instances. Elements
/// that are not objects come back as `T::default()`.
pub fn to_vec_of<T: JsonDeserialize>(value: &JsonValue) -> Option<Vec<T>> {
    let arr = value.as_array()?;
    let arr = arr.borrow();
    Some(
        arr.iter()
            .map(|element| match element.as_object() {
                Some(obj) => deserialize(&obj.borrow()),
                None => T::default(),
            })
            .collect(),
    )
}

/// Converts serializable instances into an array value.
pub fn from_slice_of<T: JsonSerialize>(items: &[T]) -> JsonValue {
    items
        .iter()
        .map(JsonSerialize::serialize)
        .collect::<JsonArray>()
        .into()
}
