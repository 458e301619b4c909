//! Conversions between the value model and native containers.
//!
//! Element-level coercions go through [`FromJson`]/[`ToJson`]. Typed
//! objects plug in through [`JsonSerialize`]/[`JsonDeserialize`], the
//! contract surface that generated or hand-written mapping glue
//! implements; the core never inspects type metadata itself.

mod arrays;
mod maps;
pub mod serde;

pub use arrays::{from_rows, from_slice, from_slice_of, to_vec, to_vec2d, to_vec_of};
pub use maps::{
    from_dynamic_map, from_map, from_map_of, to_dynamic_map, to_map, to_map_of,
};

use std::path::Path;

use crate::model::{JsonObject, JsonValue};
use crate::text::{self, ParseError};

/// Element-level conversion out of the model, using the documented
/// coercion table. Total: never fails, falling back to the type's zero
/// value for foreign input.
pub trait FromJson: Sized {
    fn from_json(value: &JsonValue) -> Self;
}

/// Element-level conversion into the model.
pub trait ToJson {
    fn to_json(&self) -> JsonValue;
}

impl FromJson for bool {
    fn from_json(value: &JsonValue) -> Self {
        value.as_boolean()
    }
}

impl FromJson for i32 {
    fn from_json(value: &JsonValue) -> Self {
        value.as_integer()
    }
}

impl FromJson for i64 {
    fn from_json(value: &JsonValue) -> Self {
        value.as_long()
    }
}

impl FromJson for f32 {
    fn from_json(value: &JsonValue) -> Self {
        value.as_float()
    }
}

impl FromJson for f64 {
    fn from_json(value: &JsonValue) -> Self {
        value.as_number()
    }
}

impl FromJson for String {
    fn from_json(value: &JsonValue) -> Self {
        value.as_string().unwrap_or_default()
    }
}

impl FromJson for char {
    fn from_json(value: &JsonValue) -> Self {
        u32::try_from(value.as_integer())
            .ok()
            .and_then(char::from_u32)
            .unwrap_or('\0')
    }
}

impl FromJson for JsonValue {
    fn from_json(value: &JsonValue) -> Self {
        value.clone()
    }
}

macro_rules! to_json_via_from {
    ($($ty:ty),*) => {
        $(impl ToJson for $ty {
            fn to_json(&self) -> JsonValue {
                JsonValue::from(*self)
            }
        })*
    };
}

to_json_via_from!(bool, i32, i64, f32, f64, char);

impl ToJson for String {
    fn to_json(&self) -> JsonValue {
        JsonValue::from(self.as_str())
    }
}

impl ToJson for &str {
    fn to_json(&self) -> JsonValue {
        JsonValue::from(*self)
    }
}

impl ToJson for JsonValue {
    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

/// A type that can render itself as a value tree.
pub trait JsonSerialize {
    fn serialize(&self) -> JsonValue;
}

/// A type that can populate its fields from an object's members by name.
///
/// `Default` supplies the parameterless construction the contract
/// requires; [`deserialize`] builds the instance and feeds it the object.
pub trait JsonDeserialize: Default {
    fn deserialize(&mut self, obj: &JsonObject);
}

/// Builds a `T` from an object.
pub fn deserialize<T: JsonDeserialize>(obj: &JsonObject) -> T {
    let mut value = T::default();
    value.deserialize(obj);
    value
}

/// Parses JSON text and builds a `T` from the root object. A non-object
/// root yields `T::default()`.
pub fn deserialize_str<T: JsonDeserialize>(text: &str) -> Result<T, ParseError> {
    let root = text::decode(text)?;
    Ok(match root.as_object() {
        Some(obj) => deserialize(&obj.borrow()),
        None => T::default(),
    })
}

/// Reads the file at `path` and builds a `T` from its root object.
pub fn deserialize_file<T: JsonDeserialize>(path: impl AsRef<Path>) -> Result<T, ParseError> {
    let root = text::decode_file(path)?;
    Ok(match root.as_object() {
        Some(obj) => deserialize(&obj.borrow()),
        None => T::default(),
    })
}

/// Renders a serializable type as compact JSON text.
pub fn serialize<T: JsonSerialize>(value: &T) -> String {
    text::encode(&value.serialize())
}
