//! [`JsonValue`]: the tagged union over the six JSON kinds.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::{AccessError, JsonArray, JsonObject};
use crate::text;

/// Discriminant of a [`JsonValue`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Object,
    Array,
}

/// The original numeric width of a number value.
///
/// The logical value is always the stored `f64`; the kind records how the
/// number was constructed so the binary codec can round-trip it at its
/// exact width. Text-parsed numbers are always `Double`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Long,
    Float,
    Double,
}

/// A JSON value.
///
/// `Object` and `Array` share their container: cloning the value clones the
/// `Rc`, and mutation through one handle is visible through every other
/// holder. Scalars are plain owned data.
#[derive(Clone, Debug, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Boolean(bool),
    Number(f64, NumberKind),
    String(String),
    Object(Rc<RefCell<JsonObject>>),
    Array(Rc<RefCell<JsonArray>>),
}

impl JsonValue {
    /// The kind of this value.
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Boolean(_) => JsonType::Boolean,
            JsonValue::Number(..) => JsonType::Number,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Object(_) => JsonType::Object,
            JsonValue::Array(_) => JsonType::Array,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, JsonValue::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(..))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// True when the stored double exactly represents an `i32`.
    pub fn is_integer(&self) -> bool {
        match self {
            JsonValue::Number(v, _) => {
                *v >= f64::from(i32::MIN) && *v <= f64::from(i32::MAX) && (*v as i32) as f64 == *v
            }
            _ => false,
        }
    }

    /// True when the stored double exactly represents an `i64`.
    pub fn is_long(&self) -> bool {
        match self {
            JsonValue::Number(v, _) => {
                *v >= i64::MIN as f64 && *v <= i64::MAX as f64 && (*v as i64) as f64 == *v
            }
            _ => false,
        }
    }

    /// Coerces to a boolean: numbers are true when nonzero, strings when
    /// non-empty, containers always, null never.
    pub fn as_boolean(&self) -> bool {
        match self {
            JsonValue::Boolean(b) => *b,
            JsonValue::Number(v, _) => *v != 0.0,
            JsonValue::String(s) => !s.is_empty(),
            JsonValue::Object(_) | JsonValue::Array(_) => true,
            JsonValue::Null => false,
        }
    }

    /// Coerces to a double: booleans become 0/1, parseable strings their
    /// numeric value, everything else 0.
    pub fn as_number(&self) -> f64 {
        match self {
            JsonValue::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            JsonValue::Number(v, _) => *v,
            JsonValue::String(s) => s.parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Coerces to a single-precision float.
    pub fn as_float(&self) -> f32 {
        self.as_number() as f32
    }

    /// Coerces to an `i32`, saturating at the type's bounds.
    pub fn as_integer(&self) -> i32 {
        let value = self.as_number();
        if value >= f64::from(i32::MAX) {
            return i32::MAX;
        }
        if value <= f64::from(i32::MIN) {
            return i32::MIN;
        }
        value as i32
    }

    /// Coerces to an `i64`, saturating at the type's bounds.
    pub fn as_long(&self) -> i64 {
        let value = self.as_number();
        if value >= i64::MAX as f64 {
            return i64::MAX;
        }
        if value <= i64::MIN as f64 {
            return i64::MIN;
        }
        value as i64
    }

    /// Coerces to a string: booleans render as `true`/`false`, numbers via
    /// their default formatting. Containers and null yield `None`; the
    /// string forms `"true"`/`"false"` are never parsed back into booleans.
    pub fn as_string(&self) -> Option<String> {
        match self {
            JsonValue::Boolean(b) => Some(if *b { "true" } else { "false" }.to_owned()),
            JsonValue::Number(v, _) => Some(v.to_string()),
            JsonValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// A shared handle to the underlying object, when this is one.
    pub fn as_object(&self) -> Option<Rc<RefCell<JsonObject>>> {
        match self {
            JsonValue::Object(obj) => Some(Rc::clone(obj)),
            _ => None,
        }
    }

    /// A shared handle to the underlying array, when this is one.
    pub fn as_array(&self) -> Option<Rc<RefCell<JsonArray>>> {
        match self {
            JsonValue::Array(arr) => Some(Rc::clone(arr)),
            _ => None,
        }
    }

    /// Strict member lookup; missing keys yield `Null`.
    pub fn get(&self, key: &str) -> Result<JsonValue, AccessError> {
        match self {
            JsonValue::Object(obj) => Ok(obj.borrow().get(key)),
            _ => Err(AccessError::NotAnObject),
        }
    }

    /// Strict member insert-or-update.
    pub fn set(&self, key: &str, value: impl Into<JsonValue>) -> Result<(), AccessError> {
        match self {
            JsonValue::Object(obj) => {
                obj.borrow_mut().insert(key, value);
                Ok(())
            }
            _ => Err(AccessError::NotAnObject),
        }
    }

    /// Strict element lookup by index.
    pub fn at(&self, index: usize) -> Result<JsonValue, AccessError> {
        match self {
            JsonValue::Array(arr) => arr
                .borrow()
                .get(index)
                .cloned()
                .ok_or(AccessError::IndexOutOfBounds(index)),
            _ => Err(AccessError::NotAnArray),
        }
    }

    /// Strict element replacement by index.
    pub fn set_at(&self, index: usize, value: impl Into<JsonValue>) -> Result<(), AccessError> {
        match self {
            JsonValue::Array(arr) => arr.borrow_mut().set(index, value),
            _ => Err(AccessError::NotAnArray),
        }
    }
}

/// Structural equality: tag and payload, ignoring [`NumberKind`]. Two
/// numbers are equal iff their doubles are; containers compare contents.
impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Boolean(a), JsonValue::Boolean(b)) => a == b,
            (JsonValue::Number(a, _), JsonValue::Number(b, _)) => a == b,
            (JsonValue::String(a), JsonValue::String(b)) => a == b,
            (JsonValue::Object(a), JsonValue::Object(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (JsonValue::Array(a), JsonValue::Array(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            _ => false,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Boolean(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(f64::from(value), NumberKind::Int)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(value as f64, NumberKind::Long)
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::Number(f64::from(value), NumberKind::Float)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value, NumberKind::Double)
    }
}

/// Characters live in the model as `Int`-kind numbers holding the scalar
/// value, which is how the binary `Char` token resurfaces after a decode.
impl From<char> for JsonValue {
    fn from(value: char) -> Self {
        JsonValue::Number(f64::from(u32::from(value)), NumberKind::Int)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(Rc::new(RefCell::new(value)))
    }
}

impl From<JsonArray> for JsonValue {
    fn from(value: JsonArray) -> Self {
        JsonValue::Array(Rc::new(RefCell::new(value)))
    }
}

impl From<Rc<RefCell<JsonObject>>> for JsonValue {
    fn from(value: Rc<RefCell<JsonObject>>) -> Self {
        JsonValue::Object(value)
    }
}

impl From<Rc<RefCell<JsonArray>>> for JsonValue {
    fn from(value: Rc<RefCell<JsonArray>>) -> Self {
        JsonValue::Array(value)
    }
}

/// A missing reference becomes `Null` rather than failing.
impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&text::encode(self))
    }
}

impl FromStr for JsonValue {
    type Err = text::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::decode(s)
    }
}
