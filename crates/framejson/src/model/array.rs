//! [`JsonArray`]: an ordered, index-addressable sequence.

use super::{AccessError, JsonValue};

/// An ordered sequence of [`JsonValue`]s. Duplicates and `Null` elements
/// are allowed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonArray {
    items: Vec<JsonValue>,
}

impl JsonArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: impl Into<JsonValue>) {
        self.items.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&JsonValue> {
        self.items.get(index)
    }

    /// Replaces the element at `index`.
    pub fn set(&mut self, index: usize, value: impl Into<JsonValue>) -> Result<(), AccessError> {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(AccessError::IndexOutOfBounds(index)),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
        self.items.iter()
    }
}

impl<V: Into<JsonValue>> FromIterator<V> for JsonArray {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for JsonArray {
    type Item = JsonValue;
    type IntoIter = std::vec::IntoIter<JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
