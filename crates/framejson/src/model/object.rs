//! [`JsonObject`]: an insertion-ordered string-keyed mapping.

use super::JsonValue;

/// An ordered mapping from unique string keys to [`JsonValue`]s.
///
/// Iteration order is insertion order. Entries are stored as a flat vector
/// of pairs; lookups are linear, which is the right trade for the small
/// objects JSON documents are made of.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonObject {
    entries: Vec<(String, JsonValue)>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the value for `key`, or `Null` when absent.
    pub fn get(&self, key: &str) -> JsonValue {
        self.get_ref(key).cloned().unwrap_or(JsonValue::Null)
    }

    pub fn get_ref(&self, key: &str) -> Option<&JsonValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Inserts `value` under `key`, replacing any existing entry in place
    /// (the entry keeps its position).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Positional access to the entry at `index`, in insertion order.
    pub fn entry_at(&self, index: usize) -> Option<(&str, &JsonValue)> {
        self.entries.get(index).map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = JsonObject::new();
        for (key, value) in iter {
            obj.insert(key, value);
        }
        obj
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, JsonValue);
    type IntoIter = std::vec::IntoIter<(String, JsonValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let obj: JsonObject = [("z", 1i32), ("a", 2i32), ("m", 3i32)].into_iter().collect();
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut obj = JsonObject::new();
        obj.insert("a", 1i32);
        obj.insert("b", 2i32);
        obj.insert("a", 3i32);
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a"), JsonValue::from(3i32));
        assert_eq!(obj.entry_at(0).unwrap().0, "a");
    }

    #[test]
    fn missing_key_is_null() {
        let obj = JsonObject::new();
        assert_eq!(obj.get("nope"), JsonValue::Null);
        assert!(obj.get_ref("nope").is_none());
    }

    #[test]
    fn remove_returns_value() {
        let mut obj = JsonObject::new();
        obj.insert("a", "x");
        assert_eq!(obj.remove("a"), Some(JsonValue::from("x")));
        assert_eq!(obj.remove("a"), None);
        assert!(obj.is_empty());
    }
}
