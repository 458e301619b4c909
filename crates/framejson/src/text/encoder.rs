//! JSON text writer, compact or pretty.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::model::{JsonArray, JsonObject, JsonValue, NumberKind};

/// Renders `value` as compact JSON text.
pub fn encode(value: &JsonValue) -> String {
    TextEncoder::new().encode(value)
}

/// Renders `value` with newlines and tab indentation.
pub fn encode_pretty(value: &JsonValue) -> String {
    TextEncoder::pretty().encode(value)
}

/// Writes the compact rendering of `value` to the file at `path`.
pub fn encode_file(path: impl AsRef<Path>, value: &JsonValue) -> io::Result<()> {
    fs::write(path, encode(value))
}

/// Serializes a [`JsonValue`] to JSON text.
///
/// Writing never fails: the value model is a closed enum, so there is no
/// unrecognized-tag case, and rendering is pure string building.
pub struct TextEncoder {
    out: String,
    pretty: bool,
    depth: usize,
}

impl Default for TextEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEncoder {
    /// Compact output, no insignificant whitespace.
    pub fn new() -> Self {
        Self {
            out: String::new(),
            pretty: false,
            depth: 0,
        }
    }

    /// Human-readable output: one container member per line, tab indent.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::new()
        }
    }

    pub fn encode(mut self, value: &JsonValue) -> String {
        self.write_value(value);
        self.out
    }

    fn write_value(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.out.push_str("null"),
            JsonValue::Boolean(true) => self.out.push_str("true"),
            JsonValue::Boolean(false) => self.out.push_str("false"),
            JsonValue::Number(v, kind) => self.write_number(*v, *kind),
            JsonValue::String(s) => self.write_string(s),
            JsonValue::Object(obj) => self.write_object(&obj.borrow()),
            JsonValue::Array(arr) => self.write_array(&arr.borrow()),
        }
    }

    /// Integer kinds render with no fraction; both float kinds render the
    /// stored double in its shortest round-trippable form, so the parsed
    /// value is numerically identical to the written one.
    fn write_number(&mut self, value: f64, kind: NumberKind) {
        let _ = match kind {
            NumberKind::Int => write!(self.out, "{}", value as i32),
            NumberKind::Long => write!(self.out, "{}", value as i64),
            NumberKind::Float | NumberKind::Double => write!(self.out, "{value}"),
        };
    }

    /// Reverse of the parser's escape table, plus `\uXXXX` for any other
    /// character below `0x20`.
    fn write_string(&mut self, text: &str) {
        self.out.push('"');
        for c in text.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\u{8}' => self.out.push_str("\\b"),
                '\u{c}' => self.out.push_str("\\f"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    let _ = write!(self.out, "\\u{:04x}", c as u32);
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    fn write_object(&mut self, obj: &JsonObject) {
        self.out.push('{');
        if obj.is_empty() {
            self.out.push('}');
            return;
        }
        self.depth += 1;
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_indent();
            self.write_string(key);
            self.out.push(':');
            if self.pretty {
                self.out.push(' ');
            }
            self.write_value(value);
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push('}');
    }

    fn write_array(&mut self, arr: &JsonArray) {
        self.out.push('[');
        if arr.is_empty() {
            self.out.push(']');
            return;
        }
        self.depth += 1;
        for (i, value) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_indent();
            self.write_value(value);
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push(']');
    }

    fn newline_indent(&mut self) {
        if !self.pretty {
            return;
        }
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push('\t');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::decode;

    #[test]
    fn scalars() {
        assert_eq!(encode(&JsonValue::Null), "null");
        assert_eq!(encode(&JsonValue::from(true)), "true");
        assert_eq!(encode(&JsonValue::from("hi")), "\"hi\"");
    }

    #[test]
    fn number_kinds_render_at_their_width() {
        assert_eq!(encode(&JsonValue::from(3i32)), "3");
        assert_eq!(encode(&JsonValue::from(3i64)), "3");
        assert_eq!(encode(&JsonValue::from(2.5f64)), "2.5");
        // whole doubles drop the fraction under shortest formatting
        assert_eq!(encode(&JsonValue::from(1.0f64)), "1");
    }

    #[test]
    fn float_kind_writes_the_stored_double() {
        // 0.1f32 widens to 0.10000000149011612; writing "0.1" would
        // re-parse to a different number
        let value = JsonValue::from(0.1f32);
        assert_eq!(encode(&value), "0.10000000149011612");
        assert_eq!(decode(&encode(&value)).unwrap(), value);
        assert_eq!(encode(&JsonValue::from(2.5f32)), "2.5");
    }

    #[test]
    fn string_escapes() {
        assert_eq!(encode(&JsonValue::from("a\n\"b\"\\")), "\"a\\n\\\"b\\\"\\\\\"");
        assert_eq!(encode(&JsonValue::from("\u{1}")), "\"\\u0001\"");
    }

    #[test]
    fn compact_object_layout() {
        let value = decode("{ \"a\" : 1 , \"b\" : [ true , null ] }").unwrap();
        assert_eq!(encode(&value), "{\"a\":1,\"b\":[true,null]}");
    }

    #[test]
    fn pretty_layout() {
        let value = decode("{\"a\":[1]}").unwrap();
        assert_eq!(
            encode_pretty(&value),
            "{\n\t\"a\": [\n\t\t1\n\t]\n}"
        );
    }

    #[test]
    fn empty_containers_stay_inline() {
        let value = decode("{\"a\":{},\"b\":[]}").unwrap();
        assert_eq!(encode_pretty(&value), "{\n\t\"a\": {},\n\t\"b\": []\n}");
    }
}
