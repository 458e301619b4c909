//! A self-contained JSON value engine.
//!
//! One in-memory representation, [`JsonValue`] with its shared
//! [`JsonObject`]/[`JsonArray`] containers, sits at the center; every
//! codec converts to or from it:
//!
//! - [`text`]: recursive-descent parser and compact/pretty writer for
//!   standard JSON text (duplicate object keys are rejected on purpose).
//! - [`binary`]: a framed binary format whose containers carry a patched
//!   length field, so a reader can skip nested structures without
//!   decoding them, and whose number tags preserve the original numeric
//!   width exactly.
//! - [`convert`]: mappings to native vectors, 2D arrays and maps, the
//!   [`convert::JsonSerialize`]/[`convert::JsonDeserialize`] contract for
//!   typed objects, and a bridge to `serde_json::Value`.
//!
//! Everything is synchronous and CPU-bound. Scalar values are immutable
//! plain data; the containers are shared mutable trees with no internal
//! locking (`Rc` keeps a document on one thread by construction).
//!
//! # Example
//!
//! ```
//! use framejson::{binary, text, JsonValue};
//!
//! let value = text::decode(r#"{"x":1,"y":[true,false]}"#)?;
//! assert_eq!(value.get("x")?.as_integer(), 1);
//!
//! let bytes = binary::encode(&value);
//! assert_eq!(binary::decode(&bytes)?, value);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod convert;
pub mod model;
pub mod text;

pub use binary::{BinaryError, BinaryToken, Token};
pub use model::{AccessError, JsonArray, JsonObject, JsonType, JsonValue, NumberKind};
pub use text::{ParseError, TextPosition};
