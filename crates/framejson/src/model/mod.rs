//! The in-memory JSON value model.
//!
//! [`JsonValue`] is a tagged union over the six JSON kinds. Scalar variants
//! are self-contained; `Object` and `Array` hold an `Rc<RefCell<_>>` so that
//! cloned values share one container and mutation through any handle is
//! visible through all of them. The containers carry no internal locking;
//! `Rc` keeps a document single-threaded by construction.

mod array;
mod error;
mod object;
mod value;

pub use array::JsonArray;
pub use error::AccessError;
pub use object::JsonObject;
pub use value::{JsonType, JsonValue, NumberKind};
