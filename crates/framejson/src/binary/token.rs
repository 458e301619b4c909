//! Wire tokens of the framed binary format.

/// One-byte tags that begin every encoded record.
///
/// The set is closed; `Number` is a legacy alias decoded as `Double`, and
/// `Raw` is reserved token space for extension payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum BinaryToken {
    Null = 0,
    Boolean = 1,
    String = 2,
    Number = 3,
    ObjectFirst = 4,
    ObjectLast = 5,
    ObjectKey = 6,
    ArrayFirst = 7,
    ArrayLast = 8,
    Int = 9,
    Float = 10,
    Double = 11,
    Char = 12,
    Long = 13,
    Raw = 32,
}

impl BinaryToken {
    pub fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            0 => BinaryToken::Null,
            1 => BinaryToken::Boolean,
            2 => BinaryToken::String,
            3 => BinaryToken::Number,
            4 => BinaryToken::ObjectFirst,
            5 => BinaryToken::ObjectLast,
            6 => BinaryToken::ObjectKey,
            7 => BinaryToken::ArrayFirst,
            8 => BinaryToken::ArrayLast,
            9 => BinaryToken::Int,
            10 => BinaryToken::Float,
            11 => BinaryToken::Double,
            12 => BinaryToken::Char,
            13 => BinaryToken::Long,
            32 => BinaryToken::Raw,
            _ => return None,
        })
    }
}

/// A decoded record: tag plus payload.
///
/// `ObjectFirst`/`ArrayFirst` carry the byte span of the container's
/// members (bracket tags and the length field itself excluded), which is
/// what lets a reader skip a whole container without interpreting it.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Null,
    Boolean(bool),
    String(String),
    ObjectFirst(u32),
    ObjectLast,
    ObjectKey(String),
    ArrayFirst(u32),
    ArrayLast,
    Int(i32),
    Float(f32),
    Double(f64),
    Char(char),
    Long(i64),
    Raw(Vec<u8>),
}
