//! Dynamic Value Module
//!
//! A ready-made value type for stores that hold mixed payloads and check
//! the shape on read via `load_typed`.

use serde::Serialize;

// == Value ==
/// A dynamically typed cache value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Bytes(Vec<u8>),
}

/// Returned when a [`Value`] does not hold the requested variant.
#[derive(Debug, Clone, PartialEq)]
pub struct WrongType(pub Value);

macro_rules! value_conversions {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = WrongType;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(WrongType(other)),
                    }
                }
            }
        )*
    };
}

value_conversions! {
    Text => String,
    Integer => i64,
    Float => f64,
    Boolean => bool,
    Bytes => Vec<u8>,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}
