//! Canonical wire encoding for sampled values.
//!
//! Every reading passes through [`Value::encode`] before it reaches the
//! publisher, so sensor code never concerns itself with string form:
//! integers as base-10 ASCII, floats in their default decimal form,
//! booleans as the literal strings `"true"` / `"false"`.

use core::fmt::Write;

/// Encoded payload: the longest default float form fits well inside 16.
pub type EncodedValue = heapless::String<16>;

/// A normalized sampled value, pre-encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i32),
    Float(f32),
    Bool(bool),
}

impl Value {
    /// Render the canonical string form sent on the wire.
    pub fn encode(&self) -> EncodedValue {
        let mut s = EncodedValue::new();
        match self {
            Self::Integer(v) => {
                let _ = write!(s, "{v}");
            }
            Self::Float(v) => {
                let _ = write!(s, "{v}");
            }
            Self::Bool(b) => {
                let _ = s.push_str(if *b { "true" } else { "false" });
            }
        }
        s
    }
}
