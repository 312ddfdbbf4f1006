// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! Argument payload values and their OpenSCAD literal forms

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An argument payload carried by a call node.
///
/// The tree never interprets these; they only matter at render time, where
/// each variant has exactly one OpenSCAD literal form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => {
                // Integral floats print without a decimal point, as OpenSCAD
                // itself echoes them. Negative zero (from scaling a negated
                // unit vector by zero, for instance) prints as plain 0.
                let x = if *x == 0.0 { 0.0 } else { *x };
                if x.is_finite() && x.fract() == 0.0 {
                    write!(f, "{:.0}", x)
                } else {
                    write!(f, "{:?}", x)
                }
            }
            Value::Str(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        '\r' => write!(f, "\\r")?,
                        _ => write!(f, "{}", c)?,
                    }
                }
                write!(f, "\"")
            }
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vector3<f64>> for Value {
    fn from(v: Vector3<f64>) -> Self {
        Value::List(vec![Value::Float(v.x), Value::Float(v.y), Value::Float(v.z)])
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_float_has_no_decimal_point() {
        assert_eq!(Value::Float(-5.0).to_string(), "-5");
        assert_eq!(Value::Float(10.0).to_string(), "10");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(Value::Float(-0.0).to_string(), "0");
    }

    #[test]
    fn test_list_form() {
        let v: Value = [10.0, 20.0, 30.0].into();
        assert_eq!(v.to_string(), "[10, 20, 30]");
    }

    #[test]
    fn test_string_is_quoted_and_escaped() {
        let v: Value = "say \"hi\"".into();
        assert_eq!(v.to_string(), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_vector3_payload() {
        let v: Value = (Vector3::new(0.0, 0.0, 1.0) * 4.0).into();
        assert_eq!(v.to_string(), "[0, 0, 4]");
    }

    #[test]
    fn test_nested_list() {
        let v: Value = Value::List(vec![[0, 1].into(), [1, 2].into()]);
        assert_eq!(v.to_string(), "[[0, 1], [1, 2]]");
    }
}
