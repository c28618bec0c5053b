//! Runtime-typed arguments for callers that only learn types at runtime

use serde::Deserialize;

use crate::error::SpecError;
use crate::renderer::{numeric, Argument, Output};

/// A dynamically typed argument
///
/// Each variant renders with the rules of one fixed category, exactly as the
/// corresponding Rust type would.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Guess the category of a command-line word
    ///
    /// `true`/`false` are booleans, base-10 integers are integral, decimals
    /// with at least one digit are floating-point, anything else is text.
    pub fn infer(word: &str) -> Self {
        match word {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if let Ok(n) = word.parse::<i64>() {
            return Value::Int(n);
        }
        if word.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(x) = word.parse::<f64>() {
                return Value::Float(x);
            }
        }
        Value::Text(word.to_string())
    }
}

impl Argument for Value {
    fn render(&self, spec: &str, out: &mut Output) -> Result<(), SpecError> {
        match self {
            Value::Bool(b) => numeric::render_boolean(*b, spec, out),
            Value::Int(n) => numeric::render_integral(*n, spec, out),
            Value::Float(x) => return numeric::render_floating(*x, spec, out),
            Value::Text(s) => out.push(s),
        }
        Ok(())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}
