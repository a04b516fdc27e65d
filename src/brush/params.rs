//! Keyed parameter store shared by the steps of a brush chain.

use std::collections::HashMap;

use serde_json::Value;

use crate::material::MaterialShape;
use crate::shape::Shape;

/// A stored value: a brush argument or a chain step's output.
#[derive(Clone, Debug)]
pub enum Param {
    Value(Value),
    Shape(Box<dyn Shape>),
    Materials(Box<dyn MaterialShape>),
}

/// Values keyed by (context, key). The context is usually a brush name.
#[derive(Clone, Debug, Default)]
pub struct ParamStore {
    entries: HashMap<(String, String), Param>,
}

fn store_key(context: &str, key: &str) -> (String, String) {
    (context.to_string(), key.to_ascii_lowercase())
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, context: &str, key: &str, value: impl Into<Value>) {
        self.entries.insert(store_key(context, key), Param::Value(value.into()));
    }

    pub fn put(&mut self, context: &str, key: &str, param: Param) {
        self.entries.insert(store_key(context, key), param);
    }

    pub fn get(&self, context: &str, key: &str) -> Option<&Param> {
        self.entries.get(&store_key(context, key))
    }

    pub fn remove(&mut self, context: &str, key: &str) -> Option<Param> {
        self.entries.remove(&store_key(context, key))
    }

    pub fn value(&self, context: &str, key: &str) -> Option<&Value> {
        match self.get(context, key)? {
            Param::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn shape(&self, context: &str, key: &str) -> Option<&dyn Shape> {
        match self.get(context, key)? {
            Param::Shape(shape) => Some(shape.as_ref()),
            _ => None,
        }
    }

    pub fn material_shape(&self, context: &str, key: &str) -> Option<&dyn MaterialShape> {
        match self.get(context, key)? {
            Param::Materials(materials) => Some(materials.as_ref()),
            _ => None,
        }
    }

    /// Numeric argument. `Some(Err(raw))` when present but not a number.
    ///
    /// Accepts JSON numbers and numeric strings.
    pub fn number(&self, context: &str, key: &str) -> Option<Result<f64, String>> {
        let value = self.get(context, key)?;
        let parsed = match value {
            Param::Value(Value::Number(n)) => n.as_f64(),
            Param::Value(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Some(parsed.filter(|v| v.is_finite()).ok_or_else(|| describe(value)))
    }

    /// Boolean argument. Accepts JSON booleans and `true/false/yes/no/on/off/1/0` strings.
    pub fn flag(&self, context: &str, key: &str) -> Option<Result<bool, String>> {
        let value = self.get(context, key)?;
        let parsed = match value {
            Param::Value(Value::Bool(b)) => Some(*b),
            Param::Value(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(true),
                "false" | "no" | "off" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        };
        Some(parsed.ok_or_else(|| describe(value)))
    }

    /// Text argument; numbers are rendered as text.
    pub fn text(&self, context: &str, key: &str) -> Option<String> {
        match self.value(context, key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn describe(param: &Param) -> String {
    match param {
        Param::Value(value) => value.to_string(),
        Param::Shape(_) => "<shape>".to_string(),
        Param::Materials(_) => "<material shape>".to_string(),
    }
}
