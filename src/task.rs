//! Task item data model
//!
//! `TaskItem` is what the validator hands out once an input element has passed
//! every check. `ProcessedTask` is the record written to the output file.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A validated input record
///
/// Only the three schema fields are kept; any extra keys on the input object
/// are dropped during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Unique identifier within the batch, kept exactly as written
    pub id: Number,
    /// Display name, never blank after trimming
    pub name: String,
    /// Numeric payload, kept in its original JSON form (integer or float)
    pub value: Number,
}

impl TaskItem {
    /// Create a task item from already-checked parts
    pub fn new(id: impl Into<Number>, name: impl Into<String>, value: impl Into<Number>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An output record: the input fields plus derived metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedTask {
    pub id: Number,
    pub name: String,
    pub value: Number,
    /// Always `true` for records produced by the transformer
    pub processed: bool,
    /// Number of characters in the untrimmed name
    pub name_length: usize,
}

/// Name of a JSON value's type as used in error messages
///
/// Numbers are split into `integer` and `float` so that a message such as
/// "'id' must be an integer, got float" says exactly what was wrong.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if is_integer_literal(n) => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether a number was written as an integer literal
///
/// Numbers keep their source text, so an integer of any magnitude is
/// recognised; a fraction or exponent marks a float.
pub fn is_integer_literal(n: &Number) -> bool {
    !n.to_string().contains(['.', 'e', 'E'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "bool");
        assert_eq!(json_type_name(&json!(false)), "bool");
        assert_eq!(json_type_name(&json!(42)), "integer");
        assert_eq!(json_type_name(&json!(-42)), "integer");
        assert_eq!(json_type_name(&json!(4.2)), "float");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!({"a": 1})), "object");
    }

    #[test]
    fn test_integer_literal_beyond_64_bits() {
        let n: Number = serde_json::from_str("18446744073709551616").unwrap();
        assert!(is_integer_literal(&n));
        assert_eq!(json_type_name(&Value::Number(n)), "integer");

        let n: Number = serde_json::from_str("1e3").unwrap();
        assert!(!is_integer_literal(&n));
    }

    #[test]
    fn test_processed_task_field_order() {
        let task = ProcessedTask {
            id: Number::from(1),
            name: "Task Name".to_string(),
            value: Number::from(100),
            processed: true,
            name_length: 9,
        };
        assert_eq!(
            serde_json::to_string(&task).unwrap(),
            r#"{"id":1,"name":"Task Name","value":100,"processed":true,"name_length":9}"#
        );
    }
}
