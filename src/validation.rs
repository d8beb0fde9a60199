//! Input validation for task documents
//!
//! This module checks a parsed JSON document against the task item schema:
//! the top level must be an array, every element an object with an integer
//! `id`, a non-blank string `name` and a numeric `value`, and no two elements
//! may share an `id`. Validation is fail-fast: the first violation is returned
//! and nothing is produced for the rest of the batch.

use crate::error::ValidationError;
use crate::task::{TaskItem, is_integer_literal, json_type_name};
use serde_json::{Map, Number, Value};
use std::collections::HashSet;
use tracing::debug;

/// Fields every task item must carry, in the order they are checked
const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "value"];

/// Validate a whole input document
///
/// # Arguments
/// * `data` - The parsed JSON document
///
/// # Returns
/// The validated items in input order, or the first violation found.
/// Per-item checks run over every element before the duplicate-id scan,
/// so a malformed item is reported even when an earlier pair shares an id.
pub fn validate_input(data: &Value) -> Result<Vec<TaskItem>, ValidationError> {
    let Value::Array(elements) = data else {
        return Err(ValidationError::NotAnArray {
            found: json_type_name(data),
        });
    };

    let items = elements
        .iter()
        .enumerate()
        .map(|(index, element)| validate_item(element, index))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(id) = find_duplicate_id(&items) {
        return Err(ValidationError::DuplicateId { id });
    }

    debug!("Validated {} item(s)", items.len());
    Ok(items)
}

/// Validate a single array element
///
/// # Arguments
/// * `item` - The element to check
/// * `index` - Its position in the input array, used in error messages
///
/// # Returns
/// The validated item with only the schema fields kept
pub fn validate_item(item: &Value, index: usize) -> Result<TaskItem, ValidationError> {
    let Value::Object(fields) = item else {
        return Err(ValidationError::NotAnObject {
            index,
            found: json_type_name(item),
        });
    };

    check_required_fields(fields, index)?;

    let id = validate_id(&fields["id"], index)?;
    let name = validate_name(&fields["name"], index)?;
    let value = match &fields["value"] {
        Value::Number(n) => n.clone(),
        other => {
            return Err(ValidationError::InvalidType {
                index,
                field: "value",
                expected: "numeric",
                found: json_type_name(other),
            });
        }
    };

    debug!(index, id = %id, "Item passed validation");
    Ok(TaskItem { id, name, value })
}

/// Return the first id that appears more than once, scanning in input order
///
/// Ids are compared by integer value, so `-0` and `0` collide.
pub fn find_duplicate_id(items: &[TaskItem]) -> Option<Number> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .find(|item| !seen.insert(id_key(&item.id)))
        .map(|item| item.id.clone())
}

// Integer literals have no leading zeros in JSON, so only negative zero
// needs folding to get a canonical form.
fn id_key(id: &Number) -> String {
    match id.to_string() {
        text if text == "-0" => "0".to_string(),
        text => text,
    }
}

fn check_required_fields(fields: &Map<String, Value>, index: usize) -> Result<(), ValidationError> {
    match REQUIRED_FIELDS
        .into_iter()
        .find(|field| !fields.contains_key(*field))
    {
        Some(field) => Err(ValidationError::MissingField { index, field }),
        None => Ok(()),
    }
}

// Booleans are their own JSON variant, so they never reach the number arm.
fn validate_id(value: &Value, index: usize) -> Result<Number, ValidationError> {
    match value {
        Value::Number(n) if is_integer_literal(n) => Ok(n.clone()),
        other => Err(ValidationError::InvalidType {
            index,
            field: "id",
            expected: "an integer",
            found: json_type_name(other),
        }),
    }
}

fn validate_name(value: &Value, index: usize) -> Result<String, ValidationError> {
    match value {
        Value::String(name) if name.trim().is_empty() => Err(ValidationError::EmptyName { index }),
        Value::String(name) => Ok(name.clone()),
        other => Err(ValidationError::InvalidType {
            index,
            field: "name",
            expected: "a string",
            found: json_type_name(other),
        }),
    }
}
