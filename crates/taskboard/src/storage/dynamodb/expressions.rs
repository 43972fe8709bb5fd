//! Update expression building for sparse task patches.
//!
//! Attribute names never appear raw in an expression (`status` is a DynamoDB
//! reserved word). Every updatable field goes through a fixed alias table:
//! logical field, `#` name alias, `:` value placeholder.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use taskboard_core::task::{TaskField, TaskPatch};

use super::item::format_datetime;
use super::keys;

/// Name alias and value placeholder for one updatable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    pub field: TaskField,
    pub name: &'static str,
    pub value: &'static str,
}

pub const TITLE: FieldAlias = FieldAlias {
    field: TaskField::Title,
    name: "#T",
    value: ":t",
};

pub const STATUS: FieldAlias = FieldAlias {
    field: TaskField::Status,
    name: "#S",
    value: ":s",
};

pub const PRIORITY: FieldAlias = FieldAlias {
    field: TaskField::Priority,
    name: "#P",
    value: ":p",
};

pub const MODIFIED: FieldAlias = FieldAlias {
    field: TaskField::Modified,
    name: "#M",
    value: ":m",
};

/// Every attribute an update may assign, in expression order.
pub const UPDATE_ALIASES: [FieldAlias; 4] = [TITLE, STATUS, PRIORITY, MODIFIED];

/// Alias for the sort key in the existence condition.
pub const SORT_KEY_ALIAS: &str = "#SK";

/// A complete UpdateItem expression with its bound names and values.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub update_expression: String,
    pub condition_expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build the update for a patch.
///
/// One `SET` clause per present field, then `modified` unconditionally. The
/// condition restricts the update to an existing record so an unknown id
/// fails instead of creating a partial item.
pub fn build_update_expression(patch: &TaskPatch, modified: &DateTime<Utc>) -> UpdateExpression {
    let mut assignments = patch_assignments(patch);
    assignments.push((MODIFIED, AttributeValue::S(format_datetime(modified))));

    let mut clauses = Vec::with_capacity(assignments.len());
    let mut names = HashMap::with_capacity(assignments.len() + 1);
    let mut values = HashMap::with_capacity(assignments.len());

    for (alias, value) in assignments {
        clauses.push(format!("{} = {}", alias.name, alias.value));
        names.insert(alias.name.to_string(), alias.field.as_str().to_string());
        values.insert(alias.value.to_string(), value);
    }

    names.insert(SORT_KEY_ALIAS.to_string(), keys::SORT_KEY.to_string());

    UpdateExpression {
        update_expression: format!("SET {}", clauses.join(", ")),
        condition_expression: format!("attribute_exists({SORT_KEY_ALIAS})"),
        names,
        values,
    }
}

/// Pairs each present patch field with its alias and encoded value.
fn patch_assignments(patch: &TaskPatch) -> Vec<(FieldAlias, AttributeValue)> {
    [
        (TITLE, patch.title.clone()),
        (STATUS, patch.status.map(|s| s.as_str().to_string())),
        (PRIORITY, patch.priority.map(|p| p.as_str().to_string())),
    ]
    .into_iter()
    .filter_map(|(alias, value)| value.map(|v| (alias, AttributeValue::S(v))))
    .collect()
}
