//! Table configuration types (Functional Core - pure data).

use taskboard::storage::dynamodb::{PARTITION_KEY, SORT_KEY};

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl KeyAttribute {
    fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute_type: AttributeType::String,
        }
    }
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Key attribute names as `(partition, sort)`.
    pub fn key_names(&self) -> (&str, &str) {
        (&self.partition_key.name, &self.sort_key.name)
    }
}

/// Returns the table layout the task repository reads and writes.
///
/// Keys come from the server crate so the two cannot drift apart.
pub fn task_table_config() -> TableConfig {
    TableConfig {
        table_name: "Task".to_string(),
        partition_key: KeyAttribute::string(PARTITION_KEY),
        sort_key: KeyAttribute::string(SORT_KEY),
        billing_mode: BillingMode::PayPerRequest,
    }
}
