//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub status: TableStatus,
    /// Hash key attribute name.
    pub partition_key: Option<String>,
    /// Range key attribute name.
    pub sort_key: Option<String>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists but is keyed differently; it cannot be altered in place.
    KeyMismatch {
        table_name: String,
        expected: String,
        found: String,
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

fn describe_keys(pk: Option<&str>, sk: Option<&str>) -> String {
    format!("(HASH {}, RANGE {})", pk.unwrap_or("-"), sk.unwrap_or("-"))
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    let (pk, sk) = desired.key_names();
    if state.partition_key.as_deref() == Some(pk) && state.sort_key.as_deref() == Some(sk) {
        DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else {
        DeployPlan::KeyMismatch {
            table_name: desired.table_name.clone(),
            expected: describe_keys(Some(pk), Some(sk)),
            found: describe_keys(state.partition_key.as_deref(), state.sort_key.as_deref()),
        }
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  Partition key: {} (S)", config.partition_key.name),
            format!("  Sort key: {} (S)", config.sort_key.name),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            found,
        } => vec![
            format!("! Table '{}' has keys {}", table_name, found),
            format!("  Expected {}; destroy and redeploy to fix", expected),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::task_table_config;

    fn state(pk: &str, sk: Option<&str>) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: Some(pk.to_string()),
            sort_key: sk.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = task_table_config();
        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: Task",
                "  Partition key: pk (S)",
                "  Sort key: sk (S)",
                "  Billing: PAY_PER_REQUEST",
            ]
        );
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let plan = calculate_deploy_plan(Some(&state("pk", Some("sk"))), &task_table_config());

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "Task".to_string()
            }
        );
    }

    #[test]
    fn test_differently_keyed_table_is_reported() {
        let plan = calculate_deploy_plan(Some(&state("PK", None)), &task_table_config());

        assert_eq!(
            plan,
            DeployPlan::KeyMismatch {
                table_name: "Task".to_string(),
                expected: "(HASH pk, RANGE sk)".to_string(),
                found: "(HASH PK, RANGE -)".to_string(),
            }
        );
    }

    #[test]
    fn test_destroy_plan() {
        assert_eq!(
            calculate_destroy_plan(Some(&state("pk", Some("sk"))), "Task"),
            DestroyPlan::DeleteTable {
                table_name: "Task".to_string()
            }
        );
        assert_eq!(
            format_destroy_plan(&calculate_destroy_plan(None, "Task")),
            vec!["= Table 'Task' does not exist"]
        );
    }
}
