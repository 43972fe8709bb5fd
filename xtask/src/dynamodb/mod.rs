//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the task table.
    Deploy(DeployCommand),
}

/// Deploy or destroy the task table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the task table.

By default, this command creates the table the task repository uses:
partition key `pk` (S), sort key `sk` (S), on-demand billing. An existing
table with the right keys is left alone; one keyed differently is reported
and must be destroyed first.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Custom endpoint (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  ACCESS_KEY_ID       - Access key used with --local
  SECRET_ACCESS_KEY   - Secret key used with --local")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, default_value = "Task", env = "TASK_TABLE_NAME")]
    pub table_name: String,

    /// Target DynamoDB Local with static credentials.
    #[arg(long, env = "TASKBOARD_LOCAL")]
    pub local: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
    }
}

fn confirm(prompt: &str, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let mut store = client::store_config(cmd.local);
    store.table_name = cmd.table_name.clone();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), store.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&store).await;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            confirm(
                "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
                false,
            )?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
        return Ok(());
    }

    let table_config = config::task_table_config().with_table_name(&cmd.table_name);
    let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

    if !global.is_silent() {
        aprintln!("{}", p_c("Deploy Plan:"));
        for line in planning::format_deploy_plan(&plan) {
            aprintln!("  {}", paint_plan_line(&line));
        }
        aprintln!();
    }

    match plan {
        planning::DeployPlan::NoChanges { .. } => {
            if !global.is_silent() {
                aprintln!("{}", p_g("Infrastructure is up to date."));
            }
            return Ok(());
        }
        planning::DeployPlan::KeyMismatch { .. } => {
            return deploy::execute_deploy_plan(&dynamo_client, &plan).await;
        }
        planning::DeployPlan::CreateTable { .. } => {}
    }

    if !cmd.force {
        confirm("Apply these changes?", true)?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Applying changes..."));
    }

    deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Infrastructure deployed successfully."));
    }

    Ok(())
}
