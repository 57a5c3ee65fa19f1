//! Implementation of the `monkeyhub monkey` commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::application::AppContext;
use crate::cli::output::{create_spinner, output, CommandOutput, TableFormatter};
use crate::domain::models::Monkey;
use crate::domain::ports::MonkeyService;

#[derive(Args, Debug)]
pub struct MonkeyArgs {
    #[command(subcommand)]
    pub command: MonkeyCommands,
}

#[derive(Subcommand, Debug)]
pub enum MonkeyCommands {
    /// List every monkey from the configured source
    List,

    /// Show one monkey by its exact name
    Show {
        /// Monkey name (case-sensitive)
        name: String,
    },
}

#[derive(Debug, Serialize)]
pub struct MonkeyListOutput {
    pub source: String,
    pub monkeys: Vec<Monkey>,
}

impl CommandOutput for MonkeyListOutput {
    fn to_human(&self) -> String {
        if self.monkeys.is_empty() {
            return format!("No monkeys found at {}", self.source);
        }
        format!(
            "{}\n{} monkey(s)",
            TableFormatter::new().format_monkeys(&self.monkeys),
            self.monkeys.len()
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.monkeys).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct MonkeyDetailOutput {
    pub monkey: Monkey,
}

impl CommandOutput for MonkeyDetailOutput {
    fn to_human(&self) -> String {
        TableFormatter::new().format_monkey_detail(&self.monkey)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.monkey).unwrap_or_default()
    }
}

pub async fn execute(args: MonkeyArgs, context: &AppContext, json_mode: bool) -> Result<()> {
    if !context.connectivity.is_connected().await {
        bail!("No internet connection. Check your network and try again.");
    }

    let monkeys = fetch_with_spinner(context, json_mode).await;

    match args.command {
        MonkeyCommands::List => {
            output(
                &MonkeyListOutput {
                    source: context.config.source.url.clone(),
                    monkeys,
                },
                json_mode,
            );
        }
        MonkeyCommands::Show { name } => {
            let Some(monkey) = context.monkey_service.get_monkey_by_name(&name).await else {
                bail!("Monkey not found: {name}");
            };
            output(&MonkeyDetailOutput { monkey }, json_mode);
        }
    }

    Ok(())
}

async fn fetch_with_spinner(context: &AppContext, json_mode: bool) -> Vec<Monkey> {
    let spinner = (!json_mode).then(|| create_spinner("Fetching monkeys..."));
    let monkeys = context.monkey_service.get_monkeys().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    monkeys
}
