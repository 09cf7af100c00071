//! `list` command: show placed modules.

use crate::cli::common::{print_json, CliContext, CliResult};
use crate::models::{Axis, Module};
use crate::services::Session;
use clap::Args;
use serde::Serialize;

/// List placed modules in insertion order
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    modules: &'a [Module],
    count: usize,
    selected: Option<String>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let session = ctx.open_session()?;
        self.apply(&session)
    }

    /// Print the session's layout
    pub fn apply(&self, session: &Session) -> CliResult<()> {
        let modules = session.layout().modules();
        let selected = session.store().selection();

        if self.json {
            return print_json(&ListResponse {
                modules,
                count: modules.len(),
                selected: selected.map(|id| id.to_string()),
            });
        }

        if modules.is_empty() {
            println!("No modules placed.");
            return Ok(());
        }

        println!("Modules ({}):", modules.len());
        println!();
        for module in modules {
            let marker = if selected == Some(module.id) { '*' } else { ' ' };
            let p = module.position;
            println!(
                "{marker} {:<9} {:<12} pos ({:>7.2}, {:>7.2}, {:>7.2})  rot ({:>6.1}, {:>6.1}, {:>6.1})  scale {:.2}",
                module.short_id(),
                module.module_type,
                p.x,
                p.y,
                p.z,
                module.rotation_degrees(Axis::X),
                module.rotation_degrees(Axis::Y),
                module.rotation_degrees(Axis::Z),
                module.scale
            );
        }
        Ok(())
    }
}
